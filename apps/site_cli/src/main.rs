use std::{path::PathBuf, time::Duration};

use anyhow::Result;
use clap::{Parser, Subcommand};
use shared::content::PRICING_TIERS;
use site_core::{
    config::{load_settings, load_settings_from},
    PageRegistry, SiteShell,
};

mod simulate;

use simulate::{SimulationOptions, Step};

#[derive(Parser, Debug)]
#[command(name = "site_cli", about = "Inspect the res site routes and replay navigation")]
struct Cli {
    /// Settings file; defaults to `site.toml` in the working directory.
    #[arg(long)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every registered path.
    Routes {
        #[arg(long)]
        json: bool,
    },
    /// Show the plans in display order.
    Pricing {
        #[arg(long)]
        json: bool,
    },
    /// Replay navigation steps (`/path`, `/checkout@12-Month`, `back`, `forward`)
    /// and print every transition phase change.
    Simulate {
        #[arg(required = true)]
        steps: Vec<Step>,
        /// Time between consecutive steps.
        #[arg(long, default_value_t = 200)]
        gap_ms: u64,
        /// Follow the wall clock instead of stepping a virtual one.
        #[arg(long)]
        realtime: bool,
        #[arg(long)]
        reduced_motion: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    match cli.command {
        Command::Routes { json } => {
            let routes = PageRegistry::site().routes();
            if json {
                let listing: Vec<_> = routes
                    .iter()
                    .map(|route| {
                        serde_json::json!({
                            "path": route.path,
                            "title": route.page.title,
                            "accepts_aux": route.page.accepts_aux,
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&listing)?);
            } else {
                for route in routes {
                    let marker = if route.page.accepts_aux { " (accepts plan)" } else { "" };
                    println!("{:<22} {}{marker}", route.path, route.page.title);
                }
            }
        }
        Command::Pricing { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&PRICING_TIERS)?);
            } else {
                for tier in PRICING_TIERS {
                    let badge = if tier.most_popular { "  [Most Popular]" } else { "" };
                    println!(
                        "{:<9} {:>7} -> {:>7}/mo  {}{badge}",
                        tier.plan.as_str(), tier.list_price, tier.monthly_price, tier.savings
                    );
                }
            }
        }
        Command::Simulate {
            steps,
            gap_ms,
            realtime,
            reduced_motion,
        } => {
            let mut settings = match &cli.config {
                Some(path) => load_settings_from(path),
                None => load_settings(),
            };
            settings.reduced_motion |= reduced_motion;
            let mut shell = SiteShell::new(&settings);
            let options = SimulationOptions {
                gap: Duration::from_millis(gap_ms),
                realtime,
                ..SimulationOptions::default()
            };
            simulate::run(&mut shell, &steps, &options, |line| println!("{line}")).await?;
        }
    }

    Ok(())
}
