use std::path::PathBuf;

mod controller;
mod ui;

use anyhow::anyhow;
use clap::Parser;
use eframe::egui;
use site_core::config::{load_settings, load_settings_from};

use ui::{PersistedSiteSettings, SiteApp, StartupConfig, SETTINGS_STORAGE_KEY};

#[derive(Parser, Debug)]
#[command(name = "site_gui", about = "Desktop window for the res marketing site")]
struct Args {
    /// Page to open first, e.g. `/pricing`.
    #[arg(long)]
    path: Option<String>,
    /// Switch pages without fade or slide.
    #[arg(long)]
    reduced_motion: bool,
    /// Settings file; defaults to `site.toml` in the working directory.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let mut settings = match &args.config {
        Some(path) => load_settings_from(path),
        None => load_settings(),
    };
    if let Some(path) = args.path {
        settings.initial_path = path;
    }
    settings.reduced_motion |= args.reduced_motion;
    tracing::info!(path = %settings.initial_path, motion = ?settings.motion(), "starting site window");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("res")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([360.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "res marketing site",
        options,
        Box::new(move |cc| {
            let persisted_settings = cc.storage.and_then(|storage| {
                storage
                    .get_string(SETTINGS_STORAGE_KEY)
                    .and_then(|text| serde_json::from_str::<PersistedSiteSettings>(&text).ok())
            });
            Ok(Box::new(SiteApp::new(
                StartupConfig { settings },
                persisted_settings,
            )))
        }),
    )
    .map_err(|err| anyhow!("site window failed: {err}"))
}
