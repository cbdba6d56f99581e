//! Replays navigation steps against a [`SiteShell`] and renders a phase trace.

use std::{str::FromStr, time::Duration};

use anyhow::{anyhow, bail, Context, Result};
use shared::domain::{AuxData, PlanTier};
use site_core::{NavOrigin, NavigationOutcome, NavigationReport, SiteShell, TransitionStart};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Visit { path: String, plan: Option<PlanTier> },
    Back,
    Forward,
}

impl FromStr for Step {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("back") {
            return Ok(Step::Back);
        }
        if raw.eq_ignore_ascii_case("forward") {
            return Ok(Step::Forward);
        }
        let (path, plan) = match raw.split_once('@') {
            Some((path, plan)) => {
                let tier = plan
                    .parse::<PlanTier>()
                    .with_context(|| format!("step `{raw}`"))?;
                (path, Some(tier))
            }
            None => (raw, None),
        };
        if path.is_empty() {
            return Err(anyhow!("step `{raw}` has no path"));
        }
        Ok(Step::Visit {
            path: path.to_string(),
            plan,
        })
    }
}

#[derive(Debug, Clone)]
pub struct SimulationOptions {
    pub gap: Duration,
    pub frame: Duration,
    pub realtime: bool,
    /// Upper bound on frames spent waiting for the last transition to settle.
    pub max_settle_frames: usize,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            gap: Duration::from_millis(200),
            frame: Duration::from_millis(16),
            realtime: false,
            max_settle_frames: 10_000,
        }
    }
}

/// Runs every step `options.gap` apart, then waits for the pages to settle.
/// A line is emitted for each step and for every frame where a transition
/// timer fired.
pub async fn run(
    shell: &mut SiteShell,
    steps: &[Step],
    options: &SimulationOptions,
    mut emit: impl FnMut(String),
) -> Result<()> {
    if options.frame.is_zero() {
        bail!("frame interval must be positive");
    }
    tracing::debug!(steps = steps.len(), realtime = options.realtime, "starting simulation");
    let mut clock = Clock::new(options);
    emit(snapshot(shell));

    for step in steps {
        emit(format!("{} {}", stamp(shell.now()), apply_step(shell, step)));
        emit(snapshot(shell));
        let step_end = shell.now() + options.gap;
        while shell.now() < step_end {
            let next = step_end.min(shell.now() + options.frame);
            if clock.advance(shell, next).await > 0 {
                emit(snapshot(shell));
            }
        }
    }

    let mut frames = 0;
    while shell.is_animating() {
        if frames == options.max_settle_frames {
            bail!("pages still animating after {frames} frames");
        }
        frames += 1;
        let next = shell.now() + options.frame;
        if clock.advance(shell, next).await > 0 {
            emit(snapshot(shell));
        }
    }
    emit(format!(
        "{} settled on {} (history depth {})",
        stamp(shell.now()),
        shell.current_route().path,
        shell.history_len()
    ));
    Ok(())
}

enum Clock {
    Virtual,
    Realtime {
        origin: tokio::time::Instant,
        ticker: tokio::time::Interval,
    },
}

impl Clock {
    fn new(options: &SimulationOptions) -> Self {
        if options.realtime {
            Clock::Realtime {
                origin: tokio::time::Instant::now(),
                ticker: tokio::time::interval(options.frame),
            }
        } else {
            Clock::Virtual
        }
    }

    async fn advance(&mut self, shell: &mut SiteShell, target: Duration) -> usize {
        match self {
            Clock::Virtual => shell.advance_to(target),
            Clock::Realtime { origin, ticker } => {
                ticker.tick().await;
                shell.advance_to(origin.elapsed().min(target))
            }
        }
    }
}

fn apply_step(shell: &mut SiteShell, step: &Step) -> String {
    match step {
        Step::Visit { path, plan } => {
            let aux = plan.map(AuxData::with_plan);
            match shell.navigate(NavOrigin::External, path, aux) {
                Ok(report) => format!("visit {path}: {}", describe(&report)),
                Err(err) => format!("visit {path}: rejected, {err}"),
            }
        }
        Step::Back => match shell.back() {
            Some(report) => format!("back: {}", describe(&report)),
            None => "back: already at the oldest entry".to_string(),
        },
        Step::Forward => match shell.forward() {
            Some(report) => format!("forward: {}", describe(&report)),
            None => "forward: already at the newest entry".to_string(),
        },
    }
}

fn describe(report: &NavigationReport) -> String {
    let mut text = match &report.outcome {
        NavigationOutcome::Committed(change) => {
            format!("{} -> {}", change.from.path, change.to.path)
        }
        NavigationOutcome::PayloadReplaced => "payload replaced".to_string(),
        NavigationOutcome::Unchanged => "already here".to_string(),
    };
    if let TransitionStart::Started { discarded, .. } = &report.transition {
        if !discarded.is_empty() {
            text.push_str(&format!(" (discarded {} exiting)", discarded.len()));
        }
    }
    text
}

fn stamp(now: Duration) -> String {
    format!("t={:>5}ms", now.as_millis())
}

fn snapshot(shell: &SiteShell) -> String {
    let pages: Vec<String> = shell
        .instances()
        .iter()
        .map(|instance| {
            let visual = shell.visual(instance);
            format!(
                "{} {:?} opacity={:.2}",
                instance.path(),
                instance.phase(),
                visual.opacity
            )
        })
        .collect();
    format!("{} [{}]", stamp(shell.now()), pages.join(" | "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use site_core::Settings;

    fn steps(raw: &[&str]) -> Vec<Step> {
        raw.iter().map(|s| s.parse().expect("step")).collect()
    }

    async fn trace(shell: &mut SiteShell, raw: &[&str], options: SimulationOptions) -> Vec<String> {
        let mut lines = Vec::new();
        run(shell, &steps(raw), &options, |line| lines.push(line))
            .await
            .expect("simulation");
        lines
    }

    #[test]
    fn parses_paths_plans_and_history_steps() {
        assert_eq!("BACK".parse::<Step>().expect("back"), Step::Back);
        assert_eq!("forward".parse::<Step>().expect("forward"), Step::Forward);
        assert_eq!(
            "/checkout@12-month".parse::<Step>().expect("checkout"),
            Step::Visit {
                path: "/checkout".into(),
                plan: Some(PlanTier::TwelveMonth),
            }
        );
        assert!("/checkout@lifetime".parse::<Step>().is_err());
        assert!("@1-Month".parse::<Step>().is_err());
    }

    #[tokio::test]
    async fn virtual_run_settles_on_last_page() {
        let mut shell = SiteShell::new(&Settings::default());
        let lines = trace(
            &mut shell,
            &["/services", "/pricing", "/checkout@3-Month"],
            SimulationOptions::default(),
        )
        .await;

        let expected = format!("{} settled on /checkout (history depth 4)", stamp(shell.now()));
        assert_eq!(lines.last(), Some(&expected));
        assert!(lines.iter().any(|line| line.contains("visit /pricing: /services -> /pricing")));
        assert_eq!(shell.checkout_view().plan_label, "3-Month");
        assert!(!shell.is_animating());
        assert_eq!(shell.instances().len(), 1);
    }

    #[tokio::test]
    async fn rapid_steps_report_discarded_pages() {
        let mut shell = SiteShell::new(&Settings::default());
        let options = SimulationOptions {
            gap: Duration::from_millis(50),
            ..SimulationOptions::default()
        };
        let lines = trace(&mut shell, &["/services", "/agents", "/faq"], options).await;
        assert!(lines.iter().any(|line| line.contains("discarded 1 exiting")));
        assert_eq!(shell.current_route().path, "/faq");
    }

    #[tokio::test]
    async fn unknown_paths_and_empty_history_are_reported() {
        let mut shell = SiteShell::new(&Settings::default());
        let lines = trace(&mut shell, &["forward", "/blog"], SimulationOptions::default()).await;
        assert!(lines.iter().any(|line| line.contains("forward: already at the newest entry")));
        assert!(lines.iter().any(|line| line.contains("visit /blog: rejected")));
        assert_eq!(shell.current_route().path, "/");
        assert!(lines.last().expect("lines").ends_with("(history depth 1)"));
    }

    #[tokio::test(start_paused = true)]
    async fn realtime_run_follows_the_clock() {
        let mut shell = SiteShell::new(&Settings::default());
        let options = SimulationOptions {
            realtime: true,
            ..SimulationOptions::default()
        };
        let lines = trace(&mut shell, &["/about"], options).await;
        assert!(lines
            .last()
            .expect("lines")
            .ends_with("settled on /about (history depth 2)"));
        assert!(shell.now() >= Duration::from_millis(500));
    }
}
