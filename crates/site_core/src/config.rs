use std::{fs, path::Path, time::Duration};

use serde::Deserialize;
use tracing::warn;

use crate::{
    easing::Easing, registry::HOME_PATH, scroll::ScrollResetCoordinator,
    transition::{Motion, TransitionController},
};

pub const SETTINGS_FILE: &str = "site.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub transition_ms: u64,
    pub easing: Easing,
    pub slide_distance: f32,
    pub reduced_motion: bool,
    pub navbar_condense_threshold: f32,
    pub initial_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            transition_ms: Motion::DEFAULT_DURATION.as_millis() as u64,
            easing: Easing::EaseInOut,
            slide_distance: TransitionController::DEFAULT_SLIDE_DISTANCE,
            reduced_motion: false,
            navbar_condense_threshold: ScrollResetCoordinator::DEFAULT_CONDENSE_THRESHOLD,
            initial_path: HOME_PATH.into(),
        }
    }
}

impl Settings {
    pub fn motion(&self) -> Motion {
        if self.reduced_motion || self.transition_ms == 0 {
            return Motion::Instant;
        }
        self.animated_motion()
    }

    /// The motion used once reduced motion is switched off at runtime. A zero
    /// `transition_ms` falls back to [`Motion::DEFAULT_DURATION`] so the toggle
    /// always brings animation back.
    pub fn animated_motion(&self) -> Motion {
        let duration = match self.transition_ms {
            0 => Motion::DEFAULT_DURATION,
            ms => Duration::from_millis(ms),
        };
        Motion::Animated {
            duration,
            easing: self.easing,
        }
    }
}

pub fn load_settings() -> Settings {
    load_settings_from(Path::new(SETTINGS_FILE))
}

/// Defaults, then the TOML file at `path` if it exists, then `SITE__*` env vars.
pub fn load_settings_from(path: &Path) -> Settings {
    let mut settings = match fs::read_to_string(path) {
        Ok(raw) => match toml::from_str::<Settings>(&raw) {
            Ok(parsed) => parsed,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "ignoring unreadable settings file");
                Settings::default()
            }
        },
        Err(_) => Settings::default(),
    };
    apply_overrides(&mut settings, |name| std::env::var(name).ok());
    settings
}

fn apply_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("SITE__TRANSITION_MS") {
        match v.trim().parse::<u64>() {
            Ok(parsed) => settings.transition_ms = parsed,
            Err(_) => warn!(value = %v, "SITE__TRANSITION_MS is not a number of milliseconds"),
        }
    }

    if let Some(v) = lookup("SITE__EASING") {
        match v.parse::<Easing>() {
            Ok(parsed) => settings.easing = parsed,
            Err(err) => warn!(error = %err, "ignoring SITE__EASING"),
        }
    }

    if let Some(v) = lookup("SITE__REDUCED_MOTION") {
        match parse_flag(&v) {
            Some(flag) => settings.reduced_motion = flag,
            None => warn!(value = %v, "SITE__REDUCED_MOTION expects true/false"),
        }
    }

    if let Some(v) = lookup("SITE__INITIAL_PATH") {
        if !v.trim().is_empty() {
            settings.initial_path = v.trim().to_string();
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
