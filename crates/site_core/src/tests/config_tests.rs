use super::*;

use std::{collections::HashMap, io::Write};

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

#[test]
fn defaults_match_site_motion() {
    let settings = Settings::default();
    assert_eq!(settings.transition_ms, 500);
    assert_eq!(settings.easing, Easing::EaseInOut);
    assert_eq!(settings.initial_path, "/");
    assert_eq!(
        settings.motion(),
        Motion::Animated {
            duration: Duration::from_millis(500),
            easing: Easing::EaseInOut,
        }
    );
}

#[test]
fn reduced_motion_or_zero_duration_is_instant() {
    let reduced = Settings {
        reduced_motion: true,
        ..Settings::default()
    };
    assert_eq!(reduced.motion(), Motion::Instant);

    let zero = Settings {
        transition_ms: 0,
        ..Settings::default()
    };
    assert_eq!(zero.motion(), Motion::Instant);
}

#[test]
fn animated_motion_never_has_zero_duration() {
    let zero = Settings {
        transition_ms: 0,
        easing: Easing::Linear,
        ..Settings::default()
    };
    assert_eq!(
        zero.animated_motion(),
        Motion::Animated {
            duration: Motion::DEFAULT_DURATION,
            easing: Easing::Linear,
        }
    );

    let custom = Settings {
        transition_ms: 250,
        reduced_motion: true,
        ..Settings::default()
    };
    assert_eq!(
        custom.animated_motion(),
        Motion::Animated {
            duration: Duration::from_millis(250),
            easing: Easing::EaseInOut,
        }
    );
}

#[test]
fn reads_partial_toml_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "transition_ms = 250\neasing = \"ease-out\"\ninitial_path = \"/pricing\"")
        .expect("write settings");

    let settings = load_settings_from(file.path());
    assert_eq!(settings.transition_ms, 250);
    assert_eq!(settings.easing, Easing::EaseOut);
    assert_eq!(settings.initial_path, "/pricing");
    assert_eq!(
        settings.navbar_condense_threshold,
        ScrollResetCoordinator::DEFAULT_CONDENSE_THRESHOLD
    );
}

#[test]
fn missing_or_broken_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = load_settings_from(&dir.path().join("absent.toml"));
    assert_eq!(missing.transition_ms, Settings::default().transition_ms);

    let broken = dir.path().join("broken.toml");
    fs::write(&broken, "transition_ms = \"soon\"").expect("write broken");
    assert_eq!(
        load_settings_from(&broken).transition_ms,
        Settings::default().transition_ms
    );
}

#[test]
fn env_overrides_apply_and_bad_values_are_ignored() {
    let mut settings = Settings::default();
    apply_overrides(
        &mut settings,
        lookup_from(&[
            ("SITE__TRANSITION_MS", "120"),
            ("SITE__EASING", "linear"),
            ("SITE__REDUCED_MOTION", "yes"),
            ("SITE__INITIAL_PATH", " /faq "),
        ]),
    );
    assert_eq!(settings.transition_ms, 120);
    assert_eq!(settings.easing, Easing::Linear);
    assert!(settings.reduced_motion);
    assert_eq!(settings.initial_path, "/faq");

    apply_overrides(
        &mut settings,
        lookup_from(&[
            ("SITE__TRANSITION_MS", "fast"),
            ("SITE__EASING", "wobble"),
            ("SITE__REDUCED_MOTION", "maybe"),
        ]),
    );
    assert_eq!(settings.transition_ms, 120);
    assert_eq!(settings.easing, Easing::Linear);
    assert!(settings.reduced_motion);
}
