use std::time::Duration;

use super::*;
use shared::domain::PlanTier;
use site_core::{NavOrigin, OverlayKind, ScrollOffset};

use crate::controller::events::PageIntent;

fn shell() -> (SiteShell, Settings) {
    let settings = Settings::default();
    let mut shell = SiteShell::new(&settings);
    shell.advance_by(Duration::from_millis(500));
    (shell, settings)
}

#[test]
fn plan_selection_lands_on_checkout_with_plan() {
    let (mut shell, settings) = shell();
    let status = apply_intent(
        &mut shell,
        &settings,
        PageIntent::select_plan(PlanTier::OneMonth).into(),
    );
    assert!(status.is_none());
    assert_eq!(shell.current_route().path, "/checkout");
    assert_eq!(shell.checkout_view().plan_label, "1-Month");
}

#[test]
fn unknown_path_surfaces_status_and_banner() {
    let (mut shell, settings) = shell();
    let status = apply_intent(
        &mut shell,
        &settings,
        UiIntent::Navigate {
            origin: NavOrigin::Navbar,
            href: "/blog".into(),
            aux: None,
        },
    );
    assert!(status.expect("status").contains("/blog"));
    assert!(shell.not_found().is_some());

    apply_intent(&mut shell, &settings, UiIntent::DismissNotFound);
    assert!(shell.not_found().is_none());
    assert_eq!(shell.current_route().path, "/");
}

#[test]
fn overlay_intents_follow_the_hand_off_rules() {
    let (mut shell, settings) = shell();
    apply_intent(&mut shell, &settings, UiIntent::ToggleMobileMenu);
    assert!(shell.overlays().mobile_menu_open());

    apply_intent(&mut shell, &settings, UiIntent::MobileMenuGetStarted);
    assert!(!shell.overlays().mobile_menu_open());
    assert!(shell.overlays().get_started_open());

    apply_intent(
        &mut shell,
        &settings,
        UiIntent::DismissOverlay(OverlayKind::GetStarted),
    );
    assert!(!shell.overlays().any_open());
}

#[test]
fn scroll_and_history_intents_reach_the_shell() {
    let (mut shell, settings) = shell();
    apply_intent(
        &mut shell,
        &settings,
        UiIntent::Navigate {
            origin: NavOrigin::Navbar,
            href: "/about".into(),
            aux: None,
        },
    );
    let generation = shell.scroll_reset_generation();
    apply_intent(
        &mut shell,
        &settings,
        UiIntent::Scrolled {
            offset: ScrollOffset { x: 0.0, y: 90.0 },
            generation,
        },
    );
    assert!(shell.navbar_condensed());

    apply_intent(&mut shell, &settings, UiIntent::Back);
    assert_eq!(shell.current_route().path, "/");
    assert!(!shell.navbar_condensed());

    apply_intent(&mut shell, &settings, UiIntent::Forward);
    assert_eq!(shell.current_route().path, "/about");
}

#[test]
fn reduced_motion_toggle_reports_status() {
    let (mut shell, settings) = shell();
    let status = apply_intent(&mut shell, &settings, UiIntent::SetReducedMotion(true));
    assert!(status.expect("status").contains("on"));
    assert!(shell.reduced_motion());

    apply_intent(
        &mut shell,
        &settings,
        UiIntent::Navigate {
            origin: NavOrigin::Navbar,
            href: "/faq".into(),
            aux: None,
        },
    );
    assert!(!shell.is_animating());
}

#[test]
fn scroll_read_before_navigation_is_ignored() {
    let (mut shell, settings) = shell();
    let before = shell.scroll_reset_generation();
    apply_intent(
        &mut shell,
        &settings,
        UiIntent::Navigate {
            origin: NavOrigin::Navbar,
            href: "/faq".into(),
            aux: None,
        },
    );

    // Queued from the frame that still showed the old page.
    apply_intent(
        &mut shell,
        &settings,
        UiIntent::Scrolled {
            offset: ScrollOffset { x: 0.0, y: 900.0 },
            generation: before,
        },
    );
    assert_eq!(shell.scroll_offset(), ScrollOffset::TOP);
    assert!(!shell.navbar_condensed());
}

#[test]
fn reduced_motion_off_reports_the_real_policy() {
    let settings = Settings {
        transition_ms: 0,
        ..Settings::default()
    };
    let mut shell = SiteShell::new(&settings);

    let status = apply_intent(&mut shell, &settings, UiIntent::SetReducedMotion(false));
    assert_eq!(status.as_deref(), Some("Reduced motion off"));
    assert!(!shell.reduced_motion());

    apply_intent(
        &mut shell,
        &settings,
        UiIntent::Navigate {
            origin: NavOrigin::Navbar,
            href: "/agents".into(),
            aux: None,
        },
    );
    assert!(shell.is_animating());
}

#[test]
fn page_intents_cannot_close_the_mobile_menu() {
    let (mut shell, settings) = shell();
    apply_intent(&mut shell, &settings, UiIntent::ToggleMobileMenu);

    let status = apply_intent(
        &mut shell,
        &settings,
        PageIntent::Navigate {
            href: "/contact".into(),
            aux: None,
        }
        .into(),
    );
    assert!(status.is_none());
    assert_eq!(shell.current_route().path, "/contact");
    assert!(shell.overlays().mobile_menu_open());

    apply_intent(&mut shell, &settings, PageIntent::OpenGetStarted.into());
    assert!(shell.overlays().get_started_open());
}

#[test]
fn failed_page_navigation_reports_status() {
    let (mut shell, settings) = shell();
    let status = apply_intent(
        &mut shell,
        &settings,
        PageIntent::Navigate {
            href: "https://elsewhere.com/pricing".into(),
            aux: None,
        }
        .into(),
    );
    assert!(status.expect("status").starts_with("Link could not be followed"));
    assert_eq!(shell.current_route().path, "/");
}
