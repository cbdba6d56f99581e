use std::time::Duration;

use shared::domain::{AuxData, PlanTier};
use site_core::{
    NavOrigin, OverlayKind, PageRegistry, ScrollOffset, Settings, SiteShell, TransitionPhase,
    TransitionStart,
};

const FRAME: Duration = Duration::from_millis(16);

fn settled_shell() -> SiteShell {
    let mut shell = SiteShell::new(&Settings::default());
    shell.advance_by(Duration::from_millis(500));
    shell
}

fn settled_paths(shell: &SiteShell) -> Vec<&'static str> {
    shell
        .instances()
        .iter()
        .filter(|i| i.phase() == TransitionPhase::Settled)
        .map(|i| i.path())
        .collect()
}

#[test]
fn every_registered_path_is_reachable() {
    let mut shell = settled_shell();
    for route in PageRegistry::site().routes() {
        shell
            .navigate(NavOrigin::External, route.path, None)
            .expect("registered path");
        assert_eq!(shell.current_route().path, route.path);
    }
}

#[test]
fn consecutive_pages_are_never_both_settled() {
    let mut shell = settled_shell();
    shell.navigate(NavOrigin::Navbar, "/agents", None).expect("agents");

    for _ in 0..60 {
        shell.advance_by(FRAME);
        let settled = settled_paths(&shell);
        assert!(settled.len() <= 1, "two settled pages: {settled:?}");
    }
    assert_eq!(settled_paths(&shell), vec!["/agents"]);
    assert_eq!(shell.instances().len(), 1);
}

#[test]
fn repeat_navigation_to_active_path_does_not_reenter() {
    let mut shell = settled_shell();
    let id = shell.live_instance().expect("home").id();

    let report = shell.navigate(NavOrigin::Navbar, "/", None).expect("home");
    assert_eq!(report.transition, TransitionStart::Unchanged);
    let live = shell.live_instance().expect("home");
    assert_eq!(live.id(), id);
    assert_eq!(live.phase(), TransitionPhase::Settled);
}

#[test]
fn scroll_is_at_top_after_every_commit_whatever_the_phase() {
    let mut shell = settled_shell();
    for (step, path) in ["/services", "/crm", "/faq", "/contact"].into_iter().enumerate() {
        let generation = shell.scroll_reset_generation();
        shell.record_scroll(
            ScrollOffset {
                x: 0.0,
                y: 250.0 * (step as f32 + 1.0),
            },
            generation,
        );
        shell.navigate(NavOrigin::Page, path, None).expect("navigate");
        assert_eq!(shell.scroll_offset(), ScrollOffset::TOP);
        assert!(shell.is_animating());
        shell.advance_by(Duration::from_millis(120));
    }
}

#[test]
fn checkout_reports_selected_or_placeholder_plan() {
    let mut shell = settled_shell();
    shell
        .navigate(
            NavOrigin::Page,
            "/checkout",
            Some(AuxData::with_plan(PlanTier::TwelveMonth)),
        )
        .expect("checkout with plan");
    assert_eq!(shell.checkout_view().plan_label, "12-Month");

    shell.navigate(NavOrigin::Navbar, "/pricing", None).expect("pricing");
    shell.navigate(NavOrigin::Navbar, "/checkout", None).expect("checkout");
    assert_eq!(shell.checkout_view().plan_label, "Selected Plan");
}

#[test]
fn mobile_menu_get_started_hand_off_never_shows_both() {
    let mut shell = settled_shell();
    shell.open_mobile_menu();
    shell.mobile_menu_get_started();

    let overlays = shell.overlays();
    assert!(!overlays.mobile_menu_open());
    assert!(overlays.get_started_open());
    assert!(!(overlays.is_open(OverlayKind::MobileMenu) && overlays.is_open(OverlayKind::GetStarted)));
}

#[test]
fn rapid_navigation_discards_first_page_without_late_callbacks() {
    let mut shell = settled_shell();
    let a = shell.live_instance().expect("A").id();

    shell.navigate(NavOrigin::Navbar, "/services", None).expect("B");
    shell.advance_by(Duration::from_millis(100));
    let report = shell.navigate(NavOrigin::Navbar, "/pricing", None).expect("C");

    let TransitionStart::Started { discarded, .. } = report.transition else {
        panic!("expected a transition");
    };
    assert_eq!(discarded, vec![a]);
    assert!(shell.instances().iter().all(|i| i.id() != a));

    // Exactly two completions remain: B's exit and C's entry.
    assert_eq!(shell.advance_by(Duration::from_secs(2)), 2);
    assert_eq!(settled_paths(&shell), vec!["/pricing"]);
    assert_eq!(shell.advance_by(Duration::from_secs(2)), 0);
    assert!(shell.instances().iter().all(|i| i.id() != a));
}
