//! Application shell: the single owner of navigation, overlay, scroll and
//! transition state. Renderers and CLIs talk to the site only through here.

use std::time::Duration;

use shared::{domain::AuxData, error::NavigationError};
use tracing::{debug, info, warn};

use crate::{
    config::Settings,
    overlay::{OverlayKind, OverlayManager, OverlayState},
    presence::{OverlayAnimator, OverlayVisual},
    registry::Route,
    router::{NavigationOutcome, Router},
    scroll::{PathCommitListener, ScrollOffset, ScrollResetCoordinator},
    timeline::Timeline,
    transition::{
        Motion, PageInstance, PageVisual, TransitionController, TransitionStart, TransitionTimer,
    },
    views::CheckoutView,
};

/// Where a navigation request came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOrigin {
    Page,
    Navbar,
    /// A link or button rendered inside the overlay; the overlay closes once the
    /// navigation completes.
    Overlay(OverlayKind),
    External,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavigationReport {
    pub outcome: NavigationOutcome,
    pub transition: TransitionStart,
    pub closed_overlay: Option<OverlayKind>,
}

#[derive(Debug)]
pub struct SiteShell {
    router: Router,
    transitions: TransitionController,
    overlays: OverlayManager,
    presence: OverlayAnimator,
    scroll: ScrollResetCoordinator,
    timeline: Timeline<TransitionTimer>,
    not_found: Option<NavigationError>,
}

fn overlay_motion(page_motion: Motion) -> Motion {
    match page_motion {
        Motion::Instant => Motion::Instant,
        Motion::Animated { .. } => OverlayAnimator::DEFAULT_MOTION,
    }
}

impl SiteShell {
    /// Mounts the configured initial page. An unregistered initial path falls back to home.
    pub fn new(settings: &Settings) -> Self {
        let router = match Router::new(&settings.initial_path) {
            Ok(router) => router,
            Err(err) => {
                warn!(error = %err, "initial path rejected; starting at home");
                Router::at_home()
            }
        };
        let motion = settings.motion();
        let mut shell = Self {
            router,
            transitions: TransitionController::new(motion, settings.slide_distance),
            overlays: OverlayManager::new(),
            presence: OverlayAnimator::new(overlay_motion(motion)),
            scroll: ScrollResetCoordinator::new(settings.navbar_condense_threshold),
            timeline: Timeline::new(),
            not_found: None,
        };
        let route = shell.router.current_route();
        shell.transitions.mount(route, &mut shell.timeline);
        info!(path = route.path, "site shell started");
        shell
    }

    pub fn navigate(
        &mut self,
        origin: NavOrigin,
        href: &str,
        aux: Option<AuxData>,
    ) -> Result<NavigationReport, NavigationError> {
        let outcome = match self.router.navigate_href(href, aux) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(href, error = %err, ?origin, "navigation rejected");
                self.not_found = Some(err.clone());
                return Err(err);
            }
        };

        let transition = self.apply_outcome(&outcome);
        let closed_overlay = match origin {
            NavOrigin::Overlay(kind) => self.overlays.close(kind).then_some(kind),
            _ => None,
        };
        if closed_overlay.is_some() {
            self.sync_presence();
        }
        Ok(NavigationReport {
            outcome,
            transition,
            closed_overlay,
        })
    }

    pub fn back(&mut self) -> Option<NavigationReport> {
        let outcome = self.router.back()?;
        Some(self.history_report(outcome))
    }

    pub fn forward(&mut self) -> Option<NavigationReport> {
        let outcome = self.router.forward()?;
        Some(self.history_report(outcome))
    }

    fn history_report(&mut self, outcome: NavigationOutcome) -> NavigationReport {
        let transition = self.apply_outcome(&outcome);
        NavigationReport {
            outcome,
            transition,
            closed_overlay: None,
        }
    }

    // Path is already committed in the router at this point; scroll resets on
    // commit, then the visual transition starts.
    fn apply_outcome(&mut self, outcome: &NavigationOutcome) -> TransitionStart {
        let Some(change) = outcome.path_change() else {
            return TransitionStart::Unchanged;
        };
        self.not_found = None;
        self.scroll.on_path_committed(change);
        self.transitions.transition_to(change.to, &mut self.timeline)
    }

    /// Advances the animation clock and applies every completion that fell due.
    /// Returns how many page transition completions fired.
    pub fn advance_to(&mut self, now: Duration) -> usize {
        self.presence.advance_to(now);
        let fired = self.timeline.advance_to(now);
        let count = fired.len();
        for timer in fired {
            self.transitions.on_timer(timer);
        }
        if count > 0 {
            debug!(count, now_ms = now.as_millis() as u64, "transition timers fired");
        }
        count
    }

    pub fn advance_by(&mut self, delta: Duration) -> usize {
        self.advance_to(self.timeline.now() + delta)
    }

    pub fn now(&self) -> Duration {
        self.timeline.now()
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.timeline.next_deadline()
    }

    /// Page transitions only; see [`Self::overlays_animating`].
    pub fn is_animating(&self) -> bool {
        self.transitions.is_animating()
    }

    pub fn overlays_animating(&self) -> bool {
        self.presence.is_animating()
    }

    /// Turning reduced motion off always restores an animated policy, even when
    /// the configured duration is zero.
    pub fn set_reduced_motion(&mut self, reduced: bool, settings: &Settings) {
        let motion = if reduced {
            Motion::Instant
        } else {
            settings.animated_motion()
        };
        self.transitions.set_motion(motion, &mut self.timeline);
        self.presence.set_motion(overlay_motion(motion));
    }

    pub fn reduced_motion(&self) -> bool {
        self.transitions.motion() == Motion::Instant
    }

    pub fn current_route(&self) -> &'static Route {
        self.router.current_route()
    }

    pub fn aux(&self) -> Option<&AuxData> {
        self.router.aux()
    }

    pub fn can_go_back(&self) -> bool {
        self.router.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.router.can_go_forward()
    }

    pub fn history_len(&self) -> usize {
        self.router.history_len()
    }

    pub fn checkout_view(&self) -> CheckoutView {
        CheckoutView::from_aux(self.router.aux())
    }

    pub fn instances(&self) -> &[PageInstance] {
        self.transitions.instances()
    }

    pub fn live_instance(&self) -> Option<&PageInstance> {
        self.transitions.live()
    }

    pub fn visual(&self, instance: &PageInstance) -> PageVisual {
        self.transitions.visual(instance, self.timeline.now())
    }

    pub fn overlays(&self) -> OverlayState {
        self.overlays.state()
    }

    /// `None` once the overlay has finished animating out.
    pub fn overlay_visual(&self, kind: OverlayKind) -> Option<OverlayVisual> {
        self.presence.visual(kind)
    }

    fn sync_presence(&mut self) {
        self.presence.sync(self.overlays.state());
    }

    pub fn toggle_mobile_menu(&mut self) -> bool {
        let open = self.overlays.toggle_mobile_menu();
        self.sync_presence();
        open
    }

    pub fn open_mobile_menu(&mut self) -> bool {
        let changed = self.overlays.open_mobile_menu();
        self.sync_presence();
        changed
    }

    pub fn close_mobile_menu(&mut self) -> bool {
        let changed = self.overlays.close_mobile_menu();
        self.sync_presence();
        changed
    }

    pub fn open_get_started(&mut self) -> bool {
        let changed = self.overlays.open_get_started();
        self.sync_presence();
        changed
    }

    pub fn close_get_started(&mut self) -> bool {
        let changed = self.overlays.close_get_started();
        self.sync_presence();
        changed
    }

    /// Backdrop click or explicit close button.
    pub fn dismiss_overlay(&mut self, kind: OverlayKind) -> bool {
        let changed = self.overlays.close(kind);
        self.sync_presence();
        changed
    }

    pub fn mobile_menu_get_started(&mut self) {
        self.overlays.hand_off_to_get_started();
        self.sync_presence();
    }

    pub fn scroll_offset(&self) -> ScrollOffset {
        self.scroll.offset()
    }

    pub fn scroll_reset_generation(&self) -> u64 {
        self.scroll.reset_generation()
    }

    /// `generation` is the [`Self::scroll_reset_generation`] the renderer had
    /// applied when it read `offset`; older readings are dropped.
    pub fn record_scroll(&mut self, offset: ScrollOffset, generation: u64) -> bool {
        self.scroll.record_scroll(offset, generation)
    }

    pub fn navbar_condensed(&self) -> bool {
        self.scroll.navbar_condensed()
    }

    pub fn not_found(&self) -> Option<&NavigationError> {
        self.not_found.as_ref()
    }

    pub fn clear_not_found(&mut self) {
        self.not_found = None;
    }

    /// Restricted handle handed to page content.
    pub fn page_context(&mut self) -> PageContext<'_> {
        PageContext { shell: self }
    }
}

/// What a page may do: read its payload, navigate, and ask for the get-started
/// modal. The mobile menu is out of its reach.
pub struct PageContext<'a> {
    shell: &'a mut SiteShell,
}

impl PageContext<'_> {
    pub fn aux(&self) -> Option<&AuxData> {
        self.shell.aux()
    }

    pub fn navigate(
        &mut self,
        href: &str,
        aux: Option<AuxData>,
    ) -> Result<NavigationReport, NavigationError> {
        self.shell.navigate(NavOrigin::Page, href, aux)
    }

    pub fn open_get_started(&mut self) -> bool {
        self.shell.open_get_started()
    }
}

#[cfg(test)]
#[path = "tests/shell_tests.rs"]
mod tests;
