//! Enter and exit animations for the overlays.
//!
//! [`OverlayManager`](crate::overlay::OverlayManager) flips the open flags at
//! once; this keeps a closing overlay on screen while it animates out. Reopening
//! mid-exit reverses from the current progress instead of restarting.

use std::{collections::HashMap, time::Duration};

use shared::domain::TimerId;
use tracing::debug;

use crate::{
    easing::Easing,
    overlay::{OverlayKind, OverlayState},
    timeline::Timeline,
    transition::Motion,
};

const KINDS: [OverlayKind; 2] = [OverlayKind::MobileMenu, OverlayKind::GetStarted];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresencePhase {
    Entering,
    Shown,
    Exiting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenceTimer {
    Shown(OverlayKind),
    Gone(OverlayKind),
}

#[derive(Debug, Clone, Copy)]
struct Presence {
    phase: PresencePhase,
    /// Linear progress when the phase started; 0 is hidden, 1 is fully shown.
    from: f32,
    started: Duration,
    timer: Option<TimerId>,
}

/// How to draw an overlay this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayVisual {
    pub progress: f32,
    pub opacity: f32,
    pub scale: f32,
    pub offset_y: f32,
    /// Share of the viewport height the panel occupies.
    pub height_fraction: f32,
    pub backdrop_opacity: f32,
    pub interactive: bool,
}

#[derive(Debug)]
pub struct OverlayAnimator {
    timeline: Timeline<PresenceTimer>,
    motion: Motion,
    presences: HashMap<OverlayKind, Presence>,
}

impl OverlayAnimator {
    pub const DEFAULT_MOTION: Motion = Motion::Animated {
        duration: Duration::from_millis(300),
        easing: Easing::EaseOut,
    };

    pub fn new(motion: Motion) -> Self {
        Self {
            timeline: Timeline::new(),
            motion,
            presences: HashMap::new(),
        }
    }

    /// Starts enter or exit animations so presences follow the open flags.
    pub fn sync(&mut self, state: OverlayState) {
        for kind in KINDS {
            let open = state.is_open(kind);
            let phase = self.presences.get(&kind).map(|p| p.phase);
            match (open, phase) {
                (true, None | Some(PresencePhase::Exiting)) => self.enter(kind),
                (false, Some(PresencePhase::Entering | PresencePhase::Shown)) => self.exit(kind),
                _ => {}
            }
        }
    }

    fn enter(&mut self, kind: OverlayKind) {
        let from = self.take_progress(kind);
        let now = self.timeline.now();
        let presence = match self.span(1.0 - from) {
            None => Presence {
                phase: PresencePhase::Shown,
                from: 1.0,
                started: now,
                timer: None,
            },
            Some(remaining) => Presence {
                phase: PresencePhase::Entering,
                from,
                started: now,
                timer: Some(
                    self.timeline
                        .schedule_after(remaining, PresenceTimer::Shown(kind)),
                ),
            },
        };
        debug!(?kind, from, phase = ?presence.phase, "overlay entering");
        self.presences.insert(kind, presence);
    }

    fn exit(&mut self, kind: OverlayKind) {
        let from = self.take_progress(kind);
        let now = self.timeline.now();
        match self.span(from) {
            None => {
                debug!(?kind, "overlay removed");
            }
            Some(remaining) => {
                let timer = self
                    .timeline
                    .schedule_after(remaining, PresenceTimer::Gone(kind));
                debug!(?kind, from, "overlay exiting");
                self.presences.insert(
                    kind,
                    Presence {
                        phase: PresencePhase::Exiting,
                        from,
                        started: now,
                        timer: Some(timer),
                    },
                );
            }
        }
    }

    // Removes the presence, cancelling its timer, and returns its progress.
    fn take_progress(&mut self, kind: OverlayKind) -> f32 {
        let Some(presence) = self.presences.remove(&kind) else {
            return 0.0;
        };
        if let Some(timer) = presence.timer {
            self.timeline.cancel(timer);
        }
        self.progress_of(&presence)
    }

    // Time needed to cover `distance` of progress; `None` when nothing is left to animate.
    fn span(&self, distance: f32) -> Option<Duration> {
        match self.motion {
            Motion::Animated { duration, .. } if !duration.is_zero() && distance > 0.0 => {
                if distance >= 1.0 {
                    return Some(duration);
                }
                Some(Duration::from_secs_f64(duration.as_secs_f64() * f64::from(distance)))
            }
            _ => None,
        }
    }

    fn progress_of(&self, presence: &Presence) -> f32 {
        let rate = match self.motion {
            Motion::Animated { duration, .. } if !duration.is_zero() => {
                let elapsed = self.timeline.now().saturating_sub(presence.started);
                elapsed.as_secs_f32() / duration.as_secs_f32()
            }
            _ => f32::INFINITY,
        };
        match presence.phase {
            PresencePhase::Shown => 1.0,
            PresencePhase::Entering => (presence.from + rate).min(1.0),
            PresencePhase::Exiting => (presence.from - rate).max(0.0),
        }
    }

    pub fn advance_to(&mut self, now: Duration) -> usize {
        let fired = self.timeline.advance_to(now);
        let count = fired.len();
        for timer in fired {
            match timer {
                PresenceTimer::Shown(kind) => {
                    if let Some(presence) = self.presences.get_mut(&kind) {
                        if presence.phase == PresencePhase::Entering {
                            presence.phase = PresencePhase::Shown;
                            presence.from = 1.0;
                            presence.timer = None;
                        }
                    }
                }
                PresenceTimer::Gone(kind) => {
                    if self
                        .presences
                        .get(&kind)
                        .is_some_and(|p| p.phase == PresencePhase::Exiting)
                    {
                        self.presences.remove(&kind);
                        debug!(?kind, "overlay removed");
                    }
                }
            }
        }
        count
    }

    /// Switching to [`Motion::Instant`] lands every running animation on its end state.
    pub fn set_motion(&mut self, motion: Motion) {
        self.motion = motion;
        if motion != Motion::Instant {
            return;
        }
        let timeline = &mut self.timeline;
        self.presences.retain(|_, presence| {
            if let Some(timer) = presence.timer.take() {
                timeline.cancel(timer);
            }
            match presence.phase {
                PresencePhase::Exiting => false,
                PresencePhase::Entering | PresencePhase::Shown => {
                    presence.phase = PresencePhase::Shown;
                    presence.from = 1.0;
                    true
                }
            }
        });
    }

    pub fn phase(&self, kind: OverlayKind) -> Option<PresencePhase> {
        self.presences.get(&kind).map(|p| p.phase)
    }

    /// `None` once the overlay is fully gone.
    pub fn visual(&self, kind: OverlayKind) -> Option<OverlayVisual> {
        let presence = self.presences.get(&kind)?;
        let easing = match self.motion {
            Motion::Animated { easing, .. } => easing,
            Motion::Instant => Easing::Linear,
        };
        let eased = easing.apply(self.progress_of(presence));
        let (scale, offset_y, height_fraction) = match kind {
            OverlayKind::GetStarted => (0.9 + 0.1 * eased, 20.0 * (1.0 - eased), 1.0),
            OverlayKind::MobileMenu => (1.0, 0.0, eased),
        };
        Some(OverlayVisual {
            progress: eased,
            opacity: eased,
            scale,
            offset_y,
            height_fraction,
            backdrop_opacity: eased,
            interactive: presence.phase != PresencePhase::Exiting,
        })
    }

    pub fn is_animating(&self) -> bool {
        self.presences
            .values()
            .any(|p| p.phase != PresencePhase::Shown)
    }
}

impl Default for OverlayAnimator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MOTION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::OverlayManager;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn modal_enters_then_settles() {
        let mut overlays = OverlayManager::new();
        let mut animator = OverlayAnimator::default();
        overlays.open_get_started();
        animator.sync(overlays.state());

        let start = animator.visual(OverlayKind::GetStarted).expect("present");
        assert_eq!(start.opacity, 0.0);
        assert!((start.scale - 0.9).abs() < 1e-6);
        assert_eq!(start.offset_y, 20.0);
        assert!(animator.is_animating());

        assert_eq!(animator.advance_to(ms(300)), 1);
        assert_eq!(animator.phase(OverlayKind::GetStarted), Some(PresencePhase::Shown));
        let shown = animator.visual(OverlayKind::GetStarted).expect("present");
        assert_eq!((shown.opacity, shown.scale, shown.offset_y), (1.0, 1.0, 0.0));
        assert!(!animator.is_animating());
    }

    #[test]
    fn closed_overlay_stays_drawn_until_exit_finishes() {
        let mut overlays = OverlayManager::new();
        let mut animator = OverlayAnimator::default();
        overlays.open_mobile_menu();
        animator.sync(overlays.state());
        animator.advance_to(ms(300));

        overlays.close_mobile_menu();
        animator.sync(overlays.state());
        animator.advance_to(ms(450));
        let closing = animator.visual(OverlayKind::MobileMenu).expect("still drawn");
        assert!(!closing.interactive);
        assert!(closing.height_fraction > 0.0 && closing.height_fraction < 1.0);

        animator.advance_to(ms(600));
        assert!(animator.visual(OverlayKind::MobileMenu).is_none());
        assert_eq!(animator.phase(OverlayKind::MobileMenu), None);
    }

    #[test]
    fn reopening_mid_exit_reverses_from_current_progress() {
        let mut overlays = OverlayManager::new();
        let mut animator = OverlayAnimator::default();
        overlays.open_get_started();
        animator.sync(overlays.state());
        animator.advance_to(ms(300));

        overlays.close_get_started();
        animator.sync(overlays.state());
        animator.advance_to(ms(400));
        let before = animator.visual(OverlayKind::GetStarted).expect("exiting");

        overlays.open_get_started();
        animator.sync(overlays.state());
        let after = animator.visual(OverlayKind::GetStarted).expect("entering");
        assert_eq!(animator.phase(OverlayKind::GetStarted), Some(PresencePhase::Entering));
        assert!((before.opacity - after.opacity).abs() < 1e-4);

        // A third of the way out means about a third of the duration to come back.
        assert_eq!(animator.advance_to(ms(499)), 0);
        assert_eq!(animator.advance_to(ms(501)), 1);
        assert_eq!(animator.phase(OverlayKind::GetStarted), Some(PresencePhase::Shown));
    }

    #[test]
    fn hand_off_exits_menu_while_modal_enters() {
        let mut overlays = OverlayManager::new();
        let mut animator = OverlayAnimator::default();
        overlays.open_mobile_menu();
        animator.sync(overlays.state());
        animator.advance_to(ms(300));

        overlays.hand_off_to_get_started();
        animator.sync(overlays.state());
        assert_eq!(animator.phase(OverlayKind::MobileMenu), Some(PresencePhase::Exiting));
        assert_eq!(animator.phase(OverlayKind::GetStarted), Some(PresencePhase::Entering));
    }

    #[test]
    fn instant_motion_skips_both_directions() {
        let mut overlays = OverlayManager::new();
        let mut animator = OverlayAnimator::default();
        overlays.open_get_started();
        animator.sync(overlays.state());

        animator.set_motion(Motion::Instant);
        assert_eq!(animator.phase(OverlayKind::GetStarted), Some(PresencePhase::Shown));
        assert!(!animator.is_animating());

        overlays.close_get_started();
        animator.sync(overlays.state());
        assert!(animator.visual(OverlayKind::GetStarted).is_none());

        overlays.open_mobile_menu();
        animator.sync(overlays.state());
        let menu = animator.visual(OverlayKind::MobileMenu).expect("shown");
        assert_eq!(menu.height_fraction, 1.0);
    }
}
