//! Per-instance enter/exit lifecycle for routed pages.
//!
//! Instances are keyed by route path. Entering and exiting run concurrently: the
//! outgoing page fades out while the incoming one fades in. At most one instance
//! is live (`Entering` or `Settled`) and at most one is `Exiting`.

use std::time::Duration;

use shared::domain::{InstanceId, TimerId};
use tracing::debug;

use crate::{easing::Easing, registry::Route, timeline::Timeline};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    Entering,
    Settled,
    Exiting,
    Unmounted,
}

impl TransitionPhase {
    pub fn is_live(self) -> bool {
        matches!(self, TransitionPhase::Entering | TransitionPhase::Settled)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Animated { duration: Duration, easing: Easing },
    /// Reduced motion or a surface that cannot animate: phases complete immediately.
    Instant,
}

impl Motion {
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(500);
}

impl Default for Motion {
    fn default() -> Self {
        Motion::Animated {
            duration: Self::DEFAULT_DURATION,
            easing: Easing::EaseInOut,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionTimer {
    EnterComplete(InstanceId),
    ExitComplete(InstanceId),
}

#[derive(Debug, Clone)]
pub struct PageInstance {
    id: InstanceId,
    route: &'static Route,
    phase: TransitionPhase,
    phase_started: Duration,
    timer: Option<TimerId>,
    exit_from_opacity: f32,
}

impl PageInstance {
    pub fn id(&self) -> InstanceId {
        self.id
    }

    pub fn route(&self) -> &'static Route {
        self.route
    }

    pub fn path(&self) -> &'static str {
        self.route.path
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn pending_timer(&self) -> Option<TimerId> {
        self.timer
    }
}

/// What a renderer needs to draw one instance in the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageVisual {
    pub opacity: f32,
    /// Vertical offset in logical pixels; positive pushes content down.
    pub offset_y: f32,
    pub interactive: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionStart {
    /// The requested path is already live; its animation is left untouched.
    Unchanged,
    Started {
        incoming: InstanceId,
        outgoing: Option<InstanceId>,
        /// Instances that were still exiting and got dropped without finishing.
        discarded: Vec<InstanceId>,
    },
}

#[derive(Debug)]
pub struct TransitionController {
    instances: Vec<PageInstance>,
    next_id: u64,
    motion: Motion,
    slide_distance: f32,
}

impl TransitionController {
    pub const DEFAULT_SLIDE_DISTANCE: f32 = 24.0;

    pub fn new(motion: Motion, slide_distance: f32) -> Self {
        Self {
            instances: Vec::new(),
            next_id: 1,
            motion,
            slide_distance,
        }
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }

    pub fn instances(&self) -> &[PageInstance] {
        &self.instances
    }

    pub fn live(&self) -> Option<&PageInstance> {
        self.instances.iter().find(|instance| instance.phase.is_live())
    }

    pub fn phase_of(&self, id: InstanceId) -> TransitionPhase {
        self.instances
            .iter()
            .find(|instance| instance.id == id)
            .map_or(TransitionPhase::Unmounted, |instance| instance.phase)
    }

    pub fn is_animating(&self) -> bool {
        self.instances.iter().any(|instance| instance.timer.is_some())
    }

    /// Mounts `route` as a fresh `Entering` instance.
    pub fn mount(
        &mut self,
        route: &'static Route,
        timeline: &mut Timeline<TransitionTimer>,
    ) -> InstanceId {
        let id = InstanceId(self.next_id);
        self.next_id += 1;

        let (phase, timer) = match self.motion {
            Motion::Animated { duration, .. } => (
                TransitionPhase::Entering,
                Some(timeline.schedule_after(duration, TransitionTimer::EnterComplete(id))),
            ),
            Motion::Instant => (TransitionPhase::Settled, None),
        };
        debug!(instance = id.0, path = route.path, ?phase, "page mounted");
        self.instances.push(PageInstance {
            id,
            route,
            phase,
            phase_started: timeline.now(),
            timer,
            exit_from_opacity: 1.0,
        });
        id
    }

    /// Swaps the live page for `route`. Exit of the old page and entry of the new
    /// one start in the same call.
    pub fn transition_to(
        &mut self,
        route: &'static Route,
        timeline: &mut Timeline<TransitionTimer>,
    ) -> TransitionStart {
        if self.live().is_some_and(|live| live.route.path == route.path) {
            return TransitionStart::Unchanged;
        }

        let mut discarded = Vec::new();
        self.instances.retain(|instance| {
            if instance.phase != TransitionPhase::Exiting {
                return true;
            }
            if let Some(timer) = instance.timer {
                timeline.cancel(timer);
            }
            debug!(instance = instance.id.0, path = instance.path(), "superseded exit discarded");
            discarded.push(instance.id);
            false
        });

        let outgoing = self.begin_exit(timeline);
        let incoming = self.mount(route, timeline);
        TransitionStart::Started {
            incoming,
            outgoing,
            discarded,
        }
    }

    fn begin_exit(&mut self, timeline: &mut Timeline<TransitionTimer>) -> Option<InstanceId> {
        let now = timeline.now();
        let motion = self.motion;
        let slide = self.slide_distance;
        let index = self
            .instances
            .iter()
            .position(|instance| instance.phase.is_live())?;

        let instance = &mut self.instances[index];
        if let Some(timer) = instance.timer.take() {
            timeline.cancel(timer);
        }
        let id = instance.id;

        match motion {
            Motion::Animated { duration, .. } => {
                instance.exit_from_opacity = visual_for(instance, now, motion, slide).opacity;
                instance.phase = TransitionPhase::Exiting;
                instance.phase_started = now;
                instance.timer =
                    Some(timeline.schedule_after(duration, TransitionTimer::ExitComplete(id)));
                debug!(instance = id.0, path = instance.path(), "page exiting");
            }
            Motion::Instant => {
                self.instances.remove(index);
                debug!(instance = id.0, "page unmounted without exit animation");
            }
        }
        Some(id)
    }

    pub fn on_timer(&mut self, timer: TransitionTimer) {
        match timer {
            TransitionTimer::EnterComplete(id) => {
                let Some(instance) = self
                    .instances
                    .iter_mut()
                    .find(|i| i.id == id && i.phase == TransitionPhase::Entering)
                else {
                    debug!(instance = id.0, "stale enter completion ignored");
                    return;
                };
                instance.phase = TransitionPhase::Settled;
                instance.timer = None;
                debug!(instance = id.0, path = instance.path(), "page settled");
            }
            TransitionTimer::ExitComplete(id) => {
                let before = self.instances.len();
                self.instances
                    .retain(|i| !(i.id == id && i.phase == TransitionPhase::Exiting));
                if self.instances.len() == before {
                    debug!(instance = id.0, "stale exit completion ignored");
                } else {
                    debug!(instance = id.0, "page unmounted");
                }
            }
        }
    }

    /// Changes the motion policy. Switching to [`Motion::Instant`] finishes every
    /// running animation on the spot.
    pub fn set_motion(&mut self, motion: Motion, timeline: &mut Timeline<TransitionTimer>) {
        self.motion = motion;
        if motion != Motion::Instant {
            return;
        }
        let now = timeline.now();
        self.instances.retain_mut(|instance| {
            if let Some(timer) = instance.timer.take() {
                timeline.cancel(timer);
            }
            match instance.phase {
                TransitionPhase::Exiting | TransitionPhase::Unmounted => false,
                TransitionPhase::Entering | TransitionPhase::Settled => {
                    instance.phase = TransitionPhase::Settled;
                    instance.phase_started = now;
                    true
                }
            }
        });
    }

    pub fn visual(&self, instance: &PageInstance, now: Duration) -> PageVisual {
        visual_for(instance, now, self.motion, self.slide_distance)
    }
}

fn visual_for(instance: &PageInstance, now: Duration, motion: Motion, slide: f32) -> PageVisual {
    let eased = match motion {
        Motion::Animated { duration, easing } if !duration.is_zero() => {
            let elapsed = now.saturating_sub(instance.phase_started);
            easing.apply(elapsed.as_secs_f32() / duration.as_secs_f32())
        }
        _ => 1.0,
    };

    match instance.phase {
        TransitionPhase::Entering => PageVisual {
            opacity: eased,
            offset_y: slide * (1.0 - eased),
            interactive: true,
        },
        TransitionPhase::Settled => PageVisual {
            opacity: 1.0,
            offset_y: 0.0,
            interactive: true,
        },
        TransitionPhase::Exiting => PageVisual {
            opacity: instance.exit_from_opacity * (1.0 - eased),
            offset_y: 0.0,
            interactive: false,
        },
        TransitionPhase::Unmounted => PageVisual {
            opacity: 0.0,
            offset_y: 0.0,
            interactive: false,
        },
    }
}

#[cfg(test)]
#[path = "tests/transition_tests.rs"]
mod tests;
