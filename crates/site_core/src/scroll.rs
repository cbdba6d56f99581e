use tracing::debug;

use crate::router::PathChange;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollOffset {
    pub x: f32,
    pub y: f32,
}

impl ScrollOffset {
    pub const TOP: ScrollOffset = ScrollOffset { x: 0.0, y: 0.0 };
}

/// Subscriber to committed path changes.
pub trait PathCommitListener {
    fn on_path_committed(&mut self, change: &PathChange);
}

/// Tracks the viewport offset reported by the renderer and resets it to the top
/// whenever a path commits, whatever the transition phase.
#[derive(Debug)]
pub struct ScrollResetCoordinator {
    offset: ScrollOffset,
    reset_generation: u64,
    condense_threshold: f32,
}

impl ScrollResetCoordinator {
    pub const DEFAULT_CONDENSE_THRESHOLD: f32 = 50.0;

    pub fn new(condense_threshold: f32) -> Self {
        Self {
            offset: ScrollOffset::TOP,
            reset_generation: 0,
            condense_threshold,
        }
    }

    pub fn offset(&self) -> ScrollOffset {
        self.offset
    }

    /// Bumped on every reset; renderers compare it to the last value they applied.
    pub fn reset_generation(&self) -> u64 {
        self.reset_generation
    }

    /// Records an offset the renderer read while `generation` was current.
    /// Readings taken before the latest reset are dropped; returns whether the
    /// offset was kept.
    pub fn record_scroll(&mut self, offset: ScrollOffset, generation: u64) -> bool {
        if generation != self.reset_generation {
            debug!(
                observed = generation,
                current = self.reset_generation,
                "stale scroll reading dropped"
            );
            return false;
        }
        self.offset = offset;
        true
    }

    pub fn navbar_condensed(&self) -> bool {
        self.offset.y > self.condense_threshold
    }
}

impl PathCommitListener for ScrollResetCoordinator {
    fn on_path_committed(&mut self, change: &PathChange) {
        self.offset = ScrollOffset::TOP;
        self.reset_generation += 1;
        debug!(
            from = change.from.path,
            to = change.to.path,
            generation = self.reset_generation,
            "scroll reset"
        );
    }
}
