//! Controller layer: UI intents, reducer-like shell updates, and intent queueing.

pub mod events;
pub mod orchestration;
pub mod reducer;
