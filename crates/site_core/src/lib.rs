//! Routing, page transitions, overlays and scroll reset for the res marketing site.
//!
//! Renderers own a [`SiteShell`], feed it navigation intents and clock ticks, and
//! draw whatever [`SiteShell::instances`] reports each frame.

pub mod config;
pub mod easing;
pub mod overlay;
pub mod presence;
pub mod registry;
pub mod reveal;
pub mod router;
pub mod scroll;
pub mod shell;
pub mod timeline;
pub mod transition;
pub mod views;

pub use config::{load_settings, Settings};
pub use overlay::{OverlayKind, OverlayManager, OverlayState};
pub use presence::{OverlayAnimator, OverlayVisual, PresencePhase};
pub use registry::{PageDescriptor, PageRegistry, Route};
pub use reveal::{RevealKey, RevealStyle, RevealTracker, RevealVisual};
pub use router::{NavigationOutcome, PathChange, Router};
pub use scroll::{PathCommitListener, ScrollOffset, ScrollResetCoordinator};
pub use shell::{NavOrigin, NavigationReport, PageContext, SiteShell};
pub use timeline::Timeline;
pub use transition::{
    Motion, PageInstance, PageVisual, TransitionController, TransitionPhase, TransitionStart,
    TransitionTimer,
};
pub use views::CheckoutView;
