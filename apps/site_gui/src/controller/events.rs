//! Intents raised by widgets and status-line wording for failed navigation.

use shared::{
    domain::{AuxData, PlanTier},
    error::{ErrorCode, NavigationError},
};
use site_core::{registry::CHECKOUT_PATH, NavOrigin, OverlayKind, ScrollOffset};

#[derive(Debug, Clone, PartialEq)]
pub enum UiIntent {
    Navigate {
        origin: NavOrigin,
        href: String,
        aux: Option<AuxData>,
    },
    Back,
    Forward,
    ToggleMobileMenu,
    MobileMenuGetStarted,
    OpenGetStarted,
    DismissOverlay(OverlayKind),
    /// `generation` is the scroll reset generation the renderer had applied when
    /// it read `offset`.
    Scrolled {
        offset: ScrollOffset,
        generation: u64,
    },
    SetReducedMotion(bool),
    DismissNotFound,
    /// Raised by page content; applied through the shell's page handle.
    Page(PageIntent),
}

impl UiIntent {
    pub fn name(&self) -> &'static str {
        match self {
            UiIntent::Navigate { .. } => "navigate",
            UiIntent::Back => "back",
            UiIntent::Forward => "forward",
            UiIntent::ToggleMobileMenu => "toggle_mobile_menu",
            UiIntent::MobileMenuGetStarted => "mobile_menu_get_started",
            UiIntent::OpenGetStarted => "open_get_started",
            UiIntent::DismissOverlay(_) => "dismiss_overlay",
            UiIntent::Scrolled { .. } => "scrolled",
            UiIntent::SetReducedMotion(_) => "set_reduced_motion",
            UiIntent::DismissNotFound => "dismiss_not_found",
            UiIntent::Page(PageIntent::Navigate { .. }) => "page_navigate",
            UiIntent::Page(PageIntent::OpenGetStarted) => "page_open_get_started",
        }
    }
}

/// The only requests page content can make.
#[derive(Debug, Clone, PartialEq)]
pub enum PageIntent {
    Navigate {
        href: String,
        aux: Option<AuxData>,
    },
    OpenGetStarted,
}

impl PageIntent {
    pub fn select_plan(plan: PlanTier) -> Self {
        PageIntent::Navigate {
            href: CHECKOUT_PATH.to_string(),
            aux: Some(AuxData::with_plan(plan)),
        }
    }
}

impl From<PageIntent> for UiIntent {
    fn from(intent: PageIntent) -> Self {
        UiIntent::Page(intent)
    }
}

pub fn describe_navigation_failure(err: &NavigationError) -> String {
    match (err.code(), err) {
        (ErrorCode::NotFound, NavigationError::UnknownPath(path)) => {
            format!("No page lives at {path}; you are still on the previous page.")
        }
        (_, other) => format!("Link could not be followed: {other}"),
    }
}

#[cfg(test)]
#[path = "tests/events_tests.rs"]
mod tests;
