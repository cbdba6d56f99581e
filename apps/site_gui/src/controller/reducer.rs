//! Applies queued intents to the site shell. Returns a status line when the
//! user should hear about the result.

use shared::domain::AuxData;
use site_core::{PageContext, Settings, SiteShell};

use super::events::{describe_navigation_failure, PageIntent, UiIntent};

pub fn apply_intent(shell: &mut SiteShell, settings: &Settings, intent: UiIntent) -> Option<String> {
    match intent {
        UiIntent::Navigate { origin, href, aux } => match shell.navigate(origin, &href, aux) {
            Ok(report) => {
                tracing::debug!(
                    path = shell.current_route().path,
                    outcome = ?report.outcome,
                    "navigation applied"
                );
                None
            }
            Err(err) => Some(describe_navigation_failure(&err)),
        },
        UiIntent::Back => {
            shell.back();
            None
        }
        UiIntent::Forward => {
            shell.forward();
            None
        }
        UiIntent::ToggleMobileMenu => {
            shell.toggle_mobile_menu();
            None
        }
        UiIntent::MobileMenuGetStarted => {
            shell.mobile_menu_get_started();
            None
        }
        UiIntent::OpenGetStarted => {
            shell.open_get_started();
            None
        }
        UiIntent::DismissOverlay(kind) => {
            shell.dismiss_overlay(kind);
            None
        }
        UiIntent::Scrolled { offset, generation } => {
            shell.record_scroll(offset, generation);
            None
        }
        UiIntent::SetReducedMotion(reduced) => {
            shell.set_reduced_motion(reduced, settings);
            Some(if shell.reduced_motion() {
                "Reduced motion on: pages switch instantly".to_string()
            } else {
                "Reduced motion off".to_string()
            })
        }
        UiIntent::DismissNotFound => {
            shell.clear_not_found();
            None
        }
        UiIntent::Page(request) => apply_page_intent(&mut shell.page_context(), request),
    }
}

fn apply_page_intent(page: &mut PageContext<'_>, intent: PageIntent) -> Option<String> {
    match intent {
        PageIntent::Navigate { href, aux } => match page.navigate(&href, aux) {
            Ok(report) => {
                tracing::debug!(
                    outcome = ?report.outcome,
                    plan = page.aux().and_then(AuxData::plan),
                    "page navigation applied"
                );
                None
            }
            Err(err) => Some(describe_navigation_failure(&err)),
        },
        PageIntent::OpenGetStarted => {
            page.open_get_started();
            None
        }
    }
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
