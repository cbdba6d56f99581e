//! Queues UI intents for the shell; the app drains the queue once per frame.

use crossbeam_channel::{Sender, TrySendError};
use shared::domain::PlanTier;

use super::events::{PageIntent, UiIntent};

pub fn dispatch_intent(intent_tx: &Sender<UiIntent>, intent: UiIntent, status: &mut String) {
    let intent_name = intent.name();
    match intent_tx.try_send(intent) {
        Ok(()) => tracing::debug!(intent = intent_name, "queued ui intent"),
        Err(TrySendError::Full(_)) => {
            *status = "UI intent queue is full; please retry".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "Site shell stopped accepting input; restart the window".to_string();
        }
    }
}

/// Handle given to page content. Pages can navigate and ask for the
/// get-started modal, nothing else.
pub struct PageActions<'a> {
    intent_tx: &'a Sender<UiIntent>,
    status: &'a mut String,
}

impl<'a> PageActions<'a> {
    pub fn new(intent_tx: &'a Sender<UiIntent>, status: &'a mut String) -> Self {
        Self { intent_tx, status }
    }

    pub fn request(&mut self, intent: PageIntent) {
        dispatch_intent(self.intent_tx, intent.into(), self.status);
    }

    pub fn navigate(&mut self, href: &str) {
        self.request(PageIntent::Navigate {
            href: href.to_string(),
            aux: None,
        });
    }

    pub fn select_plan(&mut self, plan: PlanTier) {
        self.request(PageIntent::select_plan(plan));
    }

    pub fn open_get_started(&mut self) {
        self.request(PageIntent::OpenGetStarted);
    }
}

#[cfg(test)]
#[path = "tests/orchestration_tests.rs"]
mod tests;
