use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    NotFound,
    Malformed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("no page registered for path '{0}'")]
    UnknownPath(String),
    #[error("malformed href '{href}': {reason}")]
    MalformedHref { href: String, reason: String },
}

impl NavigationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            NavigationError::UnknownPath(_) => ErrorCode::NotFound,
            NavigationError::MalformedHref { .. } => ErrorCode::Malformed,
        }
    }

    pub fn malformed(href: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedHref {
            href: href.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown plan tier '{0}'; expected 1-Month, 3-Month or 12-Month")]
pub struct UnknownPlanTier(pub String);
