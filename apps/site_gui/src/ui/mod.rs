//! UI layer for the site window: app shell, panels, pages, widgets and theme.

pub mod app;
pub mod pages;
pub mod panels;
pub mod reveal;
pub mod theme;
pub mod widgets;

pub use app::{PersistedSiteSettings, SiteApp, StartupConfig, SETTINGS_STORAGE_KEY};
