//! Black and red palette shared by every panel.

use eframe::egui;

pub const BACKGROUND: egui::Color32 = egui::Color32::BLACK;
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(220, 38, 38);
pub const ACCENT_SOFT: egui::Color32 = egui::Color32::from_rgb(239, 68, 68);
pub const SURFACE: egui::Color32 = egui::Color32::from_rgb(24, 24, 27);
pub const SURFACE_RAISED: egui::Color32 = egui::Color32::from_rgb(39, 39, 42);
pub const TEXT: egui::Color32 = egui::Color32::from_rgb(244, 244, 245);
pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_rgb(161, 161, 170);
pub const TEXT_FAINT: egui::Color32 = egui::Color32::from_rgb(113, 113, 122);
pub const BORDER: egui::Color32 = egui::Color32::from_rgb(63, 63, 70);

/// Width below which the navbar collapses into the burger menu.
pub const LG_BREAKPOINT: f32 = 1024.0;
pub const CONTENT_MAX_WIDTH: f32 = 1040.0;

pub fn site_visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BACKGROUND;
    visuals.window_fill = SURFACE;
    visuals.extreme_bg_color = SURFACE;
    visuals.window_stroke = egui::Stroke::new(1.0, BORDER);
    visuals.hyperlink_color = ACCENT_SOFT;
    visuals.override_text_color = Some(TEXT);
    visuals.window_corner_radius = egui::CornerRadius::same(24);
    visuals.menu_corner_radius = egui::CornerRadius::same(12);
    visuals.selection.bg_fill = ACCENT;
    visuals.selection.stroke = egui::Stroke::new(1.0, TEXT);

    visuals.widgets.noninteractive.bg_fill = SURFACE;
    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, BORDER);
    visuals.widgets.inactive.bg_fill = SURFACE_RAISED;
    visuals.widgets.inactive.weak_bg_fill = SURFACE_RAISED;
    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, BORDER);
    visuals.widgets.hovered.bg_fill = ACCENT.gamma_multiply(0.85);
    visuals.widgets.hovered.weak_bg_fill = ACCENT.gamma_multiply(0.85);
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, ACCENT_SOFT);
    visuals.widgets.active.bg_fill = ACCENT;
    visuals.widgets.active.weak_bg_fill = ACCENT;
    visuals
}

pub fn apply_site_style(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals = site_visuals();
    style.spacing.item_spacing = egui::vec2(10.0, 10.0);
    style.spacing.button_padding = egui::vec2(16.0, 8.0);
    style.spacing.interact_size.y = 34.0;
    ctx.set_style(style);
}
