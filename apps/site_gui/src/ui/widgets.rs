use eframe::egui;
use shared::content::BRAND;

use super::theme;

/// Brand wordmark; the outer letters are drawn in the accent color.
pub fn logo(ui: &mut egui::Ui, size: f32) -> egui::Response {
    let mut job = egui::text::LayoutJob::default();
    for (index, letter) in BRAND.char_indices() {
        let color = if index == 0 || index + letter.len_utf8() == BRAND.len() {
            theme::ACCENT
        } else {
            theme::TEXT
        };
        job.append(
            &letter.to_string(),
            0.0,
            egui::TextFormat {
                font_id: egui::FontId::proportional(size),
                color,
                italics: true,
                ..Default::default()
            },
        );
    }
    ui.add(egui::Label::new(job).sense(egui::Sense::click()))
        .on_hover_cursor(egui::CursorIcon::PointingHand)
}

pub fn pill_button(label: &str, filled: bool) -> egui::Button<'static> {
    let text = egui::RichText::new(label.to_string()).strong().color(theme::TEXT);
    let button = egui::Button::new(text).corner_radius(egui::CornerRadius::same(20));
    if filled {
        button.fill(theme::ACCENT)
    } else {
        button
            .fill(egui::Color32::TRANSPARENT)
            .stroke(egui::Stroke::new(1.0, theme::BORDER))
    }
}

pub fn card<R>(
    ui: &mut egui::Ui,
    highlighted: bool,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> egui::InnerResponse<R> {
    let stroke = if highlighted {
        egui::Stroke::new(2.0, theme::ACCENT)
    } else {
        egui::Stroke::new(1.0, theme::BORDER)
    };
    egui::Frame::new()
        .fill(theme::SURFACE)
        .stroke(stroke)
        .corner_radius(egui::CornerRadius::same(20))
        .inner_margin(egui::Margin::symmetric(24, 20))
        .show(ui, add_contents)
}

pub fn eyebrow(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text.to_uppercase())
            .size(13.0)
            .strong()
            .color(theme::ACCENT_SOFT),
    );
}

pub fn heading(ui: &mut egui::Ui, text: &str, size: f32) {
    ui.label(egui::RichText::new(text).size(size).strong().color(theme::TEXT));
}

pub fn body(ui: &mut egui::Ui, text: &str) {
    ui.label(egui::RichText::new(text).size(17.0).color(theme::TEXT_MUTED));
}

pub fn labeled_field(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str) {
    ui.label(egui::RichText::new(label).size(13.0).color(theme::TEXT_FAINT));
    ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(f32::INFINITY),
    );
}
