//! Draws page blocks through the shell-independent [`RevealTracker`].

use std::time::Duration;

use eframe::egui::{self, emath::TSTransform};
use shared::domain::InstanceId;
use site_core::{reveal::stagger_delay, RevealKey, RevealStyle, RevealTracker, RevealVisual};

/// A block counts as seen once its top passes this share of the viewport's bottom edge.
const VIEW_MARGIN: f32 = 0.1;

/// Reveal state for the page instance currently being drawn.
pub struct PageReveal<'a> {
    tracker: &'a mut RevealTracker,
    instance: InstanceId,
    now: Duration,
}

impl<'a> PageReveal<'a> {
    pub fn new(tracker: &'a mut RevealTracker, instance: InstanceId, now: Duration) -> Self {
        Self {
            tracker,
            instance,
            now,
        }
    }

    pub fn in_view(ui: &egui::Ui) -> bool {
        let clip = ui.clip_rect();
        ui.cursor().top() < clip.bottom() - clip.height() * VIEW_MARGIN
    }

    /// Fades a whole section up once it scrolls into view.
    pub fn section<R>(
        &mut self,
        ui: &mut egui::Ui,
        section: &'static str,
        delay: Duration,
        add_contents: impl FnOnce(&mut egui::Ui) -> R,
    ) -> R {
        let in_view = Self::in_view(ui);
        let visual = self.tracker.observe(
            RevealKey::section(self.instance, section),
            RevealStyle::SECTION,
            delay,
            in_view,
            self.now,
        );
        draw(ui, visual, add_contents)
    }

    /// One card of a staggered grid. `grid_in_view` is sampled once at the top
    /// of the grid so all cards start together, offset by their index.
    pub fn stagger_item<R>(
        &mut self,
        ui: &mut egui::Ui,
        section: &'static str,
        index: usize,
        grid_in_view: bool,
        add_contents: impl FnOnce(&mut egui::Ui) -> R,
    ) -> R {
        let visual = self.tracker.observe(
            RevealKey::item(self.instance, section, index),
            RevealStyle::STAGGER_ITEM,
            stagger_delay(index),
            grid_in_view,
            self.now,
        );
        draw(ui, visual, add_contents)
    }
}

fn draw<R>(
    ui: &mut egui::Ui,
    visual: RevealVisual,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    if visual == RevealVisual::SHOWN {
        return ui.scope(add_contents).inner;
    }
    // Scale around the top centre of the block, then push it down.
    let pivot = egui::pos2(ui.max_rect().center().x, ui.cursor().top()).to_vec2();
    let transform = TSTransform::new(
        pivot * (1.0 - visual.scale) + egui::vec2(0.0, visual.offset_y),
        visual.scale,
    );
    ui.with_visual_transform(transform, |ui| {
        ui.multiply_opacity(visual.opacity);
        add_contents(ui)
    })
    .inner
}
