use std::time::Duration;

use crossbeam_channel::{bounded, Receiver, Sender};
use eframe::egui;
use serde::{Deserialize, Serialize};
use site_core::{
    registry::CHECKOUT_PATH, CheckoutView, OverlayKind, RevealTracker, ScrollOffset, Settings,
    SiteShell,
};

use super::{
    pages::{self, FormDrafts},
    panels,
    reveal::PageReveal,
    theme,
};
use crate::controller::{
    events::UiIntent,
    orchestration::{dispatch_intent, PageActions},
    reducer::apply_intent,
};

pub const SETTINGS_STORAGE_KEY: &str = "site_gui.settings";
const INTENT_QUEUE_CAPACITY: usize = 256;
const ANIMATION_FRAME: Duration = Duration::from_millis(16);
const IDLE_REPAINT: Duration = Duration::from_millis(250);

pub struct StartupConfig {
    pub settings: Settings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedSiteSettings {
    pub reduced_motion: bool,
}

impl PersistedSiteSettings {
    /// A stored preference can only turn reduced motion on; config and CLI
    /// flags asking for it are never overridden.
    pub fn merge_into(&self, mut settings: Settings) -> Settings {
        settings.reduced_motion |= self.reduced_motion;
        settings
    }
}

pub struct SiteApp {
    intent_tx: Sender<UiIntent>,
    intent_rx: Receiver<UiIntent>,
    shell: SiteShell,
    settings: Settings,
    status: String,
    forms: FormDrafts,
    reveals: RevealTracker,
    last_checkout: CheckoutView,
    clock_origin: Option<f64>,
    applied_scroll_generation: u64,
    titled_path: Option<&'static str>,
    style_applied: bool,
}

impl SiteApp {
    pub fn new(startup: StartupConfig, persisted: Option<PersistedSiteSettings>) -> Self {
        let settings = match persisted {
            Some(persisted) => persisted.merge_into(startup.settings),
            None => startup.settings,
        };
        let (intent_tx, intent_rx) = bounded(INTENT_QUEUE_CAPACITY);
        let shell = SiteShell::new(&settings);
        let last_checkout = shell.checkout_view();
        let applied_scroll_generation = shell.scroll_reset_generation();
        Self {
            intent_tx,
            intent_rx,
            shell,
            settings,
            status: String::new(),
            forms: FormDrafts::default(),
            reveals: RevealTracker::new(),
            last_checkout,
            clock_origin: None,
            applied_scroll_generation,
            titled_path: None,
            style_applied: false,
        }
    }

    /// Maps egui's input clock onto the shell timeline, starting at zero on the
    /// first frame.
    fn elapsed(&mut self, ctx: &egui::Context) -> Duration {
        let time = ctx.input(|i| i.time);
        let origin = *self.clock_origin.get_or_insert(time);
        Duration::from_secs_f64((time - origin).max(0.0))
    }

    fn process_ui_intents(&mut self) {
        while let Ok(intent) = self.intent_rx.try_recv() {
            if let Some(message) = apply_intent(&mut self.shell, &self.settings, intent) {
                self.status = message;
            }
        }
    }

    fn sync_window_title(&mut self, ctx: &egui::Context) {
        let route = self.shell.current_route();
        if self.titled_path == Some(route.path) {
            return;
        }
        self.titled_path = Some(route.path);
        ctx.send_viewport_cmd(egui::ViewportCommand::Title(format!(
            "{} | res",
            route.page.title
        )));
    }

    fn show_footer(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("site_footer")
            .frame(
                egui::Frame::NONE
                    .fill(theme::BACKGROUND)
                    .inner_margin(egui::Margin::symmetric(24, 10)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("© res. AI employees for every team.")
                            .size(12.0)
                            .color(theme::TEXT_FAINT),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let mut reduced = self.shell.reduced_motion();
                        if ui.checkbox(&mut reduced, "Reduce motion").changed() {
                            dispatch_intent(
                                &self.intent_tx,
                                UiIntent::SetReducedMotion(reduced),
                                &mut self.status,
                            );
                        }
                    });
                });
            });
    }

    fn show_pages(&mut self, ctx: &egui::Context) {
        let Self {
            intent_tx,
            shell,
            status,
            forms,
            reveals,
            last_checkout,
            applied_scroll_generation,
            ..
        } = self;
        let live_checkout = shell.checkout_view();
        let now = shell.now();
        reveals.set_instant(shell.reduced_motion());
        reveals.retain_instances(shell.instances());

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(theme::BACKGROUND))
            .show(ctx, |ui| {
                if let Some(err) = shell.not_found() {
                    ui.add_space(8.0);
                    panels::not_found_banner(ui, err, intent_tx, status);
                }
                if !status.is_empty() {
                    ui.horizontal(|ui| {
                        ui.add_space(24.0);
                        ui.label(egui::RichText::new(status.as_str()).color(theme::TEXT_MUTED));
                        if ui.add(egui::Button::new("✕").frame(false)).clicked() {
                            status.clear();
                        }
                    });
                }

                let generation = shell.scroll_reset_generation();
                let mut area = egui::ScrollArea::vertical()
                    .id_salt("page_scroll")
                    .auto_shrink([false, false]);
                if generation != *applied_scroll_generation {
                    area = area.vertical_scroll_offset(0.0);
                    *applied_scroll_generation = generation;
                }

                let output = area.show(ui, |ui| {
                    let available = ui.available_rect_before_wrap();
                    let width = (available.width() - 48.0).clamp(240.0, theme::CONTENT_MAX_WIDTH);
                    let base = egui::Rect::from_min_size(
                        egui::pos2(available.center().x - width / 2.0, available.top()),
                        egui::vec2(width, available.height()),
                    );

                    // Entering and exiting instances share the same slot and overlap.
                    let mut content_bottom = base.top();
                    for instance in shell.instances() {
                        let visual = shell.visual(instance);
                        let mut child = ui.new_child(
                            egui::UiBuilder::new()
                                .id_salt(("page_instance", instance.id()))
                                .max_rect(base.translate(egui::vec2(0.0, visual.offset_y)))
                                .layout(egui::Layout::top_down(egui::Align::Min)),
                        );
                        child.set_opacity(visual.opacity);
                        if !visual.interactive {
                            child.disable();
                        }
                        let checkout = if instance.phase().is_live() {
                            &live_checkout
                        } else {
                            &*last_checkout
                        };
                        let mut actions = PageActions::new(intent_tx, status);
                        let mut reveal = PageReveal::new(reveals, instance.id(), now);
                        pages::render_page(
                            &mut child,
                            instance.route().page.id,
                            checkout,
                            forms,
                            &mut actions,
                            &mut reveal,
                        );
                        content_bottom = content_bottom.max(child.min_rect().bottom());
                    }
                    ui.allocate_space(egui::vec2(
                        available.width(),
                        (content_bottom - base.top()).max(0.0),
                    ));
                });

                // Tagged with the generation this frame rendered, so a reading
                // queued behind a navigation is dropped once the reset lands.
                let offset = output.state.offset;
                if (offset.y - shell.scroll_offset().y).abs() > 0.5 {
                    dispatch_intent(
                        intent_tx,
                        UiIntent::Scrolled {
                            offset: ScrollOffset {
                                x: offset.x,
                                y: offset.y,
                            },
                            generation,
                        },
                        status,
                    );
                }
            });

        if shell.current_route().path == CHECKOUT_PATH {
            *last_checkout = live_checkout;
        }
    }

    /// Overlays stay drawn while they animate out.
    fn show_overlays(&mut self, ctx: &egui::Context) {
        let narrow = ctx.content_rect().width() < theme::LG_BREAKPOINT;
        if let Some(visual) = self.shell.overlay_visual(OverlayKind::MobileMenu) {
            if narrow {
                panels::mobile_menu(
                    ctx,
                    visual,
                    self.shell.current_route().path,
                    &self.intent_tx,
                    &mut self.status,
                );
            }
        }
        if let Some(visual) = self.shell.overlay_visual(OverlayKind::GetStarted) {
            panels::get_started_modal(
                ctx,
                visual,
                &mut self.forms.get_started_email,
                &self.intent_tx,
                &mut self.status,
            );
        }
    }
}

impl eframe::App for SiteApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_intents();
        let now = self.elapsed(ctx);
        self.shell.advance_to(now);

        if !self.style_applied {
            theme::apply_site_style(ctx);
            self.style_applied = true;
        }
        self.sync_window_title(ctx);

        panels::navbar(ctx, &self.shell, &self.intent_tx, &mut self.status);
        self.show_footer(ctx);
        self.show_pages(ctx);
        self.show_overlays(ctx);

        if !self.intent_rx.is_empty() {
            ctx.request_repaint();
        } else if self.shell.is_animating()
            || self.shell.overlays_animating()
            || self.reveals.is_animating(self.shell.now())
        {
            ctx.request_repaint_after(ANIMATION_FRAME);
        } else {
            ctx.request_repaint_after(IDLE_REPAINT);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = PersistedSiteSettings {
            reduced_motion: self.shell.reduced_motion(),
        };
        if let Ok(serialized) = serde_json::to_string(&settings) {
            storage.set_string(SETTINGS_STORAGE_KEY, serialized);
        }
    }
}
