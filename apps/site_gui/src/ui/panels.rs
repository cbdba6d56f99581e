//! Navbar, mobile menu, get-started modal and the not-found banner.

use crossbeam_channel::Sender;
use eframe::egui::{self, emath::TSTransform};
use shared::{
    content::{NavLink, DESKTOP_NAV, GET_STARTED_TAGLINE, MOBILE_NAV, SERVICES_DROPDOWN, SERVICES_NAV},
    error::NavigationError,
};
use site_core::{registry::CHECKOUT_PATH, NavOrigin, OverlayKind, OverlayVisual, SiteShell};

use super::{theme, widgets};
use crate::controller::{
    events::{describe_navigation_failure, UiIntent},
    orchestration::dispatch_intent,
};

fn navigate_intent(origin: NavOrigin, href: &str) -> UiIntent {
    UiIntent::Navigate {
        origin,
        href: href.to_string(),
        aux: None,
    }
}

fn nav_link(ui: &mut egui::Ui, link: &NavLink, active: bool) -> egui::Response {
    let color = if active { theme::ACCENT_SOFT } else { theme::TEXT_MUTED };
    ui.add(
        egui::Label::new(egui::RichText::new(link.label).size(15.0).color(color))
            .sense(egui::Sense::click()),
    )
    .on_hover_cursor(egui::CursorIcon::PointingHand)
}

pub fn navbar(
    ctx: &egui::Context,
    shell: &SiteShell,
    intent_tx: &Sender<UiIntent>,
    status: &mut String,
) {
    let condensed = shell.navbar_condensed();
    let fill = if condensed {
        theme::BACKGROUND.gamma_multiply(0.9)
    } else {
        theme::BACKGROUND
    };
    let margin_y = if condensed { 8 } else { 18 };
    let current_path = shell.current_route().path;
    let menu_open = shell.overlays().mobile_menu_open();

    egui::TopBottomPanel::top("site_navbar")
        .frame(
            egui::Frame::NONE
                .fill(fill)
                .stroke(egui::Stroke::new(
                    1.0,
                    if condensed { theme::BORDER } else { egui::Color32::TRANSPARENT },
                ))
                .inner_margin(egui::Margin::symmetric(24, margin_y)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if widgets::logo(ui, if condensed { 26.0 } else { 32.0 }).clicked() {
                    dispatch_intent(intent_tx, navigate_intent(NavOrigin::Navbar, "/"), status);
                }
                ui.add_space(12.0);
                if ui
                    .add_enabled(shell.can_go_back(), egui::Button::new("←").frame(false))
                    .on_hover_text("Back")
                    .clicked()
                {
                    dispatch_intent(intent_tx, UiIntent::Back, status);
                }
                if ui
                    .add_enabled(shell.can_go_forward(), egui::Button::new("→").frame(false))
                    .on_hover_text("Forward")
                    .clicked()
                {
                    dispatch_intent(intent_tx, UiIntent::Forward, status);
                }

                let wide = ctx.content_rect().width() >= theme::LG_BREAKPOINT;
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if wide {
                        if ui.add(widgets::pill_button("Get Started", true)).clicked() {
                            dispatch_intent(intent_tx, UiIntent::OpenGetStarted, status);
                        }
                        ui.add_space(12.0);
                        for link in DESKTOP_NAV.iter().rev() {
                            if nav_link(ui, link, link.path == current_path).clicked() {
                                dispatch_intent(
                                    intent_tx,
                                    navigate_intent(NavOrigin::Navbar, link.path),
                                    status,
                                );
                            }
                        }
                        ui.menu_button(SERVICES_NAV.label, |ui| {
                            for link in std::iter::once(&SERVICES_NAV).chain(SERVICES_DROPDOWN.iter()) {
                                let label = if link.path == SERVICES_NAV.path {
                                    "All services"
                                } else {
                                    link.label
                                };
                                if ui.button(label).clicked() {
                                    dispatch_intent(
                                        intent_tx,
                                        navigate_intent(NavOrigin::Navbar, link.path),
                                        status,
                                    );
                                    ui.close();
                                }
                            }
                        });
                    } else {
                        let burger = if menu_open { "✕" } else { "☰" };
                        if ui
                            .add(egui::Button::new(egui::RichText::new(burger).size(22.0)).frame(false))
                            .clicked()
                        {
                            dispatch_intent(intent_tx, UiIntent::ToggleMobileMenu, status);
                        }
                    }
                });
            });
        });
}

/// Full-screen menu used below the `lg` breakpoint. It unfolds from the top
/// edge as `visual.height_fraction` grows.
pub fn mobile_menu(
    ctx: &egui::Context,
    visual: OverlayVisual,
    current_path: &str,
    intent_tx: &Sender<UiIntent>,
    status: &mut String,
) {
    let screen = ctx.content_rect();
    let unfolded = egui::Rect::from_min_size(
        screen.min,
        egui::vec2(screen.width(), screen.height() * visual.height_fraction),
    );
    let origin = NavOrigin::Overlay(OverlayKind::MobileMenu);
    egui::Area::new(egui::Id::new("mobile_menu"))
        .order(egui::Order::Foreground)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            ui.shrink_clip_rect(unfolded);
            ui.multiply_opacity(visual.opacity);
            if !visual.interactive {
                ui.disable();
            }
            egui::Frame::NONE
                .fill(theme::BACKGROUND.gamma_multiply(0.97))
                .inner_margin(egui::Margin::symmetric(32, 28))
                .show(ui, |ui| {
                    ui.set_min_size(screen.size());
                    ui.horizontal(|ui| {
                        widgets::logo(ui, 30.0);
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui
                                .add(egui::Button::new(egui::RichText::new("✕").size(22.0)).frame(false))
                                .clicked()
                            {
                                dispatch_intent(
                                    intent_tx,
                                    UiIntent::DismissOverlay(OverlayKind::MobileMenu),
                                    status,
                                );
                            }
                        });
                    });
                    ui.add_space(32.0);
                    for link in MOBILE_NAV.iter() {
                        let active = link.path == current_path;
                        let response = if link.nested {
                            ui.horizontal(|ui| {
                                ui.add_space(24.0);
                                nav_link(ui, link, active)
                            })
                            .inner
                        } else {
                            let color = if active { theme::ACCENT_SOFT } else { theme::TEXT };
                            ui.add(
                                egui::Label::new(
                                    egui::RichText::new(link.label).size(30.0).strong().color(color),
                                )
                                .sense(egui::Sense::click()),
                            )
                        };
                        if response.clicked() {
                            dispatch_intent(intent_tx, navigate_intent(origin, link.path), status);
                        }
                    }
                    ui.add_space(32.0);
                    if ui.add(widgets::pill_button("Get Started", true)).clicked() {
                        dispatch_intent(intent_tx, UiIntent::MobileMenuGetStarted, status);
                    }
                });
        });
}

/// Dimmed backdrop at full presence, matching a 60% black overlay.
const BACKDROP_ALPHA: f32 = 153.0;

pub fn get_started_modal(
    ctx: &egui::Context,
    visual: OverlayVisual,
    email: &mut String,
    intent_tx: &Sender<UiIntent>,
    status: &mut String,
) {
    let backdrop = egui::Color32::from_black_alpha((BACKDROP_ALPHA * visual.backdrop_opacity) as u8);
    let response = egui::Modal::new(egui::Id::new("get_started"))
        .backdrop_color(backdrop)
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            if !visual.interactive {
                ui.disable();
            }
            let pivot = ui.max_rect().center().to_vec2();
            let transform = TSTransform::new(
                pivot * (1.0 - visual.scale) + egui::vec2(0.0, visual.offset_y),
                visual.scale,
            );
            ui.with_visual_transform(transform, |ui| {
                ui.multiply_opacity(visual.opacity);
                get_started_panel(ui, email, intent_tx, status)
            })
            .inner
        });

    // Backdrop clicks and Escape both dismiss; a panel already leaving ignores them.
    if visual.interactive && (response.inner || response.should_close()) {
        dispatch_intent(
            intent_tx,
            UiIntent::DismissOverlay(OverlayKind::GetStarted),
            status,
        );
    }
}

// Returns whether the close button was clicked.
fn get_started_panel(
    ui: &mut egui::Ui,
    email: &mut String,
    intent_tx: &Sender<UiIntent>,
    status: &mut String,
) -> bool {
    egui::Frame::new()
        .fill(theme::SURFACE)
        .stroke(egui::Stroke::new(1.0, theme::BORDER))
        .corner_radius(egui::CornerRadius::same(24))
        .inner_margin(egui::Margin::same(32))
        .show(ui, |ui| {
            ui.set_width(380.0);
            let close_clicked = ui
                .horizontal(|ui| {
                    widgets::logo(ui, 34.0);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.add(egui::Button::new("✕").frame(false)).clicked()
                    })
                    .inner
                })
                .inner;
            widgets::body(ui, GET_STARTED_TAGLINE);
            ui.add_space(8.0);
            widgets::labeled_field(ui, "Email", email, "you@company.com");
            ui.add_space(8.0);
            if ui.add(widgets::pill_button("Create Account", true)).clicked() {
                dispatch_intent(
                    intent_tx,
                    navigate_intent(NavOrigin::Overlay(OverlayKind::GetStarted), CHECKOUT_PATH),
                    status,
                );
            }
            close_clicked
        })
        .inner
}

pub fn not_found_banner(
    ui: &mut egui::Ui,
    err: &NavigationError,
    intent_tx: &Sender<UiIntent>,
    status: &mut String,
) {
    egui::Frame::new()
        .fill(theme::ACCENT.gamma_multiply(0.25))
        .stroke(egui::Stroke::new(1.0, theme::ACCENT))
        .corner_radius(egui::CornerRadius::same(12))
        .inner_margin(egui::Margin::symmetric(16, 10))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(describe_navigation_failure(err)).color(theme::TEXT));
                if ui.link("Go home").clicked() {
                    dispatch_intent(intent_tx, navigate_intent(NavOrigin::Page, "/"), status);
                }
                if ui.add(egui::Button::new("✕").frame(false)).clicked() {
                    dispatch_intent(intent_tx, UiIntent::DismissNotFound, status);
                }
            });
        });
}
