//! Page bodies. Each page reads static copy from `shared::content` and talks
//! back to the shell only through [`PageActions`].

use std::time::Duration;

use eframe::egui;
use shared::{
    content::{
        page_copy, CONTACT_EMAIL, CONTACT_PHONE, FAQS, HOME_FEATURE_BODY, HOME_FEATURE_HEADING,
        HOME_FEATURE_QUOTE, MONEY_BACK_NOTE, PRICING_TIERS, SERVICES, TEAM_MEMBERS,
    },
    domain::PageId,
};
use site_core::CheckoutView;

use super::{reveal::PageReveal, theme, widgets};
use crate::controller::orchestration::PageActions;

/// Text typed into the decorative forms. Nothing here is validated or sent.
#[derive(Debug, Default)]
pub struct FormDrafts {
    pub get_started_email: String,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_message: String,
    pub checkout_first_name: String,
    pub checkout_last_name: String,
    pub checkout_email: String,
    pub checkout_card: String,
    pub checkout_expiry: String,
    pub checkout_cvc: String,
}

pub fn render_page(
    ui: &mut egui::Ui,
    page: PageId,
    checkout: &CheckoutView,
    forms: &mut FormDrafts,
    actions: &mut PageActions<'_>,
    reveal: &mut PageReveal<'_>,
) {
    ui.add_space(48.0);
    match page {
        PageId::Home => home(ui, actions, reveal),
        PageId::Services => services(ui, actions, reveal),
        PageId::Agents => agents(ui, actions, reveal),
        PageId::Pricing => pricing(ui, actions, reveal),
        PageId::About => about(ui, reveal),
        PageId::Faq => faq(ui, reveal),
        PageId::Contact => contact(ui, forms, reveal),
        PageId::Checkout => checkout_page(ui, checkout, forms, reveal),
        PageId::Crm | PageId::WebsiteManagement => service_detail(ui, page, actions, reveal),
    }
    ui.add_space(64.0);
}

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn intro(ui: &mut egui::Ui, page: PageId, heading_size: f32, reveal: &mut PageReveal<'_>) {
    let copy = page_copy(page);
    reveal.section(ui, "intro", Duration::ZERO, |ui| {
        if let Some(eyebrow) = copy.eyebrow {
            widgets::eyebrow(ui, eyebrow);
        }
        widgets::heading(ui, copy.heading, heading_size);
        if !copy.body.is_empty() {
            widgets::body(ui, copy.body);
        }
    });
    ui.add_space(24.0);
}

fn home(ui: &mut egui::Ui, actions: &mut PageActions<'_>, reveal: &mut PageReveal<'_>) {
    intro(ui, PageId::Home, 52.0, reveal);
    reveal.section(ui, "cta", ms(200), |ui| {
        ui.horizontal(|ui| {
            if ui.add(widgets::pill_button("View Team", true)).clicked() {
                actions.navigate("/agents");
            }
            if ui.add(widgets::pill_button("Explore Services", false)).clicked() {
                actions.navigate("/services");
            }
        });
    });

    ui.add_space(72.0);
    reveal.section(ui, "feature", Duration::ZERO, |ui| {
        widgets::heading(ui, HOME_FEATURE_HEADING, 34.0);
        widgets::body(ui, HOME_FEATURE_BODY);
    });
    ui.add_space(16.0);
    reveal.section(ui, "feature-chat", ms(200), |ui| {
        widgets::card(ui, false, |ui| {
            ui.label(
                egui::RichText::new("Sarah is typing...")
                    .italics()
                    .color(theme::TEXT_FAINT),
            );
            ui.label(egui::RichText::new(HOME_FEATURE_QUOTE).size(18.0).color(theme::TEXT));
        });
    });
}

fn services(ui: &mut egui::Ui, actions: &mut PageActions<'_>, reveal: &mut PageReveal<'_>) {
    intro(ui, PageId::Services, 44.0, reveal);
    let grid_in_view = PageReveal::in_view(ui);
    for (index, service) in SERVICES.iter().enumerate() {
        let response = reveal.stagger_item(ui, "services", index, grid_in_view, |ui| {
            widgets::card(ui, false, |ui| {
                ui.set_width(ui.available_width());
                widgets::heading(ui, service.title, 24.0);
                widgets::body(ui, service.blurb);
                ui.label(egui::RichText::new("Learn more →").color(theme::ACCENT_SOFT));
            })
            .response
        });
        let response = response
            .interact(egui::Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand);
        if response.clicked() {
            actions.navigate(service.path);
        }
    }
}

fn service_detail(
    ui: &mut egui::Ui,
    page: PageId,
    actions: &mut PageActions<'_>,
    reveal: &mut PageReveal<'_>,
) {
    intro(ui, page, 44.0, reveal);
    reveal.section(ui, "cta", ms(200), |ui| {
        if ui.add(widgets::pill_button("See pricing", true)).clicked() {
            actions.navigate("/pricing");
        }
    });
}

fn agents(ui: &mut egui::Ui, actions: &mut PageActions<'_>, reveal: &mut PageReveal<'_>) {
    intro(ui, PageId::Agents, 44.0, reveal);
    let grid_in_view = PageReveal::in_view(ui);
    for (index, member) in TEAM_MEMBERS.iter().enumerate() {
        reveal.stagger_item(ui, "agents", index, grid_in_view, |ui| {
            widgets::card(ui, false, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    widgets::heading(ui, member.name, 26.0);
                    ui.label(egui::RichText::new(member.role).color(theme::ACCENT_SOFT));
                });
                ui.label(
                    egui::RichText::new(member.specialty)
                        .size(13.0)
                        .color(theme::TEXT_FAINT),
                );
                widgets::body(ui, member.description);
                if ui
                    .add(widgets::pill_button(&format!("Hire {}", member.name), false))
                    .clicked()
                {
                    actions.open_get_started();
                }
            });
        });
    }
}

fn pricing(ui: &mut egui::Ui, actions: &mut PageActions<'_>, reveal: &mut PageReveal<'_>) {
    intro(ui, PageId::Pricing, 44.0, reveal);
    let grid_in_view = PageReveal::in_view(ui);
    ui.horizontal_wrapped(|ui| {
        for (index, tier) in PRICING_TIERS.iter().enumerate() {
            reveal.stagger_item(ui, "pricing", index, grid_in_view, |ui| {
                widgets::card(ui, tier.most_popular, |ui| {
                    ui.set_width(260.0);
                    if tier.most_popular {
                        ui.label(
                            egui::RichText::new("Most Popular")
                                .strong()
                                .color(theme::ACCENT_SOFT),
                        );
                    }
                    widgets::heading(ui, tier.title, 22.0);
                    ui.label(
                        egui::RichText::new(tier.list_price)
                            .strikethrough()
                            .color(theme::TEXT_FAINT),
                    );
                    ui.horizontal(|ui| {
                        widgets::heading(ui, tier.monthly_price, 36.0);
                        ui.label(egui::RichText::new("/mo").color(theme::TEXT_MUTED));
                    });
                    ui.label(egui::RichText::new(tier.savings).strong().color(theme::ACCENT));
                    if ui.add(widgets::pill_button("Get Res", true)).clicked() {
                        actions.select_plan(tier.plan);
                    }
                });
            });
        }
    });
    ui.add_space(12.0);
    reveal.section(ui, "guarantee", ms(400), |ui| {
        ui.label(egui::RichText::new(MONEY_BACK_NOTE).color(theme::TEXT_FAINT));
    });
}

fn about(ui: &mut egui::Ui, reveal: &mut PageReveal<'_>) {
    intro(ui, PageId::About, 44.0, reveal);
}

fn faq(ui: &mut egui::Ui, reveal: &mut PageReveal<'_>) {
    intro(ui, PageId::Faq, 44.0, reveal);
    let grid_in_view = PageReveal::in_view(ui);
    for (index, entry) in FAQS.iter().enumerate() {
        reveal.stagger_item(ui, "faq", index, grid_in_view, |ui| {
            widgets::card(ui, false, |ui| {
                ui.set_width(ui.available_width());
                ui.label(egui::RichText::new(entry.question).size(19.0).strong());
                widgets::body(ui, entry.answer);
            });
        });
    }
}

fn contact(ui: &mut egui::Ui, forms: &mut FormDrafts, reveal: &mut PageReveal<'_>) {
    intro(ui, PageId::Contact, 44.0, reveal);
    reveal.section(ui, "details", ms(200), |ui| {
        ui.label(egui::RichText::new(CONTACT_EMAIL).color(theme::TEXT));
        ui.label(egui::RichText::new(CONTACT_PHONE).color(theme::TEXT));
    });
    ui.add_space(16.0);
    reveal.section(ui, "form", ms(300), |ui| {
        widgets::card(ui, false, |ui| {
            ui.set_width(ui.available_width());
            widgets::labeled_field(ui, "Name", &mut forms.contact_name, "Jane Doe");
            widgets::labeled_field(ui, "Email", &mut forms.contact_email, "jane@company.com");
            ui.label(egui::RichText::new("Message").size(13.0).color(theme::TEXT_FAINT));
            ui.add(
                egui::TextEdit::multiline(&mut forms.contact_message)
                    .hint_text("Tell us about your workflow")
                    .desired_rows(4)
                    .desired_width(f32::INFINITY),
            );
            if ui.add(widgets::pill_button("Send Message", true)).clicked() {
                tracing::debug!("contact form is decorative; nothing sent");
            }
        });
    });
}

fn checkout_page(
    ui: &mut egui::Ui,
    checkout: &CheckoutView,
    forms: &mut FormDrafts,
    reveal: &mut PageReveal<'_>,
) {
    let copy = page_copy(PageId::Checkout);
    reveal.section(ui, "intro", Duration::ZERO, |ui| {
        widgets::heading(ui, copy.heading, 40.0);
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("You are purchasing the").color(theme::TEXT_MUTED));
            ui.label(
                egui::RichText::new(format!("{} plan.", checkout.plan_label))
                    .strong()
                    .color(theme::ACCENT_SOFT),
            );
        });
    });
    ui.add_space(16.0);
    reveal.section(ui, "form", ms(200), |ui| {
        widgets::card(ui, checkout.has_selection(), |ui| {
            ui.set_width(ui.available_width());
            ui.columns(2, |columns| {
                widgets::labeled_field(&mut columns[0], "First name", &mut forms.checkout_first_name, "");
                widgets::labeled_field(&mut columns[1], "Last name", &mut forms.checkout_last_name, "");
            });
            widgets::labeled_field(ui, "Email", &mut forms.checkout_email, "you@company.com");
            widgets::labeled_field(ui, "Card number", &mut forms.checkout_card, "0000 0000 0000 0000");
            ui.columns(2, |columns| {
                widgets::labeled_field(&mut columns[0], "Expiry", &mut forms.checkout_expiry, "MM/YY");
                widgets::labeled_field(&mut columns[1], "CVC", &mut forms.checkout_cvc, "123");
            });
            ui.add_space(8.0);
            if ui.add(widgets::pill_button("Pay & Start Hiring", true)).clicked() {
                tracing::debug!(plan = %checkout.plan_label, "checkout form is decorative; nothing charged");
            }
            ui.label(egui::RichText::new(copy.body).size(12.0).color(theme::TEXT_FAINT));
        });
    });
}
