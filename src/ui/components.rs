// Reusable UI components
// Agent badges, result cards, the welcome card and query controls

use crate::controller::QuickAction;
use crate::state::{AgentKind, ResultCard, WELCOME_MESSAGE};
use eframe::egui;

const ACCENT: egui::Color32 = egui::Color32::from_rgb(102, 126, 234);
const ACTIVE_GREEN: egui::Color32 = egui::Color32::from_rgb(0, 200, 0);
const ERROR_RED: egui::Color32 = egui::Color32::from_rgb(220, 0, 0);

fn card_frame(ui: &egui::Ui, stroke: egui::Color32) -> egui::Frame {
    egui::Frame::none()
        .fill(ui.visuals().faint_bg_color)
        .rounding(egui::Rounding::same(6.0))
        .inner_margin(egui::Margin::same(12.0))
        .stroke(egui::Stroke::new(1.0, stroke))
}

/// Render an agent status badge; active badges get the accent outline
pub fn agent_badge(ui: &mut egui::Ui, kind: AgentKind, active: bool) {
    let stroke = if active {
        ACCENT
    } else {
        ui.visuals().widgets.noninteractive.bg_stroke.color
    };
    let mut frame = card_frame(ui, stroke);
    if active {
        frame = frame.fill(ui.visuals().selection.bg_fill);
    }

    frame.show(ui, |ui| {
        ui.set_min_width(180.0);
        ui.horizontal(|ui| {
            let dot = if active { ACTIVE_GREEN } else { egui::Color32::GRAY };
            ui.colored_label(dot, "●");
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(kind.title()).strong());
                ui.label(egui::RichText::new(kind.description()).weak().size(12.0));
            });
        });
    });
}

/// Render one result or error card
pub fn result_card(ui: &mut egui::Ui, card: &ResultCard) {
    let stroke = if card.is_error() {
        ERROR_RED
    } else {
        ui.visuals().widgets.noninteractive.bg_stroke.color
    };

    card_frame(ui, stroke).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            let heading = if card.is_error() {
                egui::RichText::new(&card.heading).strong().color(ERROR_RED)
            } else {
                egui::RichText::new(format!("\"{}\"", card.heading)).strong()
            };
            ui.label(heading);
            if let Some(agent) = &card.agent_label {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(agent).color(ACCENT).size(12.0));
                });
            }
        });
        ui.add_space(6.0);
        ui.label(&card.body);
        ui.add_space(6.0);
        ui.label(
            egui::RichText::new(card.timestamp_label())
                .weak()
                .small(),
        );
    });
}

/// Render the placeholder shown while there are no results
pub fn welcome_card(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.label(egui::RichText::new("💡").size(28.0));
        ui.add_space(8.0);
        ui.label(egui::RichText::new(WELCOME_MESSAGE).italics().weak().size(14.0));
        ui.add_space(40.0);
    });
}

/// Render a quick-action preset button
pub fn quick_action_button(ui: &mut egui::Ui, action: &QuickAction) -> egui::Response {
    ui.button(action.label).on_hover_text(action.query)
}

/// Render the send button; disabled while a query is in flight
pub fn send_button(ui: &mut egui::Ui, busy: bool) -> egui::Response {
    let text = if busy { "Sending..." } else { "Send" };
    ui.add_enabled(!busy, egui::Button::new(egui::RichText::new(text).strong()))
}

/// Render the busy indicator on top of everything else
pub fn loading_overlay(ctx: &egui::Context) {
    egui::Area::new(egui::Id::new("loading_overlay"))
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Processing your query...");
                });
            });
        });
}
