// Main application layout
// Menu bar, agent status panel, query section, results list and loading overlay

use crate::controller::{QueryController, QUICK_ACTIONS};
use crate::state::{AgentKind, ConsoleAnimations};
use crate::ui::components::*;
use eframe::egui;
use std::time::Instant;

/// Render the main application layout
pub fn render_app_layout(
    ctx: &egui::Context,
    controller: &mut QueryController,
    animations: &ConsoleAnimations,
    now: Instant,
) {
    render_menu_bar(ctx, controller);

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.add_space(8.0);

        revealed(ui, animations, 0, now, |ui| render_agent_status(ui, controller));
        ui.add_space(12.0);

        revealed(ui, animations, 1, now, |ui| {
            render_query_section(ui, controller, animations.hint_text())
        });
        ui.add_space(12.0);
        ui.separator();
        ui.add_space(8.0);

        revealed(ui, animations, 2, now, |ui| render_results(ui, controller));
    });

    if controller.is_busy() {
        loading_overlay(ctx);
    }
}

/// Apply the startup fade/slide of panel `index`
fn revealed(
    ui: &mut egui::Ui,
    animations: &ConsoleAnimations,
    index: usize,
    now: Instant,
    add_contents: impl FnOnce(&mut egui::Ui),
) {
    ui.scope(|ui| {
        ui.set_opacity(animations.panel_opacity(index, now));
        let offset = animations.panel_offset(index, now);
        if offset > 0.0 {
            ui.add_space(offset);
        }
        add_contents(ui);
    });
}

/// Render the top menu bar
fn render_menu_bar(ctx: &egui::Context, controller: &mut QueryController) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Quit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Clear Results").clicked() {
                    controller.clear_results();
                    ui.close_menu();
                }
            });

            ui.menu_button("View", |ui| {
                let mut dark_mode = ctx.style().visuals.dark_mode;
                if ui.checkbox(&mut dark_mode, "Dark Mode").changed() {
                    let visuals = if dark_mode {
                        egui::Visuals::dark()
                    } else {
                        egui::Visuals::light()
                    };
                    ctx.set_visuals(visuals);
                }
            });
        });
    });
}

/// Render the three agent badges
fn render_agent_status(ui: &mut egui::Ui, controller: &QueryController) {
    ui.heading("Agents");
    ui.add_space(6.0);
    ui.horizontal_wrapped(|ui| {
        for kind in AgentKind::ALL {
            agent_badge(ui, kind, controller.badges().is_active(kind));
            ui.add_space(8.0);
        }
    });
}

/// Render quick actions, the input box and the send button
fn render_query_section(ui: &mut egui::Ui, controller: &mut QueryController, hint: &str) {
    ui.heading("Ask a question");
    ui.add_space(6.0);

    ui.horizontal_wrapped(|ui| {
        for action in &QUICK_ACTIONS {
            if quick_action_button(ui, action).clicked() {
                controller.quick_action(action.query);
            }
        }
    });
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        let busy = controller.is_busy();
        let send_width = 90.0;
        let input = ui.add(
            egui::TextEdit::singleline(controller.input_mut())
                .hint_text(hint)
                .desired_width(ui.available_width() - send_width),
        );

        let enter_pressed = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let clicked = send_button(ui, busy).clicked();
        if enter_pressed || clicked {
            controller.submit();
            input.request_focus();
        }
    });
}

/// Render the results header and the scrollable card list
fn render_results(ui: &mut egui::Ui, controller: &mut QueryController) {
    ui.horizontal(|ui| {
        ui.heading("Results");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Clear").clicked() {
                controller.clear_results();
            }
        });
    });
    ui.add_space(6.0);

    let scroll_to_top = controller.take_scroll_request();
    egui::ScrollArea::vertical()
        .id_source("results_scroll")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            if scroll_to_top {
                ui.scroll_to_cursor(Some(egui::Align::TOP));
            }

            if controller.results().shows_welcome() {
                welcome_card(ui);
                return;
            }
            for card in controller.results().cards() {
                result_card(ui, card);
                ui.add_space(8.0);
            }
        });
}
