// EDMC Log Collector - gui.rs
//
// Top-level eframe::App implementation: one button, one status label.
//
// The collection run is synchronous and executes on the UI thread when the
// button is clicked; the window does not repaint until the run returns.
// That matches the tool's design: a run takes well under a second, and no
// cancellation is supported once started.

use crate::app::controller::CollectionController;
use crate::ui;
use crate::ui::status::StatusLabel;
use crate::util::constants;

/// The collector application window.
pub struct CollectorApp {
    controller: CollectionController,
    status: StatusLabel,
    dark_mode: bool,

    /// Theme last pushed into the egui context, so visuals are only rebuilt
    /// when the toggle actually changes.
    applied_dark_mode: Option<bool>,
}

impl CollectorApp {
    /// Create the application with its wired-up controller and the status
    /// label the controller reports through.
    pub fn new(controller: CollectionController, status: StatusLabel, dark_mode: bool) -> Self {
        Self {
            controller,
            status,
            dark_mode,
            applied_dark_mode: None,
        }
    }
}

impl eframe::App for CollectorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.applied_dark_mode != Some(self.dark_mode) {
            ctx.set_visuals(if self.dark_mode {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            });
            self.applied_dark_mode = Some(self.dark_mode);
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(constants::APP_NAME);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.selectable_label(self.dark_mode, "Dark").clicked() {
                        self.dark_mode = true;
                    }
                    if ui.selectable_label(!self.dark_mode, "Light").clicked() {
                        self.dark_mode = false;
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(ui::theme::PANEL_PADDING);
            ui.vertical_centered(|ui| {
                let button = egui::Button::new("Collect logs to ZIP")
                    .min_size(egui::vec2(180.0, 28.0));
                if ui.add(button).clicked() {
                    // Blocks until the run completes; the controller ignores
                    // re-entrant triggers on its own.
                    self.controller.run();
                }

                ui.add_space(ui::theme::BUTTON_PADDING);

                let status = self.status.current();
                ui.label(
                    egui::RichText::new(status.label())
                        .color(ui::theme::status_colour(&status, self.dark_mode)),
                );
            });
        });

        // The label reverts on a timer with no input event attached, so poll
        // for repaint instead of waiting for interaction.
        ctx.request_repaint_after(std::time::Duration::from_millis(500));
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        tracing::info!("See You, Space Cowboy.");
    }
}
