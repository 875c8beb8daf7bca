//! Character and word counts under the editor

use eframe::egui;

use crate::app::TyplyApp;

/// Status bar with live document statistics
pub struct StatusBar;

impl StatusBar {
    pub fn show(ui: &mut egui::Ui, app: &mut TyplyApp) {
        let stats = app.controller.stats();
        let workspace = app.controller.workspace();
        ui.horizontal(|ui| {
            ui.label(format!("Characters: {}", stats.chars));
            ui.separator();
            ui.label(format!("Words: {}", stats.words));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!(
                    "Document {} of {}",
                    workspace.active_index() + 1,
                    workspace.len()
                ));
            });
        });
    }
}
