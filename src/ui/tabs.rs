//! Document tab strip

use eframe::egui;

use crate::app::TyplyApp;

/// One tab per document, each with its own delete button
pub struct TabBar;

impl TabBar {
    /// Show the tab strip
    pub fn show(ui: &mut egui::Ui, app: &mut TyplyApp) {
        // Collect clicks first; the tab list is borrowed while drawing
        let mut selected = None;
        let mut deleted = None;

        ui.horizontal_wrapped(|ui| {
            for (index, tab) in app.controller.tabs().iter().enumerate() {
                if ui.selectable_label(tab.active, tab.title.as_str()).clicked() {
                    selected = Some(index);
                }
                if ui
                    .small_button("\u{00D7}")
                    .on_hover_text("Delete document")
                    .clicked()
                {
                    deleted = Some(index);
                }
                ui.add_space(8.0);
            }
        });

        if let Some(index) = selected {
            app.controller.on_select_tab(index);
        }
        if let Some(index) = deleted {
            app.controller.on_delete_document(index);
        }
    }
}
