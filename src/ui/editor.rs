//! Plain-text editing surface

use std::sync::Arc;

use eframe::egui;

use crate::app::TyplyApp;
use crate::core::config::FontFamily;

/// Editor bound to the active document
pub struct EditorPanel;

impl EditorPanel {
    /// Show the editor panel
    pub fn show(ui: &mut egui::Ui, app: &mut TyplyApp) {
        let style = app.config.editor.clone();
        let family = match style.font_family {
            FontFamily::Proportional => egui::FontFamily::Proportional,
            FontFamily::Monospace => egui::FontFamily::Monospace,
        };
        let font_id = egui::FontId::new(style.font_size, family);
        let row_height = style.font_size * style.line_height;
        let color = ui.visuals().text_color();

        let mut layouter = |ui: &egui::Ui,
                             text: &dyn egui::TextBuffer,
                             wrap_width: f32|
         -> Arc<egui::Galley> {
            let mut job = egui::text::LayoutJob::simple(
                text.as_str().to_owned(),
                font_id.clone(),
                color,
                wrap_width,
            );
            for section in &mut job.sections {
                section.format.line_height = Some(row_height);
            }
            ui.fonts(|fonts| fonts.layout_job(job))
        };

        // The controller owns the text; edit a copy and hand it back on change
        let mut text = app.controller.editor_text().to_owned();

        egui::ScrollArea::vertical()
            .id_salt("editor_scroll")
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    let response = egui::TextEdit::multiline(&mut text)
                        .font(font_id.clone())
                        .hint_text("Start typing...")
                        .desired_width(style.page_width)
                        .desired_rows(30)
                        .layouter(&mut layouter)
                        .show(ui);

                    if response.response.changed() {
                        app.controller.on_edit(std::mem::take(&mut text));
                    }
                });
            });
    }
}
