//! Document actions and editor style controls

use eframe::egui;

use crate::app::TyplyApp;
use crate::core::config::{EditorStyle, FontFamily};

/// Toolbar with file actions and the collapsible style panel
pub struct Toolbar;

impl Toolbar {
    /// Show the toolbar
    pub fn show(ui: &mut egui::Ui, app: &mut TyplyApp) {
        ui.horizontal(|ui| {
            if ui.button("New").on_hover_text("New document (Ctrl+N)").clicked() {
                app.controller.on_new_document();
            }
            if ui.button("Import...").on_hover_text("Open a .txt file").clicked() {
                app.import_file();
            }
            if ui.button("Export...").on_hover_text("Save as .txt (Ctrl+S)").clicked() {
                app.export_file();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.toggle_value(&mut app.style_panel_visible, "Style");
            });
        });

        if app.style_panel_visible {
            ui.separator();
            if Self::show_style(ui, &mut app.config.editor) {
                app.config.editor.clamp();
                app.config_changed();
            }
        }
    }

    /// Style controls; returns true when any value changed
    fn show_style(ui: &mut egui::Ui, style: &mut EditorStyle) -> bool {
        let mut changed = false;

        ui.horizontal_wrapped(|ui| {
            egui::ComboBox::from_label("Font")
                .selected_text(font_label(style.font_family))
                .show_ui(ui, |ui| {
                    for family in [FontFamily::Proportional, FontFamily::Monospace] {
                        changed |= ui
                            .selectable_value(&mut style.font_family, family, font_label(family))
                            .changed();
                    }
                });

            ui.separator();
            changed |= ui
                .add(
                    egui::Slider::new(&mut style.font_size, EditorStyle::FONT_SIZE_RANGE)
                        .step_by(1.0)
                        .suffix("px")
                        .text("Size"),
                )
                .changed();

            ui.separator();
            changed |= ui
                .add(
                    egui::Slider::new(&mut style.line_height, EditorStyle::LINE_HEIGHT_RANGE)
                        .step_by(0.1)
                        .text("Line height"),
                )
                .changed();

            ui.separator();
            changed |= ui
                .add(
                    egui::Slider::new(&mut style.page_width, EditorStyle::PAGE_WIDTH_RANGE)
                        .step_by(10.0)
                        .suffix("px")
                        .text("Width"),
                )
                .changed();
        });

        changed
    }
}

fn font_label(family: FontFamily) -> &'static str {
    match family {
        FontFamily::Proportional => "Sans-serif",
        FontFamily::Monospace => "Monospace",
    }
}
