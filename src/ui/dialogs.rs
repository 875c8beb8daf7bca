//! Modal confirmation prompt and notices

use eframe::egui;

use crate::app::TyplyApp;
use crate::controller::{NoticeKind, Prompt};

/// Modals that block the workspace until answered
pub struct Dialogs;

impl Dialogs {
    pub fn show(ctx: &egui::Context, app: &mut TyplyApp) {
        Self::show_prompt(ctx, app);
        Self::show_notice(ctx, app);
    }

    fn show_prompt(ctx: &egui::Context, app: &mut TyplyApp) {
        let Some(message) = app.controller.prompt().map(Prompt::message) else {
            return;
        };

        let mut answer = None;
        let modal = egui::Modal::new(egui::Id::new("confirm_prompt")).show(ctx, |ui| {
            ui.heading("Confirm");
            ui.add_space(4.0);
            ui.label(message);
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Delete").clicked() {
                    answer = Some(true);
                }
                if ui.button("Cancel").clicked() {
                    answer = Some(false);
                }
            });
        });

        // Escape or a click outside counts as "no"
        if answer.is_none() && modal.should_close() {
            answer = Some(false);
        }
        if let Some(confirmed) = answer {
            app.controller.on_confirm(confirmed);
        }
    }

    fn show_notice(ctx: &egui::Context, app: &mut TyplyApp) {
        let Some(notice) = app.controller.notice().cloned() else {
            return;
        };

        let (title, color) = match notice.kind {
            NoticeKind::Warning => ("Notice", egui::Color32::from_rgb(229, 192, 123)),
            NoticeKind::Error => ("Error", egui::Color32::from_rgb(224, 108, 117)),
        };

        let mut dismissed = false;
        let modal = egui::Modal::new(egui::Id::new("notice")).show(ctx, |ui| {
            ui.heading(title);
            ui.add_space(4.0);
            ui.colored_label(color, notice.message.as_str());
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });

        if dismissed || modal.should_close() {
            app.controller.dismiss_notice();
        }
    }
}
