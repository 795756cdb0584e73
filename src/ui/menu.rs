//! Menu bar UI components.

use eframe::egui;

use crate::app::ComparometerApp;

impl ComparometerApp {
    /// Render the application menu bar
    pub fn render_menu_bar(&mut self, ui: &mut egui::Ui) {
        egui::MenuBar::new().ui(ui, |ui| {
            // Increase font size for menu items
            ui.style_mut()
                .text_styles
                .insert(egui::TextStyle::Button, egui::FontId::proportional(15.0));

            ui.menu_button("File", |ui| {
                ui.set_min_width(200.0);

                ui.style_mut()
                    .text_styles
                    .insert(egui::TextStyle::Button, egui::FontId::proportional(14.0));

                if ui.button("📂  Open Results File...").clicked() {
                    ui.close();
                    self.pick_results_file();
                }

                let reload_shortcut =
                    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::R);
                if ui
                    .add(
                        egui::Button::new("Reload")
                            .shortcut_text(ui.ctx().format_shortcut(&reload_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    self.reload();
                }

                ui.separator();

                if ui.button("Quit").clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(self.results_path.display().to_string())
                        .small()
                        .color(egui::Color32::GRAY),
                );
            });
        });
    }
}
