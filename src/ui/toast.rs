//! Toast notification system for user feedback.

use eframe::egui;

use crate::app::ComparometerApp;
use crate::state::TOAST_SECONDS;
use crate::ui::theme::rgb;

impl ComparometerApp {
    /// Render toast notifications in the bottom right corner
    pub fn render_toast(&mut self, ctx: &egui::Context) {
        if let Some((message, time, toast_type)) = &self.toast_message {
            if time.elapsed().as_secs() < TOAST_SECONDS {
                let margin = 20.0;

                egui::Area::new(egui::Id::new("toast"))
                    .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-margin, -margin))
                    .order(egui::Order::Foreground)
                    .show(ctx, |ui| {
                        egui::Frame::new()
                            .fill(rgb(toast_type.color()))
                            .corner_radius(8.0)
                            .inner_margin(egui::Margin::symmetric(16, 12))
                            .shadow(egui::epaint::Shadow {
                                offset: [2, 2],
                                blur: 8,
                                spread: 0,
                                color: egui::Color32::from_black_alpha(60),
                            })
                            .show(ui, |ui| {
                                ui.label(
                                    egui::RichText::new(message)
                                        .color(rgb(toast_type.text_color()))
                                        .size(14.0),
                                );
                            });
                    });

                // Keep repainting so the toast disappears on time
                ctx.request_repaint_after(std::time::Duration::from_millis(250));
            } else {
                self.toast_message = None;
            }
        }
    }
}
