//! Blocking warning box shown when a render pass stops early.

use eframe::egui;

use crate::state::{WARNING_ACCENT, WARNING_BACKGROUND, WARNING_TEXT};
use crate::ui::icons::draw_warning_icon;
use crate::ui::theme::rgb;

/// Render a warning with a left accent bar
pub fn render_warning(ui: &mut egui::Ui, message: &str) {
    let accent = rgb(WARNING_ACCENT);

    let response = egui::Frame::new()
        .fill(rgb(WARNING_BACKGROUND))
        .corner_radius(8.0)
        .inner_margin(egui::Margin {
            left: 22,
            right: 16,
            top: 16,
            bottom: 16,
        })
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                let icon_size = 18.0;
                let (icon_rect, _) =
                    ui.allocate_exact_size(egui::vec2(icon_size, icon_size), egui::Sense::hover());
                draw_warning_icon(ui, icon_rect.center(), icon_size, accent);

                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(message)
                        .color(rgb(WARNING_TEXT))
                        .strong()
                        .size(15.0),
                );
            });
        });

    // Accent bar along the left edge
    let rect = response.response.rect;
    let bar = egui::Rect::from_min_max(
        rect.left_top(),
        egui::pos2(rect.left() + 6.0, rect.bottom()),
    );
    ui.painter().rect_filled(
        bar,
        egui::CornerRadius {
            nw: 8,
            sw: 8,
            ne: 0,
            se: 0,
        },
        accent,
    );

    ui.add_space(24.0);
}
