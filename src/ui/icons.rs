//! Custom icon drawing utilities.

use eframe::egui;

/// Draw a warning icon (triangle outline with an exclamation mark)
pub fn draw_warning_icon(ui: &mut egui::Ui, center: egui::Pos2, size: f32, color: egui::Color32) {
    let painter = ui.painter();
    let half = size / 2.0;
    let stroke = egui::Stroke::new(2.0, color);

    let top = egui::pos2(center.x, center.y - half);
    let left = egui::pos2(center.x - half, center.y + half * 0.8);
    let right = egui::pos2(center.x + half, center.y + half * 0.8);

    // Triangle outline
    painter.line_segment([top, left], stroke);
    painter.line_segment([left, right], stroke);
    painter.line_segment([right, top], stroke);

    // Exclamation mark
    painter.line_segment(
        [
            egui::pos2(center.x, center.y - half * 0.35),
            egui::pos2(center.x, center.y + half * 0.25),
        ],
        stroke,
    );
    painter.circle_filled(egui::pos2(center.x, center.y + half * 0.55), 1.5, color);
}
