//! Dark green visual theme.

use eframe::egui;

use crate::state::{
    APP_BACKGROUND, CARD_BACKGROUND, HEADLINE_COLOR, SEPARATOR_COLOR, TEXT_COLOR,
};

/// Convert a palette entry to an egui color
pub fn rgb(color: [u8; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(color[0], color[1], color[2])
}

/// Install the theme on the context
pub fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();

    visuals.override_text_color = Some(rgb(TEXT_COLOR));
    visuals.panel_fill = rgb(APP_BACKGROUND);
    visuals.window_fill = rgb(CARD_BACKGROUND);
    visuals.extreme_bg_color = rgb(CARD_BACKGROUND);
    visuals.faint_bg_color = egui::Color32::from_rgb(32, 50, 34);
    visuals.hyperlink_color = rgb(HEADLINE_COLOR);

    visuals.selection.bg_fill = egui::Color32::from_rgb(56, 142, 60);
    visuals.selection.stroke = egui::Stroke::new(1.0, rgb(HEADLINE_COLOR));

    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, rgb(SEPARATOR_COLOR));
    visuals.widgets.inactive.weak_bg_fill = rgb(CARD_BACKGROUND);
    visuals.widgets.hovered.weak_bg_fill = egui::Color32::from_rgb(40, 64, 44);
    visuals.widgets.active.weak_bg_fill = egui::Color32::from_rgb(48, 78, 52);

    ctx.set_visuals(visuals);
}
