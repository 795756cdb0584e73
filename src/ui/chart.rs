//! Bar chart rendering for the three comparison metrics.

use std::ops::RangeInclusive;

use eframe::egui;
use egui_plot::{Bar, BarChart, GridMark, Legend, Plot, PlotPoint, Text};

use crate::comparison::BarSeries;
use crate::state::{chart_theme, CHART_BORDER, TEXT_COLOR};
use crate::ui::theme::rgb;

const CHART_HEIGHT: f32 = 320.0;
const BAR_WIDTH: f64 = 0.6;
const BAR_OUTLINE: f32 = 1.8;

/// Render one metric as a bordered bar chart panel
pub fn render_bar_chart(ui: &mut egui::Ui, series: &BarSeries) {
    let theme = chart_theme(series.metric);
    let metric = series.metric;

    egui::Frame::new()
        .fill(rgb(theme.background))
        .stroke(egui::Stroke::new(2.5, rgb(CHART_BORDER)))
        .corner_radius(12.0)
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(metric.title())
                    .size(20.0)
                    .color(rgb(theme.title)),
            );
            ui.add_space(6.0);

            // Plot area and its frame take the panel's colors
            ui.visuals_mut().extreme_bg_color = rgb(theme.background);
            ui.visuals_mut().widgets.noninteractive.bg_stroke.color = rgb(theme.axis);

            let tool_names: Vec<String> =
                series.slots.iter().map(|s| s.tool_name.clone()).collect();
            let slot_count = tool_names.len() as f64;

            // Headroom above the tallest bar for its label
            let top = series.max_total() * 1.15;

            let plot = Plot::new(("metric_chart", metric.column()))
                .height(CHART_HEIGHT)
                .legend(Legend::default())
                .allow_zoom(false)
                .allow_drag(false)
                .allow_scroll(false)
                .allow_boxed_zoom(false)
                .show_x(false)
                .include_x(-0.5)
                .include_x(slot_count - 0.5)
                .include_y(0.0)
                .include_y(top)
                .show_grid([false, true])
                .x_axis_label("tool_name")
                .y_axis_label(metric.column())
                .x_axis_formatter(
                    move |mark: GridMark, _range: &RangeInclusive<f64>| {
                        slot_label(&tool_names, mark.value)
                    },
                );

            plot.show(ui, |plot_ui| {
                for (x, slot) in series.slots.iter().enumerate() {
                    let color = rgb(slot.color);
                    let x = x as f64;

                    // Duplicate rows stack inside the tool's slot
                    let mut base = 0.0;
                    let mut bars = Vec::with_capacity(slot.values.len());
                    let mut labels = Vec::with_capacity(slot.values.len());
                    for &value in &slot.values {
                        bars.push(
                            Bar::new(x, value)
                                .base_offset(base)
                                .width(BAR_WIDTH)
                                .fill(color)
                                .stroke(egui::Stroke::new(BAR_OUTLINE, egui::Color32::BLACK))
                                .name(&slot.tool_name),
                        );
                        labels.push((base + value, metric.format_value(value)));
                        base += value;
                    }

                    plot_ui.bar_chart(BarChart::new(slot.tool_name.clone(), bars).color(color));

                    for (height, label) in labels {
                        plot_ui.text(
                            Text::new(
                                slot.tool_name.clone(),
                                PlotPoint::new(x, height),
                                egui::RichText::new(label)
                                    .strong()
                                    .color(rgb(TEXT_COLOR)),
                            )
                            .anchor(egui::Align2::CENTER_BOTTOM),
                        );
                    }
                }
            });
        });
}

/// Axis label for a grid mark: the tool name on whole slot positions
fn slot_label(tool_names: &[String], value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    tool_names
        .get(rounded as usize)
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_label() {
        let names = vec!["eco2AI".to_string(), "CodeCarbon".to_string()];

        assert_eq!(slot_label(&names, 0.0), "eco2AI");
        assert_eq!(slot_label(&names, 1.0), "CodeCarbon");
        assert_eq!(slot_label(&names, 0.5), "");
        assert_eq!(slot_label(&names, 2.0), "");
        assert_eq!(slot_label(&names, -1.0), "");
    }
}
