//! The comparison page: title block, selector, table, charts and summary.

use eframe::egui;

use crate::app::ComparometerApp;
use crate::comparison::{Comparison, ComparisonView};
use crate::state::{HEADLINE_COLOR, MAX_CONTENT_WIDTH, SEPARATOR_COLOR, SUBTITLE_COLOR};
use crate::ui::chart::render_bar_chart;
use crate::ui::table::render_results_table;
use crate::ui::theme::rgb;
use crate::ui::warning::render_warning;

impl ComparometerApp {
    /// Render the page for the last render pass inside a centered column
    pub fn render_page(&mut self, ui: &mut egui::Ui) {
        let mut chosen: Option<String> = None;
        let mut reload = false;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let width = ui.available_width().min(MAX_CONTENT_WIDTH);
                let margin = ((ui.available_width() - width) / 2.0).max(0.0);

                ui.horizontal(|ui| {
                    ui.add_space(margin);
                    ui.vertical(|ui| {
                        ui.set_width(width);
                        ui.add_space(16.0);
                        render_title_block(ui);
                        (chosen, reload) = render_view(ui, &self.view);
                    });
                });
            });

        if reload {
            self.reload();
        } else if let Some(name) = chosen {
            self.select_file(name);
        }
    }
}

/// Title and subtitle
fn render_title_block(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new("📊 GreenAI Comparometer - Emissions Comparison")
                .size(40.0)
                .strong()
                .color(rgb(HEADLINE_COLOR)),
        );
        ui.add_space(4.0);
        ui.label(
            egui::RichText::new("Compare results from eco2AI, CodeCarbon, and CarbonTracker.")
                .size(20.0)
                .italics()
                .color(rgb(SUBTITLE_COLOR)),
        );
    });
    ui.add_space(32.0);
}

/// Render everything below the title. Returns a new selection and whether
/// a reload was requested.
fn render_view(ui: &mut egui::Ui, view: &ComparisonView) -> (Option<String>, bool) {
    let mut chosen = None;
    let mut reload = false;

    // Warnings before the selector end the page; File > Reload still works
    if let ComparisonView::NoResults { .. } | ComparisonView::LoadFailed { .. } = view {
        if let Some(message) = view.warning() {
            render_warning(ui, &message);
        }
        return (chosen, reload);
    }

    ui.horizontal(|ui| {
        chosen = render_selector(ui, view.options(), view.selected());
        if ui.button("Reload").clicked() {
            reload = true;
        }
    });
    ui.add_space(16.0);

    let comparison = match view {
        ComparisonView::Ready(comparison) => comparison,
        _ => {
            if let Some(message) = view.warning() {
                render_warning(ui, &message);
            }
            return (chosen, reload);
        }
    };

    render_comparison(ui, comparison);
    (chosen, reload)
}

/// Single-choice selector over the distinct identifiers
fn render_selector(
    ui: &mut egui::Ui,
    options: &[String],
    selected: Option<&str>,
) -> Option<String> {
    let mut chosen = None;

    ui.vertical(|ui| {
        ui.label("Select file to compare:");
        egui::ComboBox::from_id_salt("uploaded_file_selector")
            .selected_text(selected.unwrap_or(""))
            .width(360.0)
            .show_ui(ui, |ui| {
                for option in options {
                    let is_selected = selected == Some(option.as_str());
                    if ui.selectable_label(is_selected, option).clicked() && !is_selected {
                        chosen = Some(option.clone());
                    }
                }
            });
    });

    chosen
}

/// Table, charts and closing message
fn render_comparison(ui: &mut egui::Ui, comparison: &Comparison) {
    ui.label(
        egui::RichText::new("📄 Results Table")
            .size(24.0)
            .strong()
            .color(rgb(HEADLINE_COLOR)),
    );
    ui.add_space(8.0);
    render_results_table(ui, &comparison.headers, &comparison.rows);

    ui.add_space(24.0);

    ui.columns(comparison.charts.len().max(1), |columns| {
        for (column, series) in columns.iter_mut().zip(&comparison.charts) {
            render_bar_chart(column, series);
        }
    });

    ui.add_space(32.0);
    let (rect, _) =
        ui.allocate_exact_size(egui::vec2(ui.available_width(), 1.0), egui::Sense::hover());
    ui.painter().hline(
        rect.x_range(),
        rect.center().y,
        egui::Stroke::new(1.0, rgb(SEPARATOR_COLOR)),
    );
    ui.add_space(32.0);

    let mut job = egui::text::LayoutJob::default();
    let body = egui::TextFormat {
        font_id: egui::FontId::proportional(15.0),
        color: ui.visuals().text_color(),
        ..Default::default()
    };
    let bold = egui::TextFormat {
        color: rgb(HEADLINE_COLOR),
        ..body.clone()
    };
    job.append("✔ Comparison complete for ", 0.0, body.clone());
    job.append(&comparison.selected, 0.0, bold);
    job.append(
        ". You can now visually analyze which tool has lower emissions, energy usage, and time.",
        0.0,
        body,
    );
    ui.label(job);
    ui.add_space(24.0);
}
