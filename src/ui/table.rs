//! Read-only results table.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::state::TABLE_BORDER;
use crate::ui::theme::rgb;

const HEADER_HEIGHT: f32 = 26.0;
const ROW_HEIGHT: f32 = 22.0;

/// Render the filtered rows with every column, cells shown verbatim
pub fn render_results_table(ui: &mut egui::Ui, headers: &[String], rows: &[Vec<String>]) {
    egui::Frame::new()
        .stroke(egui::Stroke::new(1.5, rgb(TABLE_BORDER)))
        .corner_radius(12.0)
        .inner_margin(egui::Margin::same(8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            egui::ScrollArea::horizontal()
                .id_salt("results_table_scroll")
                .show(ui, |ui| {
                    TableBuilder::new(ui)
                        .id_salt("results_table")
                        .striped(true)
                        .resizable(true)
                        .vscroll(false)
                        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                        .columns(Column::auto().at_least(90.0), headers.len())
                        .header(HEADER_HEIGHT, |mut header| {
                            for name in headers {
                                header.col(|ui| {
                                    ui.strong(name);
                                });
                            }
                        })
                        .body(|mut body| {
                            for row in rows {
                                body.row(ROW_HEIGHT, |mut table_row| {
                                    for cell in row {
                                        table_row.col(|ui| {
                                            ui.label(cell);
                                        });
                                    }
                                });
                            }
                        });
                });
        });
}
