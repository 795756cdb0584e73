//! The load → filter → present pipeline behind the comparison page.
//!
//! A render pass reads the results file, picks the selected identifier,
//! filters the table and prepares everything the page draws. The outcome is
//! a [`ComparisonView`]: either one of the warning states, which end the
//! page early, or a ready comparison.

use std::path::{Path, PathBuf};

use strum::IntoEnumIterator;

use crate::results::{load_results, LoadError, MeasurementRecord, Metric, ResultsTable, Tool};
use crate::state::bar_color;

/// Outcome of one render pass
#[derive(Clone, Debug)]
pub enum ComparisonView {
    /// No results file exists at the configured path
    NoResults { path: PathBuf },
    /// The file exists but could not be turned into a table
    LoadFailed { message: String },
    /// Nothing in the table matches the selection
    NoDataForSelection {
        options: Vec<String>,
        selected: Option<String>,
    },
    /// Everything needed to draw the table and charts
    Ready(Comparison),
}

impl ComparisonView {
    /// Selector options, empty when the page stops before the selector
    pub fn options(&self) -> &[String] {
        match self {
            ComparisonView::NoDataForSelection { options, .. } => options,
            ComparisonView::Ready(comparison) => &comparison.options,
            _ => &[],
        }
    }

    pub fn selected(&self) -> Option<&str> {
        match self {
            ComparisonView::NoDataForSelection { selected, .. } => selected.as_deref(),
            ComparisonView::Ready(comparison) => Some(comparison.selected.as_str()),
            _ => None,
        }
    }

    /// Warning text for the states that end the page early
    pub fn warning(&self) -> Option<String> {
        match self {
            ComparisonView::NoResults { .. } => {
                Some("No results found. Please run at least one tracker first.".to_string())
            }
            ComparisonView::LoadFailed { message } => Some(message.clone()),
            ComparisonView::NoDataForSelection { .. } => {
                Some("No data available for the selected file.".to_string())
            }
            ComparisonView::Ready(_) => None,
        }
    }
}

/// A comparison ready to draw
#[derive(Clone, Debug)]
pub struct Comparison {
    /// Distinct `uploaded_filename` values in first-seen order
    pub options: Vec<String>,
    pub selected: String,
    pub headers: Vec<String>,
    /// Matching rows in file order, cells unmodified
    pub rows: Vec<Vec<String>>,
    /// One series per metric: CO₂, energy, duration
    pub charts: Vec<BarSeries>,
}

impl Comparison {
    /// Closing line naming the compared file
    pub fn summary(&self) -> String {
        format!(
            "Comparison complete for {}. You can now visually analyze which tool has lower emissions, energy usage, and time.",
            self.selected
        )
    }
}

/// Bars of one chart
#[derive(Clone, Debug, PartialEq)]
pub struct BarSeries {
    pub metric: Metric,
    /// One slot per distinct `tool_name`, in first-seen order
    pub slots: Vec<ToolSlot>,
}

/// The bar position of one tool
#[derive(Clone, Debug, PartialEq)]
pub struct ToolSlot {
    pub tool_name: String,
    pub color: [u8; 3],
    /// One value per matching row; duplicates stack on top of each other
    pub values: Vec<f64>,
}

impl ToolSlot {
    /// Height of the stacked bar
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}

impl BarSeries {
    /// Build the bars of `metric` from the filtered records
    pub fn build(metric: Metric, records: &[MeasurementRecord<'_>]) -> Self {
        let mut slots: Vec<ToolSlot> = Vec::new();
        let mut unknown_tools = 0;

        for record in records {
            let tool_name = record.tool_name();

            let slot_index = match slots.iter().position(|s| s.tool_name == tool_name) {
                Some(index) => index,
                None => {
                    let color = bar_color(metric, tool_name, unknown_tools);
                    if Tool::from_name(tool_name).is_none() {
                        unknown_tools += 1;
                    }
                    slots.push(ToolSlot {
                        tool_name: tool_name.to_string(),
                        color,
                        values: Vec::new(),
                    });
                    slots.len() - 1
                }
            };

            match record.value(metric) {
                Some(value) => slots[slot_index].values.push(value),
                None => tracing::warn!(
                    "Skipping non-numeric {} value '{}' for {}",
                    metric.column(),
                    record.raw_value(metric),
                    tool_name
                ),
            }
        }

        Self { metric, slots }
    }

    /// Largest stacked bar height, used to leave room for labels
    pub fn max_total(&self) -> f64 {
        self.slots
            .iter()
            .map(ToolSlot::total)
            .fold(0.0, f64::max)
    }
}

/// Keep the previous selection if it still exists, otherwise use the first option
pub fn resolve_selection(options: &[String], previous: Option<&str>) -> Option<String> {
    previous
        .filter(|prev| options.iter().any(|o| o == *prev))
        .map(str::to_string)
        .or_else(|| options.first().cloned())
}

/// Run a render pass, resolving the selection against the fresh options
pub fn run(path: &Path, previous: Option<&str>) -> ComparisonView {
    let table = match load(path) {
        Ok(table) => table,
        Err(view) => return view,
    };

    let options = table.distinct_filenames();
    let selected = resolve_selection(&options, previous);
    compare(&table, selected.as_deref())
}

/// Run a render pass for an exact selection, even one missing from the file
pub fn run_exact(path: &Path, selected: &str) -> ComparisonView {
    match load(path) {
        Ok(table) => compare(&table, Some(selected)),
        Err(view) => view,
    }
}

fn load(path: &Path) -> Result<ResultsTable, ComparisonView> {
    load_results(path).map_err(|e| match e {
        LoadError::NotFound(path) => ComparisonView::NoResults { path },
        other => ComparisonView::LoadFailed {
            message: other.to_string(),
        },
    })
}

/// Filter the table by `selected` and prepare the table and charts
pub fn compare(table: &ResultsTable, selected: Option<&str>) -> ComparisonView {
    let options = table.distinct_filenames();

    let Some(selected) = selected else {
        return ComparisonView::NoDataForSelection {
            options,
            selected: None,
        };
    };

    let records: Vec<MeasurementRecord<'_>> = table.records_for(selected).collect();
    if records.is_empty() {
        return ComparisonView::NoDataForSelection {
            options,
            selected: Some(selected.to_string()),
        };
    }

    tracing::debug!("Comparing {} rows for {}", records.len(), selected);

    let rows = records.iter().map(|r| r.cells().to_vec()).collect();
    let charts = Metric::iter()
        .map(|metric| BarSeries::build(metric, &records))
        .collect();

    ComparisonView::Ready(Comparison {
        options,
        selected: selected.to_string(),
        headers: table.headers.clone(),
        rows,
        charts,
    })
}
