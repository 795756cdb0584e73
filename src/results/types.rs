use std::str::FromStr;

use strum::{AsRefStr, EnumIter, IntoEnumIterator};

use super::error::LoadError;

/// Column holding the identifier of the measured input file
pub const UPLOADED_FILENAME: &str = "uploaded_filename";
/// Column holding the tracking tool that produced the row
pub const TOOL_NAME: &str = "tool_name";
pub const CO2_EMISSIONS_KG: &str = "co2_emissions_kg";
pub const POWER_KWH: &str = "power_kwh";
pub const DURATION_S: &str = "duration_s";

/// External carbon-tracking tools whose output the results file aggregates
#[derive(AsRefStr, Clone, Copy, Debug, EnumIter, PartialEq, Eq)]
pub enum Tool {
    #[strum(serialize = "eco2AI")]
    Eco2Ai,
    CodeCarbon,
    CarbonTracker,
}

impl Tool {
    /// Look up a tool by its exact `tool_name` value
    pub fn from_name(name: &str) -> Option<Tool> {
        Tool::iter().find(|tool| tool.as_ref() == name)
    }
}

/// The three quantities charted for every comparison
#[derive(Clone, Copy, Debug, EnumIter, PartialEq, Eq)]
pub enum Metric {
    Co2Emissions,
    Energy,
    Duration,
}

impl Metric {
    /// Column the metric is read from
    pub fn column(&self) -> &'static str {
        match self {
            Metric::Co2Emissions => CO2_EMISSIONS_KG,
            Metric::Energy => POWER_KWH,
            Metric::Duration => DURATION_S,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Metric::Co2Emissions => "CO₂ Emissions (kg)",
            Metric::Energy => "Energy Consumption (kWh)",
            Metric::Duration => "Execution Time (s)",
        }
    }

    /// Number of decimals used for bar labels
    pub fn decimals(&self) -> usize {
        match self {
            Metric::Co2Emissions | Metric::Energy => 6,
            Metric::Duration => 2,
        }
    }

    /// Format a value the way bar labels display it
    pub fn format_value(&self, value: f64) -> String {
        format!("{:.*}", self.decimals(), value)
    }
}

/// Positions of the required columns within the header row
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ColumnIndex {
    uploaded_filename: usize,
    tool_name: usize,
    co2_emissions_kg: usize,
    power_kwh: usize,
    duration_s: usize,
}

impl ColumnIndex {
    fn resolve(headers: &[String]) -> Result<Self, LoadError> {
        let find = |name: &'static str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or(LoadError::MissingColumn(name))
        };

        Ok(Self {
            uploaded_filename: find(UPLOADED_FILENAME)?,
            tool_name: find(TOOL_NAME)?,
            co2_emissions_kg: find(CO2_EMISSIONS_KG)?,
            power_kwh: find(POWER_KWH)?,
            duration_s: find(DURATION_S)?,
        })
    }

    fn metric(&self, metric: Metric) -> usize {
        match metric {
            Metric::Co2Emissions => self.co2_emissions_kg,
            Metric::Energy => self.power_kwh,
            Metric::Duration => self.duration_s,
        }
    }
}

/// The measurements table exactly as read from disk.
///
/// Cells are kept as the original strings so the table view shows them
/// unmodified; numbers are parsed on demand for charting.
#[derive(Clone, Debug)]
pub struct ResultsTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    columns: ColumnIndex,
}

impl ResultsTable {
    /// Build a table, checking that every required column is present
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, LoadError> {
        let columns = ColumnIndex::resolve(&headers)?;
        Ok(Self {
            headers,
            rows,
            columns,
        })
    }

    /// Iterate over every record in file order
    pub fn records(&self) -> impl Iterator<Item = MeasurementRecord<'_>> {
        self.rows.iter().map(move |cells| MeasurementRecord {
            cells,
            columns: &self.columns,
        })
    }

    /// Distinct `uploaded_filename` values in first-seen order
    pub fn distinct_filenames(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for record in self.records() {
            let name = record.uploaded_filename();
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
        names
    }

    /// Records whose `uploaded_filename` equals `selected` exactly
    pub fn records_for<'a>(
        &'a self,
        selected: &'a str,
    ) -> impl Iterator<Item = MeasurementRecord<'a>> + 'a {
        self.records()
            .filter(move |record| record.uploaded_filename() == selected)
    }
}

/// A borrowed view of one row of the table
#[derive(Clone, Copy, Debug)]
pub struct MeasurementRecord<'a> {
    cells: &'a [String],
    columns: &'a ColumnIndex,
}

impl<'a> MeasurementRecord<'a> {
    fn cell(&self, index: usize) -> &'a str {
        self.cells.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn uploaded_filename(&self) -> &'a str {
        self.cell(self.columns.uploaded_filename)
    }

    pub fn tool_name(&self) -> &'a str {
        self.cell(self.columns.tool_name)
    }

    /// All cells of the row, including pass-through columns
    pub fn cells(&self) -> &'a [String] {
        self.cells
    }

    /// Raw text of a metric cell
    pub fn raw_value(&self, metric: Metric) -> &'a str {
        self.cell(self.columns.metric(metric))
    }

    /// Numeric value of a metric, `None` when the cell is not a number
    pub fn value(&self, metric: Metric) -> Option<f64> {
        f64::from_str(self.raw_value(metric).trim()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers() -> Vec<String> {
        [
            "uploaded_filename",
            "tool_name",
            "co2_emissions_kg",
            "power_kwh",
            "duration_s",
            "timestamp",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_tool_names() {
        assert_eq!(Tool::Eco2Ai.as_ref(), "eco2AI");
        assert_eq!(Tool::CodeCarbon.as_ref(), "CodeCarbon");
        assert_eq!(Tool::CarbonTracker.as_ref(), "CarbonTracker");

        assert_eq!(Tool::from_name("eco2AI"), Some(Tool::Eco2Ai));
        assert_eq!(Tool::from_name("CarbonTracker"), Some(Tool::CarbonTracker));
        // Lookup is case-sensitive
        assert_eq!(Tool::from_name("codecarbon"), None);
        assert_eq!(Tool::from_name("Eco2AI"), None);
    }

    #[test]
    fn test_metric_formatting() {
        assert_eq!(Metric::Co2Emissions.format_value(0.000123), "0.000123");
        assert_eq!(Metric::Energy.format_value(1.5), "1.500000");
        assert_eq!(Metric::Duration.format_value(12.345), "12.35");
        assert_eq!(Metric::Duration.format_value(3.0), "3.00");
    }

    #[test]
    fn test_missing_column_rejected() {
        let headers: Vec<String> = headers()
            .into_iter()
            .filter(|h| h != "power_kwh")
            .collect();
        match ResultsTable::new(headers, Vec::new()) {
            Err(LoadError::MissingColumn(name)) => assert_eq!(name, "power_kwh"),
            other => panic!("expected missing column error, got {:?}", other),
        }
    }

    #[test]
    fn test_columns_resolved_in_any_order() {
        let headers = row(&[
            "duration_s",
            "power_kwh",
            "tool_name",
            "co2_emissions_kg",
            "uploaded_filename",
        ]);
        let table =
            ResultsTable::new(headers, vec![row(&["2.5", "0.01", "CodeCarbon", "0.002", "a.csv"])])
                .unwrap();
        let record = table.records().next().unwrap();

        assert_eq!(record.uploaded_filename(), "a.csv");
        assert_eq!(record.tool_name(), "CodeCarbon");
        assert_eq!(record.value(Metric::Co2Emissions), Some(0.002));
        assert_eq!(record.value(Metric::Energy), Some(0.01));
        assert_eq!(record.value(Metric::Duration), Some(2.5));
    }

    #[test]
    fn test_distinct_filenames_first_seen_order() {
        let table = ResultsTable::new(
            headers(),
            vec![
                row(&["b.mp4", "eco2AI", "1", "1", "1", "t0"]),
                row(&["a.mp4", "eco2AI", "1", "1", "1", "t1"]),
                row(&["b.mp4", "CodeCarbon", "1", "1", "1", "t2"]),
                row(&["c.mp4", "eco2AI", "1", "1", "1", "t3"]),
                row(&["a.mp4", "CarbonTracker", "1", "1", "1", "t4"]),
            ],
        )
        .unwrap();

        assert_eq!(table.distinct_filenames(), vec!["b.mp4", "a.mp4", "c.mp4"]);
    }

    #[test]
    fn test_records_for_exact_match() {
        let table = ResultsTable::new(
            headers(),
            vec![
                row(&["input.mp4", "eco2AI", "1", "1", "1", "t0"]),
                row(&["Input.mp4", "eco2AI", "1", "1", "1", "t1"]),
                row(&["input.mp4 ", "eco2AI", "1", "1", "1", "t2"]),
                row(&["input.mp4", "CodeCarbon", "1", "1", "1", "t3"]),
            ],
        )
        .unwrap();

        let matched: Vec<&str> = table
            .records_for("input.mp4")
            .map(|r| r.cells()[5].as_str())
            .collect();
        assert_eq!(matched, vec!["t0", "t3"]);
    }

    #[test]
    fn test_unparseable_value_is_none() {
        let table = ResultsTable::new(
            headers(),
            vec![row(&["x", "eco2AI", "n/a", "", " 4.5 ", "t0"])],
        )
        .unwrap();
        let record = table.records().next().unwrap();

        assert_eq!(record.value(Metric::Co2Emissions), None);
        assert_eq!(record.raw_value(Metric::Co2Emissions), "n/a");
        assert_eq!(record.value(Metric::Energy), None);
        assert_eq!(record.value(Metric::Duration), Some(4.5));
    }
}
