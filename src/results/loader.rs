//! Results file loading.
//!
//! The results file is a plain comma-separated table with a header row,
//! written by the external tracking pipeline. It is read in one go and the
//! file handle is released before any parsing happens.

use std::fs;
use std::path::Path;

use super::error::LoadError;
use super::types::ResultsTable;

/// Read and parse the results file at `path`
pub fn load_results(path: &Path) -> Result<ResultsTable, LoadError> {
    if !path.exists() {
        tracing::warn!("Results file not found: {}", path.display());
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path)?;
    let table = parse_results(&contents)?;

    tracing::info!(
        "Loaded {}: {} rows, {} columns",
        path.display(),
        table.rows.len(),
        table.headers.len()
    );

    Ok(table)
}

/// Parse results CSV text into a table
pub fn parse_results(contents: &str) -> Result<ResultsTable, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(contents.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() > headers.len() {
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            tracing::warn!(
                "Results line {} has {} fields, header has {}",
                line,
                record.len(),
                headers.len()
            );
            return Err(LoadError::TooManyFields {
                line,
                found: record.len(),
                expected: headers.len(),
            });
        }

        // Short rows are padded with empty cells
        let mut row: Vec<String> = record.iter().map(str::to_string).collect();
        row.resize(headers.len(), String::new());
        rows.push(row);
    }

    ResultsTable::new(headers, rows).inspect_err(|e| {
        if let LoadError::MissingColumn(name) = e {
            tracing::warn!("Results header is missing column '{}'", name);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::types::Metric;

    const SAMPLE: &str = r#"uploaded_filename,tool_name,co2_emissions_kg,power_kwh,duration_s,timestamp
input.mp4,eco2AI,0.000412,0.001030,12.503,2025-01-10 10:00:00
input.mp4,CodeCarbon,0.000398,0.000987,12.871,2025-01-10 10:01:00
input.mp4,CarbonTracker,0.000455,0.001120,13.002,2025-01-10 10:02:00
model.py,CodeCarbon,0.120000,0.300000,600.5,2025-01-11 09:00:00
"#;

    #[test]
    fn test_parse_results() {
        let table = parse_results(SAMPLE).unwrap();

        assert_eq!(table.headers.len(), 6);
        assert_eq!(table.headers[5], "timestamp");
        assert_eq!(table.rows.len(), 4);

        let first = table.records().next().unwrap();
        assert_eq!(first.uploaded_filename(), "input.mp4");
        assert_eq!(first.tool_name(), "eco2AI");
        assert_eq!(first.value(Metric::Co2Emissions), Some(0.000412));
        assert_eq!(first.value(Metric::Duration), Some(12.503));
    }

    #[test]
    fn test_cells_kept_verbatim() {
        let table = parse_results(SAMPLE).unwrap();

        // Trailing zeros and formatting survive the load untouched
        assert_eq!(table.rows[0][3], "0.001030");
        assert_eq!(table.rows[3][2], "0.120000");
        assert_eq!(table.rows[3][5], "2025-01-11 09:00:00");
    }

    #[test]
    fn test_quoted_fields() {
        let csv = r#"uploaded_filename,tool_name,co2_emissions_kg,power_kwh,duration_s,notes
"clip, part 1.mp4",eco2AI,1,2,3,"said ""hello"""
"#;
        let table = parse_results(csv).unwrap();

        assert_eq!(table.distinct_filenames(), vec!["clip, part 1.mp4"]);
        assert_eq!(table.rows[0][5], r#"said "hello""#);
    }

    #[test]
    fn test_header_only_file() {
        let csv = "uploaded_filename,tool_name,co2_emissions_kg,power_kwh,duration_s\n";
        let table = parse_results(csv).unwrap();

        assert!(table.rows.is_empty());
        assert!(table.distinct_filenames().is_empty());
    }

    #[test]
    fn test_missing_column() {
        let csv = "uploaded_filename,tool_name,co2_emissions_kg,duration_s\na,eco2AI,1,2\n";
        assert!(matches!(
            parse_results(csv),
            Err(LoadError::MissingColumn("power_kwh"))
        ));
    }

    #[test]
    fn test_empty_file() {
        assert!(matches!(
            parse_results(""),
            Err(LoadError::MissingColumn("uploaded_filename"))
        ));
    }

    #[test]
    fn test_short_row_padded() {
        let csv = r#"uploaded_filename,tool_name,co2_emissions_kg,power_kwh,duration_s,timestamp
input.mp4,eco2AI,0.000412,0.001030,12.503,2025-01-10 10:00:00
other.mp4,CodeCarbon,0.5,1.0,100.0
"#;
        let table = parse_results(csv).unwrap();

        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1].len(), 6);
        assert_eq!(table.rows[1][5], "");
        assert_eq!(table.distinct_filenames(), vec!["input.mp4", "other.mp4"]);

        // A row cut before a metric column keeps loading; the metric is just absent
        let csv = "uploaded_filename,tool_name,co2_emissions_kg,power_kwh,duration_s\na,eco2AI,1,2\n";
        let table = parse_results(csv).unwrap();
        let record = table.records().next().unwrap();
        assert_eq!(record.value(Metric::Energy), Some(2.0));
        assert_eq!(record.value(Metric::Duration), None);
    }

    #[test]
    fn test_long_row_rejected() {
        let csv = "uploaded_filename,tool_name,co2_emissions_kg,power_kwh,duration_s\na,eco2AI,1,2,3\nb,eco2AI,1,2,3,4\n";
        match parse_results(csv) {
            Err(LoadError::TooManyFields {
                line,
                found,
                expected,
            }) => {
                assert_eq!(line, 3);
                assert_eq!(found, 6);
                assert_eq!(expected, 5);
            }
            other => panic!("expected TooManyFields, got {:?}", other),
        }
    }

    #[test]
    fn test_load_results_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("comparison_results.csv");
        fs::write(&path, SAMPLE).unwrap();

        let table = load_results(&path).unwrap();
        assert_eq!(table.rows.len(), 4);
        assert_eq!(table.distinct_filenames(), vec!["input.mp4", "model.py"]);
    }

    #[test]
    fn test_missing_file() {
        let path = Path::new("definitely/not/here/comparison_results.csv");
        match load_results(path) {
            Err(LoadError::NotFound(p)) => assert_eq!(p, path),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }
}
