use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

// Import from the library
use comparometer::comparison::{self, Comparison, ComparisonView};
use comparometer::state::DEFAULT_RESULTS_FILE;

#[derive(Parser, Debug)]
#[command(name = "inspect_results")]
#[command(about = "Print the emissions comparison for one measured file")]
struct Args {
    /// Results CSV to read
    #[arg(default_value = DEFAULT_RESULTS_FILE)]
    path: PathBuf,

    /// uploaded_filename to compare (defaults to the first one in the file)
    #[arg(short, long)]
    file: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let view = match &args.file {
        Some(file) => comparison::run_exact(&args.path, file),
        None => comparison::run(&args.path, None),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_view(&mut out, &args, &view).context("Failed to write to stdout")
}

fn print_view(out: &mut impl Write, args: &Args, view: &ComparisonView) -> io::Result<()> {
    writeln!(out, "Reading file: {}", args.path.display())?;

    if !view.options().is_empty() {
        writeln!(out, "\n=== Files ===")?;
        for (i, option) in view.options().iter().enumerate() {
            let marker = if view.selected() == Some(option.as_str()) {
                "*"
            } else {
                " "
            };
            writeln!(out, " {} {:2}. {}", marker, i + 1, option)?;
        }
    }

    match view {
        ComparisonView::Ready(comparison) => print_comparison(out, comparison),
        ComparisonView::NoResults { path } => {
            writeln!(out, "\nWARNING: nothing found at {}", path.display())?;
            if let Some(message) = view.warning() {
                writeln!(out, "WARNING: {}", message)?;
            }
            Ok(())
        }
        _ => {
            if let Some(message) = view.warning() {
                writeln!(out, "\nWARNING: {}", message)?;
            }
            Ok(())
        }
    }
}

fn print_comparison(out: &mut impl Write, comparison: &Comparison) -> io::Result<()> {
    writeln!(out, "\n=== Results Table ({} rows) ===", comparison.rows.len())?;

    // Column widths from the widest cell in each column
    let widths: Vec<usize> = comparison
        .headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            comparison
                .rows
                .iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header: Vec<String> = comparison
        .headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!("{:<w$}", h, w = *w))
        .collect();
    writeln!(out, "  {}", header.join(" | "))?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    writeln!(out, "  {}", rule.join("-+-"))?;

    for row in &comparison.rows {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{:<w$}", c, w = *w))
            .collect();
        writeln!(out, "  {}", cells.join(" | "))?;
    }

    for series in &comparison.charts {
        writeln!(out, "\n=== {} ===", series.metric.title())?;
        for slot in &series.slots {
            let labels: Vec<String> = slot
                .values
                .iter()
                .map(|v| series.metric.format_value(*v))
                .collect();
            let [r, g, b] = slot.color;
            writeln!(
                out,
                "  {:<16} #{:02x}{:02x}{:02x}  {}",
                slot.tool_name,
                r,
                g,
                b,
                labels.join(" + ")
            )?;
        }
    }

    writeln!(out, "\n{}", comparison.summary())
}
