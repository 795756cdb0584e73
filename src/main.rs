// Prevents additional console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use comparometer::app::ComparometerApp;
use comparometer::state::WINDOW_TITLE;

#[derive(Parser, Debug)]
#[command(name = "comparometer")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compare emissions measurements from eco2AI, CodeCarbon and CarbonTracker")]
struct Cli {
    /// Results CSV to read (defaults to the last opened file, then comparison_results.csv)
    #[arg(long, env = "COMPAROMETER_RESULTS")]
    results: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([1280.0, 900.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(ComparometerApp::new(cc, cli.results)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to start the UI: {e}"))
}
