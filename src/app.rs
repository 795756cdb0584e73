//! Main application state and eframe::App implementation.
//!
//! The app keeps the outcome of the last render pass and only re-runs the
//! load → filter → present pipeline when something asks for it: startup,
//! a new selection, or a reload. Frames in between repaint that outcome.

use eframe::egui;
use std::path::PathBuf;
use std::time::Instant;

use crate::comparison::{self, ComparisonView};
use crate::settings::{resolve_results_path, Settings};
use crate::state::ToastType;
use crate::ui::theme;

/// Main application state
pub struct ComparometerApp {
    /// Results file read on every render pass
    pub(crate) results_path: PathBuf,
    /// Persisted settings
    pub(crate) settings: Settings,
    /// Identifier chosen in the selector
    pub(crate) selected_file: Option<String>,
    /// Outcome of the last render pass
    pub(crate) view: ComparisonView,
    /// Toast message for user feedback
    pub(crate) toast_message: Option<(String, Instant, ToastType)>,
}

impl ComparometerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, cli_results: Option<PathBuf>) -> Self {
        theme::apply(&cc.egui_ctx);

        let settings = Settings::load(cc.storage);
        let results_path = resolve_results_path(cli_results.as_deref(), &settings);
        tracing::info!("Reading results from {}", results_path.display());

        Self::with_results_path(results_path, settings)
    }

    /// Build the app for a given results file and run the first render pass
    pub fn with_results_path(results_path: PathBuf, settings: Settings) -> Self {
        let mut app = Self {
            view: ComparisonView::NoResults {
                path: results_path.clone(),
            },
            results_path,
            settings,
            selected_file: None,
            toast_message: None,
        };
        app.rerun();
        app
    }

    /// Re-run the whole pipeline against the file on disk
    pub fn rerun(&mut self) {
        self.view = comparison::run(&self.results_path, self.selected_file.as_deref());
        self.selected_file = self.view.selected().map(str::to_string);
    }

    /// Change the selected identifier and re-run
    pub fn select_file(&mut self, name: String) {
        if self.selected_file.as_deref() == Some(name.as_str()) {
            return;
        }
        tracing::debug!("Selected {}", name);
        self.selected_file = Some(name);
        self.rerun();
    }

    /// Re-read the current results file on request
    pub fn reload(&mut self) {
        self.rerun();
        match &self.view {
            ComparisonView::NoResults { .. } => self.show_toast_error("Results file not found"),
            ComparisonView::LoadFailed { .. } => self.show_toast_error("Could not read results"),
            _ => self.show_toast("Results reloaded"),
        }
    }

    /// Switch to another results file and remember it
    pub fn open_results_file(&mut self, path: PathBuf) {
        tracing::info!("Opening results file {}", path.display());
        self.settings.results_path = Some(path.clone());
        self.results_path = path;
        self.selected_file = None;
        self.rerun();

        if matches!(self.view, ComparisonView::Ready(_)) {
            self.show_toast_success("Results file opened");
        } else {
            self.show_toast_error("No comparison data in that file");
        }
    }

    /// Ask the user for a results file
    pub fn pick_results_file(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Results", &["csv"])
            .pick_file()
        {
            self.open_results_file(path);
        }
    }

    /// Show an info toast
    pub fn show_toast(&mut self, message: &str) {
        self.toast_message = Some((message.to_string(), Instant::now(), ToastType::Info));
    }

    pub fn show_toast_success(&mut self, message: &str) {
        self.toast_message = Some((message.to_string(), Instant::now(), ToastType::Success));
    }

    pub fn show_toast_error(&mut self, message: &str) {
        self.toast_message = Some((message.to_string(), Instant::now(), ToastType::Error));
    }

    /// Handle keyboard shortcuts
    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let reload = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::R);
        if ctx.input_mut(|i| i.consume_shortcut(&reload)) {
            self.reload();
        }
    }
}

impl eframe::App for ComparometerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        // Toast notifications
        self.render_toast(ctx);

        egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
            self.render_menu_bar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_page(ui);
        });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.settings.save(storage);
    }
}
