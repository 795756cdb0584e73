//! User-configurable settings persisted between sessions.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::state::DEFAULT_RESULTS_FILE;

/// Settings saved through eframe's persistence storage
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Results file last picked through the Open dialog
    pub results_path: Option<PathBuf>,
}

impl Settings {
    /// Load settings from eframe storage, falling back to defaults
    pub fn load(storage: Option<&dyn eframe::Storage>) -> Self {
        storage
            .and_then(|s| eframe::get_value(s, eframe::APP_KEY))
            .unwrap_or_default()
    }

    pub fn save(&self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

/// Pick the results path: command line, then saved setting, then the default
pub fn resolve_results_path(cli: Option<&Path>, settings: &Settings) -> PathBuf {
    cli.map(Path::to_path_buf)
        .or_else(|| settings.results_path.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_RESULTS_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path() {
        let path = resolve_results_path(None, &Settings::default());
        assert_eq!(path, PathBuf::from("comparison_results.csv"));
    }

    #[test]
    fn test_saved_path_used_without_flag() {
        let settings = Settings {
            results_path: Some(PathBuf::from("/data/runs.csv")),
        };
        assert_eq!(
            resolve_results_path(None, &settings),
            PathBuf::from("/data/runs.csv")
        );
    }

    #[test]
    fn test_flag_wins() {
        let settings = Settings {
            results_path: Some(PathBuf::from("/data/runs.csv")),
        };
        assert_eq!(
            resolve_results_path(Some(Path::new("cli.csv")), &settings),
            PathBuf::from("cli.csv")
        );
    }
}
