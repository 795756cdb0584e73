//! Core application constants and shared presentation types.
//!
//! This module holds the default results location, the fixed color
//! mappings used by the charts, and the dark-green theme palette.

use crate::results::{Metric, Tool};

// ============================================================================
// Constants
// ============================================================================

/// Results file read when no other location is configured
pub const DEFAULT_RESULTS_FILE: &str = "comparison_results.csv";

/// Title shown in the window bar
pub const WINDOW_TITLE: &str = "GreenAI Comparometer - Comparison";

/// Maximum width of the centered content column, in points
pub const MAX_CONTENT_WIDTH: f32 = 1100.0;

/// Seconds a toast stays on screen
pub const TOAST_SECONDS: u64 = 3;

/// Palette for tools outside the fixed mapping, assigned in order of appearance
pub const FALLBACK_COLORS: &[[u8; 3]] = &[
    [99, 110, 250],  // Indigo
    [239, 85, 59],   // Red
    [0, 204, 150],   // Teal
    [171, 99, 250],  // Purple
    [255, 161, 90],  // Peach
    [25, 211, 243],  // Cyan
    [255, 102, 146], // Pink
    [182, 232, 128], // Lime
    [255, 151, 255], // Light magenta
    [254, 203, 82],  // Yellow
];

// ============================================================================
// Theme palette
// ============================================================================

pub const APP_BACKGROUND: [u8; 3] = [18, 26, 19]; // #121a13
pub const CARD_BACKGROUND: [u8; 3] = [27, 43, 30]; // #1b2b1e
pub const TEXT_COLOR: [u8; 3] = [168, 213, 163]; // #a8d5a3
pub const HEADLINE_COLOR: [u8; 3] = [107, 220, 107]; // #6bdc6b
pub const SUBTITLE_COLOR: [u8; 3] = [146, 200, 145]; // #92c891
pub const SEPARATOR_COLOR: [u8; 3] = [62, 90, 62]; // #3e5a3e
pub const TABLE_BORDER: [u8; 3] = [107, 220, 107]; // #6bdc6b
pub const CHART_BORDER: [u8; 3] = [76, 166, 76]; // #4ca64c

pub const WARNING_BACKGROUND: [u8; 3] = [77, 60, 47]; // #4d3c2f
pub const WARNING_ACCENT: [u8; 3] = [187, 143, 66]; // #bb8f42
pub const WARNING_TEXT: [u8; 3] = [243, 216, 139]; // #f3d88b

/// Colors of one chart panel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartTheme {
    pub background: [u8; 3],
    pub title: [u8; 3],
    /// Plot frame color
    pub axis: [u8; 3],
}

/// Panel colors for each chart
pub fn chart_theme(metric: Metric) -> ChartTheme {
    match metric {
        Metric::Co2Emissions => ChartTheme {
            background: [24, 38, 24], // #182618
            title: [107, 220, 107],   // #6bdc6b
            axis: [76, 166, 76],      // #4ca64c
        },
        Metric::Energy => ChartTheme {
            background: [24, 47, 62], // #182f3e
            title: [93, 183, 245],    // #5db7f5
            axis: [33, 150, 243],     // #2196f3
        },
        Metric::Duration => ChartTheme {
            background: [62, 46, 24], // #3e2e18
            title: [244, 164, 47],    // #f4a42f
            axis: [255, 152, 0],      // #ff9800
        },
    }
}

/// Fixed bar color of a known tool in a given chart
pub fn tool_color(metric: Metric, tool: Tool) -> [u8; 3] {
    match (metric, tool) {
        (Metric::Co2Emissions, Tool::Eco2Ai) => [76, 175, 80],       // #4caf50
        (Metric::Co2Emissions, Tool::CodeCarbon) => [56, 142, 60],   // #388e3c
        (Metric::Co2Emissions, Tool::CarbonTracker) => [129, 199, 132], // #81c784
        (Metric::Energy, Tool::Eco2Ai) => [33, 150, 243],            // #2196f3
        (Metric::Energy, Tool::CodeCarbon) => [21, 101, 192],        // #1565c0
        (Metric::Energy, Tool::CarbonTracker) => [100, 181, 246],    // #64b5f6
        (Metric::Duration, Tool::Eco2Ai) => [255, 152, 0],           // #ff9800
        (Metric::Duration, Tool::CodeCarbon) => [239, 108, 0],       // #ef6c00
        (Metric::Duration, Tool::CarbonTracker) => [255, 183, 77],   // #ffb74d
    }
}

/// Color for a `tool_name` value.
///
/// `unknown_index` counts the unmapped tools seen before this one in the
/// same chart and selects the fallback palette entry.
pub fn bar_color(metric: Metric, tool_name: &str, unknown_index: usize) -> [u8; 3] {
    match Tool::from_name(tool_name) {
        Some(tool) => tool_color(metric, tool),
        None => FALLBACK_COLORS[unknown_index % FALLBACK_COLORS.len()],
    }
}

// ============================================================================
// Core Types
// ============================================================================

/// Kinds of toast notification
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastType {
    Info,
    Success,
    Error,
}

impl ToastType {
    pub fn color(&self) -> [u8; 3] {
        match self {
            ToastType::Info => [27, 43, 30],
            ToastType::Success => [56, 142, 60],
            ToastType::Error => [135, 30, 28],
        }
    }

    pub fn text_color(&self) -> [u8; 3] {
        match self {
            ToastType::Info => TEXT_COLOR,
            ToastType::Success | ToastType::Error => [246, 247, 235],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_mapping() {
        assert_eq!(bar_color(Metric::Co2Emissions, "eco2AI", 0), [76, 175, 80]);
        assert_eq!(bar_color(Metric::Energy, "CodeCarbon", 0), [21, 101, 192]);
        assert_eq!(bar_color(Metric::Duration, "CarbonTracker", 0), [255, 183, 77]);
    }

    #[test]
    fn test_fallback_palette() {
        assert_eq!(bar_color(Metric::Co2Emissions, "MyTracker", 0), FALLBACK_COLORS[0]);
        assert_eq!(bar_color(Metric::Energy, "MyTracker", 1), FALLBACK_COLORS[1]);
        // Wraps around once the palette is exhausted
        assert_eq!(
            bar_color(Metric::Duration, "Other", FALLBACK_COLORS.len()),
            FALLBACK_COLORS[0]
        );
        // Mapping is case-sensitive, so near-misses fall back too
        assert_eq!(bar_color(Metric::Co2Emissions, "ECO2AI", 2), FALLBACK_COLORS[2]);
    }

    #[test]
    fn test_each_chart_uses_distinct_colors() {
        use strum::IntoEnumIterator;

        for metric in Metric::iter() {
            let colors: Vec<[u8; 3]> = Tool::iter().map(|t| tool_color(metric, t)).collect();
            assert_ne!(colors[0], colors[1]);
            assert_ne!(colors[1], colors[2]);
            assert_ne!(colors[0], colors[2]);
        }
    }
}
