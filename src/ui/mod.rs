//! UI rendering modules for the Comparometer application.
//!
//! This module organizes the various UI components into logical submodules:
//! - `page` - Title block, selector and page flow
//! - `table` - Read-only results table
//! - `chart` - Per-metric bar charts
//! - `warning` - Blocking warning box
//! - `menu` - Menu bar (File)
//! - `toast` - Toast notification system
//! - `icons` - Custom icon drawing utilities
//! - `theme` - Dark green visuals

pub mod chart;
pub mod icons;
pub mod menu;
pub mod page;
pub mod table;
pub mod theme;
pub mod toast;
pub mod warning;
