//! Comparometer - compare emissions measurements from carbon-tracking tools
//!
//! This library loads the results table written by the eco2AI, CodeCarbon
//! and CarbonTracker measurement pipeline and provides a graphical
//! comparison of one measured input at a time.
//!
//! ## Module Structure
//!
//! - [`results`] - Results file loading and the measurements table
//! - [`comparison`] - Load, filter and chart preparation for one render pass
//! - [`state`] - Constants, color mappings and theme palette
//! - [`settings`] - Results path resolution and persisted settings
//! - [`app`] - Main application state and eframe::App implementation
//! - [`ui`] - User interface components
//!   - `page` - Title block, selector and page flow
//!   - `table` - Results table
//!   - `chart` - Bar charts
//!   - `warning` - Warning box
//!   - `menu` - Menu bar
//!   - `toast` - Toast notification system
//!   - `icons` - Custom icon drawing utilities
//!   - `theme` - Visual theme

pub mod app;
pub mod comparison;
pub mod results;
pub mod settings;
pub mod state;
pub mod ui;
