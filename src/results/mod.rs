pub mod error;
pub mod loader;
pub mod types;

pub use error::LoadError;
pub use loader::{load_results, parse_results};
pub use types::{MeasurementRecord, Metric, ResultsTable, Tool};
