// Library interface for fittrack modules
// The binary and the integration tests both go through these exports

pub mod config;
pub mod error;
pub mod export;
pub mod formulas;
pub mod logging;
pub mod models;
pub mod package;
pub mod summary;

// Re-export commonly used types for convenience
pub use models::*;
pub use formulas::Training;
pub use package::{default_packages, process_batch, read_package, SensorPackage};
pub use summary::{show_training_info, WorkoutSummary};
pub use export::ExportFormat;
pub use config::AppConfig;
pub use error::{FitTrackError, Result};
pub use logging::{LogConfig, LogFormat, LogLevel};
