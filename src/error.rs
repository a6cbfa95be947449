//! Unified error hierarchy for fittrack
//!
//! Every fallible library operation returns [`Result`]; the binary wraps it in
//! `anyhow` at the top level.

use crate::models::WorkoutKind;
use thiserror::Error;

/// Top-level error type for all fittrack operations
#[derive(Debug, Error)]
pub enum FitTrackError {
    /// The package carries a workout code outside the fixed mapping
    #[error("Unknown workout type: {code}")]
    UnknownWorkoutType { code: String },

    /// The package field list does not match the variant's arity
    #[error("Wrong number of fields for {kind}: expected {expected}, got {actual}")]
    FieldCount {
        kind: WorkoutKind,
        expected: usize,
        actual: usize,
    },

    /// A field value the formulas cannot work with
    #[error("Invalid field {field}: {reason}")]
    InvalidField { field: String, reason: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Export serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for fittrack operations
pub type Result<T> = std::result::Result<T, FitTrackError>;

impl FitTrackError {
    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FitTrackError::UnknownWorkoutType { .. } => ErrorSeverity::Warning,
            FitTrackError::FieldCount { .. } => ErrorSeverity::Warning,
            FitTrackError::InvalidField { .. } => ErrorSeverity::Warning,
            FitTrackError::Configuration(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::Error,
        }
    }

    /// Log a rejected package at the level its severity maps to
    pub fn log_rejection(&self, workout_type: &str) {
        let level = self.severity().to_tracing_level();
        if level == tracing::Level::ERROR {
            tracing::error!(workout_type, error = %self, "Package rejected");
        } else if level == tracing::Level::WARN {
            tracing::warn!(workout_type, error = %self, "Package rejected");
        } else {
            tracing::info!(workout_type, error = %self, "Package rejected");
        }
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            FitTrackError::UnknownWorkoutType { code } => {
                format!("Тренировки {} не существует", code)
            }
            FitTrackError::FieldCount {
                kind,
                expected,
                actual,
            } => format!(
                "Workout {} needs {} sensor values, but the package has {}",
                kind.code(),
                expected,
                actual
            ),
            _ => self.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Critical error that stops the whole run
    Critical,
    /// Error that prevents operation but system can continue
    Error,
    /// A rejected package; the rest of the batch continues
    Warning,
}

impl ErrorSeverity {
    /// Convert to tracing level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            ErrorSeverity::Critical => tracing::Level::ERROR,
            ErrorSeverity::Error => tracing::Level::ERROR,
            ErrorSeverity::Warning => tracing::Level::WARN,
        }
    }
}
