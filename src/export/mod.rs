use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{FitTrackError, Result};
use crate::summary::WorkoutSummary;

pub mod csv;
pub mod json;
pub mod table;
pub mod text;

/// Output format for a batch of summaries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Text,
    Json,
    Csv,
    Table,
}

impl FromStr for ExportFormat {
    type Err = FitTrackError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ExportFormat::Text),
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "table" => Ok(ExportFormat::Table),
            _ => Err(FitTrackError::Configuration(format!(
                "Unsupported export format: {}",
                s
            ))),
        }
    }
}

/// Render summaries in the requested format
pub fn render(summaries: &[WorkoutSummary], format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Text => Ok(text::render(summaries)),
        ExportFormat::Json => json::render(summaries),
        ExportFormat::Csv => csv::render(summaries),
        ExportFormat::Table => Ok(table::render(summaries)),
    }
}

/// Render summaries and write them to `output_path`
pub fn write_to<P: AsRef<Path>>(
    output_path: P,
    summaries: &[WorkoutSummary],
    format: ExportFormat,
) -> Result<()> {
    let content = render(summaries, format)?;

    if let Some(parent) = output_path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(&output_path, content)?;

    tracing::info!(
        path = %output_path.as_ref().display(),
        ?format,
        count = summaries.len(),
        "Summaries exported"
    );
    Ok(())
}

#[cfg(test)]
pub(crate) fn sample_summaries() -> Vec<WorkoutSummary> {
    vec![
        WorkoutSummary {
            training_type: "Swimming".to_string(),
            duration: 1.0,
            distance: 0.9936,
            speed: 1.0,
            calories: 336.0,
        },
        WorkoutSummary {
            training_type: "Running".to_string(),
            duration: 1.0,
            distance: 9.75,
            speed: 9.75,
            calories: 699.75,
        },
    ]
}
