use crate::error::{FitTrackError, Result};
use crate::summary::WorkoutSummary;

/// Pretty-printed JSON array of summaries
pub fn render(summaries: &[WorkoutSummary]) -> Result<String> {
    serde_json::to_string_pretty(summaries)
        .map_err(|e| FitTrackError::Serialization(e.to_string()))
}
