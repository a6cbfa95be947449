use serde::Serialize;

use crate::error::{FitTrackError, Result};
use crate::summary::WorkoutSummary;

#[derive(Serialize)]
struct CsvRow<'a> {
    training_type: &'a str,
    duration: String,
    distance: String,
    speed: String,
    calories: String,
}

impl<'a> From<&'a WorkoutSummary> for CsvRow<'a> {
    fn from(summary: &'a WorkoutSummary) -> Self {
        CsvRow {
            training_type: &summary.training_type,
            duration: format!("{:.3}", summary.duration),
            distance: format!("{:.3}", summary.distance),
            speed: format!("{:.3}", summary.speed),
            calories: format!("{:.3}", summary.calories),
        }
    }
}

/// CSV with a header row and values rounded to three decimals
pub fn render(summaries: &[WorkoutSummary]) -> Result<String> {
    let mut writer = ::csv::Writer::from_writer(Vec::new());

    if summaries.is_empty() {
        writer
            .write_record(["training_type", "duration", "distance", "speed", "calories"])
            .map_err(|e| FitTrackError::Serialization(e.to_string()))?;
    }
    for summary in summaries {
        writer
            .serialize(CsvRow::from(summary))
            .map_err(|e| FitTrackError::Serialization(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| FitTrackError::Serialization(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| FitTrackError::Serialization(e.to_string()))
}
