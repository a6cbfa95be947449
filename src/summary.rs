use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::WorkoutRecord;

/// Computed statistics for one workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSummary {
    /// Activity label, e.g. `Running`
    pub training_type: String,

    /// Duration in hours
    pub duration: f64,

    /// Distance in kilometers
    pub distance: f64,

    /// Mean speed in km/h
    pub speed: f64,

    /// Calories burned
    pub calories: f64,
}

impl WorkoutSummary {
    /// Render the one-line report shown to the athlete
    pub fn get_message(&self) -> String {
        format!(
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

impl fmt::Display for WorkoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_message())
    }
}

/// Compute the summary for a decoded record
pub fn show_training_info(record: &WorkoutRecord) -> WorkoutSummary {
    let summary = WorkoutSummary {
        training_type: record.kind().label().to_string(),
        duration: record.motion().duration,
        distance: record.distance(),
        speed: record.mean_speed(),
        calories: record.spent_calories(),
    };

    tracing::debug!(
        kind = record.kind().code(),
        distance = summary.distance,
        speed = summary.speed,
        calories = summary.calories,
        "Workout summary computed"
    );

    summary
}
