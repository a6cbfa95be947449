//! Sensor package decoding
//!
//! A package is a workout code plus a positional list of numbers. The code
//! selects the activity; the list must have exactly the activity's arity.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{FitTrackError, Result};
use crate::models::{Motion, Running, SportsWalking, Swimming, WorkoutKind, WorkoutRecord};
use crate::summary::{show_training_info, WorkoutSummary};

/// Raw package as delivered by the sensor block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl SensorPackage {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }

    /// Decode into a workout record
    pub fn read(&self) -> Result<WorkoutRecord> {
        read_package(&self.workout_type, &self.data)
    }
}

/// Built-in batch used when nothing else is configured
pub fn default_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Decode a package into the matching workout record
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<WorkoutRecord> {
    let kind: WorkoutKind = workout_type.parse()?;

    if data.len() != kind.field_count() {
        return Err(FitTrackError::FieldCount {
            kind,
            expected: kind.field_count(),
            actual: data.len(),
        });
    }

    let motion = Motion::new(
        whole_number("action", data[0])?,
        positive("duration", data[1])?,
        positive("weight", data[2])?,
    );

    let record: WorkoutRecord = match kind {
        WorkoutKind::Running => Running { motion }.into(),
        WorkoutKind::SportsWalking => SportsWalking {
            motion,
            height: positive("height", data[3])?,
        }
        .into(),
        WorkoutKind::Swimming => Swimming {
            motion,
            length_pool: data[3],
            count_pool: whole_number("count_pool", data[4])?,
        }
        .into(),
    };

    debug!(kind = kind.code(), ?record, "Package decoded");
    Ok(record)
}

/// Decode every package and compute its summary, in order.
///
/// A rejected package yields its own error; the remaining packages are still
/// processed.
pub fn process_batch(packages: &[SensorPackage]) -> Vec<Result<WorkoutSummary>> {
    let results: Vec<_> = packages
        .iter()
        .map(|package| {
            package.read().map(|record| show_training_info(&record)).map_err(|e| {
                e.log_rejection(&package.workout_type);
                e
            })
        })
        .collect();

    let failed = results.iter().filter(|r| r.is_err()).count();
    info!(
        total = packages.len(),
        failed,
        "Batch processed"
    );

    results
}

fn whole_number(field: &str, value: f64) -> Result<u32> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(FitTrackError::InvalidField {
            field: field.to_string(),
            reason: format!("expected a non-negative whole number, got {}", value),
        });
    }
    Ok(value as u32)
}

fn positive(field: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(FitTrackError::InvalidField {
            field: field.to_string(),
            reason: format!("must be greater than zero, got {}", value),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_each_kind() {
        let run = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        assert!(matches!(run, WorkoutRecord::Running(_)));

        let walk = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        match walk {
            WorkoutRecord::SportsWalking(w) => assert_eq!(w.height, 180.0),
            other => panic!("unexpected record {:?}", other),
        }

        let swim = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        match swim {
            WorkoutRecord::Swimming(s) => {
                assert_eq!(s.motion.action, 720);
                assert_eq!(s.length_pool, 25.0);
                assert_eq!(s.count_pool, 40);
            }
            other => panic!("unexpected record {:?}", other),
        }
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        let err = read_package("XYZ", &[1.0, 1.0, 1.0]).unwrap_err();
        assert!(matches!(err, FitTrackError::UnknownWorkoutType { ref code } if code == "XYZ"));
    }

    #[test]
    fn test_field_count_mismatch() {
        let err = read_package("SWM", &[720.0, 1.0, 80.0]).unwrap_err();
        assert!(matches!(
            err,
            FitTrackError::FieldCount {
                kind: WorkoutKind::Swimming,
                expected: 5,
                actual: 3
            }
        ));

        assert!(read_package("RUN", &[15000.0, 1.0, 75.0, 180.0]).is_err());
    }

    #[test]
    fn test_field_validation() {
        let err = read_package("RUN", &[15000.0, 0.0, 75.0]).unwrap_err();
        assert!(matches!(err, FitTrackError::InvalidField { ref field, .. } if field == "duration"));

        let err = read_package("RUN", &[150.5, 1.0, 75.0]).unwrap_err();
        assert!(matches!(err, FitTrackError::InvalidField { ref field, .. } if field == "action"));

        let err = read_package("WLK", &[9000.0, 1.0, 75.0, 0.0]).unwrap_err();
        assert!(matches!(err, FitTrackError::InvalidField { ref field, .. } if field == "height"));

        let err = read_package("WLK", &[9000.0, 1.0, -75.0, 180.0]).unwrap_err();
        assert!(matches!(err, FitTrackError::InvalidField { ref field, .. } if field == "weight"));

        let err = read_package("RUN", &[15000.0, 1.0, 0.0]).unwrap_err();
        assert!(matches!(err, FitTrackError::InvalidField { ref field, .. } if field == "weight"));

        let err = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, -1.0]).unwrap_err();
        assert!(matches!(err, FitTrackError::InvalidField { ref field, .. } if field == "count_pool"));
    }

    #[test]
    fn test_batch_keeps_going_after_failure() {
        let packages = vec![
            SensorPackage::new("XYZ", vec![1.0]),
            SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        ];

        let results = process_batch(&packages);
        assert_eq!(results.len(), 2);
        assert!(results[0].is_err());
        assert_eq!(results[1].as_ref().unwrap().training_type, "Running");
    }

    #[test]
    fn test_default_packages() {
        let kinds: Vec<_> = default_packages()
            .iter()
            .map(|p| p.read().unwrap().kind())
            .collect();
        assert_eq!(
            kinds,
            vec![
                WorkoutKind::Swimming,
                WorkoutKind::Running,
                WorkoutKind::SportsWalking
            ]
        );
    }
}
