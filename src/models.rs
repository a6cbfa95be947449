use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FitTrackError;

/// Activity types the tracker knows how to evaluate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutKind {
    /// All kinds, in dispatch-table order
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Running,
        WorkoutKind::Swimming,
        WorkoutKind::SportsWalking,
    ];

    /// Three-letter code sent by the sensor block
    pub fn code(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Name shown in the summary line
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Number of numeric fields a package of this kind carries
    pub fn field_count(&self) -> usize {
        match self {
            WorkoutKind::Running => 3,
            WorkoutKind::SportsWalking => 4,
            WorkoutKind::Swimming => 5,
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WorkoutKind {
    type Err = FitTrackError;

    /// Codes are matched exactly; `run` is not `RUN`.
    fn from_str(code: &str) -> Result<Self, Self::Err> {
        WorkoutKind::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or_else(|| FitTrackError::UnknownWorkoutType {
                code: code.to_string(),
            })
    }
}

/// Readings every activity shares
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Motion {
    /// Steps or strokes
    pub action: u32,

    /// Duration in hours
    pub duration: f64,

    /// Athlete weight in kilograms
    pub weight: f64,
}

impl Motion {
    pub fn new(action: u32, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }
}

/// Running session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Running {
    pub motion: Motion,
}

/// Sports walking session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SportsWalking {
    pub motion: Motion,

    /// Athlete height in centimeters
    pub height: f64,
}

/// Pool swimming session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Swimming {
    pub motion: Motion,

    /// Pool length in meters
    pub length_pool: f64,

    /// Number of pool lengths swum
    pub count_pool: u32,
}

/// One decoded sensor package
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum WorkoutRecord {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl WorkoutRecord {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            WorkoutRecord::Running(_) => WorkoutKind::Running,
            WorkoutRecord::SportsWalking(_) => WorkoutKind::SportsWalking,
            WorkoutRecord::Swimming(_) => WorkoutKind::Swimming,
        }
    }

    pub fn motion(&self) -> &Motion {
        match self {
            WorkoutRecord::Running(w) => &w.motion,
            WorkoutRecord::SportsWalking(w) => &w.motion,
            WorkoutRecord::Swimming(w) => &w.motion,
        }
    }
}

impl From<Running> for WorkoutRecord {
    fn from(workout: Running) -> Self {
        WorkoutRecord::Running(workout)
    }
}

impl From<SportsWalking> for WorkoutRecord {
    fn from(workout: SportsWalking) -> Self {
        WorkoutRecord::SportsWalking(workout)
    }
}

impl From<Swimming> for WorkoutRecord {
    fn from(workout: Swimming) -> Self {
        WorkoutRecord::Swimming(workout)
    }
}
