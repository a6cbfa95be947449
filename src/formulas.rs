//! Distance, speed and calorie formulas
//!
//! Each activity implements [`Training`]. Distance and mean speed come from a
//! shared base computed from the step (or stroke) length; calories exist only
//! on the concrete activities, there is no generic calorie formula.
//!
//! # Example
//!
//! ```rust
//! use fittrack::formulas::Training;
//! use fittrack::models::{Motion, Running};
//!
//! let run = Running { motion: Motion::new(15000, 1.0, 75.0) };
//! assert!((run.distance() - 9.75).abs() < 1e-9);
//! ```

use crate::models::{Motion, Running, SportsWalking, Swimming, WorkoutRecord};

/// Step length in meters for running and walking
pub const LEN_STEP: f64 = 0.65;

/// Stroke length in meters for swimming
pub const LEN_STROKE: f64 = 1.38;

pub const M_IN_KM: f64 = 1000.0;

pub const MIN_IN_H: f64 = 60.0;

const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 20.0;

const WALK_WEIGHT_MULTIPLIER: f64 = 0.035;
const WALK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

const SWIM_SPEED_SHIFT: f64 = 1.1;
const SWIM_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Common calculations over the shared readings
pub trait Training {
    /// Distance covered by one action, in meters
    const STEP_LENGTH: f64 = LEN_STEP;

    fn motion(&self) -> &Motion;

    /// Distance in kilometers
    fn distance(&self) -> f64 {
        f64::from(self.motion().action) * Self::STEP_LENGTH / M_IN_KM
    }

    /// Mean speed in km/h
    fn mean_speed(&self) -> f64 {
        self.distance() / self.motion().duration
    }

    /// Calories burned during the session
    fn spent_calories(&self) -> f64;
}

impl Training for Running {
    fn motion(&self) -> &Motion {
        &self.motion
    }

    fn spent_calories(&self) -> f64 {
        let Motion {
            duration, weight, ..
        } = self.motion;

        (RUN_SPEED_MULTIPLIER * self.mean_speed() - RUN_SPEED_SHIFT) * weight / M_IN_KM
            * (duration * MIN_IN_H)
    }
}

impl Training for SportsWalking {
    fn motion(&self) -> &Motion {
        &self.motion
    }

    fn spent_calories(&self) -> f64 {
        let Motion {
            duration, weight, ..
        } = self.motion;
        // speed² is floor-divided by height, not true-divided
        let speed_per_height = (self.mean_speed().powi(2) / self.height).floor();

        (WALK_WEIGHT_MULTIPLIER * weight
            + speed_per_height * WALK_SPEED_HEIGHT_MULTIPLIER * weight)
            * (duration * MIN_IN_H)
    }
}

impl Training for Swimming {
    const STEP_LENGTH: f64 = LEN_STROKE;

    fn motion(&self) -> &Motion {
        &self.motion
    }

    /// Pool-based speed; the stroke distance is not used here.
    fn mean_speed(&self) -> f64 {
        self.length_pool * f64::from(self.count_pool) / M_IN_KM / self.motion.duration
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + SWIM_SPEED_SHIFT) * SWIM_WEIGHT_MULTIPLIER * self.motion.weight
    }
}

impl WorkoutRecord {
    pub fn distance(&self) -> f64 {
        match self {
            WorkoutRecord::Running(w) => w.distance(),
            WorkoutRecord::SportsWalking(w) => w.distance(),
            WorkoutRecord::Swimming(w) => w.distance(),
        }
    }

    pub fn mean_speed(&self) -> f64 {
        match self {
            WorkoutRecord::Running(w) => w.mean_speed(),
            WorkoutRecord::SportsWalking(w) => w.mean_speed(),
            WorkoutRecord::Swimming(w) => w.mean_speed(),
        }
    }

    pub fn spent_calories(&self) -> f64 {
        match self {
            WorkoutRecord::Running(w) => w.spent_calories(),
            WorkoutRecord::SportsWalking(w) => w.spent_calories(),
            WorkoutRecord::Swimming(w) => w.spent_calories(),
        }
    }
}
