use std::fmt;
use std::str::FromStr;

use crate::error::TrackerError;

/// Workout kinds reported by the sensors, keyed by their short package code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutType {
    Swimming,      // SWM
    Running,       // RUN
    SportsWalking, // WLK
}

impl WorkoutType {
    pub const ALL: [WorkoutType; 3] = [
        WorkoutType::Swimming,
        WorkoutType::Running,
        WorkoutType::SportsWalking,
    ];

    /// Package code as sent by the sensor block
    pub fn code(self) -> &'static str {
        match self {
            WorkoutType::Swimming => "SWM",
            WorkoutType::Running => "RUN",
            WorkoutType::SportsWalking => "WLK",
        }
    }

    /// Number of positional values a package of this type carries
    pub fn arity(self) -> usize {
        self.fields().len()
    }

    /// Field names in package order
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            WorkoutType::Swimming => &["action", "duration", "weight", "length_pool", "count_pool"],
            WorkoutType::Running => &["action", "duration", "weight"],
            WorkoutType::SportsWalking => &["action", "duration", "weight", "height"],
        }
    }
}

impl FromStr for WorkoutType {
    type Err = TrackerError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "SWM" => Ok(WorkoutType::Swimming),
            "RUN" => Ok(WorkoutType::Running),
            "WLK" => Ok(WorkoutType::SportsWalking),
            other => Err(TrackerError::UnknownWorkoutType(other.to_string())),
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
