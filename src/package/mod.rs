// Sensor packages: a workout code plus positional readings

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};
use crate::models::{Running, SportsWalking, Swimming, Workout, WorkoutType};

/// One raw package received from the sensor block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub code: String,
    pub values: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            values,
        }
    }

    pub fn read(&self) -> Result<Workout> {
        read_package(&self.code, &self.values)
    }
}

/// Packages processed when no packages file is given
pub fn demo_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Build the training session described by a sensor package
pub fn read_package(code: &str, values: &[f64]) -> Result<Workout> {
    let workout_type: WorkoutType = code.parse()?;

    if values.len() != workout_type.arity() {
        return Err(TrackerError::WrongArity {
            code: workout_type.code(),
            expected: workout_type.arity(),
            actual: values.len(),
        });
    }

    let fields = workout_type.fields();
    for (&field, &value) in fields.iter().zip(values) {
        if !value.is_finite() {
            return Err(invalid(field, value, "must be a finite number"));
        }
    }

    let action = whole(values[0]);
    let duration = non_zero("duration", values[1])?;
    let weight = values[2];

    let workout: Workout = match workout_type {
        WorkoutType::Swimming => Swimming::new(
            action,
            duration,
            weight,
            values[3],
            whole(values[4]),
        )
        .into(),
        WorkoutType::Running => Running::new(action, duration, weight).into(),
        WorkoutType::SportsWalking => {
            SportsWalking::new(action, duration, weight, non_zero("height", values[3])?).into()
        }
    };

    tracing::debug!(workout_type = %workout.workout_type(), ?values, "Read package");
    Ok(workout)
}

fn invalid(field: &'static str, value: f64, reason: &'static str) -> TrackerError {
    TrackerError::InvalidValue {
        field,
        value,
        reason,
    }
}

// Step and lap counts are integers; a fractional reading is truncated toward zero
fn whole(value: f64) -> i64 {
    value.trunc() as i64
}

// Divisors in the mean speed and walking calorie formulas
fn non_zero(field: &'static str, value: f64) -> Result<f64> {
    if value == 0.0 {
        return Err(invalid(field, value, "must not be zero"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Training;

    #[test]
    fn test_read_each_code() {
        for package in demo_packages() {
            let workout = package.read().unwrap();
            assert_eq!(workout.workout_type().code(), package.code);
        }
    }

    #[test]
    fn test_values_are_forwarded_positionally() {
        let workout = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();

        assert_eq!(
            workout,
            Workout::Swimming(Swimming::new(720, 1.0, 80.0, 25.0, 40))
        );

        let workout = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        assert_eq!(
            workout,
            Workout::SportsWalking(SportsWalking::new(9000, 1.0, 75.0, 180.0))
        );
    }

    #[test]
    fn test_unknown_code() {
        let result = read_package("XYZ", &[1.0, 1.0, 1.0]);

        assert_eq!(
            result,
            Err(TrackerError::UnknownWorkoutType("XYZ".to_string()))
        );
    }

    #[test]
    fn test_missing_value() {
        let result = read_package("WLK", &[9000.0, 1.0, 75.0]);

        assert_eq!(
            result,
            Err(TrackerError::WrongArity {
                code: "WLK",
                expected: 4,
                actual: 3,
            })
        );
    }

    #[test]
    fn test_extra_value() {
        let result = read_package("RUN", &[15000.0, 1.0, 75.0, 180.0]);

        assert!(matches!(
            result,
            Err(TrackerError::WrongArity { expected: 3, actual: 4, .. })
        ));
    }

    #[test]
    fn test_zero_duration_rejected() {
        let result = read_package("RUN", &[15000.0, 0.0, 75.0]);

        assert!(matches!(
            result,
            Err(TrackerError::InvalidValue { field: "duration", .. })
        ));
    }

    #[test]
    fn test_fractional_counts_truncated() {
        let workout = read_package("RUN", &[150.5, 1.0, 75.0]).unwrap();
        assert_eq!(workout, Workout::Running(Running::new(150, 1.0, 75.0)));

        let workout = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.5]).unwrap();
        assert_eq!(
            workout,
            Workout::Swimming(Swimming::new(720, 1.0, 80.0, 25.0, 40))
        );
    }

    #[test]
    fn test_negative_readings_accepted() {
        let workout = read_package("SWM", &[-720.0, -1.0, -80.0, -25.0, -40.0]).unwrap();

        assert_eq!(
            workout,
            Workout::Swimming(Swimming::new(-720, -1.0, -80.0, -25.0, -40))
        );
        assert!(workout.show_training_info().is_ok());
    }

    #[test]
    fn test_vanishing_duration_fails_on_summary() {
        let workout = read_package("RUN", &[15000.0, 1e-310, 75.0]).unwrap();

        assert!(matches!(
            workout.show_training_info(),
            Err(TrackerError::NonFiniteResult { training: "Running", .. })
        ));
    }

    #[test]
    fn test_zero_height_rejected() {
        let result = read_package("WLK", &[9000.0, 1.0, 75.0, 0.0]);

        assert!(matches!(
            result,
            Err(TrackerError::InvalidValue { field: "height", .. })
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        let result = read_package("SWM", &[720.0, 1.0, 80.0, f64::NAN, 40.0]);

        assert!(matches!(
            result,
            Err(TrackerError::InvalidValue { field: "length_pool", .. })
        ));
    }

    #[test]
    fn test_fractional_duration_accepted() {
        let workout = read_package("RUN", &[15000.0, 1.5, 75.0]).unwrap();

        assert!((workout.mean_speed() - 6.5).abs() < 1e-9);
    }
}
