use crate::error::{Result, TrackerError};
use crate::models::{InfoMessage, WorkoutType};

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

/// Step length in meters for running and walking
pub const LEN_STEP: f64 = 0.65;

/// Stroke length in meters for swimming
pub const LEN_STROKE: f64 = 1.38;

/// Floor division on floats: the quotient rounded toward negative infinity.
///
/// Built on the remainder so an exact integer quotient is not pushed below
/// itself by rounding in `lhs / rhs`. `rhs` must be non-zero.
pub fn floor_div(lhs: f64, rhs: f64) -> f64 {
    let rem = lhs % rhs;
    let quotient = ((lhs - rem) / rhs).round();
    if rem != 0.0 && (rem < 0.0) != (rhs < 0.0) {
        quotient - 1.0
    } else {
        quotient
    }
}

/// Readings shared by every workout type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingSession {
    pub action: i64,   // steps or strokes
    pub duration: f64, // hours
    pub weight: f64,   // kg
}

impl TrainingSession {
    pub fn new(action: i64, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }

    pub fn duration_minutes(&self) -> f64 {
        self.duration * MIN_IN_H
    }
}

/// Computation contract for a training session.
///
/// Distance and mean speed come with shared formulas; every concrete workout
/// must provide its own calorie formula.
pub trait Training {
    fn session(&self) -> &TrainingSession;

    fn display_name(&self) -> &'static str;

    /// Distance covered per unit of `action`, in meters
    fn len_step(&self) -> f64 {
        LEN_STEP
    }

    /// Distance in km
    fn distance(&self) -> f64 {
        self.session().action as f64 * self.len_step() / M_IN_KM
    }

    /// Mean speed in km/h
    fn mean_speed(&self) -> f64 {
        self.distance() / self.session().duration
    }

    fn spent_calories(&self) -> Result<f64> {
        Err(TrackerError::NotImplemented(self.display_name()))
    }

    /// Summary of the session; fails rather than reporting `inf` or `NaN`
    fn show_training_info(&self) -> Result<InfoMessage> {
        let info = InfoMessage::new(
            self.display_name(),
            self.session().duration,
            self.distance(),
            self.mean_speed(),
            self.spent_calories()?,
        );

        let quantities = [
            ("distance", info.distance),
            ("mean speed", info.speed),
            ("calories", info.calories),
        ];
        for (quantity, value) in quantities {
            if !value.is_finite() {
                return Err(TrackerError::NonFiniteResult {
                    training: self.display_name(),
                    quantity,
                });
            }
        }

        Ok(info)
    }
}

impl Training for TrainingSession {
    fn session(&self) -> &TrainingSession {
        self
    }

    fn display_name(&self) -> &'static str {
        "Training"
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    pub session: TrainingSession,
}

impl Running {
    const CALORIES_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_SPEED_SHIFT: f64 = 20.0;

    pub fn new(action: i64, duration: f64, weight: f64) -> Self {
        Self {
            session: TrainingSession::new(action, duration, weight),
        }
    }
}

impl Training for Running {
    fn session(&self) -> &TrainingSession {
        &self.session
    }

    fn display_name(&self) -> &'static str {
        "Running"
    }

    fn spent_calories(&self) -> Result<f64> {
        let session = &self.session;
        Ok((Self::CALORIES_SPEED_MULTIPLIER * self.mean_speed() - Self::CALORIES_SPEED_SHIFT)
            * session.weight
            / M_IN_KM
            * session.duration_minutes())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    pub session: TrainingSession,
    pub height: f64, // cm
}

impl SportsWalking {
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    pub fn new(action: i64, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            session: TrainingSession::new(action, duration, weight),
            height,
        }
    }
}

impl Training for SportsWalking {
    fn session(&self) -> &TrainingSession {
        &self.session
    }

    fn display_name(&self) -> &'static str {
        "SportsWalking"
    }

    fn spent_calories(&self) -> Result<f64> {
        let session = &self.session;
        let speed_ratio = floor_div(self.mean_speed().powi(2), self.height);
        Ok((Self::CALORIES_WEIGHT_MULTIPLIER * session.weight
            + speed_ratio * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER * session.weight)
            * session.duration_minutes())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    pub session: TrainingSession,
    pub length_pool: f64, // meters
    pub count_pool: i64,
}

impl Swimming {
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(action: i64, duration: f64, weight: f64, length_pool: f64, count_pool: i64) -> Self {
        Self {
            session: TrainingSession::new(action, duration, weight),
            length_pool,
            count_pool,
        }
    }
}

impl Training for Swimming {
    fn session(&self) -> &TrainingSession {
        &self.session
    }

    fn display_name(&self) -> &'static str {
        "Swimming"
    }

    fn len_step(&self) -> f64 {
        LEN_STROKE
    }

    // Speed comes from pool laps, not strokes
    fn mean_speed(&self) -> f64 {
        self.length_pool * self.count_pool as f64 / M_IN_KM / self.session.duration
    }

    fn spent_calories(&self) -> Result<f64> {
        Ok((self.mean_speed() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.session.weight)
    }
}

/// A training session of any supported workout type
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    Swimming(Swimming),
    Running(Running),
    SportsWalking(SportsWalking),
}

impl Workout {
    pub fn workout_type(&self) -> WorkoutType {
        match self {
            Workout::Swimming(_) => WorkoutType::Swimming,
            Workout::Running(_) => WorkoutType::Running,
            Workout::SportsWalking(_) => WorkoutType::SportsWalking,
        }
    }

    fn as_training(&self) -> &dyn Training {
        match self {
            Workout::Swimming(training) => training,
            Workout::Running(training) => training,
            Workout::SportsWalking(training) => training,
        }
    }
}

impl Training for Workout {
    fn session(&self) -> &TrainingSession {
        self.as_training().session()
    }

    fn display_name(&self) -> &'static str {
        self.as_training().display_name()
    }

    fn len_step(&self) -> f64 {
        self.as_training().len_step()
    }

    fn distance(&self) -> f64 {
        self.as_training().distance()
    }

    fn mean_speed(&self) -> f64 {
        self.as_training().mean_speed()
    }

    fn spent_calories(&self) -> Result<f64> {
        self.as_training().spent_calories()
    }
}

impl From<Swimming> for Workout {
    fn from(training: Swimming) -> Self {
        Workout::Swimming(training)
    }
}

impl From<Running> for Workout {
    fn from(training: Running) -> Self {
        Workout::Running(training)
    }
}

impl From<SportsWalking> for Workout {
    fn from(training: SportsWalking) -> Self {
        Workout::SportsWalking(training)
    }
}
