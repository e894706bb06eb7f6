// Library exports for the fitness tracker
// The binary is a thin clap front end over these modules

pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod package;

pub use error::{Result, TrackerError};
pub use models::{InfoMessage, Training, Workout, WorkoutType};
pub use package::{read_package, Package};
