pub mod info_message;
pub mod training;
pub mod workout_type;

pub use info_message::InfoMessage;
pub use training::{Running, SportsWalking, Swimming, Training, TrainingSession, Workout};
pub use workout_type::WorkoutType;
