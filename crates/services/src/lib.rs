#![forbid(unsafe_code)]

pub mod error;
pub mod plan;
pub mod workouts;

pub use workout_core::{Clock, SharedClock};

pub use error::PlanError;
pub use plan::{WorkoutPlan, load_plan};
pub use workouts::{
    ActiveWorkout, SequentialSessionIds, SessionIdGenerator, SessionLog, UuidSessionIds,
    WorkoutProgress,
};
