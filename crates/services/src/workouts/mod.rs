mod active;
mod ids;
mod session_log;
mod progress;

// Public API of the workout subsystem.
pub use active::ActiveWorkout;
pub use ids::{SequentialSessionIds, SessionIdGenerator, UuidSessionIds};
pub use session_log::SessionLog;
pub use progress::WorkoutProgress;
