mod block;
mod completion;
mod exercise;
mod ids;
mod prefs;
mod session;
mod settings;

pub use block::WorkoutBlock;
pub use completion::CompletionMap;
pub use exercise::{ExerciseData, ExerciseSet, SetKey, total_sets};
pub use ids::{BlockId, ParseIdError, SessionId};
pub use prefs::{Language, PrefsError, Theme};
pub use session::{SESSION_DATE_FORMAT, WorkoutSession};
pub use settings::{
    ENV_FINISH_HOLD_MS, ENV_FRAME_MS, ENV_REST_PRESETS, ENV_SET_HOLD_MS, WorkoutSettings,
    WorkoutSettingsError, parse_rest_presets,
};
