mod finished_vm;
mod time_fmt;
mod workout_vm;

pub use finished_vm::{FinishedSessionVm, map_finished_session};
pub use time_fmt::format_datetime;
pub use workout_vm::{
    ExerciseCardVm, FinishButtonVm, RestPanelVm, SetRowVm, WorkoutIntent, WorkoutScreenVm,
    format_weight, map_workout_screen,
};
