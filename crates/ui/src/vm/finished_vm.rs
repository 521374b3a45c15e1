use workout_core::model::{WorkoutSession, total_sets};

use crate::vm::time_fmt::format_datetime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinishedSessionVm {
    pub id: String,
    pub date: String,
    pub block_id: String,
    pub completed_at_str: String,
    pub exercise_count: usize,
    pub set_count: usize,
    pub json: String,
}

impl From<&WorkoutSession> for FinishedSessionVm {
    fn from(session: &WorkoutSession) -> Self {
        Self {
            id: session.id().to_string(),
            date: session.date_label(),
            block_id: session.block_id().to_string(),
            completed_at_str: format_datetime(session.completed_at()),
            exercise_count: session.exercises().len(),
            set_count: total_sets(session.exercises()),
            json: serde_json::to_string_pretty(session).unwrap_or_default(),
        }
    }
}

#[must_use]
pub fn map_finished_session(session: Option<&WorkoutSession>) -> Option<FinishedSessionVm> {
    session.map(FinishedSessionVm::from)
}
