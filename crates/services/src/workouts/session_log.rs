use std::sync::{Mutex, PoisonError};

use workout_core::model::WorkoutSession;

/// In-process record of the sessions finished since launch.
///
/// This is the consumer the host application hands finished sessions to. It
/// does not persist anything.
#[derive(Debug, Default)]
pub struct SessionLog {
    sessions: Mutex<Vec<WorkoutSession>>,
}

impl SessionLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, session: WorkoutSession) {
        log::info!(
            "recorded session {} for block {} on {}",
            session.id(),
            session.block_id(),
            session.date_label()
        );
        self.sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(session);
    }

    #[must_use]
    pub fn latest(&self) -> Option<WorkoutSession> {
        self.sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
