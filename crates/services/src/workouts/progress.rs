/// How many of the planned sets have been confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkoutProgress {
    pub total_sets: usize,
    pub completed_sets: usize,
}

impl WorkoutProgress {
    /// True once every planned set is confirmed. An empty draft is never "done".
    #[must_use]
    pub fn all_sets_done(&self) -> bool {
        self.total_sets > 0 && self.completed_sets >= self.total_sets
    }
}
