use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use workout_core::model::{
    BlockId, CompletionMap, ExerciseData, SetKey, WorkoutSession, WorkoutSettings, total_sets,
};
use workout_core::{HoldGesture, HoldProgress, HoldSample, RestTick, RestTimer};

use super::ids::SessionIdGenerator;
use super::progress::WorkoutProgress;

//
// ─── ACTIVE WORKOUT ────────────────────────────────────────────────────────────
//

/// State of one active workout screen.
///
/// Owns the per-set completion flags, the two hold gestures (one shared by all
/// set rows, one for the finish control) and the rest timer. All transitions
/// take the current time as an argument; scheduling is the caller's concern.
pub struct ActiveWorkout {
    block_id: BlockId,
    date: NaiveDate,
    draft: Vec<ExerciseData>,
    completed: CompletionMap,
    set_hold: HoldGesture<SetKey>,
    finish_hold: HoldGesture<()>,
    rest: RestTimer,
    ids: Arc<dyn SessionIdGenerator>,
    finished: bool,
}

impl ActiveWorkout {
    #[must_use]
    pub fn new(
        block_id: BlockId,
        date: NaiveDate,
        draft: Vec<ExerciseData>,
        settings: &WorkoutSettings,
        ids: Arc<dyn SessionIdGenerator>,
    ) -> Self {
        Self {
            block_id,
            date,
            draft,
            completed: CompletionMap::new(),
            set_hold: HoldGesture::new(settings.set_hold()),
            finish_hold: HoldGesture::new(settings.finish_hold()),
            rest: RestTimer::new(),
            ids,
            finished: false,
        }
    }

    // ─── Set holds ────────────────────────────────────────────────────────────

    /// Starts holding a set row.
    ///
    /// Ignored (returns false) for confirmed sets, keys outside the draft, and
    /// after the session is finished. Any other row being held is abandoned.
    pub fn press_set(&mut self, key: SetKey, now: DateTime<Utc>) -> bool {
        if self.finished || !key.is_within(&self.draft) || self.completed.is_confirmed(key) {
            return false;
        }
        if let Some(abandoned) = self.set_hold.start(key, now) {
            log::debug!("abandoned hold on set {abandoned:?} for {key:?}");
        }
        log::debug!("holding set {key:?}");
        true
    }

    /// Releases the set row being held, discarding its progress.
    pub fn release_set(&mut self) {
        if let Some(key) = self.set_hold.end() {
            log::debug!("released set {key:?}");
        }
    }

    /// Samples the set hold. Returns the key confirmed by this sample, if any.
    pub fn sample_set_hold(&mut self, now: DateTime<Utc>) -> Option<SetKey> {
        match self.set_hold.sample(now) {
            HoldSample::Completed(key) => {
                self.completed.confirm(key);
                log::info!(
                    "set {} of exercise {} confirmed",
                    key.set_index + 1,
                    key.exercise_index + 1
                );
                Some(key)
            }
            HoldSample::Idle | HoldSample::Progress(_) => None,
        }
    }

    // ─── Finish hold ──────────────────────────────────────────────────────────

    /// Starts holding the finish control. Ignored once the session is finished.
    pub fn press_finish(&mut self, now: DateTime<Utc>) -> bool {
        if self.finished {
            return false;
        }
        self.finish_hold.start((), now);
        log::debug!("holding finish control");
        true
    }

    pub fn release_finish(&mut self) {
        if self.finish_hold.end().is_some() {
            log::debug!("released finish control");
        }
    }

    /// Samples the finish hold. Returns the assembled session the one time the
    /// hold completes.
    pub fn sample_finish_hold(&mut self, now: DateTime<Utc>) -> Option<WorkoutSession> {
        match self.finish_hold.sample(now) {
            HoldSample::Completed(()) if !self.finished => {
                self.finished = true;
                self.set_hold.end();
                let session = WorkoutSession::new(
                    self.ids.next_id(),
                    self.date,
                    self.block_id.clone(),
                    self.draft.clone(),
                    now,
                );
                log::info!(
                    "session {} finished with {}/{} sets confirmed",
                    session.id(),
                    self.completed.len(),
                    total_sets(&self.draft)
                );
                Some(session)
            }
            _ => None,
        }
    }

    // ─── Rest timer ───────────────────────────────────────────────────────────

    /// Starts (or restarts) the rest countdown.
    pub fn start_rest(&mut self, seconds: u32) {
        log::info!("rest timer started for {seconds}s");
        self.rest.start(seconds);
    }

    pub fn skip_rest(&mut self) {
        if self.rest.is_active() {
            log::info!("rest timer skipped");
        }
        self.rest.skip();
    }

    pub fn tick_rest(&mut self) -> RestTick {
        self.rest.tick()
    }

    // ─── Queries ──────────────────────────────────────────────────────────────

    #[must_use]
    pub fn block_id(&self) -> &BlockId {
        &self.block_id
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn draft(&self) -> &[ExerciseData] {
        &self.draft
    }

    #[must_use]
    pub fn is_set_complete(&self, key: SetKey) -> bool {
        self.completed.is_confirmed(key)
    }

    /// Progress of `key` while it is the row being held.
    #[must_use]
    pub fn set_hold_progress(&self, key: SetKey) -> Option<HoldProgress> {
        self.set_hold.progress_for(key)
    }

    #[must_use]
    pub fn held_set(&self) -> Option<SetKey> {
        self.set_hold.target()
    }

    #[must_use]
    pub fn is_set_hold_active(&self) -> bool {
        self.set_hold.is_active()
    }

    #[must_use]
    pub fn finish_progress(&self) -> HoldProgress {
        self.finish_hold.progress()
    }

    #[must_use]
    pub fn is_finish_hold_active(&self) -> bool {
        self.finish_hold.is_active()
    }

    #[must_use]
    pub fn rest_remaining(&self) -> Option<u32> {
        self.rest.remaining()
    }

    #[must_use]
    pub fn is_rest_active(&self) -> bool {
        self.rest.is_active()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub fn progress(&self) -> WorkoutProgress {
        WorkoutProgress {
            total_sets: total_sets(&self.draft),
            completed_sets: self.completed.len(),
        }
    }
}

impl fmt::Debug for ActiveWorkout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActiveWorkout")
            .field("block_id", &self.block_id)
            .field("date", &self.date)
            .field("exercises", &self.draft.len())
            .field("completed", &self.completed)
            .field("set_hold", &self.set_hold)
            .field("finish_hold", &self.finish_hold)
            .field("rest", &self.rest)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}
