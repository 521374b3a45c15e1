//! Press-and-hold confirmation.
//!
//! A [`HoldGesture`] turns a sustained press into a progress value between 0 and
//! 100 and reports completion exactly once, when the elapsed hold time reaches
//! the configured threshold. Time is always passed in, so the engine is driven
//! the same way by a UI frame loop and by tests.

use chrono::{DateTime, Duration, Utc};

//
// ─── PROGRESS ──────────────────────────────────────────────────────────────────
//

/// Hold progress in percent, always within `0.0..=100.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct HoldProgress(f64);

impl HoldProgress {
    pub const ZERO: Self = Self(0.0);
    pub const FULL: Self = Self(100.0);

    /// Progress after holding for `elapsed` against `threshold`.
    ///
    /// Negative elapsed time (a clock that jumped backward) yields zero; a
    /// non-positive threshold is reached immediately.
    #[must_use]
    pub fn from_elapsed(elapsed: Duration, threshold: Duration) -> Self {
        let threshold_us = micros(threshold);
        if threshold_us <= 0.0 {
            return Self::FULL;
        }
        Self::from_percent(100.0 * micros(elapsed) / threshold_us)
    }

    #[must_use]
    pub fn from_percent(percent: f64) -> Self {
        if percent.is_nan() {
            return Self::ZERO;
        }
        Self(percent.clamp(0.0, 100.0))
    }

    #[must_use]
    pub fn percent(self) -> f64 {
        self.0
    }

    /// Percent rounded to the nearest whole number, for labels.
    #[must_use]
    pub fn rounded(self) -> u8 {
        // Clamped to 0..=100, so the cast cannot truncate.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let value = self.0.round() as u8;
        value
    }

    #[must_use]
    pub fn is_complete(self) -> bool {
        self.0 >= 100.0
    }

    #[must_use]
    pub fn is_started(self) -> bool {
        self.0 > 0.0
    }
}

#[allow(clippy::cast_precision_loss)]
fn micros(value: Duration) -> f64 {
    value
        .num_microseconds()
        .map_or_else(|| value.num_milliseconds() as f64 * 1000.0, |us| us as f64)
}

//
// ─── GESTURE ───────────────────────────────────────────────────────────────────
//

/// The hold currently in progress: what is being held and since when.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActiveHold<K> {
    target: K,
    started_at: DateTime<Utc>,
}

/// Result of sampling a gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HoldSample<K> {
    /// No hold is active. Nothing to schedule.
    Idle,
    /// Hold is active and below the threshold.
    Progress(HoldProgress),
    /// Threshold reached. The gesture has already reset itself.
    Completed(K),
}

/// Press-and-hold state for one control (or one family of controls keyed by `K`).
///
/// There is a single active slot, so at most one target of a gesture can be
/// held at a time. Starting a hold on another target abandons the previous one.
#[derive(Debug, Clone)]
pub struct HoldGesture<K> {
    threshold: Duration,
    active: Option<ActiveHold<K>>,
    progress: HoldProgress,
}

impl<K: Copy + PartialEq> HoldGesture<K> {
    #[must_use]
    pub fn new(threshold: Duration) -> Self {
        Self {
            threshold,
            active: None,
            progress: HoldProgress::ZERO,
        }
    }

    /// Starts a hold on `target` at `now`.
    ///
    /// Every press records a fresh start instant, even for the target already
    /// being held. Returns the previously held target when a different one is
    /// abandoned.
    pub fn start(&mut self, target: K, now: DateTime<Utc>) -> Option<K> {
        let abandoned = self
            .active
            .map(|hold| hold.target)
            .filter(|previous| *previous != target);
        self.active = Some(ActiveHold {
            target,
            started_at: now,
        });
        self.progress = HoldProgress::ZERO;
        abandoned
    }

    /// Cancels the hold regardless of progress. Returns the released target.
    pub fn end(&mut self) -> Option<K> {
        self.progress = HoldProgress::ZERO;
        self.active.take().map(|hold| hold.target)
    }

    /// Recomputes progress at `now`.
    ///
    /// Within one press the reported progress never decreases, even if the clock
    /// moves backward between samples.
    pub fn sample(&mut self, now: DateTime<Utc>) -> HoldSample<K> {
        let Some(hold) = self.active else {
            return HoldSample::Idle;
        };

        let computed = HoldProgress::from_elapsed(now - hold.started_at, self.threshold);
        if computed > self.progress {
            self.progress = computed;
        }

        if self.progress.is_complete() {
            self.active = None;
            self.progress = HoldProgress::ZERO;
            return HoldSample::Completed(hold.target);
        }

        HoldSample::Progress(self.progress)
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    #[must_use]
    pub fn target(&self) -> Option<K> {
        self.active.map(|hold| hold.target)
    }

    #[must_use]
    pub fn progress(&self) -> HoldProgress {
        self.progress
    }

    /// Progress for `target` if it is the one being held.
    #[must_use]
    pub fn progress_for(&self, target: K) -> Option<HoldProgress> {
        (self.target() == Some(target)).then_some(self.progress)
    }
}
