use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Duration, Utc};

/// A simple clock abstraction for deterministic time in services and tests.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    Default,
    Fixed(DateTime<Utc>),
}

impl Clock {
    /// Returns a clock that uses the current system time.
    #[must_use]
    pub fn default_clock() -> Self {
        Self::Default
    }

    /// Returns a clock fixed at the given timestamp.
    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    /// Returns the current time according to the clock.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::Default => Utc::now(),
            Clock::Fixed(t) => *t,
        }
    }

    /// If this is a fixed clock, advance it by the given duration.
    ///
    /// Has no effect on `Clock::Default`. A negative delta moves the clock backward.
    pub fn advance(&mut self, delta: Duration) {
        if let Clock::Fixed(t) = self {
            *t += delta;
        }
    }

    /// Returns true if this clock represents real time.
    #[must_use]
    pub fn is_default(&self) -> bool {
        matches!(self, Clock::Default)
    }

    /// Returns true if this clock is fixed.
    #[must_use]
    pub fn is_fixed(&self) -> bool {
        matches!(self, Clock::Fixed(_))
    }
}

/// A `Clock` shared between the UI tasks that sample it and the code that drives it.
///
/// Cloning shares the same underlying clock, so advancing one handle is observed
/// by every sampling loop holding another.
#[derive(Debug, Clone, Default)]
pub struct SharedClock {
    inner: Arc<Mutex<Clock>>,
}

impl SharedClock {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            inner: Arc::new(Mutex::new(clock)),
        }
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .now()
    }

    /// Advances the shared clock when it is fixed. See [`Clock::advance`].
    pub fn advance(&self, delta: Duration) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .advance(delta);
    }
}

impl From<Clock> for SharedClock {
    fn from(clock: Clock) -> Self {
        Self::new(clock)
    }
}

/// Deterministic timestamp for tests and examples (2023-11-14T22:13:20Z).
pub const FIXED_TEST_TIMESTAMP: i64 = 1_700_000_000;

/// Returns a deterministic `DateTime<Utc>` for tests and doc examples.
///
/// # Panics
///
/// Panics if the fixed timestamp cannot be represented.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP, 0)
        .expect("fixed timestamp should be valid")
}

/// Returns a `Clock` fixed at the deterministic test timestamp.
#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_now())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_clock_handles_observe_the_same_time() {
        let clock: SharedClock = fixed_clock().into();
        let other = clock.clone();

        clock.advance(Duration::milliseconds(1500));

        assert_eq!(other.now(), fixed_now() + Duration::milliseconds(1500));
    }

    #[test]
    fn default_clock_ignores_advance() {
        let mut clock = Clock::default_clock();
        clock.advance(Duration::days(1));
        assert!(clock.is_default());
        assert!(clock.now() <= Utc::now());
    }

    #[test]
    fn fixed_clock_can_move_backward() {
        let mut clock = fixed_clock();
        clock.advance(Duration::seconds(-5));
        assert_eq!(clock.now(), fixed_now() - Duration::seconds(5));
    }
}
