/// Outcome of one rest-timer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestTick {
    /// Seconds left after the tick. `Remaining(0)` also deactivates the timer.
    Remaining(u32),
    /// The timer was not running.
    Inactive,
}

/// Countdown between sets. `None` means no rest is running.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RestTimer {
    remaining: Option<u32>,
}

impl RestTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts (or restarts) the countdown. Zero seconds leaves it inactive.
    pub fn start(&mut self, seconds: u32) {
        self.remaining = (seconds > 0).then_some(seconds);
    }

    /// Advances the countdown by one second.
    pub fn tick(&mut self) -> RestTick {
        let Some(remaining) = self.remaining else {
            return RestTick::Inactive;
        };
        let next = remaining.saturating_sub(1);
        self.remaining = (next > 0).then_some(next);
        RestTick::Remaining(next)
    }

    /// Stops the countdown, discarding the remaining time.
    pub fn skip(&mut self) {
        self.remaining = None;
    }

    #[must_use]
    pub fn remaining(&self) -> Option<u32> {
        self.remaining
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.remaining.is_some()
    }
}

/// Formats seconds as `m:ss`.
#[must_use]
pub fn format_countdown(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
