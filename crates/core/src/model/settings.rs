use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WorkoutSettingsError {
    #[error("finish hold must be > 0 ms")]
    InvalidFinishHold,

    #[error("set hold must be > 0 ms")]
    InvalidSetHold,

    #[error("at least one rest preset is required")]
    EmptyRestPresets,

    #[error("rest preset must be between 1 and 3600 seconds, got {0}")]
    InvalidRestPreset(u32),

    #[error("frame interval must be between 1 and 1000 ms")]
    InvalidFrameInterval,

    #[error("{var} is not a valid number: {raw}")]
    InvalidNumber { var: &'static str, raw: String },
}

//
// ─── SETTINGS ──────────────────────────────────────────────────────────────────
//

pub const ENV_FINISH_HOLD_MS: &str = "WORKOUT_FINISH_HOLD_MS";
pub const ENV_SET_HOLD_MS: &str = "WORKOUT_SET_HOLD_MS";
pub const ENV_REST_PRESETS: &str = "WORKOUT_REST_PRESETS";
pub const ENV_FRAME_MS: &str = "WORKOUT_FRAME_MS";

const MAX_REST_PRESET_SECS: u32 = 3600;
const MAX_FRAME_INTERVAL_MS: u64 = 1000;

/// Timing configuration for the active workout screen.
///
/// The two hold thresholds are independent even though both default to the
/// same three-second confirmation gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutSettings {
    finish_hold_ms: u64,
    set_hold_ms: u64,
    rest_presets_secs: Vec<u32>,
    frame_interval_ms: u64,
}

impl Default for WorkoutSettings {
    /// 3 s finish hold, 3 s set hold, 60/90 s rest presets, ~60 fps sampling.
    fn default() -> Self {
        Self {
            finish_hold_ms: 3000,
            set_hold_ms: 3000,
            rest_presets_secs: vec![60, 90],
            frame_interval_ms: 16,
        }
    }
}

impl WorkoutSettings {
    /// Creates custom settings.
    ///
    /// # Errors
    ///
    /// Returns `WorkoutSettingsError` if a threshold is zero, the preset list is
    /// empty or holds an out-of-range value, or the frame interval is out of range.
    pub fn new(
        finish_hold_ms: u64,
        set_hold_ms: u64,
        rest_presets_secs: Vec<u32>,
        frame_interval_ms: u64,
    ) -> Result<Self, WorkoutSettingsError> {
        if finish_hold_ms == 0 {
            return Err(WorkoutSettingsError::InvalidFinishHold);
        }
        if set_hold_ms == 0 {
            return Err(WorkoutSettingsError::InvalidSetHold);
        }
        if rest_presets_secs.is_empty() {
            return Err(WorkoutSettingsError::EmptyRestPresets);
        }
        if let Some(bad) = rest_presets_secs
            .iter()
            .copied()
            .find(|secs| *secs == 0 || *secs > MAX_REST_PRESET_SECS)
        {
            return Err(WorkoutSettingsError::InvalidRestPreset(bad));
        }
        if frame_interval_ms == 0 || frame_interval_ms > MAX_FRAME_INTERVAL_MS {
            return Err(WorkoutSettingsError::InvalidFrameInterval);
        }

        Ok(Self {
            finish_hold_ms,
            set_hold_ms,
            rest_presets_secs,
            frame_interval_ms,
        })
    }

    /// Builds settings from `WORKOUT_*` variables, falling back to defaults for
    /// any variable `lookup` does not return.
    ///
    /// # Errors
    ///
    /// Returns `WorkoutSettingsError::InvalidNumber` for unparsable values and the
    /// validation errors of [`WorkoutSettings::new`].
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, WorkoutSettingsError> {
        let defaults = Self::default();

        let finish_hold_ms = match lookup(ENV_FINISH_HOLD_MS) {
            Some(raw) => parse_number(ENV_FINISH_HOLD_MS, &raw)?,
            None => defaults.finish_hold_ms,
        };
        let set_hold_ms = match lookup(ENV_SET_HOLD_MS) {
            Some(raw) => parse_number(ENV_SET_HOLD_MS, &raw)?,
            None => defaults.set_hold_ms,
        };
        let rest_presets_secs = match lookup(ENV_REST_PRESETS) {
            Some(raw) => parse_rest_presets(&raw)?,
            None => defaults.rest_presets_secs,
        };
        let frame_interval_ms = match lookup(ENV_FRAME_MS) {
            Some(raw) => parse_number(ENV_FRAME_MS, &raw)?,
            None => defaults.frame_interval_ms,
        };

        Self::new(
            finish_hold_ms,
            set_hold_ms,
            rest_presets_secs,
            frame_interval_ms,
        )
    }

    #[must_use]
    pub fn finish_hold_ms(&self) -> u64 {
        self.finish_hold_ms
    }

    #[must_use]
    pub fn set_hold_ms(&self) -> u64 {
        self.set_hold_ms
    }

    #[must_use]
    pub fn finish_hold(&self) -> chrono::Duration {
        millis(self.finish_hold_ms)
    }

    #[must_use]
    pub fn set_hold(&self) -> chrono::Duration {
        millis(self.set_hold_ms)
    }

    #[must_use]
    pub fn rest_presets_secs(&self) -> &[u32] {
        &self.rest_presets_secs
    }

    #[must_use]
    pub fn frame_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.frame_interval_ms)
    }
}

fn millis(value: u64) -> chrono::Duration {
    chrono::Duration::milliseconds(i64::try_from(value).unwrap_or(i64::MAX))
}

fn parse_number<T: std::str::FromStr>(
    var: &'static str,
    raw: &str,
) -> Result<T, WorkoutSettingsError> {
    raw.trim()
        .parse()
        .map_err(|_| WorkoutSettingsError::InvalidNumber {
            var,
            raw: raw.to_string(),
        })
}

/// Parses a comma separated preset list such as `60,90,120`.
///
/// # Errors
///
/// Returns `WorkoutSettingsError::InvalidNumber` if any entry is not a number.
pub fn parse_rest_presets(raw: &str) -> Result<Vec<u32>, WorkoutSettingsError> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| parse_number(ENV_REST_PRESETS, part))
        .collect()
}
