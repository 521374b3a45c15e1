use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{BlockId, ExerciseData, SessionId};

/// Date format used for the session `date` field.
pub const SESSION_DATE_FORMAT: &str = "%Y-%m-%d";

/// A finished workout, emitted once when the finish hold completes.
///
/// The record is immutable: it is handed to the consumer and the screen keeps no
/// reference to it. Per-set completion flags are presentation state and are not
/// part of the record; `exercises` is the draft exactly as it was supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSession {
    id: SessionId,
    date: NaiveDate,
    block_id: BlockId,
    exercises: Vec<ExerciseData>,
    #[serde(with = "iso_millis")]
    completed_at: DateTime<Utc>,
}

impl WorkoutSession {
    #[must_use]
    pub fn new(
        id: SessionId,
        date: NaiveDate,
        block_id: BlockId,
        exercises: Vec<ExerciseData>,
        completed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            date,
            block_id,
            exercises,
            completed_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The session date as `yyyy-MM-dd`.
    #[must_use]
    pub fn date_label(&self) -> String {
        self.date.format(SESSION_DATE_FORMAT).to_string()
    }

    #[must_use]
    pub fn block_id(&self) -> &BlockId {
        &self.block_id
    }

    #[must_use]
    pub fn exercises(&self) -> &[ExerciseData] {
        &self.exercises
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    /// `completed_at` as an ISO-8601 UTC timestamp with millisecond precision.
    #[must_use]
    pub fn completed_at_iso(&self) -> String {
        iso_millis::format(self.completed_at)
    }
}

mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn format(value: DateTime<Utc>) -> String {
        value.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub(super) fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(*value))
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|value| value.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
