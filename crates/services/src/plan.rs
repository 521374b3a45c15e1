use std::path::Path;

use serde::{Deserialize, Serialize};
use workout_core::model::{BlockId, ExerciseData, ExerciseSet, WorkoutBlock};

use crate::error::PlanError;

/// Everything the active workout screen needs from upstream: the block being
/// trained and the draft of sets prepared for today.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub block: WorkoutBlock,
    #[serde(default)]
    pub draft: Vec<ExerciseData>,
}

impl WorkoutPlan {
    /// Built-in plan used when no plan file is given.
    ///
    /// # Panics
    ///
    /// Never: the demo block id is a non-empty literal.
    #[must_use]
    pub fn demo() -> Self {
        let id = BlockId::new("demo-strength-a").expect("demo block id is not empty");
        Self {
            block: WorkoutBlock::new(id, "Strength A"),
            draft: vec![
                ExerciseData::new(
                    "squat",
                    vec![
                        ExerciseSet::new(100.0, 5),
                        ExerciseSet::new(100.0, 5),
                        ExerciseSet::new(100.0, 5),
                    ],
                ),
                ExerciseData::new(
                    "benchPress",
                    vec![ExerciseSet::new(62.5, 8), ExerciseSet::new(62.5, 8)],
                ),
                ExerciseData::new("Farmer carry", vec![ExerciseSet::new(32.0, 40)]),
            ],
        }
    }
}

/// Loads a plan from a JSON file.
///
/// # Errors
///
/// Returns `PlanError::Io` if the file cannot be read and `PlanError::Json` if it
/// is not a valid plan.
pub fn load_plan(path: impl AsRef<Path>) -> Result<WorkoutPlan, PlanError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| PlanError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let plan: WorkoutPlan = serde_json::from_str(&raw).map_err(|source| PlanError::Json {
        path: path.display().to_string(),
        source,
    })?;
    log::debug!(
        "loaded plan {} with {} exercises",
        plan.block.id,
        plan.draft.len()
    );
    Ok(plan)
}
