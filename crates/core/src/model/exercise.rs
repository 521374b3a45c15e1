use serde::{Deserialize, Serialize};

/// One planned set: load in kilograms and target repetitions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSet {
    pub weight: f64,
    pub reps: u32,
}

impl ExerciseSet {
    #[must_use]
    pub fn new(weight: f64, reps: u32) -> Self {
        Self { weight, reps }
    }
}

/// An exercise in the session draft with its ordered sets.
///
/// `name` is either a translation key (e.g. `benchPress`) or free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseData {
    pub name: String,
    #[serde(default)]
    pub sets: Vec<ExerciseSet>,
}

impl ExerciseData {
    #[must_use]
    pub fn new(name: impl Into<String>, sets: Vec<ExerciseSet>) -> Self {
        Self {
            name: name.into(),
            sets,
        }
    }
}

/// Position of a set inside a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SetKey {
    pub exercise_index: usize,
    pub set_index: usize,
}

impl SetKey {
    #[must_use]
    pub const fn new(exercise_index: usize, set_index: usize) -> Self {
        Self {
            exercise_index,
            set_index,
        }
    }

    /// Returns true when the key addresses an existing set of `draft`.
    #[must_use]
    pub fn is_within(&self, draft: &[ExerciseData]) -> bool {
        draft
            .get(self.exercise_index)
            .is_some_and(|exercise| self.set_index < exercise.sets.len())
    }
}

/// Total number of sets across a draft.
#[must_use]
pub fn total_sets(draft: &[ExerciseData]) -> usize {
    draft.iter().map(|exercise| exercise.sets.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> Vec<ExerciseData> {
        vec![
            ExerciseData::new("squat", vec![ExerciseSet::new(100.0, 5); 3]),
            ExerciseData::new("benchPress", vec![ExerciseSet::new(62.5, 8)]),
        ]
    }

    #[test]
    fn set_key_bounds() {
        let draft = draft();
        assert!(SetKey::new(0, 2).is_within(&draft));
        assert!(SetKey::new(1, 0).is_within(&draft));
        assert!(!SetKey::new(1, 1).is_within(&draft));
        assert!(!SetKey::new(2, 0).is_within(&draft));
    }

    #[test]
    fn counts_sets_across_exercises() {
        assert_eq!(total_sets(&draft()), 4);
        assert_eq!(total_sets(&[]), 0);
    }

    #[test]
    fn exercise_without_sets_field_deserializes_empty() {
        let exercise: ExerciseData = serde_json::from_str(r#"{"name":"plank"}"#).unwrap();
        assert!(exercise.sets.is_empty());
    }
}
