use serde::{Deserialize, Serialize};

use crate::model::ids::BlockId;

/// The workout plan a session is performed against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutBlock {
    pub id: BlockId,
    pub name: String,
}

impl WorkoutBlock {
    #[must_use]
    pub fn new(id: BlockId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
