use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;
use workout_core::model::SessionId;

/// Source of ids for finished sessions.
pub trait SessionIdGenerator: Send + Sync {
    fn next_id(&self) -> SessionId;
}

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidSessionIds;

impl SessionIdGenerator for UuidSessionIds {
    fn next_id(&self) -> SessionId {
        SessionId::random()
    }
}

/// Deterministic ids (`…0001`, `…0002`, …) for tests and demos.
#[derive(Debug, Default)]
pub struct SequentialSessionIds {
    next: AtomicU64,
}

impl SequentialSessionIds {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionIdGenerator for SequentialSessionIds {
    fn next_id(&self) -> SessionId {
        let value = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        SessionId::new(Uuid::from_u128(u128::from(value)))
    }
}
