//! # Id Generation
//!
//! Store-assigned ids for created records.
//!
//! ```text
//! create(draft)
//!      │
//!      ▼
//! IdGenerator::next_id() ──► "4"  ── taken? ──► next_id() ──► "5" ...
//!                                        │
//!                                        └── free ──► record.id
//! ```
//!
//! The store keeps drawing until it gets an id that is unused in the target
//! collection, so a sequential generator starting at 1 never collides with
//! the seeded ids "1", "2", "3".

use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use agri_core::CoreError;

/// Source of fresh record ids.
pub trait IdGenerator: Send + Sync + Debug {
    /// Returns the next candidate id. Must not repeat a previous value.
    fn next_id(&self) -> String;
}

/// Decimal ids from a monotonic counter: "1", "2", "3", ...
#[derive(Debug)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    /// Starts counting at `start`.
    pub fn starting_at(start: u64) -> Self {
        SequentialIds {
            next: AtomicU64::new(start),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        SequentialIds::starting_at(1)
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        self.next.fetch_add(1, Ordering::Relaxed).to_string()
    }
}

/// Random UUID v4 ids.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Which generator a store is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    #[default]
    Sequential,
    Uuid,
}

impl IdStrategy {
    /// Builds a fresh generator for this strategy.
    pub fn generator(&self) -> Arc<dyn IdGenerator> {
        match self {
            IdStrategy::Sequential => Arc::new(SequentialIds::default()),
            IdStrategy::Uuid => Arc::new(UuidIds),
        }
    }
}

impl std::str::FromStr for IdStrategy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sequential" => Ok(IdStrategy::Sequential),
            "uuid" => Ok(IdStrategy::Uuid),
            other => Err(CoreError::unknown("id strategy", other)),
        }
    }
}
