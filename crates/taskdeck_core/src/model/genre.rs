//! Genre domain model.
//!
//! A genre is a category that tasks belong to. It is referenced, never
//! owned, by tasks; referential presence is enforced at task creation.

use serde::{Deserialize, Serialize};

/// Stable identifier for a persisted genre.
pub type GenreId = i64;

/// Canonical persisted genre record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    /// Store-assigned stable id.
    pub id: GenreId,
    /// Category name. Must be non-empty.
    pub name: String,
    /// Creation timestamp in epoch milliseconds.
    pub created_at: i64,
    /// Last-write timestamp in epoch milliseconds.
    pub updated_at: i64,
}
