//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record and its enumerated fields.
//! - Define the create-time attribute set (`TaskDraft`) with
//!   field-present-or-absent semantics.
//!
//! # Invariants
//! - `id` is stable, store-assigned and never reused.
//! - `status` and `priority` are closed three-variant enums.
//! - An absent `explanation` is `None`, never an empty string.
//!
//! # See also
//! - docs/architecture/data-model.md

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::genre::GenreId;

/// Stable identifier for a persisted task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = i64;

/// Urgency ranking for a task.
///
/// Persisted as small integers (`0..=2`); exposed only as named variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Default for Priority {
    /// Store-side default when creation omits the field.
    fn default() -> Self {
        Self::Medium
    }
}

/// Task lifecycle state.
///
/// Persisted as small integers (`0..=2`); exposed only as named variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Created but not started.
    NotStarted,
    /// Work is in progress.
    InProgress,
    /// Completed successfully.
    Completed,
}

impl Default for Status {
    /// Store-side default when creation omits the field.
    fn default() -> Self {
        Self::NotStarted
    }
}

/// Canonical persisted task record.
///
/// All fields reflect stored state; timestamps are assigned by the store
/// and `created_at` is never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned stable id.
    pub id: TaskId,
    /// Display name. May be empty; no length constraint in the core.
    pub name: String,
    /// Optional free-form detail text.
    pub explanation: Option<String>,
    /// Owning genre. Must reference an existing genre at creation time.
    pub genre_id: GenreId,
    pub priority: Priority,
    pub status: Status,
    /// Optional calendar date without a time component.
    pub deadline_date: Option<NaiveDate>,
    /// Creation timestamp in epoch milliseconds.
    pub created_at: i64,
    /// Last-write timestamp in epoch milliseconds.
    pub updated_at: i64,
}

/// Create-time attribute set.
///
/// Every field is optional: an absent field is genuinely omitted (not
/// nulled), letting the store apply its own defaults (`Medium` priority,
/// `NotStarted` status, empty name). A draft without `genre_id` is
/// rejected at persistence time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub name: Option<String>,
    pub explanation: Option<String>,
    pub genre_id: Option<GenreId>,
    pub priority: Option<Priority>,
    pub status: Option<Status>,
    pub deadline_date: Option<NaiveDate>,
}

impl TaskDraft {
    /// Minimal valid draft: a named task in a genre, everything else
    /// left to store defaults.
    pub fn named(name: impl Into<String>, genre_id: GenreId) -> Self {
        Self {
            name: Some(name.into()),
            genre_id: Some(genre_id),
            ..Self::default()
        }
    }
}
