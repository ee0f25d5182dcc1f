//! Task statistics service.
//!
//! # Responsibility
//! - Aggregate stored tasks into per-status counts and a completion
//!   rate.
//!
//! # Invariants
//! - Pure read; never writes.
//! - `completion_rate` is `0.0` for an empty store (no division by
//!   zero), otherwise a percentage rounded to one decimal place with
//!   ties away from zero.

use crate::model::task::Status;
use crate::repo::task_repo::TaskRepository;
use crate::repo::RepoResult;
use serde::{Deserialize, Serialize};

/// Per-status task counts. Statuses with no tasks report `0`.
///
/// Serializes to the external camelCase shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub not_started: u64,
    pub in_progress: u64,
    pub completed: u64,
}

/// Aggregated view over the current set of stored tasks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskReport {
    /// Total task count regardless of status.
    pub total_count: u64,
    pub count_by_status: StatusCounts,
    /// Percentage of tasks whose status is `completed`, one decimal.
    pub completion_rate: f64,
}

/// Use-case service computing task statistics.
pub struct ReportService<R: TaskRepository> {
    repo: R,
}

impl<R: TaskRepository> ReportService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Computes the current task statistics.
    ///
    /// # Contract
    /// - `total_count` equals the sum of all per-status counts.
    /// - Statuses with no tasks count as `0`.
    /// - An empty store yields `completion_rate = 0.0`.
    pub fn statistics(&self) -> RepoResult<TaskReport> {
        let grouped = self.repo.count_by_status()?;
        let count_by_status = StatusCounts {
            not_started: grouped.get(&Status::NotStarted).copied().unwrap_or(0),
            in_progress: grouped.get(&Status::InProgress).copied().unwrap_or(0),
            completed: grouped.get(&Status::Completed).copied().unwrap_or(0),
        };

        let total_count = count_by_status.not_started
            + count_by_status.in_progress
            + count_by_status.completed;

        let completion_rate = if total_count == 0 {
            0.0
        } else {
            round_one_decimal(count_by_status.completed as f64 / total_count as f64 * 100.0)
        };

        Ok(TaskReport {
            total_count,
            count_by_status,
            completion_rate,
        })
    }
}

/// Rounds to one decimal place, ties away from zero (`f64::round`).
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
