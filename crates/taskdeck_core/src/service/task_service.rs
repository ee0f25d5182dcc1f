//! Task use-case service.
//!
//! # Responsibility
//! - Normalize inbound creation fields into a canonical draft.
//! - Derive duplicate drafts under the fixed reset rules.
//! - Provide update/status/delete/list entry points for core callers.
//!
//! # Invariants
//! - Normalization only renames and drops absent fields; it never
//!   validates. Validation belongs to the repository.
//! - Duplication persists exactly one new record and never mutates the
//!   source task.
//!
//! # See also
//! - docs/architecture/data-model.md

use crate::model::genre::GenreId;
use crate::model::task::{Priority, Status, Task, TaskDraft, TaskId};
use crate::repo::task_repo::TaskRepository;
use crate::repo::{RepoError, RepoResult};
use chrono::NaiveDate;
use serde::Deserialize;

/// Fixed literal appended to a duplicated task's name.
///
/// Appended as-is: repeated duplication stacks the suffix, and names of
/// any length or script are handled the same way.
pub const COPY_SUFFIX: &str = "(コピー)";

/// Inbound creation fields under the external naming convention.
///
/// `genreId` and `deadlineDate` arrive camelCased; everything else is
/// already canonical. Absent fields stay absent through normalization so
/// the store can apply its own defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateTaskParams {
    pub name: Option<String>,
    pub explanation: Option<String>,
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    #[serde(rename = "genreId")]
    pub genre_id: Option<GenreId>,
    #[serde(rename = "deadlineDate")]
    pub deadline_date: Option<NaiveDate>,
}

/// Inbound update fields; present fields overwrite, absent fields keep
/// their current values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateTaskParams {
    pub name: Option<String>,
    pub explanation: Option<String>,
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    #[serde(rename = "genreId")]
    pub genre_id: Option<GenreId>,
    #[serde(rename = "deadlineDate")]
    pub deadline_date: Option<NaiveDate>,
}

/// Maps external creation fields onto the canonical attribute set.
///
/// A pure rename/compact step: keys absent from the input are absent
/// from the draft, not nulled.
pub fn normalized_draft(params: &CreateTaskParams) -> TaskDraft {
    TaskDraft {
        name: params.name.clone(),
        explanation: params.explanation.clone(),
        genre_id: params.genre_id,
        priority: params.priority,
        status: params.status,
        deadline_date: params.deadline_date,
    }
}

/// Derives the attribute set for a duplicate of `original`.
///
/// # Contract
/// - `name` gains the fixed copy suffix, unconditionally.
/// - `status` is forced to `NotStarted`; `deadline_date` is forced
///   absent.
/// - `explanation`, `genre_id` and `priority` are copied verbatim.
pub fn duplicate_draft(original: &Task) -> TaskDraft {
    TaskDraft {
        name: Some(format!("{}{COPY_SUFFIX}", original.name)),
        explanation: original.explanation.clone(),
        genre_id: Some(original.genre_id),
        priority: Some(original.priority),
        status: Some(Status::NotStarted),
        deadline_date: None,
    }
}

/// Use-case service facade for task operations.
pub struct TaskService<R: TaskRepository> {
    repo: R,
}

impl<R: TaskRepository> TaskService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a task from external creation fields.
    ///
    /// Normalization is pure; all validation (genre presence/existence,
    /// defaults) happens in the repository.
    pub fn create_task(&self, params: &CreateTaskParams) -> RepoResult<Task> {
        self.repo.create_task(&normalized_draft(params))
    }

    /// Duplicates an existing task under the fixed reset rules.
    ///
    /// # Contract
    /// - Persists exactly one new record with a fresh id and timestamps.
    /// - The source task is left completely unmodified.
    ///
    /// # Errors
    /// - `TaskNotFound` when `id` matches no stored task.
    /// - `Validation` when the derived attributes are rejected by the
    ///   store; no partial record is left behind.
    pub fn duplicate_task(&self, id: TaskId) -> RepoResult<Task> {
        let original = self
            .repo
            .get_task(id)?
            .ok_or(RepoError::TaskNotFound(id))?;
        self.repo.create_task(&duplicate_draft(&original))
    }

    /// Applies a partial update to one task and returns the new state.
    pub fn update_task(&self, id: TaskId, params: &UpdateTaskParams) -> RepoResult<Task> {
        let mut task = self
            .repo
            .get_task(id)?
            .ok_or(RepoError::TaskNotFound(id))?;

        if let Some(name) = &params.name {
            task.name = name.clone();
        }
        if let Some(explanation) = &params.explanation {
            task.explanation = Some(explanation.clone());
        }
        if let Some(status) = params.status {
            task.status = status;
        }
        if let Some(priority) = params.priority {
            task.priority = priority;
        }
        if let Some(genre_id) = params.genre_id {
            task.genre_id = genre_id;
        }
        if let Some(deadline) = params.deadline_date {
            task.deadline_date = Some(deadline);
        }

        self.repo.update_task(&task)?;
        self.repo
            .get_task(id)?
            .ok_or(RepoError::TaskNotFound(id))
    }

    /// Status-only transition for one task.
    pub fn update_status(&self, id: TaskId, status: Status) -> RepoResult<Task> {
        let mut task = self
            .repo
            .get_task(id)?
            .ok_or(RepoError::TaskNotFound(id))?;
        task.status = status;

        self.repo.update_task(&task)?;
        self.repo
            .get_task(id)?
            .ok_or(RepoError::TaskNotFound(id))
    }

    /// Gets one task by stable id.
    pub fn get_task(&self, id: TaskId) -> RepoResult<Option<Task>> {
        self.repo.get_task(id)
    }

    /// Lists all tasks in stable creation order.
    pub fn list_tasks(&self) -> RepoResult<Vec<Task>> {
        self.repo.list_tasks()
    }

    /// Hard-deletes one task by stable id.
    pub fn delete_task(&self, id: TaskId) -> RepoResult<()> {
        self.repo.delete_task(id)
    }
}
