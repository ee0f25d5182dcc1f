//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`TaskNotFound`,
//!   `Validation`) in addition to DB transport errors.
//! - A failed write leaves no partial record behind.

use crate::db::DbError;
use crate::model::genre::GenreId;
use crate::model::task::TaskId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod genre_repo;
pub mod task_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ValidationError),
    Db(DbError),
    TaskNotFound(TaskId),
    GenreNotFound(GenreId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::GenreNotFound(id) => write!(f, "genre not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::TaskNotFound(_) | Self::GenreNotFound(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Store-side rejection of attributes about to be persisted.
///
/// Shared across task and genre repositories; the triggering write is
/// discarded as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Create draft carried no genre reference at all.
    GenreRequired,
    /// Referenced genre does not exist.
    GenreMissing(GenreId),
    /// Genre name was empty or whitespace-only.
    GenreNameRequired,
    /// Genre deletion refused while tasks still reference it.
    GenreInUse { id: GenreId, task_count: u64 },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GenreRequired => write!(f, "genre_id is required"),
            Self::GenreMissing(id) => write!(f, "referenced genre does not exist: {id}"),
            Self::GenreNameRequired => write!(f, "genre name must not be empty"),
            Self::GenreInUse { id, task_count } => {
                write!(f, "genre {id} still referenced by {task_count} task(s)")
            }
        }
    }
}

impl Error for ValidationError {}
