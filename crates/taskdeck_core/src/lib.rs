//! Core domain logic for taskdeck.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::genre::{Genre, GenreId};
pub use model::task::{Priority, Status, Task, TaskDraft, TaskId};
pub use repo::genre_repo::{GenreRepository, SqliteGenreRepository};
pub use repo::task_repo::{SqliteTaskRepository, TaskRepository};
pub use repo::{RepoError, RepoResult, ValidationError};
pub use service::report_service::{ReportService, StatusCounts, TaskReport};
pub use service::task_service::{
    duplicate_draft, normalized_draft, CreateTaskParams, TaskService, UpdateTaskParams,
    COPY_SUFFIX,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
