//! Task repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD + grouped-count APIs over `tasks` storage.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Create inserts only the columns present in the draft, so schema
//!   defaults apply to genuinely omitted fields.
//! - Read paths reject invalid persisted state instead of masking it.
//! - Enum columns hold small integers (`0..=2`) and never leak outward.
//!
//! # See also
//! - docs/architecture/data-model.md

use crate::model::genre::GenreId;
use crate::model::task::{Priority, Status, Task, TaskDraft, TaskId};
use crate::repo::{RepoError, RepoResult, ValidationError};
use chrono::NaiveDate;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use std::collections::BTreeMap;

const TASK_SELECT_SQL: &str = "SELECT
    id,
    name,
    explanation,
    genre_id,
    priority,
    status,
    deadline_date,
    created_at,
    updated_at
FROM tasks";

const DEADLINE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Repository interface for task CRUD and status aggregation.
pub trait TaskRepository {
    /// Persists a new task from a draft and returns the stored record,
    /// including store-applied defaults, generated id and timestamps.
    fn create_task(&self, draft: &TaskDraft) -> RepoResult<Task>;
    /// Gets one task by stable id.
    fn get_task(&self, id: TaskId) -> RepoResult<Option<Task>>;
    /// Full-record update; bumps `updated_at`, never `created_at`.
    fn update_task(&self, task: &Task) -> RepoResult<()>;
    /// Hard-deletes one task by stable id.
    fn delete_task(&self, id: TaskId) -> RepoResult<()>;
    /// Lists all tasks in stable creation order.
    fn list_tasks(&self) -> RepoResult<Vec<Task>>;
    /// Counts tasks grouped by status. Statuses with no tasks are absent
    /// from the map.
    fn count_by_status(&self) -> RepoResult<BTreeMap<Status, u64>>;
}

/// SQLite-backed task repository.
pub struct SqliteTaskRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TaskRepository for SqliteTaskRepository<'_> {
    fn create_task(&self, draft: &TaskDraft) -> RepoResult<Task> {
        let genre_id = draft
            .genre_id
            .ok_or(ValidationError::GenreRequired)?;

        // Only bind the columns the draft actually carries; the schema
        // supplies defaults for everything omitted.
        let mut columns = vec!["genre_id"];
        let mut values: Vec<Value> = vec![Value::Integer(genre_id)];

        if let Some(name) = &draft.name {
            columns.push("name");
            values.push(Value::Text(name.clone()));
        }
        if let Some(explanation) = &draft.explanation {
            columns.push("explanation");
            values.push(Value::Text(explanation.clone()));
        }
        if let Some(priority) = draft.priority {
            columns.push("priority");
            values.push(Value::Integer(priority_to_db(priority)));
        }
        if let Some(status) = draft.status {
            columns.push("status");
            values.push(Value::Integer(status_to_db(status)));
        }
        if let Some(deadline) = draft.deadline_date {
            columns.push("deadline_date");
            values.push(Value::Text(
                deadline.format(DEADLINE_DATE_FORMAT).to_string(),
            ));
        }

        let placeholders = (1..=columns.len())
            .map(|index| format!("?{index}"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "INSERT INTO tasks ({}) VALUES ({});",
            columns.join(", "),
            placeholders
        );

        self.conn
            .execute(&sql, params_from_iter(values))
            .map_err(|err| map_genre_reference_error(err, genre_id))?;

        let id = self.conn.last_insert_rowid();
        self.get_task(id)?.ok_or_else(|| {
            RepoError::InvalidData(format!("created task {id} missing on read-back"))
        })
    }

    fn get_task(&self, id: TaskId) -> RepoResult<Option<Task>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TASK_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_task_row(row)?));
        }

        Ok(None)
    }

    fn update_task(&self, task: &Task) -> RepoResult<()> {
        let changed = self
            .conn
            .execute(
                "UPDATE tasks
                 SET
                    name = ?1,
                    explanation = ?2,
                    genre_id = ?3,
                    priority = ?4,
                    status = ?5,
                    deadline_date = ?6,
                    updated_at = (strftime('%s', 'now') * 1000)
                 WHERE id = ?7;",
                params![
                    task.name.as_str(),
                    task.explanation.as_deref(),
                    task.genre_id,
                    priority_to_db(task.priority),
                    status_to_db(task.status),
                    task.deadline_date
                        .map(|date| date.format(DEADLINE_DATE_FORMAT).to_string()),
                    task.id,
                ],
            )
            .map_err(|err| map_genre_reference_error(err, task.genre_id))?;

        if changed == 0 {
            return Err(RepoError::TaskNotFound(task.id));
        }

        Ok(())
    }

    fn delete_task(&self, id: TaskId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM tasks WHERE id = ?1;", params![id])?;

        if changed == 0 {
            return Err(RepoError::TaskNotFound(id));
        }

        Ok(())
    }

    fn list_tasks(&self) -> RepoResult<Vec<Task>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TASK_SELECT_SQL} ORDER BY created_at ASC, id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut tasks = Vec::new();
        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(row)?);
        }

        Ok(tasks)
    }

    fn count_by_status(&self) -> RepoResult<BTreeMap<Status, u64>> {
        let mut stmt = self
            .conn
            .prepare("SELECT status, COUNT(*) FROM tasks GROUP BY status;")?;

        let mut rows = stmt.query([])?;
        let mut counts = BTreeMap::new();
        while let Some(row) = rows.next()? {
            let status_value: i64 = row.get(0)?;
            let status = parse_status(status_value).ok_or_else(|| {
                RepoError::InvalidData(format!(
                    "invalid status value `{status_value}` in tasks.status"
                ))
            })?;
            let count: i64 = row.get(1)?;
            counts.insert(status, count as u64);
        }

        Ok(counts)
    }
}

/// Constraint failures on task writes can only come from the genre
/// reference; everything else on `tasks` has a default.
fn map_genre_reference_error(err: rusqlite::Error, genre_id: GenreId) -> RepoError {
    match err {
        rusqlite::Error::SqliteFailure(code, _)
            if code.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            RepoError::Validation(ValidationError::GenreMissing(genre_id))
        }
        other => other.into(),
    }
}

fn parse_task_row(row: &Row<'_>) -> RepoResult<Task> {
    let priority_value: i64 = row.get("priority")?;
    let priority = parse_priority(priority_value).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid priority value `{priority_value}` in tasks.priority"
        ))
    })?;

    let status_value: i64 = row.get("status")?;
    let status = parse_status(status_value).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid status value `{status_value}` in tasks.status"
        ))
    })?;

    let deadline_date = match row.get::<_, Option<String>>("deadline_date")? {
        Some(text) => Some(
            NaiveDate::parse_from_str(&text, DEADLINE_DATE_FORMAT).map_err(|_| {
                RepoError::InvalidData(format!(
                    "invalid date value `{text}` in tasks.deadline_date"
                ))
            })?,
        ),
        None => None,
    };

    Ok(Task {
        id: row.get("id")?,
        name: row.get("name")?,
        explanation: row.get("explanation")?,
        genre_id: row.get("genre_id")?,
        priority,
        status,
        deadline_date,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

fn priority_to_db(priority: Priority) -> i64 {
    match priority {
        Priority::Low => 0,
        Priority::Medium => 1,
        Priority::High => 2,
    }
}

fn parse_priority(value: i64) -> Option<Priority> {
    match value {
        0 => Some(Priority::Low),
        1 => Some(Priority::Medium),
        2 => Some(Priority::High),
        _ => None,
    }
}

fn status_to_db(status: Status) -> i64 {
    match status {
        Status::NotStarted => 0,
        Status::InProgress => 1,
        Status::Completed => 2,
    }
}

fn parse_status(value: i64) -> Option<Status> {
    match value {
        0 => Some(Status::NotStarted),
        1 => Some(Status::InProgress),
        2 => Some(Status::Completed),
        _ => None,
    }
}
