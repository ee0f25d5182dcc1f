//! Genre repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide genre persistence APIs beside the task repository.
//! - Own the referential-integrity policy for genre deletion.
//!
//! # Invariants
//! - Genre names are non-empty at persistence time.
//! - Deletion is refused while any task references the genre; the
//!   schema foreign key backstops the same rule.

use crate::model::genre::{Genre, GenreId};
use crate::repo::{RepoError, RepoResult, ValidationError};
use rusqlite::{params, Connection, Row};

const GENRE_SELECT_SQL: &str = "SELECT id, name, created_at, updated_at FROM genres";

/// Repository interface for genre operations.
pub trait GenreRepository {
    /// Persists a new genre and returns the stored record.
    fn create_genre(&self, name: &str) -> RepoResult<Genre>;
    /// Gets one genre by stable id.
    fn get_genre(&self, id: GenreId) -> RepoResult<Option<Genre>>;
    /// Lists all genres in creation order.
    fn list_genres(&self) -> RepoResult<Vec<Genre>>;
    /// Deletes one genre. Fails while tasks still reference it.
    fn delete_genre(&self, id: GenreId) -> RepoResult<()>;
}

/// SQLite-backed genre repository.
pub struct SqliteGenreRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteGenreRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl GenreRepository for SqliteGenreRepository<'_> {
    fn create_genre(&self, name: &str) -> RepoResult<Genre> {
        if name.trim().is_empty() {
            return Err(ValidationError::GenreNameRequired.into());
        }

        self.conn
            .execute("INSERT INTO genres (name) VALUES (?1);", params![name])?;

        let id = self.conn.last_insert_rowid();
        self.get_genre(id)?.ok_or_else(|| {
            RepoError::InvalidData(format!("created genre {id} missing on read-back"))
        })
    }

    fn get_genre(&self, id: GenreId) -> RepoResult<Option<Genre>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{GENRE_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_genre_row(row)?));
        }

        Ok(None)
    }

    fn list_genres(&self) -> RepoResult<Vec<Genre>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{GENRE_SELECT_SQL} ORDER BY id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut genres = Vec::new();
        while let Some(row) = rows.next()? {
            genres.push(parse_genre_row(row)?);
        }

        Ok(genres)
    }

    fn delete_genre(&self, id: GenreId) -> RepoResult<()> {
        let task_count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM tasks WHERE genre_id = ?1;",
            params![id],
            |row| row.get(0),
        )?;

        if task_count > 0 {
            return Err(ValidationError::GenreInUse {
                id,
                task_count: task_count as u64,
            }
            .into());
        }

        let changed = self
            .conn
            .execute("DELETE FROM genres WHERE id = ?1;", params![id])?;

        if changed == 0 {
            return Err(RepoError::GenreNotFound(id));
        }

        Ok(())
    }
}

fn parse_genre_row(row: &Row<'_>) -> RepoResult<Genre> {
    Ok(Genre {
        id: row.get("id")?,
        name: row.get("name")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}
