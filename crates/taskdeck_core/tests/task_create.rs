use chrono::NaiveDate;
use taskdeck_core::db::open_db_in_memory;
use taskdeck_core::{
    CreateTaskParams, GenreId, GenreRepository, Priority, RepoError, SqliteGenreRepository,
    SqliteTaskRepository, Status, TaskService, ValidationError,
};

#[test]
fn create_with_name_and_genre_only_uses_store_defaults() {
    let conn = open_db_in_memory().unwrap();
    let genre_id = create_genre(&conn, "テストジャンル");
    let service = task_service(&conn);

    let task = service
        .create_task(&CreateTaskParams {
            name: Some("テストタスク".to_string()),
            genre_id: Some(genre_id),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(task.name, "テストタスク");
    assert_eq!(task.genre_id, genre_id);
    assert_eq!(task.priority, Priority::Medium);
    assert_eq!(task.status, Status::NotStarted);
    assert_eq!(task.explanation, None);
    assert_eq!(task.deadline_date, None);
}

#[test]
fn create_honors_explicit_priority() {
    let conn = open_db_in_memory().unwrap();
    let genre_id = create_genre(&conn, "テストジャンル");
    let service = task_service(&conn);

    for priority in [Priority::Low, Priority::High] {
        let task = service
            .create_task(&CreateTaskParams {
                name: Some("テストタスク".to_string()),
                explanation: Some("タスクの説明".to_string()),
                genre_id: Some(genre_id),
                priority: Some(priority),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(task.priority, priority);
    }
}

#[test]
fn create_carries_deadline_date_through_renaming() {
    let conn = open_db_in_memory().unwrap();
    let genre_id = create_genre(&conn, "genre");
    let service = task_service(&conn);

    let deadline = NaiveDate::from_ymd_opt(2026, 12, 31);
    let task = service
        .create_task(&CreateTaskParams {
            name: Some("year end".to_string()),
            genre_id: Some(genre_id),
            deadline_date: deadline,
            ..Default::default()
        })
        .unwrap();

    assert_eq!(task.deadline_date, deadline);
}

#[test]
fn external_json_field_names_map_to_canonical_attributes() {
    let conn = open_db_in_memory().unwrap();
    let genre_id = create_genre(&conn, "genre");
    let service = task_service(&conn);

    let params: CreateTaskParams = serde_json::from_value(serde_json::json!({
        "name": "wired task",
        "explanation": "came in camelCased",
        "genreId": genre_id,
        "deadlineDate": "2026-12-31",
        "priority": "high"
    }))
    .unwrap();

    let task = service.create_task(&params).unwrap();
    assert_eq!(task.genre_id, genre_id);
    assert_eq!(task.deadline_date, NaiveDate::from_ymd_opt(2026, 12, 31));
    assert_eq!(task.priority, Priority::High);
    assert_eq!(task.explanation.as_deref(), Some("came in camelCased"));
}

#[test]
fn create_without_genre_reference_fails_validation() {
    let conn = open_db_in_memory().unwrap();
    let service = task_service(&conn);

    let err = service
        .create_task(&CreateTaskParams {
            name: Some("floating".to_string()),
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::GenreRequired)
    ));

    let err = service
        .create_task(&CreateTaskParams {
            name: Some("floating".to_string()),
            genre_id: Some(404),
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::GenreMissing(404))
    ));
}

fn task_service(conn: &rusqlite::Connection) -> TaskService<SqliteTaskRepository<'_>> {
    TaskService::new(SqliteTaskRepository::new(conn))
}

fn create_genre(conn: &rusqlite::Connection, name: &str) -> GenreId {
    SqliteGenreRepository::new(conn)
        .create_genre(name)
        .unwrap()
        .id
}
