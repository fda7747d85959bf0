mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

use common::{due_tomorrow, insert_task, send, setup_test_app, task_body};

#[sqlx::test(migrations = "./migrations")]
async fn test_create_task_returns_created_with_location(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let (status, headers, _) =
        send(app, "POST", "/api/tasks", Some(task_body("Back-end Task"))).await;

    assert_eq!(status, StatusCode::CREATED);
    let location = headers.get("location").unwrap().to_str().unwrap().to_string();
    assert!(location.starts_with("/api/tasks/"));

    let app = setup_test_app(pool);
    let (status, _, body) = send(app, "GET", &location, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Back-end Task");
    assert_eq!(body["status"], "To do");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_duplicate_title_conflicts(pool: PgPool) {
    insert_task(&pool, "Unique Task", "To do").await;

    let app = setup_test_app(pool.clone());
    let (status, _, body) = send(app, "POST", "/api/tasks", Some(task_body("Unique Task"))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["Message"], "Task with title: Unique Task already exists");

    // No duplicate row was created.
    let app = setup_test_app(pool);
    let (_, _, body) = send(app, "GET", "/api/tasks", None).await;
    assert_eq!(body["totalElements"], 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_task_with_past_due_date_rejected(pool: PgPool) {
    let mut body = task_body("Late Task");
    body["dueDateTime"] = json!("2020-01-01T00:00:00");

    let app = setup_test_app(pool);
    let (status, _, body) = send(app, "POST", "/api/tasks", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["Message"]
            .as_str()
            .unwrap()
            .contains("Due date must be in the present or future")
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_task_with_markup_title_rejected(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let (status, _, _) = send(
        app,
        "POST",
        "/api/tasks",
        Some(task_body("<script>alert(1)</script>")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Hyphenated alphanumeric titles are fine.
    let app = setup_test_app(pool);
    let (status, _, _) = send(app, "POST", "/api/tasks", Some(task_body("Back-end Task"))).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_description_character_rules(pool: PgPool) {
    let mut body = task_body("Task One");
    body["description"] = json!("50% done");
    let app = setup_test_app(pool.clone());
    let (status, _, body) = send(app, "POST", "/api/tasks", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["Message"]
            .as_str()
            .unwrap()
            .contains("Description contains invalid characters")
    );

    let mut body = task_body("Task Two");
    body["description"] = json!(r#"Standard punctuation: .,!?'"()-:; is accepted."#);
    let app = setup_test_app(pool);
    let (status, _, _) = send(app, "POST", "/api/tasks", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_status_matched_case_insensitively(pool: PgPool) {
    let mut body = task_body("Lowercase Status");
    body["status"] = json!("in progress");
    let app = setup_test_app(pool.clone());
    let (status, _, _) = send(app, "POST", "/api/tasks", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);

    let mut body = task_body("Bad Status");
    body["status"] = json!("N/A");
    let app = setup_test_app(pool);
    let (status, _, body) = send(app, "POST", "/api/tasks", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["Message"].as_str().unwrap().contains("Invalid status"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_missing_task_returns_not_found(pool: PgPool) {
    let app = setup_test_app(pool);
    let (status, _, body) = send(app, "GET", "/api/tasks/999999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["Message"], "Task not found");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_is_paged_and_defaults_to_id_ascending(pool: PgPool) {
    let first = insert_task(&pool, "Task A", "To do").await;
    let second = insert_task(&pool, "Task B", "Pending").await;
    let third = insert_task(&pool, "Task C", "Completed").await;

    let app = setup_test_app(pool.clone());
    let (status, _, body) = send(app, "GET", "/api/tasks?page=0&size=1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["content"].as_array().unwrap().len(), 1);
    assert_eq!(body["content"][0]["id"], first);
    assert_eq!(body["totalElements"], 3);
    assert_eq!(body["totalPages"], 3);

    let app = setup_test_app(pool);
    let (status, _, body) = send(app, "GET", "/api/tasks", None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body["content"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![first, second, third]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_sort_spec(pool: PgPool) {
    insert_task(&pool, "Alpha", "To do").await;
    insert_task(&pool, "Zulu", "To do").await;

    let app = setup_test_app(pool.clone());
    let (status, _, body) = send(app, "GET", "/api/tasks?sort=title,desc", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["content"][0]["title"], "Zulu");

    let app = setup_test_app(pool);
    let (status, _, body) = send(app, "GET", "/api/tasks?sort=nosuchfield", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["Message"], "Cannot sort by field: nosuchfield");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_search_by_title_is_substring_case_insensitive(pool: PgPool) {
    insert_task(&pool, "Deploy backend service", "To do").await;
    insert_task(&pool, "Frontend polish", "To do").await;

    let app = setup_test_app(pool);
    let (status, _, body) = send(app, "GET", "/api/tasks/search-title?title=BACKEND", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalElements"], 1);
    assert_eq!(body["content"][0]["title"], "Deploy backend service");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_search_by_status_is_exact(pool: PgPool) {
    insert_task(&pool, "Task A", "In Progress").await;
    insert_task(&pool, "Task B", "In Progress").await;
    insert_task(&pool, "Task C", "Completed").await;

    let app = setup_test_app(pool);
    let (status, _, body) =
        send(app, "GET", "/api/tasks/search-status?status=In%20Progress", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalElements"], 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_replaces_all_fields(pool: PgPool) {
    let id = insert_task(&pool, "Original Title", "To do").await;

    let payload = json!({
        "title": "Updated Title",
        "description": "Now with a description.",
        "status": "Completed",
        "dueDateTime": due_tomorrow(),
    });
    let app = setup_test_app(pool.clone());
    let (status, _, _) = send(app, "PUT", &format!("/api/tasks/{id}"), Some(payload)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let app = setup_test_app(pool);
    let (_, _, body) = send(app, "GET", &format!("/api/tasks/{id}"), None).await;
    assert_eq!(body["id"], id);
    assert_eq!(body["title"], "Updated Title");
    assert_eq!(body["status"], "Completed");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_missing_task_returns_not_found(pool: PgPool) {
    let app = setup_test_app(pool);
    let (status, _, _) = send(
        app,
        "PUT",
        "/api/tasks/999999",
        Some(task_body("Ghost Task")),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_to_existing_title_conflicts(pool: PgPool) {
    insert_task(&pool, "Taken Title", "To do").await;
    let id = insert_task(&pool, "Other Title", "To do").await;

    let app = setup_test_app(pool);
    let (status, _, _) = send(
        app,
        "PUT",
        &format!("/api/tasks/{id}"),
        Some(task_body("Taken Title")),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_task(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let (status, _, _) = send(app, "DELETE", "/api/tasks/999999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let id = insert_task(&pool, "Doomed Task", "To do").await;
    let app = setup_test_app(pool.clone());
    let (status, _, _) = send(app, "DELETE", &format!("/api/tasks/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let app = setup_test_app(pool);
    let (status, _, _) = send(app, "GET", &format!("/api/tasks/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
