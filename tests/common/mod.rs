use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use chrono::{Duration, Local};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::PgPool;
use tower::ServiceExt;

use taskdeck::config::cors::CorsConfig;
use taskdeck::middleware::cors::OriginCache;
use taskdeck::router::init_router;
use taskdeck::state::AppState;

pub fn setup_test_app(pool: PgPool) -> axum::Router {
    let cors_config = CorsConfig::default();
    let state = AppState {
        db: pool,
        origin_cache: OriginCache::new(cors_config.cache_ttl),
        cors_config,
    };
    init_router(state)
}

/// Sends one request through the router and collects status, headers, and
/// the parsed JSON body (Null when the body is empty).
pub async fn send(
    app: axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, HeaderMap, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, headers, json)
}

/// An ISO local date-time one day in the future, always valid for the
/// present-or-future due-date rule.
#[allow(dead_code)]
pub fn due_tomorrow() -> String {
    (Local::now() + Duration::days(1))
        .format("%Y-%m-%dT%H:%M:%S")
        .to_string()
}

#[allow(dead_code)]
pub fn task_body(title: &str) -> Value {
    json!({
        "title": title,
        "description": "Created by test",
        "status": "To do",
        "dueDateTime": due_tomorrow(),
    })
}

#[allow(dead_code)]
pub async fn insert_task(pool: &PgPool, title: &str, status: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        r#"INSERT INTO tasks (title, description, status, due_date_time)
           VALUES ($1, $2, $3, $4)
           RETURNING id"#,
    )
    .bind(title)
    .bind("Seeded row")
    .bind(status)
    .bind((Local::now() + Duration::days(1)).naive_local())
    .fetch_one(pool)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn insert_origin(pool: &PgPool, uri: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("INSERT INTO origins (uri) VALUES ($1) RETURNING id")
        .bind(uri)
        .fetch_one(pool)
        .await
        .unwrap()
}
