//! CORS resolution against the `origins` table.
//!
//! The allow-list is whatever the table holds right now, read through a
//! TTL-bounded cache so high traffic does not turn into one query per
//! request. Origin writes invalidate the cache explicitly, so changes take
//! effect immediately and no restart is ever needed.

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use sqlx::PgPool;
use tokio::sync::RwLock;
use tracing::warn;

use crate::modules::origins::model::Origin;
use crate::state::AppState;

#[derive(Debug)]
struct CacheEntry {
    fetched_at: Instant,
    uris: Vec<String>,
}

/// Read-through cache over the uris in the `origins` table.
#[derive(Clone, Debug)]
pub struct OriginCache {
    ttl: Duration,
    inner: Arc<RwLock<Option<CacheEntry>>>,
}

impl OriginCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            inner: Arc::new(RwLock::new(None)),
        }
    }

    /// Returns the current allow-list, re-reading the table once the cached
    /// copy is older than the TTL.
    pub async fn allowed_origins(&self, db: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        {
            let guard = self.inner.read().await;
            if let Some(entry) = guard.as_ref()
                && entry.fetched_at.elapsed() < self.ttl
            {
                return Ok(entry.uris.clone());
            }
        }

        let origins = sqlx::query_as::<_, Origin>("SELECT id, uri FROM origins ORDER BY id ASC")
            .fetch_all(db)
            .await?;
        let uris: Vec<String> = origins.into_iter().map(|origin| origin.uri).collect();

        *self.inner.write().await = Some(CacheEntry {
            fetched_at: Instant::now(),
            uris: uris.clone(),
        });
        Ok(uris)
    }

    /// Drops the cached copy so the next lookup re-reads the table. Called
    /// after every successful origin write.
    pub async fn invalidate(&self) {
        *self.inner.write().await = None;
    }
}

/// Per-request CORS decision: credentials allowed, all methods and common
/// headers allowed, allowed origins = the current `origins` table.
pub async fn cors_middleware(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let Some(origin) = req
        .headers()
        .get(header::ORIGIN)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
    else {
        // Same-origin request, nothing to decide.
        return next.run(req).await;
    };

    let allowed = match state.origin_cache.allowed_origins(&state.db).await {
        Ok(uris) => uris.iter().any(|uri| uri == &origin),
        Err(err) => {
            warn!(error = %err, "Failed to load CORS allow-list");
            false
        }
    };

    if req.method() == Method::OPTIONS {
        let mut response = StatusCode::NO_CONTENT.into_response();
        if allowed {
            apply_cors_headers(response.headers_mut(), &origin);
        }
        return response;
    }

    let mut response = next.run(req).await;
    if allowed {
        apply_cors_headers(response.headers_mut(), &origin);
    }
    response
}

fn apply_cors_headers(headers: &mut HeaderMap, origin: &str) {
    if let Ok(value) = HeaderValue::from_str(origin) {
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
    }
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, PUT, PATCH, DELETE, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("authorization, content-type, accept"),
    );
}
