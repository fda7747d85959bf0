//! Application error type and the uniform error envelope.
//!
//! Failures carry a domain-level [`ErrorKind`]; HTTP status codes are
//! assigned only when a response is produced. Every error response is
//! rendered as `{"time", "status", "Message", "path"}` by
//! [`error_envelope_middleware`], which runs as a router layer so it can see
//! the request path.

use anyhow::Error;
use axum::{
    Json,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use utoipa::ToSchema;

/// Domain-level failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// One or more request fields failed validation.
    Validation,
    /// The request was malformed (bad body, unknown sort field, ...).
    BadRequest,
    /// A unique field collided with an existing row.
    Conflict,
    /// The addressed resource does not exist.
    NotFound,
    /// Anything else. Errors without an explicit kind land here.
    Internal,
}

impl ErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::Validation | ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug)]
pub struct AppError {
    pub kind: ErrorKind,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(kind: ErrorKind, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            kind,
            error: err.into(),
        }
    }

    pub fn validation<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Validation, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::BadRequest, err)
    }

    pub fn conflict<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Conflict, err)
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::NotFound, err)
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Internal, err)
    }
}

/// Wire shape of every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub time: NaiveDateTime,
    pub status: u16,
    #[serde(rename = "Message")]
    pub message: String,
    pub path: String,
}

/// Response extension carrying the error out of a handler so the envelope
/// middleware can attach the request path.
#[derive(Debug, Clone)]
pub struct ErrorDetail {
    pub status: StatusCode,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.kind.status();
        let mut response = status.into_response();
        response.extensions_mut().insert(ErrorDetail {
            status,
            message: self.error.to_string(),
        });
        response
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}

/// Rewrites responses produced by [`AppError`] into the uniform envelope.
pub async fn error_envelope_middleware(req: Request, next: Next) -> Response {
    let path = req.uri().path().to_string();
    let response = next.run(req).await;

    let Some(detail) = response.extensions().get::<ErrorDetail>().cloned() else {
        return response;
    };

    let body = ErrorResponse {
        time: Local::now().naive_local(),
        status: detail.status.as_u16(),
        message: detail.message,
        path,
    };
    (detail.status, Json(body)).into_response()
}
