use std::sync::LazyLock;

use chrono::{Local, NaiveDateTime};
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::modules::tasks::status::{STATUS_VALIDATION_MESSAGE, Status};
use crate::utils::pagination::PageParams;

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9- ]+$").unwrap());

static DESCRIPTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^[A-Za-z0-9.,!?'"()\-:;\s]*$"#).unwrap());

#[derive(Debug, Serialize, Deserialize, FromRow, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: String,
    pub due_date_time: NaiveDateTime,
}

/// Request body for task create and full-replace update.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    #[validate(
        custom(function = validate_not_blank),
        length(
            min = 2,
            max = 100,
            message = "Title must be between 2 and 100 characters long"
        ),
        regex(
            path = *TITLE_RE,
            message = "Title must contain only alphanumerics and spaces"
        )
    )]
    pub title: String,

    #[serde(default)]
    #[validate(
        length(max = 500, message = "Description must be between 0 and 500 characters"),
        regex(path = *DESCRIPTION_RE, message = "Description contains invalid characters")
    )]
    pub description: String,

    #[validate(custom(function = validate_status))]
    pub status: String,

    #[validate(custom(function = validate_due_date_time))]
    pub due_date_time: NaiveDateTime,
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank").with_message("Title must not be blank".into()));
    }
    Ok(())
}

fn validate_status(value: &str) -> Result<(), ValidationError> {
    if Status::matches(value) {
        return Ok(());
    }
    Err(ValidationError::new("status").with_message(STATUS_VALIDATION_MESSAGE.into()))
}

fn validate_due_date_time(value: &NaiveDateTime) -> Result<(), ValidationError> {
    if *value >= Local::now().naive_local() {
        return Ok(());
    }
    Err(ValidationError::new("due_date_time")
        .with_message("Due date must be in the present or future".into()))
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct TitleSearchParams {
    pub title: String,
    #[serde(flatten)]
    pub page: PageParams,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct StatusSearchParams {
    pub status: String,
    #[serde(flatten)]
    pub page: PageParams,
}
