use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

// Optional scheme, hostname or IPv4, optional port.
static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(https?://)?((([a-zA-Z0-9-]+\.)+[a-zA-Z]{2,})|(25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)(\.(25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)){3})(:\d{1,5})?$",
    )
    .unwrap()
});

/// A URL permitted as a cross-origin request source.
#[derive(Debug, Serialize, Deserialize, FromRow, PartialEq, ToSchema)]
pub struct Origin {
    pub id: i64,
    pub uri: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct OriginPayload {
    #[validate(regex(path = *URL_RE, message = "Invalid url"))]
    pub uri: String,
}
