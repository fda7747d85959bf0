use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::utils::errors::AppError;

/// Wire field name to SQL column for every sortable task field.
const SORTABLE_FIELDS: [(&str, &str); 5] = [
    ("id", "id"),
    ("title", "title"),
    ("description", "description"),
    ("status", "status"),
    ("dueDateTime", "due_date_time"),
];

fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => s.parse::<i64>().map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Query parameters for paged task listings: `?page&size&sort`.
///
/// `sort` takes `field` or `field,asc|desc` against a column whitelist.
#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct PageParams {
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub size: Option<i64>,
    pub sort: Option<String>,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: Some(0),
            size: Some(20),
            sort: None,
        }
    }
}

impl PageParams {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(0).max(0)
    }

    pub fn size(&self) -> i64 {
        self.size.unwrap_or(20).clamp(1, 100)
    }

    pub fn offset(&self) -> i64 {
        self.page() * self.size()
    }

    /// Resolves the sort spec against the whitelist. Defaults to ascending
    /// by id when unspecified.
    pub fn order_by(&self) -> Result<OrderBy, AppError> {
        let Some(sort) = self.sort.as_deref().map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(OrderBy::default());
        };

        let mut parts = sort.splitn(2, ',');
        let field = parts.next().unwrap_or_default().trim();
        let direction = parts.next().map(str::trim);

        let column = SORTABLE_FIELDS
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, column)| *column)
            .ok_or_else(|| {
                AppError::bad_request(anyhow::anyhow!("Cannot sort by field: {}", field))
            })?;

        let descending = match direction {
            None => false,
            Some(d) if d.eq_ignore_ascii_case("asc") => false,
            Some(d) if d.eq_ignore_ascii_case("desc") => true,
            Some(d) => {
                return Err(AppError::bad_request(anyhow::anyhow!(
                    "Invalid sort direction: {}",
                    d
                )));
            }
        };

        Ok(OrderBy { column, descending })
    }
}

/// A resolved, whitelist-checked sort order, safe to splice into SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy {
    pub column: &'static str,
    pub descending: bool,
}

impl Default for OrderBy {
    fn default() -> Self {
        Self {
            column: "id",
            descending: false,
        }
    }
}

impl OrderBy {
    pub fn sql(&self) -> String {
        let direction = if self.descending { "DESC" } else { "ASC" };
        format!("{} {}", self.column, direction)
    }
}

/// Page envelope returned by all paged endpoints.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: i64,
    pub size: i64,
    pub total_elements: i64,
    pub total_pages: i64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, page: i64, size: i64, total_elements: i64) -> Self {
        let total_pages = if total_elements == 0 {
            0
        } else {
            (total_elements + size - 1) / size
        };
        Self {
            content,
            page,
            size,
            total_elements,
            total_pages,
        }
    }
}
