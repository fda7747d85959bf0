use std::env;
use std::time::Duration;

/// Settings for the database-backed CORS allow-list.
///
/// The allow-list itself lives in the `origins` table; this only controls
/// how long a fetched list may be reused before re-reading the table.
#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub cache_ttl: Duration,
}

impl CorsConfig {
    pub fn from_env() -> Self {
        let secs = env::var("CORS_CACHE_TTL_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);

        Self {
            cache_ttl: Duration::from_secs(secs),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            cache_ttl: Duration::from_secs(5),
        }
    }
}
