use sqlx::PgPool;

use crate::config::cors::CorsConfig;
use crate::config::database::init_db_pool;
use crate::middleware::cors::OriginCache;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub cors_config: CorsConfig,
    pub origin_cache: OriginCache,
}

pub async fn init_app_state() -> AppState {
    let cors_config = CorsConfig::from_env();
    AppState {
        db: init_db_pool().await,
        origin_cache: OriginCache::new(cors_config.cache_ttl),
        cors_config,
    }
}
