use sqlx::PgPool;
use tracing::instrument;

use crate::modules::origins::model::{Origin, OriginPayload};
use crate::utils::errors::AppError;

pub struct OriginService;

impl OriginService {
    #[instrument(skip(db))]
    pub async fn create_origin(db: &PgPool, payload: OriginPayload) -> Result<Origin, AppError> {
        let origin = sqlx::query_as::<_, Origin>(
            "INSERT INTO origins (uri) VALUES ($1) RETURNING id, uri",
        )
        .bind(&payload.uri)
        .fetch_one(db)
        .await
        .map_err(uri_conflict)?;

        Ok(origin)
    }

    #[instrument(skip(db))]
    pub async fn get_origin_by_id(db: &PgPool, id: i64) -> Result<Origin, AppError> {
        sqlx::query_as::<_, Origin>("SELECT id, uri FROM origins WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Origin not found")))
    }

    /// Full unpaged collection, as consumed by the CORS resolver.
    #[instrument(skip(db))]
    pub async fn get_origins(db: &PgPool) -> Result<Vec<Origin>, AppError> {
        let origins = sqlx::query_as::<_, Origin>("SELECT id, uri FROM origins ORDER BY id ASC")
            .fetch_all(db)
            .await?;
        Ok(origins)
    }

    #[instrument(skip(db))]
    pub async fn update_origin(
        db: &PgPool,
        id: i64,
        payload: OriginPayload,
    ) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE origins SET uri = $1 WHERE id = $2")
            .bind(&payload.uri)
            .bind(id)
            .execute(db)
            .await
            .map_err(uri_conflict)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Origin not found")));
        }
        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn delete_origin(db: &PgPool, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM origins WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Origin not found")));
        }
        Ok(())
    }
}

/// The unique constraint on `origins.uri` is the sole source of conflict
/// detection; there is no pre-check that could race.
fn uri_conflict(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e
        && db_err.is_unique_violation()
    {
        return AppError::conflict(anyhow::anyhow!("Already exists"));
    }
    AppError::from(e)
}
