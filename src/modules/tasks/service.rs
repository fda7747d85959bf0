use sqlx::PgPool;
use tracing::instrument;

use crate::modules::tasks::model::{Task, TaskPayload};
use crate::utils::errors::AppError;
use crate::utils::pagination::{Page, PageParams};

const TASK_COLUMNS: &str = "id, title, description, status, due_date_time";

pub struct TaskService;

impl TaskService {
    #[instrument(skip(db))]
    pub async fn create_task(db: &PgPool, payload: TaskPayload) -> Result<Task, AppError> {
        let task = sqlx::query_as::<_, Task>(
            r#"INSERT INTO tasks (title, description, status, due_date_time)
               VALUES ($1, $2, $3, $4)
               RETURNING id, title, description, status, due_date_time"#,
        )
        .bind(&payload.title)
        .bind(&payload.description)
        .bind(&payload.status)
        .bind(payload.due_date_time)
        .fetch_one(db)
        .await
        .map_err(|e| title_conflict(&payload.title, e))?;

        Ok(task)
    }

    #[instrument(skip(db))]
    pub async fn get_task_by_id(db: &PgPool, id: i64) -> Result<Task, AppError> {
        let query = format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Task not found")))
    }

    #[instrument(skip(db))]
    pub async fn get_tasks(db: &PgPool, params: PageParams) -> Result<Page<Task>, AppError> {
        let order = params.order_by()?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tasks")
            .fetch_one(db)
            .await?;

        // Order column comes from the whitelist, limit and offset are
        // clamped integers.
        let query = format!(
            "SELECT {TASK_COLUMNS} FROM tasks ORDER BY {} LIMIT {} OFFSET {}",
            order.sql(),
            params.size(),
            params.offset()
        );
        let tasks = sqlx::query_as::<_, Task>(&query).fetch_all(db).await?;

        Ok(Page::new(tasks, params.page(), params.size(), total))
    }

    #[instrument(skip(db))]
    pub async fn search_by_title(
        db: &PgPool,
        title: &str,
        params: PageParams,
    ) -> Result<Page<Task>, AppError> {
        let order = params.order_by()?;
        let pattern = format!("%{}%", title);

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tasks WHERE title ILIKE $1")
            .bind(&pattern)
            .fetch_one(db)
            .await?;

        let query = format!(
            "SELECT {TASK_COLUMNS} FROM tasks WHERE title ILIKE $1 ORDER BY {} LIMIT {} OFFSET {}",
            order.sql(),
            params.size(),
            params.offset()
        );
        let tasks = sqlx::query_as::<_, Task>(&query)
            .bind(&pattern)
            .fetch_all(db)
            .await?;

        Ok(Page::new(tasks, params.page(), params.size(), total))
    }

    #[instrument(skip(db))]
    pub async fn search_by_status(
        db: &PgPool,
        status: &str,
        params: PageParams,
    ) -> Result<Page<Task>, AppError> {
        let order = params.order_by()?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tasks WHERE status = $1")
            .bind(status)
            .fetch_one(db)
            .await?;

        let query = format!(
            "SELECT {TASK_COLUMNS} FROM tasks WHERE status = $1 ORDER BY {} LIMIT {} OFFSET {}",
            order.sql(),
            params.size(),
            params.offset()
        );
        let tasks = sqlx::query_as::<_, Task>(&query)
            .bind(status)
            .fetch_all(db)
            .await?;

        Ok(Page::new(tasks, params.page(), params.size(), total))
    }

    #[instrument(skip(db))]
    pub async fn update_task(db: &PgPool, id: i64, payload: TaskPayload) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"UPDATE tasks
               SET title = $1, description = $2, status = $3, due_date_time = $4
               WHERE id = $5"#,
        )
        .bind(&payload.title)
        .bind(&payload.description)
        .bind(&payload.status)
        .bind(payload.due_date_time)
        .bind(id)
        .execute(db)
        .await
        .map_err(|e| title_conflict(&payload.title, e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Task not found")));
        }
        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn delete_task(db: &PgPool, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Task not found")));
        }
        Ok(())
    }
}

/// The unique constraint on `tasks.title` is the sole source of conflict
/// detection; there is no pre-check that could race.
fn title_conflict(title: &str, e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e
        && db_err.is_unique_violation()
    {
        return AppError::conflict(anyhow::anyhow!(
            "Task with title: {} already exists",
            title
        ));
    }
    AppError::from(e)
}
