use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_task, delete_task, get_task_by_id, get_tasks, search_tasks_by_status,
    search_tasks_by_title, update_task,
};

pub fn init_tasks_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_task).get(get_tasks))
        .route("/search-title", get(search_tasks_by_title))
        .route("/search-status", get(search_tasks_by_status))
        .route(
            "/{id}",
            get(get_task_by_id).put(update_task).delete(delete_task),
        )
}
