use utoipa::OpenApi;

use crate::modules::origins::model::{Origin, OriginPayload};
use crate::modules::tasks::model::{Task, TaskPayload};
use crate::utils::errors::ErrorResponse;
use crate::utils::pagination::Page;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::tasks::controller::create_task,
        crate::modules::tasks::controller::get_tasks,
        crate::modules::tasks::controller::get_task_by_id,
        crate::modules::tasks::controller::search_tasks_by_title,
        crate::modules::tasks::controller::search_tasks_by_status,
        crate::modules::tasks::controller::update_task,
        crate::modules::tasks::controller::delete_task,
        crate::modules::origins::controller::create_origin,
        crate::modules::origins::controller::get_origins,
        crate::modules::origins::controller::get_origin_by_id,
        crate::modules::origins::controller::update_origin,
        crate::modules::origins::controller::delete_origin,
    ),
    components(schemas(Task, TaskPayload, Origin, OriginPayload, Page<Task>, ErrorResponse)),
    tags(
        (name = "Tasks", description = "Task management endpoints"),
        (name = "Origins", description = "CORS allow-list management endpoints")
    )
)]
pub struct ApiDoc;
