use axum::{Router, middleware};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::middleware::cors::cors_middleware;
use crate::modules::origins::router::init_origins_router;
use crate::modules::tasks::router::init_tasks_router;
use crate::state::AppState;
use crate::utils::errors::error_envelope_middleware;

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .nest(
            "/api",
            Router::new()
                .nest("/tasks", init_tasks_router())
                .nest("/origins", init_origins_router()),
        )
        .with_state(state.clone())
        // Innermost first: envelope errors, then CORS (so error responses
        // carry CORS headers too), then request logging.
        .layer(middleware::from_fn(error_envelope_middleware))
        .layer(middleware::from_fn_with_state(state, cors_middleware))
        .layer(middleware::from_fn(logging_middleware))
}
