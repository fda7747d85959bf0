use axum::{Router, routing::get, routing::post};

use crate::state::AppState;

use super::controller::{
    create_origin, delete_origin, get_origin_by_id, get_origins, update_origin,
};

pub fn init_origins_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_origin).get(get_origins))
        .route(
            "/{id}",
            get(get_origin_by_id)
                .put(update_origin)
                .delete(delete_origin),
        )
}
