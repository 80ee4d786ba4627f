use crate::AppData;
use axum::Router;
use axum::routing::{delete, post};

pub fn routes() -> Router<AppData> {
    Router::new()
        .route(
            "/api/plans/{plan_id}/activities",
            post(super::activity_create_action),
        )
        .route(
            "/api/plans/{plan_id}/activities/reorder",
            post(super::activity_reorder_action),
        )
        .route(
            "/api/plans/{plan_id}/activities/{id}",
            delete(super::activity_delete_action).put(super::activity_edit_action),
        )
}
