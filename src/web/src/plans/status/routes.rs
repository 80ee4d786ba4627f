use crate::AppData;
use axum::Router;
use axum::routing::get;

pub fn routes() -> Router<AppData> {
    Router::new().route(
        "/api/plans/{plan_id}/activities/status",
        get(super::plan_status_action),
    )
}
