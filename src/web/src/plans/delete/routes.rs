use crate::AppData;
use axum::Router;
use axum::routing::delete;

pub fn routes() -> Router<AppData> {
    Router::new().route("/api/plans/{plan_id}", delete(super::plan_delete_action))
}
