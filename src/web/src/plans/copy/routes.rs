use crate::AppData;
use axum::Router;
use axum::routing::post;

pub fn routes() -> Router<AppData> {
    Router::new().route("/api/plans/{plan_id}/copy", post(super::plan_copy_action))
}
