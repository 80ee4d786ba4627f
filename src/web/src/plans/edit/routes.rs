use crate::AppData;
use axum::Router;
use axum::routing::put;

pub fn routes() -> Router<AppData> {
    Router::new().route("/api/plans/{plan_id}", put(super::plan_edit_action))
}
