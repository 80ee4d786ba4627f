pub mod routes;

use crate::{ApiResult, AppData};
use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize)]
pub struct PlanDeleteRequest {
    pub plan_id: u32,
}

pub async fn plan_delete_action(
    State(state): State<AppData>,
    Path(route_params): Path<PlanDeleteRequest>,
) -> ApiResult<impl IntoResponse> {
    let mut guard = state.database.write().await;
    guard.plans.delete_plan(route_params.plan_id)?;

    Ok(Json(json!({ "success": true })))
}
