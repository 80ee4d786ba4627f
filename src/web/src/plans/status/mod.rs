pub mod routes;

use crate::{ApiError, ApiResult, AppData};
use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use core::{LiveStatus, LiveStatusClassifier};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Deserialize)]
pub struct PlanStatusRequest {
    pub plan_id: u32,
}

/// Live-tracking endpoint: maps activity ids to "now" or "soon". Inactive
/// activities are omitted rather than listed with a third literal.
pub async fn plan_status_action(
    State(state): State<AppData>,
    Path(route_params): Path<PlanStatusRequest>,
) -> ApiResult<impl IntoResponse> {
    let guard = state.database.read().await;

    let plan = guard
        .plans
        .plan(route_params.plan_id)
        .ok_or_else(|| ApiError::NotFound(format!("training plan {} not found", route_params.plan_id)))?;

    // One instant per request so every row is classified against the same clock
    let now = chrono::Local::now().naive_local();

    let status: HashMap<u32, LiveStatus> = guard
        .plans
        .plan_activities(plan.id)
        .into_iter()
        .filter_map(|stored| {
            let status = LiveStatusClassifier::classify(plan, stored.slot(), now);
            status.is_live().then_some((stored.activity.id, status))
        })
        .collect();

    Ok(Json(status))
}
