pub mod routes;

use crate::plans::{parse_start_time, parse_weekday};
use crate::{ApiResult, AppData};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::NaiveDate;
use database::PlanOverrides;
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize)]
pub struct PlanCopyParams {
    pub plan_id: u32,
}

/// All fields optional; unset fields keep the original plan's values.
#[derive(Deserialize, Default)]
pub struct PlanCopyRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub weekday: Option<u8>,
    #[serde(default)]
    pub start_time: Option<String>,
}

pub async fn plan_copy_action(
    State(state): State<AppData>,
    Path(route_params): Path<PlanCopyParams>,
    Json(request): Json<PlanCopyRequest>,
) -> ApiResult<impl IntoResponse> {
    let overrides = PlanOverrides {
        title: request.title,
        team_name: request.team_name,
        start_date: request.start_date,
        end_date: request.end_date,
        weekday: request.weekday.map(parse_weekday).transpose()?,
        start_time: request
            .start_time
            .as_deref()
            .map(parse_start_time)
            .transpose()?,
    };

    let mut guard = state.database.write().await;
    let copy_id = guard.plans.copy_plan(route_params.plan_id, overrides)?;

    Ok((StatusCode::CREATED, Json(json!({ "id": copy_id }))))
}
