pub mod routes;

use crate::plans::{parse_start_time, parse_weekday};
use crate::{ApiResult, AppData};
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::NaiveDate;
use core::TrainingPlan;
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize)]
pub struct PlanCreateRequest {
    pub title: String,
    pub team_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// 0 = Monday .. 6 = Sunday
    pub weekday: u8,
    pub start_time: String,
    #[serde(default)]
    pub dresscode: Option<String>,
    #[serde(default)]
    pub focus: Option<String>,
    #[serde(default)]
    pub goals: Option<String>,
}

pub async fn plan_create_action(
    State(state): State<AppData>,
    Json(request): Json<PlanCreateRequest>,
) -> ApiResult<impl IntoResponse> {
    let plan = TrainingPlan {
        id: 0,
        title: request.title,
        team_name: request.team_name,
        start_date: request.start_date,
        end_date: request.end_date,
        weekday: parse_weekday(request.weekday)?,
        start_time: parse_start_time(&request.start_time)?,
        dresscode: request.dresscode,
        focus: request.focus,
        goals: request.goals,
    };

    plan.validate()?;

    let mut guard = state.database.write().await;
    let id = guard.plans.create_plan(plan);

    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}
