pub mod routes;

use crate::{ApiResult, AppData};
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use serde::Serialize;

#[derive(Serialize)]
pub struct PlanListItem {
    pub id: u32,
    pub title: String,
    pub team_name: String,
    pub start_date: String,
    pub end_date: String,
    pub weekday: String,
    pub weekday_color: &'static str,
    pub start_time: String,
    pub active_today: bool,
}

pub async fn plan_list_action(State(state): State<AppData>) -> ApiResult<impl IntoResponse> {
    let guard = state.database.read().await;
    let today = chrono::Local::now().date_naive();

    let items: Vec<PlanListItem> = guard
        .plans
        .plans()
        .iter()
        .map(|plan| PlanListItem {
            id: plan.id,
            title: plan.title.clone(),
            team_name: plan.team_name.clone(),
            start_date: plan.start_date.format("%d.%m.%Y").to_string(),
            end_date: plan.end_date.format("%d.%m.%Y").to_string(),
            weekday: plan.weekday_name().to_string(),
            weekday_color: plan.weekday_color(),
            start_time: plan.start_time.format("%H:%M").to_string(),
            active_today: plan.is_active_on(today),
        })
        .collect();

    Ok(Json(items))
}
