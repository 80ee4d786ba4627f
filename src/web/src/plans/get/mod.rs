pub mod routes;

use crate::{ApiError, ApiResult, AppData};
use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use core::utils::FormattingUtils;
use core::{PositionGroup, reduce_agenda_cells};
use database::StoredActivity;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct PlanGetRequest {
    pub plan_id: u32,
}

#[derive(Serialize)]
pub struct PlanGetResponse {
    pub id: u32,
    pub title: String,
    pub team_name: String,
    pub start_date: String,
    pub end_date: String,
    pub weekday: String,
    pub weekday_color: &'static str,
    pub start_time: String,
    pub dresscode: Option<String>,
    pub focus: Option<String>,
    pub goals: Option<String>,
    pub group_order: Vec<&'static str>,
    pub activities: Vec<ActivityRow>,
}

#[derive(Serialize)]
pub struct ActivityRow {
    pub id: u32,
    pub name: String,
    pub category: &'static str,
    pub category_color: &'static str,
    pub time_from: String,
    pub time_to: String,
    pub duration_minutes: u16,
    pub duration_label: String,
    pub order: u32,
    pub notes: Option<String>,
    pub cells: Vec<CellDto>,
}

#[derive(Serialize)]
pub struct CellDto {
    pub span: usize,
    pub label: String,
    pub groups: Vec<&'static str>,
}

fn activity_row(stored: &StoredActivity) -> ActivityRow {
    let activity = &stored.activity;

    let cells = reduce_agenda_cells(
        activity.category,
        &activity.name,
        activity.group_assignments.as_ref(),
        activity.groups.as_ref(),
    );

    ActivityRow {
        id: activity.id,
        name: activity.name.clone(),
        category: activity.category.tag(),
        category_color: activity.category.color(),
        time_from: stored.time_from.format("%H:%M").to_string(),
        time_to: stored.time_to.format("%H:%M").to_string(),
        duration_minutes: activity.duration_minutes,
        duration_label: FormattingUtils::format_duration(u32::from(activity.duration_minutes)),
        order: activity.order,
        notes: activity.notes.clone(),
        cells: cells
            .into_iter()
            .map(|cell| CellDto {
                span: cell.span,
                label: cell.label,
                groups: cell.groups.iter().map(PositionGroup::tag).collect(),
            })
            .collect(),
    }
}

pub async fn plan_get_action(
    State(state): State<AppData>,
    Path(route_params): Path<PlanGetRequest>,
) -> ApiResult<impl IntoResponse> {
    let guard = state.database.read().await;

    let plan = guard
        .plans
        .plan(route_params.plan_id)
        .ok_or_else(|| ApiError::NotFound(format!("training plan {} not found", route_params.plan_id)))?;

    // Agenda order: pre-practice block first, then the regular block
    let (pre_practice, regular): (Vec<&StoredActivity>, Vec<&StoredActivity>) = guard
        .plans
        .plan_activities(plan.id)
        .into_iter()
        .partition(|stored| stored.activity.category.is_pre_practice());

    let activities: Vec<ActivityRow> = pre_practice
        .into_iter()
        .chain(regular)
        .map(activity_row)
        .collect();

    Ok(Json(PlanGetResponse {
        id: plan.id,
        title: plan.title.clone(),
        team_name: plan.team_name.clone(),
        start_date: plan.start_date.format("%d.%m.%Y").to_string(),
        end_date: plan.end_date.format("%d.%m.%Y").to_string(),
        weekday: plan.weekday_name().to_string(),
        weekday_color: plan.weekday_color(),
        start_time: plan.start_time.format("%H:%M").to_string(),
        dresscode: plan.dresscode.clone(),
        focus: plan.focus.clone(),
        goals: plan.goals.clone(),
        group_order: PositionGroup::ORDER.iter().map(PositionGroup::tag).collect(),
        activities,
    }))
}
