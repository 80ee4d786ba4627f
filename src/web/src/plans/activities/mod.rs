pub mod routes;

use crate::{ApiResult, AppData};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use core::{ActivityCategory, GroupAssignments, GroupFlags, TrainingActivity};
use serde::Deserialize;
use serde_json::json;
use std::collections::{BTreeMap, HashMap};

#[derive(Deserialize)]
pub struct ActivityRequest {
    pub name: String,
    pub activity_type: String,
    pub duration_minutes: u16,
    #[serde(default)]
    pub groups: Option<BTreeMap<String, bool>>,
    #[serde(default)]
    pub group_activities: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub order: Option<u32>,
}

#[derive(Deserialize)]
pub struct ActivityCreateParams {
    pub plan_id: u32,
}

#[derive(Deserialize)]
pub struct ActivityParams {
    pub plan_id: u32,
    pub id: u32,
}

#[derive(Deserialize)]
pub struct ReorderRequest {
    pub order: HashMap<u32, u32>,
}

/// Parses the raw request into a domain activity. Group keys are normalized
/// and validated here; label mappings are only kept for categories that
/// render per-group labels.
fn convert(request: ActivityRequest, plan_id: u32, id: u32, order: u32) -> ApiResult<TrainingActivity> {
    let category: ActivityCategory = request.activity_type.parse()?;

    let groups = request
        .groups
        .map(|raw| GroupFlags::parse(raw.iter().map(|(tag, active)| (tag.as_str(), *active))))
        .transpose()?;

    let group_assignments = match category {
        ActivityCategory::GroupSpecific
        | ActivityCategory::PositionSpecific
        | ActivityCategory::SpecialTeams => request
            .group_activities
            .map(|raw| {
                GroupAssignments::parse(raw.iter().map(|(key, label)| (key.as_str(), label.as_str())))
            })
            .transpose()?
            .filter(|assignments| !assignments.is_empty()),
        ActivityCategory::PrePractice | ActivityCategory::TeamWide => None,
    };

    Ok(TrainingActivity {
        id,
        plan_id,
        name: request.name,
        category,
        duration_minutes: request.duration_minutes,
        groups,
        group_assignments,
        notes: request.notes.filter(|notes| !notes.trim().is_empty()),
        order,
    })
}

pub async fn activity_create_action(
    State(state): State<AppData>,
    Path(route_params): Path<ActivityCreateParams>,
    Json(request): Json<ActivityRequest>,
) -> ApiResult<impl IntoResponse> {
    let mut guard = state.database.write().await;

    let order = request
        .order
        .unwrap_or_else(|| guard.plans.next_order(route_params.plan_id));

    let activity = convert(request, route_params.plan_id, 0, order)?;
    let id = guard.plans.create_activity(activity)?;

    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

pub async fn activity_edit_action(
    State(state): State<AppData>,
    Path(route_params): Path<ActivityParams>,
    Json(request): Json<ActivityRequest>,
) -> ApiResult<impl IntoResponse> {
    let mut guard = state.database.write().await;

    let order = request.order.unwrap_or(
        guard
            .plans
            .activity(route_params.plan_id, route_params.id)?
            .activity
            .order,
    );

    let activity = convert(request, route_params.plan_id, route_params.id, order)?;
    guard.plans.update_activity(activity)?;

    Ok(Json(json!({ "success": true })))
}

pub async fn activity_delete_action(
    State(state): State<AppData>,
    Path(route_params): Path<ActivityParams>,
) -> ApiResult<impl IntoResponse> {
    let mut guard = state.database.write().await;
    guard
        .plans
        .delete_activity(route_params.plan_id, route_params.id)?;

    Ok(Json(json!({ "success": true })))
}

pub async fn activity_reorder_action(
    State(state): State<AppData>,
    Path(route_params): Path<ActivityCreateParams>,
    Json(request): Json<ReorderRequest>,
) -> ApiResult<impl IntoResponse> {
    let mut guard = state.database.write().await;
    guard
        .plans
        .reorder_activities(route_params.plan_id, &request.order)?;

    Ok(Json(json!({ "success": true })))
}
