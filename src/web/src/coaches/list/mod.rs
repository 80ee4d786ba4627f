pub mod routes;

use crate::{ApiResult, AppData};
use axum::Json;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use core::Coach;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct CoachListQuery {
    #[serde(default)]
    pub search: Option<String>,
}

#[derive(Serialize)]
pub struct CoachListItem {
    pub id: u32,
    pub full_name: String,
    pub email: String,
    pub team: Option<String>,
    pub license_number: Option<String>,
    pub is_admin: bool,
    pub profile_complete: bool,
    pub experience_years: u32,
    pub certificate_count: usize,
}

fn list_item(coach: &Coach, today: chrono::NaiveDate) -> CoachListItem {
    CoachListItem {
        id: coach.id,
        full_name: coach.full_name.clone(),
        email: coach.email.clone(),
        team: coach.team.clone(),
        license_number: coach.license_number.clone(),
        is_admin: coach.is_admin,
        profile_complete: coach.is_profile_complete(),
        experience_years: coach.total_experience_years(today),
        certificate_count: coach.certificates.len(),
    }
}

pub async fn coach_list_action(
    State(state): State<AppData>,
    Query(query): Query<CoachListQuery>,
) -> ApiResult<impl IntoResponse> {
    let guard = state.database.read().await;
    let today = chrono::Local::now().date_naive();

    let coaches: Vec<&Coach> = match query.search.as_deref().filter(|s| !s.is_empty()) {
        Some(search) => guard.coaches.search(search),
        None => guard.coaches.coaches().iter().collect(),
    };

    let items: Vec<CoachListItem> = coaches
        .into_iter()
        .map(|coach| list_item(coach, today))
        .collect();

    Ok(Json(items))
}
