pub mod routes;

use crate::{ApiResult, AppData};
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;

/// Quotes a CSV field, doubling any embedded quotes.
fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn csv_row(fields: &[&str]) -> String {
    let mut row = fields
        .iter()
        .map(|field| csv_field(field))
        .collect::<Vec<String>>()
        .join(",");
    row.push('\n');
    row
}

pub async fn coach_export_action(State(state): State<AppData>) -> ApiResult<impl IntoResponse> {
    let guard = state.database.read().await;
    let today = chrono::Local::now().date_naive();

    let mut csv = csv_row(&[
        "Full Name",
        "Email",
        "Team",
        "License Number",
        "Mobile Phone",
        "City",
        "Experience Years",
    ]);

    for coach in guard.coaches.coaches() {
        csv.push_str(&csv_row(&[
            &coach.full_name,
            &coach.email,
            coach.team.as_deref().unwrap_or(""),
            coach.license_number.as_deref().unwrap_or(""),
            coach.mobile_phone.as_deref().unwrap_or(""),
            coach.city.as_deref().unwrap_or(""),
            &coach.total_experience_years(today).to_string(),
        ]));
    }

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"coaches.csv\"",
            ),
        ],
        csv,
    ))
}
