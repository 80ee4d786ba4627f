pub mod activities;
pub mod copy;
pub mod create;
pub mod delete;
pub mod edit;
pub mod get;
pub mod list;
pub mod status;

use crate::AppData;
use axum::Router;
use chrono::{NaiveTime, Weekday};

pub fn plan_routes() -> Router<AppData> {
    Router::new()
        .merge(list::routes::routes())
        .merge(get::routes::routes())
        .merge(create::routes::routes())
        .merge(edit::routes::routes())
        .merge(delete::routes::routes())
        .merge(copy::routes::routes())
        .merge(status::routes::routes())
        .merge(activities::routes::routes())
}

pub(crate) fn parse_start_time(value: &str) -> Result<NaiveTime, crate::ApiError> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| crate::ApiError::BadRequest(format!("invalid start time '{}'", value)))
}

pub(crate) fn parse_weekday(value: u8) -> Result<Weekday, crate::ApiError> {
    Weekday::try_from(value)
        .map_err(|_| crate::ApiError::BadRequest(format!("invalid weekday {}", value)))
}
