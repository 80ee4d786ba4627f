pub mod export;
pub mod list;

use crate::AppData;
use axum::Router;

pub fn coach_routes() -> Router<AppData> {
    Router::new()
        .merge(list::routes::routes())
        .merge(export::routes::routes())
}
