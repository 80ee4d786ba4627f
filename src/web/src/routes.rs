use crate::AppData;
use crate::coaches::coach_routes;
use crate::common::default_handler::default_handler;
use crate::plans::plan_routes;
use axum::Router;

pub struct ServerRoutes;

impl ServerRoutes {
    pub fn create() -> Router<AppData> {
        Router::<AppData>::new()
            .merge(plan_routes())
            .merge(coach_routes())
            .fallback(default_handler)
    }
}
