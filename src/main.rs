use sideline_core::utils::TimeEstimation;
use database::DatabaseLoader;
use env_logger::Env;
use log::info;
use std::sync::Arc;
use tokio::sync::RwLock;
use web::{AppData, SidelineServer};

#[cfg(target_os = "linux")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[tokio::main]
async fn main() {
    color_eyre::install().unwrap();

    env_logger::Builder::from_env(Env::default().default_filter_or("debug")).init();

    let (database, estimated) = TimeEstimation::estimate(DatabaseLoader::load);

    info!("database loaded: {} ms", estimated);

    let data = AppData {
        database: Arc::new(RwLock::new(database)),
    };

    SidelineServer::new(data).run().await;
}
