use squad_core::utils::TimeEstimation;
use database::DatabaseLoader;
use env_logger::Env;
use log::info;
use std::sync::Arc;
use web::{AppData, ServerConfig, TeamBalancerServer};

#[cfg(target_os = "linux")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default()
        .filter_or("LOG_LEVEL", "info")
    ).init();

    let config = ServerConfig::from_env();

    let (database, estimated) = TimeEstimation::estimate(DatabaseLoader::load);
    let database = database?;

    info!("roster data loaded: {} ms", estimated);

    let data = AppData {
        database: Arc::new(database),
    };

    TeamBalancerServer::new(data).run(&config).await?;

    Ok(())
}
