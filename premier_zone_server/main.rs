use std::sync::Arc;

use premier_zone_app::{app_bus::AppBus, config::Config};
use premier_zone_db::{establish_connection_pool, uow::PostgresUnitOfWorkProvider};
use premier_zone_types::{
    Result,
    errors::{ApplicationError, DbError},
};
use premier_zone_web::{AppState, WebRouter};

mod logs;
use logs::setup_logging;

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> Result<(), ApplicationError> {
    let _log_guard = setup_logging();
    let config = Config::from_env();
    let app_bus = setup_app(&config).await?;
    let state = AppState::new(app_bus);

    WebRouter::serve(state, config.http_port).await
}

async fn setup_app(config: &Config) -> Result<Arc<AppBus>, ApplicationError> {
    let db_pool = establish_connection_pool(config.db_max_connections).await?;

    sqlx::migrate!("../migrations")
        .run(&db_pool)
        .await
        .map_err(DbError::Migration)?;
    tracing::info!("Database migrations applied.");

    let uow_provider = Arc::new(PostgresUnitOfWorkProvider::new(db_pool));
    Ok(Arc::new(AppBus::new(uow_provider)))
}
