use std::sync::Arc;

use sea_orm::{ConnectOptions, Database};
use tracing::info;

use viabus_api::config::ApiConfig;
use viabus_api::router::build_router;
use viabus_api::state::AppState;
use viabus_api_migration::{Migrator, MigratorTrait};
use viabus_core::tracing::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing("viabus_api=info,tower_http=info,sea_orm=warn");

    let config = ApiConfig::from_env();

    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.database_max_connections)
        .sqlx_logging(false);
    let db = Database::connect(options)
        .await
        .expect("failed to connect to database");

    if config.run_migrations {
        Migrator::up(&db, None)
            .await
            .expect("failed to apply migrations");
        info!("migrations applied");
    }

    let state = AppState { db: Arc::new(db) };

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.api_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("api service listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
