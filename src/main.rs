use std::sync::Arc;

use invite_codes::{
    AppState, build_router,
    config::Config,
    error::Result,
    infrastructure::store::RestStore,
    utils::server::{LogFormat, init_tracing, shutdown_signal},
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing(LogFormat::Json)?;

    let config = Config::from_env()?;
    config.validate()?;
    tracing::info!("Configuration loaded");

    let store = RestStore::new(&config.store)?;
    tracing::info!(store = %config.store.url, "Store client initialized");

    let state = AppState {
        config: Arc::new(config.clone()),
        store: Arc::new(store),
    };

    let app = build_router(state);

    let server_addr = format!("{}:{}", config.server.host, config.server.port);

    let listener = TcpListener::bind(server_addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("Server shutdown complete");

    Ok(())
}
