use anyhow::Context;
use employee_server::{database, router, AppState, Config};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("employee_server=info,tower_http=info")),
        )
        .init();

    let config = Config::load_default()
        .unwrap_or_else(|e| {
            warn!("Failed to load config: {:#}, using defaults", e);
            Config::default()
        })
        .with_env_overrides();

    let db = database::init_db(&config.database.url, config.database.max_connections)
        .await
        .with_context(|| format!("Failed to initialise database at {}", config.database.url))?;
    info!("Database ready ({:?})", db.db_type);

    let app = router(AppState::new(db.clone(), &config), &config);

    let addr = config.server.address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    db.close().await;
    info!("Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
