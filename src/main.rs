use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use scholarlink::logging::init_tracing;
use scholarlink::router::init_router;
use scholarlink::state::AppState;
use scholarlink_auth::FirebaseTokenVerifier;
use scholarlink_config::AppConfig;
use scholarlink_db::PgStore;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = AppConfig::from_env().context("failed to load configuration")?;
    init_tracing(&config.log).context("failed to initialize logging")?;

    let store = Arc::new(PgStore::connect(&config.database).await?);
    if config.database.run_migrations {
        store.migrate().await?;
        info!("database migrations applied");
    }

    let verifier = FirebaseTokenVerifier::from_config(&config.identity)
        .await
        .context("failed to load identity provider keys")?;

    let state = AppState::new(store.clone(), Arc::new(verifier), config.cors.clone());
    let app = init_router(state);

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("Server running on http://{}", addr);
    info!("Swagger UI available at http://{}/swagger-ui", addr);
    info!("Scalar UI available at http://{}/scalar", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}
