//! Server: reads settings from the environment, prepares the schema, serves the API.

use inventory_api::{app_router, ensure_database_exists, ensure_tables, AppState, Settings};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("inventory_api=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    if settings.create_database {
        ensure_database_exists(&settings.database).await?;
    }

    let state = AppState::new(settings.database.clone());
    ensure_tables(&state).await?;

    let app = app_router(state, settings.max_body_bytes);
    let listener = TcpListener::bind(settings.bind_addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::warn!("ctrl-c handler unavailable; running until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
