// src/main.rs

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use fleet_backend::{
    config::{AppState, Settings},
    routes::build_router,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .with_target(false)
        .compact()
        .init();

    let settings = Settings::from_env()?;
    tracing::info!(store = ?settings.store, "Configuration loaded");

    let app_state = AppState::new(&settings).await?;
    let app = build_router(app_state, &settings.cors_allowed_origins);

    let listener = TcpListener::bind(settings.server_addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
