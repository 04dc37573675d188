use anyhow::Context;
use placebot::api::{AppState, build_router};
use placebot::core::config::AppConfig;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    placebot::setup_logging();

    let config = AppConfig::from_env().inspect_err(|e| error!("{}", e))?;

    let app = build_router(AppState::from_config(&config), config.profile);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("Failed to bind port {}", config.port))?;

    info!(
        profile = ?config.profile,
        port = config.port,
        group_id = %config.group_id,
        "Placebot listening"
    );

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
