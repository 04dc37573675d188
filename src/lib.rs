//! Placebot - chat summary and place recommendation glue for Channel Talk.
//!
//! The service exposes up to three HTTP endpoints that chain three upstream APIs:
//! 1. Channel Talk, to list a group's pending messages and post replies
//! 2. OpenAI chat completions, to summarize the chat into a fixed Korean template
//! 3. Naver local search, to look up places for the extracted location and purpose
//!
//! # Example
//!
//! ```no_run
//! use placebot::api::{AppState, build_router};
//! use placebot::core::config::AppConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     placebot::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let app = build_router(AppState::from_config(&config), config.profile);
//!
//!     let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod clients;
pub mod core;
pub mod errors;
pub mod extract;
pub mod prompt;

pub use errors::BotError;

/// Configure structured JSON logging.
///
/// Honors `RUST_LOG`, defaulting to `info`. Calling it more than once is harmless;
/// only the first call installs the subscriber.
///
/// # Example
///
/// ```
/// placebot::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
