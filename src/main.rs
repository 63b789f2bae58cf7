// src/main.rs

use std::str::FromStr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use bfhl::api::http::create_router;
use bfhl::config::BfhlConfig;
use bfhl::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = BfhlConfig::from_env();

    let level = Level::from_str(&config.log_level).unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let bind_address = format!("{}:{}", config.host, config.port);
    let port = config.port;
    let ai_enabled = config.gemini_api_key.is_some();

    let state = AppState::new(config);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    info!("BFHL API server running on port {}", port);
    info!("Health check: http://localhost:{}/health", port);
    info!("POST endpoint: http://localhost:{}/bfhl", port);
    if !ai_enabled {
        info!("GEMINI_API_KEY not set - AI operations will answer 503");
    }

    axum::serve(listener, app).await?;

    Ok(())
}
