use wallet_relay_service::{api, config::Config, state::AppState};

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting wallet-relay-service");

    let config = Config::from_env();
    if config.telegram_token.is_empty() || config.telegram_chat_id.is_empty() {
        tracing::warn!("TELEGRAM_TOKEN or TELEGRAM_CHAT_ID not set; alerts will not be delivered");
    }
    let addr = format!("{}:{}", config.server_host, config.server_port);

    let app_state = Arc::new(AppState::new(config)?);
    if !app_state.helius.is_configured() {
        tracing::warn!("Helius sync disabled: set HELIUS_API_KEY, HELIUS_WEBHOOK_ID and WEBHOOK_CALLBACK_URL");
    }

    let app = api::create_router(app_state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
