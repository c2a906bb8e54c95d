use crate::{
    api::error::ApiError,
    commands::{execute, parse_command},
    models::TelegramUpdate,
    pipeline::process_batch,
    state::AppState,
};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

pub const LIVENESS_MESSAGE: &str = "🟢 Wallet relay webhook is live and listening!";

// Create router with all routes
pub fn create_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(liveness))
        .route("/webhook", post(receive_webhook))
        .route("/{token}", post(receive_command))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

// GET / handler
async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}

// POST /webhook handler
async fn receive_webhook(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<&'static str, ApiError> {
    if body.is_empty() {
        return Err(ApiError::BadRequest("missing request body".to_string()));
    }

    let payload: Value = serde_json::from_slice(&body)
        .map_err(|e| ApiError::BadRequest(format!("body is not valid JSON: {}", e)))?;

    let events = match payload {
        Value::Array(events) => events,
        // Older provider configurations wrap the batch in an envelope
        Value::Object(mut envelope) => match envelope.remove("transactions") {
            Some(Value::Array(events)) => events,
            _ => return Err(ApiError::BadRequest("expected an array of transactions".to_string())),
        },
        _ => return Err(ApiError::BadRequest("expected an array of transactions".to_string())),
    };

    info!("Webhook received batch of {} events", events.len());
    process_batch(&state, events).await;

    Ok("OK")
}

// POST /{bot_token} handler
async fn receive_command(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    if state.config.telegram_token.is_empty() || token != state.config.telegram_token {
        return Err(ApiError::NotFound);
    }

    let update: TelegramUpdate = match serde_json::from_slice(&body) {
        Ok(update) => update,
        Err(e) => {
            debug!("Ignoring unparseable chat update: {}", e);
            return Ok(StatusCode::OK);
        }
    };

    let Some(message) = update.message else {
        return Ok(StatusCode::OK);
    };
    let Some(text) = message.text else {
        return Ok(StatusCode::OK);
    };

    let reply = match parse_command(&text) {
        Some(Ok(command)) => execute(&state, command).await,
        Some(Err(usage)) => usage.to_string(),
        None => return Ok(StatusCode::OK),
    };

    let chat_id = message.chat.id.to_string();
    if let Err(e) = state.telegram.send_message(&chat_id, &reply).await {
        warn!("Failed to send command reply to chat {}: {}", chat_id, e);
    }

    Ok(StatusCode::OK)
}
