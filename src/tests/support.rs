//! Shared fixtures: an in-process stand-in for DexScreener, Solscan, Telegram
//! and Helius, plus helpers to build state and events against it.

use crate::{config::Config, models::WSOL_MINT, state::AppState};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use serde_json::{json, Value};
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};
use tempfile::TempDir;

pub const TEST_BOT_TOKEN: &str = "123456:TEST-token";
pub const TEST_CHAT_ID: &str = "42";
pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_WEBHOOK_ID: &str = "hook-1";
pub const TEST_CALLBACK_URL: &str = "https://relay.example/webhook";

#[derive(Debug, Clone)]
pub struct SyncCall {
    pub webhook_id: String,
    pub api_key: Option<String>,
    pub body: Value,
}

#[derive(Default)]
pub struct MockState {
    pub tokens: Mutex<HashMap<String, Value>>,
    pub transactions: Mutex<HashMap<String, Value>>,
    pub market_calls: Mutex<Vec<String>>,
    pub sent: Mutex<Vec<Value>>,
    pub syncs: Mutex<Vec<SyncCall>>,
    pub fail_delivery: AtomicBool,
    pub fail_sync: AtomicBool,
}

pub struct MockUpstream {
    pub base_url: String,
    pub state: Arc<MockState>,
}

impl MockUpstream {
    pub async fn start() -> Self {
        let state = Arc::new(MockState::default());
        let app = Router::new()
            .route("/latest/dex/tokens/{address}", get(token_pairs))
            .route("/transaction/{signature}", get(transaction))
            .route("/{bot}/sendMessage", post(send_message))
            .route("/v0/webhooks/{id}", put(update_webhook))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    pub fn set_pairs(&self, address: &str, body: Value) {
        self.state.tokens.lock().unwrap().insert(address.to_string(), body);
    }

    pub fn set_token(&self, address: &str, name: &str, symbol: &str, price: &str, liquidity: f64) {
        self.set_pairs(
            address,
            json!({
                "schemaVersion": "1.0.0",
                "pairs": [{
                    "chainId": "solana",
                    "baseToken": { "address": address, "name": name, "symbol": symbol },
                    "priceUsd": price,
                    "liquidity": { "usd": liquidity, "base": 1.0, "quote": 1.0 }
                }]
            }),
        );
    }

    pub fn set_sol_price(&self, price: &str) {
        self.set_token(WSOL_MINT, "Wrapped SOL", "SOL", price, 1_000_000.0);
    }

    pub fn set_transaction(&self, signature: &str, body: Value) {
        self.state
            .transactions
            .lock()
            .unwrap()
            .insert(signature.to_string(), body);
    }

    pub fn sent(&self) -> Vec<Value> {
        self.state.sent.lock().unwrap().clone()
    }

    pub fn sent_texts(&self) -> Vec<String> {
        self.sent()
            .iter()
            .map(|body| body["text"].as_str().unwrap_or_default().to_string())
            .collect()
    }

    pub fn syncs(&self) -> Vec<SyncCall> {
        self.state.syncs.lock().unwrap().clone()
    }

    pub fn market_calls(&self) -> Vec<String> {
        self.state.market_calls.lock().unwrap().clone()
    }

    pub fn fail_delivery(&self) {
        self.state.fail_delivery.store(true, Ordering::SeqCst);
    }

    pub fn fail_sync(&self) {
        self.state.fail_sync.store(true, Ordering::SeqCst);
    }
}

async fn token_pairs(
    State(mock): State<Arc<MockState>>,
    Path(address): Path<String>,
) -> Json<Value> {
    mock.market_calls.lock().unwrap().push(address.clone());
    let body = mock
        .tokens
        .lock()
        .unwrap()
        .get(&address)
        .cloned()
        .unwrap_or_else(|| json!({ "schemaVersion": "1.0.0", "pairs": null }));
    Json(body)
}

async fn transaction(
    State(mock): State<Arc<MockState>>,
    Path(signature): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    mock.transactions
        .lock()
        .unwrap()
        .get(&signature)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn send_message(
    State(mock): State<Arc<MockState>>,
    Path(_bot): Path<String>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if mock.fail_delivery.load(Ordering::SeqCst) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "ok": false, "description": "mock failure" })),
        );
    }
    mock.sent.lock().unwrap().push(body);
    (StatusCode::OK, Json(json!({ "ok": true })))
}

async fn update_webhook(
    State(mock): State<Arc<MockState>>,
    Path(id): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    mock.syncs.lock().unwrap().push(SyncCall {
        webhook_id: id.clone(),
        api_key: query.get("api-key").cloned(),
        body,
    });
    if mock.fail_sync.load(Ordering::SeqCst) {
        return (StatusCode::BAD_GATEWAY, Json(json!({ "error": "mock failure" })));
    }
    (StatusCode::OK, Json(json!({ "webhookID": id })))
}

pub struct TestContext {
    pub state: Arc<AppState>,
    pub upstream: MockUpstream,
    pub dir: TempDir,
}

pub fn test_config(upstream: &MockUpstream, dir: &TempDir) -> Config {
    Config {
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        telegram_token: TEST_BOT_TOKEN.to_string(),
        telegram_chat_id: TEST_CHAT_ID.to_string(),
        telegram_api_url: upstream.base_url.clone(),
        dexscreener_api_url: upstream.base_url.clone(),
        market_timeout: Duration::from_secs(2),
        solscan_api_url: upstream.base_url.clone(),
        enrich_tx_detail: false,
        helius_api_url: upstream.base_url.clone(),
        helius_api_key: Some(TEST_API_KEY.to_string()),
        helius_webhook_id: Some(TEST_WEBHOOK_ID.to_string()),
        webhook_callback_url: Some(TEST_CALLBACK_URL.to_string()),
        labels_file: dir.path().join("wallet_labels.json"),
        tracked_file: dir.path().join("tracked_wallets.json"),
        min_alert_sol: 0.01,
        seen_capacity: None,
        seen_ttl: None,
    }
}

pub async fn setup() -> TestContext {
    setup_with(|_| {}).await
}

pub async fn setup_with(customize: impl FnOnce(&mut Config)) -> TestContext {
    let upstream = MockUpstream::start().await;
    let dir = tempfile::tempdir().unwrap();
    let mut config = test_config(&upstream, &dir);
    customize(&mut config);
    let state = Arc::new(AppState::new(config).unwrap());
    TestContext { state, upstream, dir }
}

/// Serve the relay router on an ephemeral port and return its base URL.
pub async fn spawn_app(state: Arc<AppState>) -> String {
    let app = crate::api::create_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

pub fn transfer_event(
    signature: &str,
    lamports: u64,
    from: &str,
    to: &str,
    mint: Option<&str>,
) -> Value {
    let token_transfers = match mint {
        Some(mint) => json!([{ "mint": mint, "tokenAmount": 1000.0 }]),
        None => json!([]),
    };
    json!({
        "signature": signature,
        "type": "TRANSFER",
        "nativeTransfers": [
            { "fromUserAccount": from, "toUserAccount": to, "amount": lamports }
        ],
        "tokenTransfers": token_transfers
    })
}
