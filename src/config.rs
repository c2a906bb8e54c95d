// Configuration for:
// - Server listening address/port
// - Telegram bot credentials and destination chat
// - Upstream API base URLs (market data, explorer, indexing provider)
// - Persisted label/tracking file locations
// - Alert threshold and seen-signature cache bounds

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub telegram_api_url: String,
    pub dexscreener_api_url: String,
    pub market_timeout: Duration,
    pub solscan_api_url: String,
    pub enrich_tx_detail: bool,
    pub helius_api_url: String,
    pub helius_api_key: Option<String>,
    pub helius_webhook_id: Option<String>,
    pub webhook_callback_url: Option<String>,
    pub labels_file: PathBuf,
    pub tracked_file: PathBuf,
    pub min_alert_sol: f64,
    pub seen_capacity: Option<u64>,
    pub seen_ttl: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080);
        let telegram_token = env::var("TELEGRAM_TOKEN").unwrap_or_default();
        let telegram_chat_id = env::var("TELEGRAM_CHAT_ID").unwrap_or_default();
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .unwrap_or_else(|_| "https://api.telegram.org".to_string());
        let dexscreener_api_url = env::var("DEXSCREENER_API_URL")
            .unwrap_or_else(|_| "https://api.dexscreener.com".to_string());
        let market_timeout = env::var("MARKET_TIMEOUT_SECS")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(5));
        let solscan_api_url = env::var("SOLSCAN_API_URL")
            .unwrap_or_else(|_| "https://public-api.solscan.io".to_string());
        let enrich_tx_detail = env::var("ENRICH_TX_DETAIL")
            .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        let helius_api_url = env::var("HELIUS_API_URL")
            .unwrap_or_else(|_| "https://api.helius.xyz".to_string());
        let helius_api_key = non_empty_var("HELIUS_API_KEY");
        let helius_webhook_id = non_empty_var("HELIUS_WEBHOOK_ID");
        let webhook_callback_url = non_empty_var("WEBHOOK_CALLBACK_URL");
        let labels_file = env::var("LABELS_FILE")
            .unwrap_or_else(|_| "wallet_labels.json".to_string())
            .into();
        let tracked_file = env::var("TRACKED_FILE")
            .unwrap_or_else(|_| "tracked_wallets.json".to_string())
            .into();
        let min_alert_sol = env::var("MIN_ALERT_SOL")
            .map(|v| v.parse().unwrap_or(0.01))
            .unwrap_or(0.01);
        let seen_capacity = env::var("SEEN_CAPACITY")
            .map(|v| v.parse().ok())
            .unwrap_or(None);
        let seen_ttl = env::var("SEEN_TTL_SECS")
            .map(|v| v.parse().ok().map(Duration::from_secs))
            .unwrap_or(None);

        Self {
            server_host,
            server_port,
            telegram_token,
            telegram_chat_id,
            telegram_api_url,
            dexscreener_api_url,
            market_timeout,
            solscan_api_url,
            enrich_tx_detail,
            helius_api_url,
            helius_api_key,
            helius_webhook_id,
            webhook_callback_url,
            labels_file,
            tracked_file,
            min_alert_sol,
            seen_capacity,
            seen_ttl,
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
