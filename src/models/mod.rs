// Inbound webhook events, inbound chat updates, and enrichment results.
// Every wire field is optional; the pipeline decides what is usable.

use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

pub const LAMPORTS_PER_SOL: f64 = 1_000_000_000.0;

/// Wrapped SOL mint, used to price the native coin through the market-data API.
pub const WSOL_MINT: &str = "So11111111111111111111111111111111111111112";

/// Transfer lists stay raw: only the first entry of each is ever decoded,
/// so a malformed later entry cannot reject the whole event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionEvent {
    #[serde(default)]
    pub signature: Option<String>,
    #[serde(default)]
    pub native_transfers: Vec<Value>,
    #[serde(default)]
    pub token_transfers: Vec<Value>,
}

impl TransactionEvent {
    /// First native transfer, or `None` when absent or undecodable.
    pub fn first_native_transfer(&self) -> Option<NativeTransfer> {
        let raw = self.native_transfers.first()?;
        match NativeTransfer::deserialize(raw) {
            Ok(transfer) => Some(transfer),
            Err(e) => {
                debug!("Undecodable native transfer: {}", e);
                None
            }
        }
    }

    /// Mint of the first token transfer, if it carries a non-empty string one.
    pub fn first_token_mint(&self) -> Option<&str> {
        self.token_transfers
            .first()?
            .get("mint")?
            .as_str()
            .filter(|mint| !mint.is_empty())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeTransfer {
    #[serde(default, deserialize_with = "lenient_string")]
    pub from_user_account: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub to_user_account: Option<String>,
    #[serde(default, deserialize_with = "lamports")]
    pub amount: u64,
}

// Non-string account fields are treated as missing.
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

// Lamports arrive as integers, but some producers emit integral floats (20000000.0).
fn lamports<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    if let Some(n) = value.as_u64() {
        return Ok(n);
    }
    match value.as_f64() {
        Some(f) if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => Ok(f as u64),
        _ => Err(D::Error::custom(format!("invalid lamport amount: {}", value))),
    }
}

impl NativeTransfer {
    pub fn amount_sol(&self) -> f64 {
        self.amount as f64 / LAMPORTS_PER_SOL
    }
}

/// Result of a market-data lookup. All-`None` means "no data available".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenMetadata {
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub price_usd: Option<f64>,
    pub liquidity_usd: Option<f64>,
}

impl TokenMetadata {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.symbol.is_none()
            && self.price_usd.is_none()
            && self.liquidity_usd.is_none()
    }
}

/// Supplementary detail from the block explorer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionDetail {
    pub block_time: Option<i64>,
    pub fee_lamports: Option<u64>,
    pub status: Option<String>,
}

// Telegram update envelope, reduced to what the command handler reads.
#[derive(Debug, Deserialize)]
pub struct TelegramUpdate {
    #[serde(default)]
    pub message: Option<TelegramMessage>,
}

#[derive(Debug, Deserialize)]
pub struct TelegramMessage {
    pub chat: TelegramChat,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TelegramChat {
    pub id: i64,
}
