// DexScreener token lookup: name, symbol, USD price and USD liquidity of the
// first pair listed for a token address.

use crate::config::Config;
use crate::models::{TokenMetadata, WSOL_MINT};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use super::{check_status, ClientError};

#[derive(Debug, Deserialize)]
struct PairsResponse {
    #[serde(default)]
    pairs: Option<Vec<Pair>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Pair {
    #[serde(default)]
    base_token: Option<BaseToken>,
    #[serde(default)]
    price_usd: Option<String>,
    #[serde(default)]
    liquidity: Option<Liquidity>,
}

#[derive(Debug, Deserialize)]
struct BaseToken {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    symbol: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Liquidity {
    #[serde(default)]
    usd: Option<f64>,
}

impl From<Pair> for TokenMetadata {
    fn from(pair: Pair) -> Self {
        let (name, symbol) = pair
            .base_token
            .map(|t| (t.name, t.symbol))
            .unwrap_or((None, None));
        Self {
            name,
            symbol,
            price_usd: pair.price_usd.and_then(|p| p.parse().ok()),
            liquidity_usd: pair.liquidity.and_then(|l| l.usd),
        }
    }
}

pub struct MarketClient {
    http: Client,
    base_url: String,
}

impl MarketClient {
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        let http = Client::builder().timeout(config.market_timeout).build()?;
        Ok(Self {
            http,
            base_url: config.dexscreener_api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Look up the first listed pair for `address`.
    ///
    /// `Ok(None)` means the API answered but had nothing usable; `Err` means
    /// the request itself failed.
    pub async fn fetch_token(&self, address: &str) -> Result<Option<TokenMetadata>, ClientError> {
        let url = format!("{}/latest/dex/tokens/{}", self.base_url, address);
        let response = check_status(self.http.get(&url).send().await?).await?;

        let body: PairsResponse = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                debug!("Unexpected market-data payload for {}: {}", address, e);
                return Ok(None);
            }
        };

        Ok(body
            .pairs
            .and_then(|pairs| pairs.into_iter().next())
            .map(TokenMetadata::from))
    }

    /// Metadata for `address`, with every failure collapsed to all-`None`.
    pub async fn token_metadata(&self, address: &str) -> TokenMetadata {
        match self.fetch_token(address).await {
            Ok(Some(meta)) => meta,
            Ok(None) => {
                debug!("No market data for {}", address);
                TokenMetadata::default()
            }
            Err(e) => {
                warn!("Market-data lookup failed for {}: {}", address, e);
                TokenMetadata::default()
            }
        }
    }

    /// USD price of SOL, via the wrapped-SOL pair listing.
    pub async fn sol_price(&self) -> Option<f64> {
        self.token_metadata(WSOL_MINT).await.price_usd
    }
}
