// Solscan public API transaction lookup.

use crate::config::Config;
use crate::models::TransactionDetail;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use super::{check_status, ClientError};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SolscanTransaction {
    #[serde(default)]
    block_time: Option<i64>,
    #[serde(default)]
    fee: Option<u64>,
    #[serde(default)]
    status: Option<String>,
}

pub struct ExplorerClient {
    http: Client,
    base_url: String,
}

impl ExplorerClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: Client::new(),
            base_url: config.solscan_api_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn fetch_transaction(
        &self,
        signature: &str,
    ) -> Result<Option<TransactionDetail>, ClientError> {
        let url = format!("{}/transaction/{}", self.base_url, signature);
        let response = check_status(self.http.get(&url).send().await?).await?;

        match response.json::<SolscanTransaction>().await {
            Ok(tx) => Ok(Some(TransactionDetail {
                block_time: tx.block_time,
                fee_lamports: tx.fee,
                status: tx.status,
            })),
            Err(e) => {
                debug!("Unexpected explorer payload for {}: {}", signature, e);
                Ok(None)
            }
        }
    }

    /// Detail for `signature`, `None` on any failure.
    pub async fn transaction_detail(&self, signature: &str) -> Option<TransactionDetail> {
        match self.fetch_transaction(signature).await {
            Ok(detail) => detail,
            Err(e) => {
                warn!("Explorer lookup failed for {}: {}", signature, e);
                None
            }
        }
    }
}
