use crate::config::Config;
use reqwest::Client;
use serde::Serialize;
use tracing::info;

use super::{check_status, ClientError};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WebhookUpdate<'a> {
    #[serde(rename = "webhookURL")]
    webhook_url: &'a str,
    transaction_types: [&'a str; 1],
    account_addresses: &'a [String],
    webhook_type: &'a str,
}

/// Pushes the tracked-wallet list to the Helius webhook configuration.
pub struct HeliusClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
    webhook_id: Option<String>,
    callback_url: Option<String>,
}

impl HeliusClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: Client::new(),
            base_url: config.helius_api_url.trim_end_matches('/').to_string(),
            api_key: config.helius_api_key.clone(),
            webhook_id: config.helius_webhook_id.clone(),
            callback_url: config.webhook_callback_url.clone(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some() && self.webhook_id.is_some() && self.callback_url.is_some()
    }

    /// Replace the webhook's account list with `addresses`.
    pub async fn sync_addresses(&self, addresses: &[String]) -> Result<(), ClientError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ClientError::NotConfigured("HELIUS_API_KEY"))?;
        let webhook_id = self
            .webhook_id
            .as_deref()
            .ok_or(ClientError::NotConfigured("HELIUS_WEBHOOK_ID"))?;
        let callback_url = self
            .callback_url
            .as_deref()
            .ok_or(ClientError::NotConfigured("WEBHOOK_CALLBACK_URL"))?;

        let url = format!("{}/v0/webhooks/{}", self.base_url, webhook_id);
        let body = WebhookUpdate {
            webhook_url: callback_url,
            transaction_types: ["Any"],
            account_addresses: addresses,
            webhook_type: "enhanced",
        };

        let response = self
            .http
            .put(&url)
            .query(&[("api-key", api_key)])
            .json(&body)
            .send()
            .await?;
        check_status(response).await?;

        info!("Synced {} tracked addresses to Helius", addresses.len());
        Ok(())
    }
}
