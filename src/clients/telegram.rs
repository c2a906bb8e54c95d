use crate::config::Config;
use reqwest::Client;
use serde_json::json;
use tracing::debug;

use super::{check_status, ClientError};

/// Telegram Bot API `sendMessage` client.
pub struct TelegramClient {
    http: Client,
    base_url: String,
    bot_token: String,
    default_chat_id: String,
}

impl TelegramClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: Client::new(),
            base_url: config.telegram_api_url.trim_end_matches('/').to_string(),
            bot_token: config.telegram_token.clone(),
            default_chat_id: config.telegram_chat_id.clone(),
        }
    }

    /// Send a Markdown message to the configured alert chat.
    pub async fn send_alert(&self, text: &str) -> Result<(), ClientError> {
        if self.default_chat_id.is_empty() {
            return Err(ClientError::NotConfigured("TELEGRAM_CHAT_ID"));
        }
        self.send_message(&self.default_chat_id, text).await
    }

    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), ClientError> {
        if self.bot_token.is_empty() {
            return Err(ClientError::NotConfigured("TELEGRAM_TOKEN"));
        }
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.bot_token);

        let response = self
            .http
            .post(&url)
            .json(&json!({
                "chat_id": chat_id,
                "text": text,
                "parse_mode": "Markdown",
                "disable_web_page_preview": true,
            }))
            .send()
            .await?;
        check_status(response).await?;

        debug!("Delivered message to chat {}", chat_id);
        Ok(())
    }
}
