pub mod explorer;
pub mod helius;
pub mod market;
pub mod telegram;

use thiserror::Error;

// Re-exports for convenience
pub use explorer::ExplorerClient;
pub use helius::HeliusClient;
pub use market::MarketClient;
pub use telegram::TelegramClient;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Not configured: {0}")]
    NotConfigured(&'static str),
}

/// Turn a non-success response into `ClientError::Status`, keeping the body for logs.
pub(crate) async fn check_status(
    response: reqwest::Response,
) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ClientError::Status { status, body })
}
