pub mod json;
pub mod wallets;

use thiserror::Error;

pub use wallets::WalletStore;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
