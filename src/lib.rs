pub mod api;
pub mod cache;
pub mod clients;
pub mod commands;
pub mod config;
pub mod models;
pub mod pipeline;
pub mod state;
pub mod store;

#[cfg(test)]
pub mod tests;

// Re-export specific items for convenience
pub use api::error::ApiError;
pub use api::route::create_router;
pub use clients::ClientError;
pub use commands::{parse_command, Command};
pub use models::{TokenMetadata, TransactionEvent};
pub use pipeline::{process_batch, BatchOutcome};
pub use state::AppState;
pub use store::WalletStore;
