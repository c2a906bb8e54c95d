//! Chat commands maintaining wallet labels and the tracked-wallet list.
//!
//! Every command is independent. Text that is not a recognised command is
//! ignored without a reply.

use crate::pipeline::message::{code_span, escape_markdown};
use crate::state::AppState;
use crate::store::StoreError;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Label { address: String, name: String },
    Labels,
    ClearLabel(String),
    Track(String),
    Untrack(String),
    Tracking,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Usage: {0}")]
    Usage(&'static str),
}

/// Parse a chat message. `None` means the text is not a command we handle.
pub fn parse_command(text: &str) -> Option<Result<Command, CommandError>> {
    let mut parts = text.split_whitespace();
    let head = parts.next()?;
    // "/labels@SomeBot" is how Telegram addresses commands in group chats
    let command = head.split('@').next().unwrap_or(head);
    let args: Vec<&str> = parts.collect();

    let parsed = match command {
        "/label" => match args.as_slice() {
            [address, name] => Ok(Command::Label {
                address: address.to_string(),
                name: name.to_string(),
            }),
            _ => Err(CommandError::Usage("/label <address> <name>")),
        },
        "/labels" => Ok(Command::Labels),
        "/clearlabel" => single_arg(&args, "/clearlabel <address>").map(Command::ClearLabel),
        "/track" => single_arg(&args, "/track <address>").map(Command::Track),
        "/untrack" => single_arg(&args, "/untrack <address>").map(Command::Untrack),
        "/tracking" => Ok(Command::Tracking),
        _ => return None,
    };
    Some(parsed)
}

fn single_arg(args: &[&str], usage: &'static str) -> Result<String, CommandError> {
    match args {
        [address] => Ok(address.to_string()),
        _ => Err(CommandError::Usage(usage)),
    }
}

/// Apply `command` and return the reply text.
pub async fn execute(state: &AppState, command: Command) -> String {
    info!("Executing command: {:?}", command);
    match command {
        Command::Label { address, name } => {
            let mut store = state.store.lock().await;
            match store.set_label(&address, &name).await {
                Ok(()) => format!(
                    "✅ Labeled {} as {}",
                    code_span(&address),
                    escape_markdown(&name)
                ),
                Err(e) => store_failure(e),
            }
        }
        Command::Labels => {
            let store = state.store.lock().await;
            if store.labels().is_empty() {
                return "📭 No wallet labels saved.".to_string();
            }
            let mut reply = String::from("🏷️ *Wallet labels*");
            for (address, name) in store.labels() {
                reply.push_str(&format!("\n{} → {}", code_span(address), escape_markdown(name)));
            }
            reply
        }
        Command::ClearLabel(address) => {
            let mut store = state.store.lock().await;
            match store.remove_label(&address).await {
                Ok(true) => format!("🗑️ Removed label for {}", code_span(&address)),
                Ok(false) => format!("❌ No label found for {}", code_span(&address)),
                Err(e) => store_failure(e),
            }
        }
        Command::Track(address) => {
            let snapshot = {
                let mut store = state.store.lock().await;
                match store.add_address(&address).await {
                    Ok(true) => store.tracked_addresses(),
                    Ok(false) => return format!("ℹ️ {} is already tracked.", code_span(&address)),
                    Err(e) => return store_failure(e),
                }
            };
            sync_tracked(state, &snapshot).await;
            format!("👀 Now tracking {}", code_span(&address))
        }
        Command::Untrack(address) => {
            let snapshot = {
                let mut store = state.store.lock().await;
                match store.remove_address(&address).await {
                    Ok(true) => store.tracked_addresses(),
                    Ok(false) => return format!("ℹ️ {} is not tracked.", code_span(&address)),
                    Err(e) => return store_failure(e),
                }
            };
            sync_tracked(state, &snapshot).await;
            format!("🛑 Stopped tracking {}", code_span(&address))
        }
        Command::Tracking => {
            let store = state.store.lock().await;
            let tracked = store.tracked_addresses();
            if tracked.is_empty() {
                return "📭 No wallets are being tracked.".to_string();
            }
            let mut reply = String::from("👀 *Tracked wallets*");
            for address in &tracked {
                match store.label_for(address) {
                    Some(label) => reply.push_str(&format!(
                        "\n• {} ({})",
                        code_span(address),
                        escape_markdown(label)
                    )),
                    None => reply.push_str(&format!("\n• {}", code_span(address))),
                }
            }
            reply
        }
    }
}

/// Best-effort push of the tracked list; local state is never rolled back.
async fn sync_tracked(state: &AppState, addresses: &[String]) {
    if !state.helius.is_configured() {
        warn!("Helius sync not configured, tracked list kept locally only");
        return;
    }
    if let Err(e) = state.helius.sync_addresses(addresses).await {
        warn!("Failed to sync tracked wallets to Helius: {}", e);
    }
}

fn store_failure(e: StoreError) -> String {
    warn!("Store write failed: {}", e);
    format!("⚠️ Failed to save changes: {}", escape_markdown(&e.to_string()))
}
