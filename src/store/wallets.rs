// Wallet labels (address -> name) and the tracked-wallet set (address -> true),
// each persisted to its own JSON file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::info;

use super::json::{load_map, save_map};
use super::StoreError;

#[derive(Debug)]
pub struct WalletStore {
    labels_path: PathBuf,
    tracked_path: PathBuf,
    labels: BTreeMap<String, String>,
    tracked: BTreeMap<String, bool>,
}

impl WalletStore {
    pub fn load(labels_path: impl AsRef<Path>, tracked_path: impl AsRef<Path>) -> Self {
        let labels_path = labels_path.as_ref().to_path_buf();
        let tracked_path = tracked_path.as_ref().to_path_buf();
        let labels: BTreeMap<String, String> = load_map(&labels_path);
        let tracked: BTreeMap<String, bool> = load_map(&tracked_path);

        info!(
            "Loaded {} wallet labels and {} tracked wallets",
            labels.len(),
            tracked.len()
        );

        Self {
            labels_path,
            tracked_path,
            labels,
            tracked,
        }
    }

    pub fn labels(&self) -> &BTreeMap<String, String> {
        &self.labels
    }

    pub fn label_for(&self, address: &str) -> Option<&str> {
        self.labels.get(address).map(String::as_str)
    }

    /// Label for `address`, or the address itself when unlabeled.
    pub fn resolve(&self, address: &str) -> String {
        self.label_for(address).unwrap_or(address).to_string()
    }

    pub async fn set_label(&mut self, address: &str, name: &str) -> Result<(), StoreError> {
        self.labels.insert(address.to_string(), name.to_string());
        save_map(&self.labels_path, &self.labels).await
    }

    /// Returns `false` when no label existed.
    pub async fn remove_label(&mut self, address: &str) -> Result<bool, StoreError> {
        if self.labels.remove(address).is_none() {
            return Ok(false);
        }
        save_map(&self.labels_path, &self.labels).await?;
        Ok(true)
    }

    pub fn is_address_tracked(&self, address: &str) -> bool {
        self.tracked.contains_key(address)
    }

    /// Returns `false` when the address was already tracked.
    pub async fn add_address(&mut self, address: &str) -> Result<bool, StoreError> {
        if self.tracked.contains_key(address) {
            return Ok(false);
        }
        self.tracked.insert(address.to_string(), true);
        save_map(&self.tracked_path, &self.tracked).await?;
        Ok(true)
    }

    /// Returns `false` when the address was not tracked.
    pub async fn remove_address(&mut self, address: &str) -> Result<bool, StoreError> {
        if self.tracked.remove(address).is_none() {
            return Ok(false);
        }
        save_map(&self.tracked_path, &self.tracked).await?;
        Ok(true)
    }

    pub fn tracked_addresses(&self) -> Vec<String> {
        self.tracked.keys().cloned().collect()
    }
}
