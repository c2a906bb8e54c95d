//! Seen-signature set used to suppress duplicate alerts

use std::collections::HashSet;
use std::time::Duration;
use moka::future::Cache;
use tokio::sync::Mutex;
use tracing::debug;

/// Tracks transaction signatures that have already been alerted on.
///
/// The default variant grows without bound for the lifetime of the process.
/// The bounded variant evicts old signatures once `capacity` is reached (and
/// optionally after a time-to-live), trading exact suppression for memory.
pub enum SeenSignatures {
    Unbounded(Mutex<HashSet<String>>),
    Bounded(Cache<String, ()>),
}

impl SeenSignatures {
    pub fn unbounded() -> Self {
        Self::Unbounded(Mutex::new(HashSet::new()))
    }

    pub fn bounded(capacity: u64, ttl: Option<Duration>) -> Self {
        let mut builder = Cache::builder().max_capacity(capacity);
        if let Some(ttl) = ttl {
            builder = builder.time_to_live(ttl);
        }
        Self::Bounded(builder.build())
    }

    /// Record `signature`. Returns `true` if it had not been seen before.
    pub async fn insert(&self, signature: &str) -> bool {
        let fresh = match self {
            Self::Unbounded(set) => set.lock().await.insert(signature.to_string()),
            Self::Bounded(cache) => cache
                .entry(signature.to_string())
                .or_insert(())
                .await
                .is_fresh(),
        };
        if !fresh {
            debug!("Signature already seen: {}", signature);
        }
        fresh
    }

    pub async fn contains(&self, signature: &str) -> bool {
        match self {
            Self::Unbounded(set) => set.lock().await.contains(signature),
            Self::Bounded(cache) => cache.contains_key(signature),
        }
    }
}
