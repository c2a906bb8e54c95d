pub mod signatures;

use crate::config::Config;

pub use signatures::SeenSignatures;

pub fn init_seen_signatures(config: &Config) -> SeenSignatures {
    match config.seen_capacity {
        Some(capacity) => SeenSignatures::bounded(capacity, config.seen_ttl),
        None => SeenSignatures::unbounded(),
    }
}
