pub mod message;
pub mod processor;

pub use processor::{process_batch, BatchOutcome};
