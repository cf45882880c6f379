// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Failed to read storage slot '{key}': {reason}")]
    SlotRead { key: String, reason: String },
    #[error("Failed to write storage slot '{key}': {reason}")]
    SlotWrite { key: String, reason: String },
    #[error("Storage slot '{key}' does not hold a valid note list: {source}")]
    CorruptSlot {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to serialize notes: {0}")]
    Serialization(String),
}
