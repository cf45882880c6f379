// src/application/toast.rs

/// Transient notification shown to the user until it is dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    /// Virtual time (ms) at which the toast was raised.
    pub raised_at: u64,
    pub auto_dismiss_ms: u64,
}
