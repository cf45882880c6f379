// src/infrastructure/mod.rs
pub mod config;
pub mod driver;
pub mod file_storage;
pub mod renderer;
pub mod system;

pub use config::Config;
pub use file_storage::FileSlotStorage;
pub use renderer::PageRenderer;
pub use system::{SystemClock, UuidGenerator};
