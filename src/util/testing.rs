// src/util/testing.rs

use anyhow::Result;
use std::collections::HashMap;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{Clock, IdGenerator, KeyValueStorage};
use crate::domain::DomainError;

/// In-memory key-value storage for exercising the note store without a filesystem
///
/// Every successful write is recorded so tests can assert on when and what was saved.
///
/// # Examples
///
/// ```
/// use notekeeper::application::KeyValueStorage;
/// use notekeeper::util::testing::MemoryStorage;
///
/// let storage = MemoryStorage::builder()
///     .with_slot("notes", "[]")
///     .build();
/// assert_eq!(storage.get("notes").unwrap().as_deref(), Some("[]"));
/// ```
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
    writes: Vec<(String, String)>,
    write_failure: Option<String>,
}

impl MemoryStorage {
    pub fn builder() -> MemoryStorageBuilder {
        MemoryStorageBuilder::new()
    }

    /// Current value of a slot
    pub fn slot(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }

    /// All successful writes in order, as (key, value)
    pub fn writes(&self) -> &[(String, String)] {
        &self.writes
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), DomainError> {
        if let Some(reason) = &self.write_failure {
            return Err(DomainError::SlotWrite {
                key: key.to_string(),
                reason: reason.clone(),
            });
        }
        self.slots.insert(key.to_string(), value.to_string());
        self.writes.push((key.to_string(), value.to_string()));
        Ok(())
    }
}

/// Builder for MemoryStorage
pub struct MemoryStorageBuilder {
    slots: HashMap<String, String>,
    write_failure: Option<String>,
}

impl MemoryStorageBuilder {
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
            write_failure: None,
        }
    }

    /// Preset a slot value, as if written by an earlier session
    pub fn with_slot(mut self, key: &str, value: &str) -> Self {
        self.slots.insert(key.to_string(), value.to_string());
        self
    }

    /// Make every write fail with the given reason
    pub fn with_failing_writes(mut self, reason: &str) -> Self {
        self.write_failure = Some(reason.to_string());
        self
    }

    pub fn build(self) -> MemoryStorage {
        MemoryStorage {
            slots: self.slots,
            writes: Vec::new(),
            write_failure: self.write_failure,
        }
    }
}

impl Default for MemoryStorageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Deterministic ids: `note-1`, `note-2`, ...
#[derive(Debug, Default)]
pub struct SequentialIds {
    issued: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        self.issued += 1;
        format!("note-{}", self.issued)
    }
}

/// Clock frozen at a fixed instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(i64);

impl FixedClock {
    pub fn at(millis: i64) -> Self {
        Self(millis)
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["mio", "html5ever"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
