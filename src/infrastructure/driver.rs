// src/infrastructure/driver.rs
use crate::application::{Clock, IdGenerator, KeyValueStorage, NoteStore, StoreEvent};
use anyhow::{Context, Result};
use std::thread;
use std::time::Duration;
use tracing::{debug, instrument};

/// Run the store's timeline in real time until no save is pending.
///
/// Sleeps until each next due task, so a pending save fires once its quiet period
/// has actually elapsed. Tasks due after the last save (toast dismissals) are left
/// for the caller to deactivate.
#[instrument(level = "debug", skip(store))]
pub fn settle<S, G, C>(store: &mut NoteStore<S, G, C>) -> Result<Vec<StoreEvent>>
where
    S: KeyValueStorage,
    G: IdGenerator,
    C: Clock,
{
    let mut events = Vec::new();
    while store.is_save_pending() {
        let Some(wait_ms) = store.time_until_next_task() else {
            break;
        };
        debug!(wait_ms, "Waiting for pending save");
        thread::sleep(Duration::from_millis(wait_ms));
        events.extend(store.advance(wait_ms).context("Failed to save notes")?);
    }
    Ok(events)
}
