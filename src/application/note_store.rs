// src/application/note_store.rs
use crate::application::capabilities::{Clock, IdGenerator, KeyValueStorage};
use crate::application::scheduler::{DeferredScheduler, FiredTask, TaskHandle};
use crate::application::toast::Toast;
use crate::constants::{
    AUTOSAVE_QUIET_PERIOD_MS, NOTES_SLOT_KEY, SAVED_TOAST_MESSAGE, TOAST_AUTO_DISMISS_MS,
};
use crate::domain::{DomainError, Note};
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSettings {
    pub slot_key: String,
    pub quiet_period_ms: u64,
    pub toast_auto_dismiss_ms: u64,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            slot_key: NOTES_SLOT_KEY.to_string(),
            quiet_period_ms: AUTOSAVE_QUIET_PERIOD_MS,
            toast_auto_dismiss_ms: TOAST_AUTO_DISMISS_MS,
        }
    }
}

/// Observable outcome of time passing in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Saved { at: u64, note_count: usize },
    ToastRaised(Toast),
    ToastDismissed { id: u64, at: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StoreTask {
    Save,
    DismissToast(u64),
}

/// In-memory note list mirrored into a single storage slot.
///
/// Changes are persisted by a debounced save: each change cancels the pending
/// save and schedules a new one `quiet_period_ms` later. Time only moves through
/// [`advance`](Self::advance).
pub struct NoteStore<S, G, C> {
    storage: S,
    ids: G,
    clock: C,
    settings: StoreSettings,
    notes: Vec<Note>,
    scheduler: DeferredScheduler<StoreTask>,
    pending_save: Option<TaskHandle>,
    toasts: Vec<Toast>,
    next_toast_id: u64,
}

impl<S: KeyValueStorage, G: IdGenerator, C: Clock> NoteStore<S, G, C> {
    /// Load the note list from the slot and activate the store.
    ///
    /// An absent or empty slot yields an empty list. A slot that does not parse as a
    /// note list fails with [`DomainError::CorruptSlot`] and nothing is overwritten.
    #[instrument(level = "debug", skip(storage, ids, clock))]
    pub fn open(storage: S, ids: G, clock: C, settings: StoreSettings) -> Result<Self, DomainError> {
        let notes = load_notes(&storage, &settings.slot_key)?;
        info!(count = notes.len(), key = %settings.slot_key, "Loaded notes");

        Ok(Self {
            storage,
            ids,
            clock,
            settings,
            notes,
            scheduler: DeferredScheduler::new(),
            pending_save: None,
            toasts: Vec::new(),
            next_toast_id: 0,
        })
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn settings(&self) -> &StoreSettings {
        &self.settings
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Toasts currently on screen, oldest first.
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_save_pending(&self) -> bool {
        self.pending_save.is_some()
    }

    /// Position on the store's virtual timeline in milliseconds.
    pub fn now(&self) -> u64 {
        self.scheduler.now()
    }

    pub fn time_until_next_task(&self) -> Option<u64> {
        self.scheduler.time_until_next()
    }

    /// Append a note built from trimmed input. Blank title or content is ignored.
    pub fn add_note(&mut self, title: &str, content: &str) -> Option<&Note> {
        if !Note::accepts(title, content) {
            debug!("Ignoring note with blank title or content");
            return None;
        }

        let id = self.ids.next_id();
        let note = Note::from_input(id, title, content, self.clock.now_millis())?;
        debug!(id = %note.id, title = %note.title, "Adding note");
        self.notes.push(note);
        self.schedule_save();
        self.notes.last()
    }

    /// Remove the note with `id`. Returns `false` when no note matched, in which
    /// case the list is left as it was.
    pub fn delete_note(&mut self, id: &str) -> bool {
        let position = self.notes.iter().position(|n| n.id == id);
        match position {
            Some(index) => {
                let removed = self.notes.remove(index);
                debug!(id = %removed.id, "Deleted note");
            }
            None => debug!(id, "No note with this id"),
        }
        self.schedule_save();
        position.is_some()
    }

    /// Move the store's timeline forward, running every save and toast dismissal
    /// that comes due on the way.
    ///
    /// A failed save is reported after the remaining due tasks have run; the list
    /// stays in memory and no toast is raised for it.
    pub fn advance(&mut self, elapsed_ms: u64) -> Result<Vec<StoreEvent>, DomainError> {
        let target = self.scheduler.now().saturating_add(elapsed_ms);
        let mut events = Vec::new();
        let mut failure = None;

        while let Some(due) = self.scheduler.next_due().filter(|due| *due <= target) {
            let step = due - self.scheduler.now();
            for fired in self.scheduler.advance(step) {
                if let Err(e) = self.run_task(fired, &mut events) {
                    warn!(error = %e, "Saving notes failed");
                    failure.get_or_insert(e);
                }
            }
        }
        let rest = target - self.scheduler.now();
        self.scheduler.advance(rest);

        match failure {
            Some(e) => Err(e),
            None => Ok(events),
        }
    }

    /// Teardown: drop every pending timer so nothing fires after the view is gone.
    pub fn deactivate(&mut self) -> usize {
        let cancelled = self.scheduler.cancel_all();
        if self.pending_save.take().is_some() {
            debug!("Discarding pending save on deactivation");
        }
        self.toasts.clear();
        cancelled
    }

    fn schedule_save(&mut self) {
        if let Some(handle) = self.pending_save.take() {
            self.scheduler.cancel(handle);
        }
        let handle = self
            .scheduler
            .schedule(StoreTask::Save, self.settings.quiet_period_ms);
        self.pending_save = Some(handle);
    }

    fn run_task(
        &mut self,
        fired: FiredTask<StoreTask>,
        events: &mut Vec<StoreEvent>,
    ) -> Result<(), DomainError> {
        match fired.task {
            StoreTask::Save => {
                self.pending_save = None;
                self.save()?;
                events.push(StoreEvent::Saved {
                    at: fired.due,
                    note_count: self.notes.len(),
                });
                let toast = self.raise_toast(SAVED_TOAST_MESSAGE);
                events.push(StoreEvent::ToastRaised(toast));
            }
            StoreTask::DismissToast(id) => {
                self.toasts.retain(|t| t.id != id);
                events.push(StoreEvent::ToastDismissed { id, at: fired.due });
            }
        }
        Ok(())
    }

    #[instrument(level = "debug", skip(self), fields(count = self.notes.len()))]
    fn save(&mut self) -> Result<(), DomainError> {
        let payload = serde_json::to_string(&self.notes)
            .map_err(|e| DomainError::Serialization(e.to_string()))?;
        self.storage.set(&self.settings.slot_key, &payload)?;
        info!(count = self.notes.len(), key = %self.settings.slot_key, "Saved notes");
        Ok(())
    }

    fn raise_toast(&mut self, message: &str) -> Toast {
        let toast = Toast {
            id: self.next_toast_id,
            message: message.to_string(),
            raised_at: self.scheduler.now(),
            auto_dismiss_ms: self.settings.toast_auto_dismiss_ms,
        };
        self.next_toast_id += 1;
        self.scheduler.schedule(
            StoreTask::DismissToast(toast.id),
            self.settings.toast_auto_dismiss_ms,
        );
        self.toasts.push(toast.clone());
        toast
    }
}

fn load_notes<S: KeyValueStorage>(storage: &S, key: &str) -> Result<Vec<Note>, DomainError> {
    match storage.get(key)? {
        Some(raw) if !raw.is_empty() => {
            serde_json::from_str(&raw).map_err(|source| DomainError::CorruptSlot {
                key: key.to_string(),
                source,
            })
        }
        _ => Ok(Vec::new()),
    }
}
