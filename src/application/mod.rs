// src/application/mod.rs
pub mod capabilities;
pub mod note_form;
pub mod note_store;
pub mod scheduler;
pub mod toast;

pub use capabilities::{Clock, IdGenerator, KeyValueStorage};
pub use note_form::NoteForm;
pub use note_store::{NoteStore, StoreEvent, StoreSettings};
pub use scheduler::{DeferredScheduler, FiredTask, TaskHandle};
pub use toast::Toast;
