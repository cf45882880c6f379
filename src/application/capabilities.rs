// src/application/capabilities.rs
use crate::domain::DomainError;

/// Named string slots the note store persists into.
pub trait KeyValueStorage {
    /// Returns `Ok(None)` when nothing has been stored under `key` yet.
    fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Replace the whole value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), DomainError>;
}

/// Source of note identifiers. Implementations must never hand out the same id twice.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Wall-clock time in epoch milliseconds, used to stamp new notes.
pub trait Clock {
    fn now_millis(&self) -> i64;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for &mut T {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), DomainError> {
        (**self).set(key, value)
    }
}
