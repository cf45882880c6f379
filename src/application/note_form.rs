// src/application/note_form.rs
use crate::application::capabilities::{Clock, IdGenerator, KeyValueStorage};
use crate::application::note_store::NoteStore;

/// Text currently typed into the entry form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteForm {
    pub title: String,
    pub content: String,
}

impl NoteForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Submit the form to the store. Both fields are cleared only when a note was
    /// created; rejected input stays in the form. Returns the new note's id.
    pub fn submit<S, G, C>(&mut self, store: &mut NoteStore<S, G, C>) -> Option<String>
    where
        S: KeyValueStorage,
        G: IdGenerator,
        C: Clock,
    {
        let id = store
            .add_note(&self.title, &self.content)
            .map(|note| note.id.clone())?;
        self.title.clear();
        self.content.clear();
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::StoreSettings;
    use crate::util::testing::{FixedClock, MemoryStorage, SequentialIds};

    fn store() -> NoteStore<MemoryStorage, SequentialIds, FixedClock> {
        NoteStore::open(
            MemoryStorage::builder().build(),
            SequentialIds::new(),
            FixedClock::at(0),
            StoreSettings::default(),
        )
        .expect("open succeeds")
    }

    #[test]
    fn given_valid_input_when_submitting_then_fields_are_cleared() {
        // Arrange
        let mut store = store();
        let mut form = NoteForm::new();
        form.set_title(" Groceries ");
        form.set_content("milk\neggs");

        // Act
        let id = form.submit(&mut store);

        // Assert
        assert_eq!(id.as_deref(), Some("note-1"));
        assert_eq!(form, NoteForm::default());
        assert_eq!(store.notes()[0].title, "Groceries");
    }

    #[test]
    fn given_blank_content_when_submitting_then_input_is_kept() {
        let mut store = store();
        let mut form = NoteForm::with_input("Title", "   ");

        let id = form.submit(&mut store);

        assert!(id.is_none());
        assert_eq!(form.title, "Title");
        assert_eq!(form.content, "   ");
        assert!(store.is_empty());
    }
}
