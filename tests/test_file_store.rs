mod helpers;

use anyhow::Result;
use helpers::TestDataDir;
use notekeeper::application::{NoteStore, StoreSettings};
use notekeeper::domain::DomainError;
use notekeeper::infrastructure::driver::settle;
use notekeeper::util::testing::{FixedClock, SequentialIds};

fn fast_settings() -> StoreSettings {
    StoreSettings {
        quiet_period_ms: 10,
        toast_auto_dismiss_ms: 10,
        ..StoreSettings::default()
    }
}

#[test]
fn given_new_data_dir_when_adding_and_settling_then_slot_file_holds_note() -> Result<()> {
    // Arrange
    let data = TestDataDir::new()?;
    let mut store = NoteStore::open(
        data.storage(),
        SequentialIds::new(),
        FixedClock::at(42),
        fast_settings(),
    )?;

    // Act
    store.add_note("Title", "Body");
    settle(&mut store)?;
    store.deactivate();

    // Assert
    assert_eq!(
        data.read_slot()?,
        r#"[{"id":"note-1","title":"Title","content":"Body","lastModified":42}]"#
    );
    Ok(())
}

#[test]
fn given_saved_notes_when_reopening_then_loads_them() -> Result<()> {
    // Arrange
    let data = TestDataDir::new()?;
    {
        let mut store = NoteStore::open(
            data.storage(),
            SequentialIds::new(),
            FixedClock::at(0),
            fast_settings(),
        )?;
        store.add_note("A", "1");
        store.add_note("B", "2");
        settle(&mut store)?;
    }

    // Act
    let reopened = NoteStore::open(
        data.storage(),
        SequentialIds::new(),
        FixedClock::at(0),
        fast_settings(),
    )?;

    // Assert
    let titles: Vec<_> = reopened.notes().iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, vec!["A", "B"]);
    Ok(())
}

#[test]
fn given_deactivated_store_when_save_was_pending_then_slot_is_untouched() -> Result<()> {
    let data = TestDataDir::new()?.with_slot("[]")?;
    let mut store = NoteStore::open(
        data.storage(),
        SequentialIds::new(),
        FixedClock::at(0),
        fast_settings(),
    )?;

    store.add_note("A", "1");
    store.deactivate();

    assert_eq!(data.read_slot()?, "[]");
    Ok(())
}

#[test]
fn given_corrupt_slot_file_when_opening_then_fails_and_keeps_file() -> Result<()> {
    // Arrange
    let data = TestDataDir::new()?.with_slot("[{\"id\": ")?;

    // Act
    let result = NoteStore::open(
        data.storage(),
        SequentialIds::new(),
        FixedClock::at(0),
        fast_settings(),
    );

    // Assert
    assert!(matches!(result, Err(DomainError::CorruptSlot { .. })));
    assert_eq!(data.read_slot()?, "[{\"id\": ");
    Ok(())
}
