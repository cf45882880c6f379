use anyhow::{Context, Result};
use notekeeper::application::{NoteStore, StoreSettings};
use notekeeper::domain::Note;
use notekeeper::infrastructure::FileSlotStorage;
use notekeeper::util::testing::{FixedClock, MemoryStorage, SequentialIds};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test fixture for working with a temporary data directory
#[allow(dead_code)]
pub struct TestDataDir {
    _temp_dir: TempDir,
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestDataDir {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir()
            .context("Failed to create temporary directory")?;
        let path = temp_dir.path().join("data");

        Ok(Self {
            _temp_dir: temp_dir,
            path,
        })
    }

    /// Seed the notes slot with a raw value, as an earlier session would have left it
    pub fn with_slot(self, raw: &str) -> Result<Self> {
        std::fs::create_dir_all(&self.path)?;
        std::fs::write(self.slot_path(), raw).context("Failed to seed notes slot")?;
        Ok(self)
    }

    pub fn slot_path(&self) -> PathBuf {
        self.path.join("notes.json")
    }

    pub fn read_slot(&self) -> Result<String> {
        std::fs::read_to_string(self.slot_path()).context("Failed to read notes slot")
    }

    pub fn storage(&self) -> FileSlotStorage {
        FileSlotStorage::new(Path::new(&self.path))
    }
}

#[allow(dead_code)]
pub type MemoryStore = NoteStore<MemoryStorage, SequentialIds, FixedClock>;

/// Open a store over in-memory storage with default timings
#[allow(dead_code)]
pub fn memory_store(storage: MemoryStorage) -> MemoryStore {
    NoteStore::open(
        storage,
        SequentialIds::new(),
        FixedClock::at(1_700_000_000_000),
        StoreSettings::default(),
    )
    .expect("store should open")
}

#[allow(dead_code)]
pub fn sample_note(id: &str, title: &str, content: &str) -> Note {
    Note {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        last_modified: 1_700_000_000_000,
    }
}
