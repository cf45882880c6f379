// src/infrastructure/file_storage.rs
use crate::application::KeyValueStorage;
use crate::domain::DomainError;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, instrument};

/// Key-value slots stored as one `<key>.json` file each inside a data directory.
#[derive(Debug, Clone)]
pub struct FileSlotStorage {
    dir: PathBuf,
}

impl FileSlotStorage {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref().to_path_buf();
        debug!(?dir, "Using file slot storage");
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStorage for FileSlotStorage {
    #[instrument(level = "debug", skip(self))]
    fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let path = self.slot_path(key);
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(?path, "Slot file does not exist yet");
                Ok(None)
            }
            Err(e) => Err(DomainError::SlotRead {
                key: key.to_string(),
                reason: format!("{}: {e}", path.display()),
            }),
        }
    }

    /// Write through a temp file in the same directory and rename it over the slot.
    #[instrument(level = "debug", skip(self, value), fields(bytes = value.len()))]
    fn set(&mut self, key: &str, value: &str) -> Result<(), DomainError> {
        let path = self.slot_path(key);
        let write_err = |reason: String| DomainError::SlotWrite {
            key: key.to_string(),
            reason,
        };

        fs::create_dir_all(&self.dir)
            .map_err(|e| write_err(format!("{}: {e}", self.dir.display())))?;

        let mut tmp = NamedTempFile::new_in(&self.dir)
            .map_err(|e| write_err(format!("temp file in {}: {e}", self.dir.display())))?;
        tmp.write_all(value.as_bytes())
            .and_then(|_| tmp.flush())
            .map_err(|e| write_err(format!("temp file: {e}")))?;
        tmp.persist(&path)
            .map_err(|e| write_err(format!("{}: {}", path.display(), e.error)))?;

        debug!(?path, "Wrote slot file");
        Ok(())
    }
}
