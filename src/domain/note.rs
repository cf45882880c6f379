// src/domain/note.rs
use serde::{Deserialize, Serialize};

/// A single note as held in memory and persisted in the notes slot.
///
/// Field names follow the persisted slot format (`lastModified`, epoch milliseconds).
/// `last_modified` is captured at creation and never touched again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    pub last_modified: i64,
}

impl Note {
    /// Build a note from raw form input.
    ///
    /// Returns `None` when either field is empty after trimming.
    pub fn from_input(id: String, title: &str, content: &str, now_millis: i64) -> Option<Self> {
        if !Self::accepts(title, content) {
            return None;
        }

        Some(Self {
            id,
            title: title.trim().to_string(),
            content: content.trim().to_string(),
            last_modified: now_millis,
        })
    }

    /// Whether both fields still hold text after trimming.
    pub fn accepts(title: &str, content: &str) -> bool {
        !title.trim().is_empty() && !content.trim().is_empty()
    }
}
