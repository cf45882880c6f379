// src/ports/terminal.rs
use crate::constants::LIST_PREVIEW_WIDTH;
use crate::domain::Note;
use crate::util::text::{first_line, truncate};

/// Plain-text listing, one note per line in insertion order.
#[derive(Debug, Default)]
pub struct TerminalPresenter;

impl TerminalPresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, notes: &[Note]) -> String {
        if notes.is_empty() {
            return "No notes\n".to_string();
        }

        let title_width = notes
            .iter()
            .map(|n| n.title.chars().count())
            .max()
            .unwrap_or(0);

        notes
            .iter()
            .map(|note| {
                format!(
                    "{}\t{:<width$}\t{}\n",
                    note.id,
                    note.title,
                    truncate(first_line(&note.content), LIST_PREVIEW_WIDTH),
                    width = title_width,
                )
            })
            .collect()
    }
}
