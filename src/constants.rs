// src/constants.rs
//
// Application-wide constants. Each one is the default for a setting that can be
// overridden through the configuration file.

/// Storage key of the single slot that holds the serialized note list.
///
/// Used in: `application/note_store.rs`, `infrastructure/config.rs`
pub const NOTES_SLOT_KEY: &str = "notes";

/// Quiet period in milliseconds after the last change before the list is saved.
///
/// Every change restarts the countdown, so a burst of edits produces one save.
///
/// Used in: `application/note_store.rs`, `infrastructure/config.rs`
pub const AUTOSAVE_QUIET_PERIOD_MS: u64 = 1000;

/// Lifetime in milliseconds of the "saved" toast before it dismisses itself.
///
/// Used in: `application/note_store.rs`, `infrastructure/config.rs`
pub const TOAST_AUTO_DISMISS_MS: u64 = 2000;

/// Message shown after a successful save.
pub const SAVED_TOAST_MESSAGE: &str = "Notes saved!";

/// Visible rows of the multi-line content field in the entry form.
///
/// Used in: `ports/html.rs`
pub const CONTENT_FIELD_ROWS: usize = 4;

/// Maximum characters of note content shown per row in the terminal listing.
///
/// Used in: `ports/terminal.rs`
pub const LIST_PREVIEW_WIDTH: usize = 60;

/// Directory name used below the platform config and data directories.
pub const APP_DIR_NAME: &str = "notekeeper";

/// Delay in milliseconds after spawning the browser before returning.
///
/// The rendered page lives in a temp directory that is removed when the renderer
/// is dropped; the browser needs a moment to read it first.
///
/// Used in: `infrastructure/renderer.rs`
pub const BROWSER_LAUNCH_DELAY_MS: u64 = 500;
