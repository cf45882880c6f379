// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use anyhow::{Context, Result};
use application::{NoteForm, NoteStore, StoreEvent};
use infrastructure::{Config, FileSlotStorage, PageRenderer, SystemClock, UuidGenerator};
use ports::{HtmlPresenter, NotesPage, TerminalPresenter};
use tracing::{debug, info};
use crate::cli::args::{Args, Command};

type FileNoteStore = NoteStore<FileSlotStorage, UuidGenerator, SystemClock>;

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting notekeeper with arguments");

    // Initialize infrastructure
    let config = Config::resolve(args.config.as_deref())?;
    let data_dir = config.data_dir(args.data_dir.as_deref())?;
    debug!(?data_dir, "Using data directory");
    let storage = FileSlotStorage::new(&data_dir);

    // Initialize application
    let mut store = NoteStore::open(storage, UuidGenerator, SystemClock, config.store_settings())
        .with_context(|| format!("Failed to load notes from {}", data_dir.display()))?;

    // Execute use case
    let result = match args.command {
        Command::Add { title, content } => handle_add(&mut store, title, content),
        Command::Delete { note_id } => handle_delete(&mut store, &note_id),
        Command::List { json } => handle_list(&store, json),
        Command::View { print } => handle_view(&store, print),
    };

    store.deactivate();
    result
}

fn handle_add(store: &mut FileNoteStore, title: String, content: String) -> Result<()> {
    let mut form = NoteForm::with_input(title, content);
    let Some(id) = form.submit(store) else {
        info!("Title and content must not be blank; nothing added");
        return Ok(());
    };
    info!(note_id = %id, "Added note");
    println!("{id}");

    report(infrastructure::driver::settle(store)?);
    Ok(())
}

fn handle_delete(store: &mut FileNoteStore, note_id: &str) -> Result<()> {
    if store.delete_note(note_id) {
        info!(note_id, "Deleted note");
    } else {
        info!(note_id, "No note with this id; nothing deleted");
    }

    report(infrastructure::driver::settle(store)?);
    Ok(())
}

fn handle_list(store: &FileNoteStore, json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(store.notes())
            .context("Failed to serialize notes to JSON")?;
        println!("{out}");
    } else {
        print!("{}", TerminalPresenter::new().render(store.notes()));
    }
    Ok(())
}

fn handle_view(store: &FileNoteStore, print: bool) -> Result<()> {
    let form = NoteForm::new();
    let page = NotesPage {
        notes: store.notes(),
        form: &form,
        toasts: store.toasts(),
    };
    let html = HtmlPresenter::new().render(&page);

    if print {
        println!("{html}");
        return Ok(());
    }

    let mut renderer = PageRenderer::new();
    let path = renderer.create_temp_file(&html)?;
    renderer.open_in_browser(&path)?;
    Ok(())
}

/// Show raised toasts on stderr, keeping stdout for data.
fn report(events: Vec<StoreEvent>) {
    for event in events {
        if let StoreEvent::ToastRaised(toast) = event {
            eprintln!("{}", toast.message);
        }
    }
}

#[cfg(test)]
/// must be public to be used from integration tests
mod tests {
    use crate::util::testing;
    #[ctor::ctor]
    fn init() {
        testing::init_test_setup().expect("Failed to initialize test setup");
    }
}
