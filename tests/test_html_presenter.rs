mod helpers;

use helpers::{memory_store, sample_note};
use notekeeper::application::NoteForm;
use notekeeper::ports::{HtmlPresenter, NotesPage};
use notekeeper::util::testing::MemoryStorage;

#[test]
fn given_notes_when_rendering_then_cards_appear_in_insertion_order() {
    // Arrange
    let notes = vec![
        sample_note("n1", "First title", "first body"),
        sample_note("n2", "Second title", "second body"),
    ];
    let form = NoteForm::new();
    let page = NotesPage {
        notes: &notes,
        form: &form,
        toasts: &[],
    };

    // Act
    let html = HtmlPresenter::new().render(&page);

    // Assert
    let first = html.find("First title").expect("first card rendered");
    let second = html.find("Second title").expect("second card rendered");
    assert!(first < second);
    assert!(html.contains(r#"value="n1""#));
    assert!(html.contains(r#"value="n2""#));
    assert!(html.contains("first body"));
}

#[test]
fn given_empty_page_when_rendering_then_shows_entry_form() {
    let form = NoteForm::new();
    let page = NotesPage {
        notes: &[],
        form: &form,
        toasts: &[],
    };

    let html = HtmlPresenter::new().render(&page);

    assert!(html.contains("<h1>Notes</h1>"));
    assert!(html.contains(r#"placeholder="Note Title""#));
    assert!(html.contains(r#"rows="4""#));
    assert!(html.contains("Add Note"));
    assert!(!html.contains("class=\"card\""));
}

#[test]
fn given_typed_form_when_rendering_then_keeps_escaped_input() {
    let form = NoteForm::with_input(r#"He said "hi""#, "<script>");
    let page = NotesPage {
        notes: &[],
        form: &form,
        toasts: &[],
    };

    let html = HtmlPresenter::new().render(&page);

    assert!(html.contains(r#"value="He said &quot;hi&quot;""#));
    assert!(html.contains("&lt;script&gt;</textarea>"));
}

#[test]
fn given_store_after_save_when_rendering_then_shows_saved_toast() {
    // Arrange
    let mut store = memory_store(MemoryStorage::builder().build());
    store.add_note("A", "B");
    store.advance(1000).unwrap();
    let form = NoteForm::new();

    // Act
    let html = HtmlPresenter::new().render(&NotesPage {
        notes: store.notes(),
        form: &form,
        toasts: store.toasts(),
    });

    // Assert
    assert!(html.contains("toast-success"));
    assert!(html.contains("Notes saved!"));
}
