// src/ports/html.rs
use crate::application::{NoteForm, Toast};
use crate::constants::CONTENT_FIELD_ROWS;
use crate::domain::Note;
use html_escape::{encode_double_quoted_attribute, encode_text};
use tracing::instrument;

/// Everything the notes page shows.
#[derive(Debug, Clone, Copy)]
pub struct NotesPage<'a> {
    pub notes: &'a [Note],
    pub form: &'a NoteForm,
    pub toasts: &'a [Toast],
}

#[derive(Debug, Default)]
pub struct HtmlPresenter;

impl HtmlPresenter {
    pub fn new() -> Self {
        Self
    }

    fn render_card(&self, note: &Note) -> String {
        format!(
            r#"        <article class="card" data-note-id="{id}">
            <header class="card-header">
                <span class="card-title">{title}</span>
                <button type="submit" class="delete" name="delete" value="{id}" title="Delete note">&#128465;</button>
            </header>
            <div class="card-content">
                <p>{content}</p>
            </div>
        </article>
"#,
            id = encode_double_quoted_attribute(&note.id),
            title = encode_text(&note.title),
            content = encode_text(&note.content),
        )
    }

    fn render_toast(&self, toast: &Toast) -> String {
        format!(
            r#"        <div class="toast toast-success" role="status" data-auto-dismiss="{ms}">{message}</div>
"#,
            ms = toast.auto_dismiss_ms,
            message = encode_text(&toast.message),
        )
    }

    #[instrument(level = "debug", skip(self, page), fields(notes = page.notes.len()))]
    pub fn render(&self, page: &NotesPage<'_>) -> String {
        let cards: String = page.notes.iter().map(|n| self.render_card(n)).collect();
        let toasts: String = page.toasts.iter().map(|t| self.render_toast(t)).collect();

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Notes</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            line-height: 1.6;
            max-width: 56rem;
            margin: 0 auto;
            padding: 1rem;
            background-color: #f5f5f5;
        }}
        .entry {{
            display: flex;
            flex-direction: column;
            gap: 1rem;
        }}
        .entry input, .entry textarea {{
            font: inherit;
            padding: 0.5rem;
            border: 1px solid #ccc;
            border-radius: 4px;
        }}
        .grid {{
            display: grid;
            gap: 1rem;
            margin-top: 1rem;
            grid-template-columns: 1fr;
        }}
        @media (min-width: 768px) {{
            .grid {{ grid-template-columns: repeat(2, 1fr); }}
        }}
        @media (min-width: 1024px) {{
            .grid {{ grid-template-columns: repeat(3, 1fr); }}
        }}
        .card {{
            background: white;
            border-radius: 8px;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }}
        .card-header {{
            display: flex;
            align-items: center;
            justify-content: space-between;
            padding: 0.5rem 0 0.5rem 1rem;
            border-bottom: 1px solid #80808047;
        }}
        .card-content {{
            padding: 0 1rem;
            font-size: 0.875rem;
            color: #666;
            white-space: pre-wrap;
        }}
        .delete {{
            border: none;
            background: none;
            color: gray;
            cursor: pointer;
        }}
        .toasts {{
            position: fixed;
            top: 1rem;
            right: 1rem;
        }}
        .toast-success {{
            background: #2e7d32;
            color: white;
            padding: 0.75rem 1rem;
            border-radius: 4px;
            margin-bottom: 0.5rem;
        }}
    </style>
</head>
<body>
    <form class="entry" method="post">
        <h1>Notes</h1>
        <input type="text" name="title" placeholder="Note Title" aria-label="Title" value="{title}">
        <textarea name="content" rows="{rows}" placeholder="Note Content" aria-label="Content">{content}</textarea>
        <button type="submit" name="add">Add Note</button>
    </form>
    <form class="grid" method="post">
{cards}    </form>
    <div class="toasts">
{toasts}    </div>
</body>
</html>"#,
            title = encode_double_quoted_attribute(&page.form.title),
            rows = CONTENT_FIELD_ROWS,
            content = encode_text(&page.form.content),
            cards = cards,
            toasts = toasts,
        )
    }
}
