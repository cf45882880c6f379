// src/util/text.rs

/// Extract the first non-empty line of a note body, trimmed.
///
/// # Examples
///
/// ```
/// use notekeeper::util::text::first_line;
///
/// assert_eq!(first_line("\n  milk\neggs"), "milk");
/// ```
pub fn first_line(content: &str) -> &str {
    content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("")
}

/// Shorten `text` to at most `max_chars` characters, marking the cut with `…`.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(max_chars - 1).collect();
    out.push('…');
    out
}
