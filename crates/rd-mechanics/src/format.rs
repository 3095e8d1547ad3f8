//! Shared pieces of the reply text.
//!
//! Replies are consumed by existing chat tooling, so punctuation and
//! ordering here are fixed.

/// Render ` by N°` for a non-zero margin, or nothing.
pub fn degrees_suffix(degrees: u32) -> String {
    if degrees == 0 {
        String::new()
    } else {
        format!(" by {degrees}°")
    }
}

/// Render ` (a, b, c)` for a non-empty list, or nothing.
pub fn parenthesized<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parts: Vec<String> = items
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

/// Trim a free-text note, treating blank text as absent.
pub fn clean_note(note: Option<&str>) -> Option<String> {
    note.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
