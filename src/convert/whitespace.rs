//! Whitespace normalization for converted text.

use once_cell::sync::Lazy;
use regex::Regex;

static SPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").expect("space run"));

// 3+ newlines, possibly with whitespace between them
static BLANK_LINE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n\s*\n").expect("blank line run"));

/// Normalize whitespace in converted text.
///
/// Applied in order:
/// 1. runs of spaces and tabs become one space
/// 2. three or more newlines (whitespace between them allowed) become two,
///    so paragraphs are separated by at most one blank line
/// 3. every line is trimmed
/// 4. leading and trailing newlines are removed
///
/// # Example
///
/// ```
/// use unhtml::convert::normalize_whitespace;
///
/// assert_eq!(normalize_whitespace("A   B"), "A B");
/// assert_eq!(normalize_whitespace("\nHello\n\n\n\nWorld\n"), "Hello\n\nWorld");
/// ```
pub fn normalize_whitespace(text: &str) -> String {
    let collapsed = SPACE_RUN.replace_all(text, " ");
    let collapsed = BLANK_LINE_RUN.replace_all(&collapsed, "\n\n");

    let trimmed = collapsed
        .split('\n')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n");

    trimmed.trim_matches('\n').to_string()
}
