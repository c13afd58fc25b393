//! Tag scanning: block-element line breaks and tag stripping.
//!
//! A tag runs from `<` to the first `>` after it. Quoted attribute values
//! are not tracked, so `<div title="a>b">` ends at the `>` inside the quotes
//! and leaves `b">` behind as text. Comments, `<script>` and `<style>` get
//! no special treatment either; only their delimiters are removed.

/// Tag names that introduce a line break.
pub const BLOCK_TAGS: [&str; 26] = [
    "div",
    "p",
    "br",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "li",
    "ul",
    "ol",
    "blockquote",
    "pre",
    "hr",
    "table",
    "tr",
    "td",
    "th",
    "section",
    "article",
    "header",
    "footer",
    "main",
    "aside",
    "nav",
];

/// Check whether `name` is a block-level tag name (case-insensitive).
pub fn is_block_tag(name: &str) -> bool {
    BLOCK_TAGS.iter().any(|tag| tag.eq_ignore_ascii_case(name))
}

/// Replace every opening or closing block-level tag with a single `\n`.
///
/// Names match case-insensitively. An opening tag is `<name` followed by
/// anything up to the next `>`, so the name is a prefix match: `<p class="x">`
/// matches, and so do `<param>` and `<link>`. A closing tag must be exactly
/// `</name>`; `</p >` is left in place. Tags that do not match are left for
/// [`strip_tags`].
///
/// # Example
///
/// ```
/// use unhtml::convert::insert_block_breaks;
///
/// assert_eq!(insert_block_breaks("Line1<br>Line2"), "Line1\nLine2");
/// assert_eq!(insert_block_breaks("<P CLASS=x>Hi</P>"), "\nHi\n");
/// assert_eq!(insert_block_breaks("<b>Hi</b>"), "<b>Hi</b>");
/// ```
pub fn insert_block_breaks(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut copied = 0;
    let mut pos = 0;

    while let Some(offset) = text[pos..].find('<') {
        let start = pos + offset;
        match block_tag_end(text, start) {
            Some(end) => {
                output.push_str(&text[copied..start]);
                output.push('\n');
                copied = end;
                pos = end;
            }
            None => pos = start + 1,
        }
    }

    output.push_str(&text[copied..]);
    output
}

/// Remove every `<` ... `>` span, whatever it contains.
///
/// A `<` with no `>` anywhere after it is kept as text.
///
/// # Example
///
/// ```
/// use unhtml::convert::strip_tags;
///
/// assert_eq!(strip_tags("<b>bold</b> and <i class=\"x\">italic</i>"), "bold and italic");
/// assert_eq!(strip_tags("1 < 2"), "1 < 2");
/// ```
pub fn strip_tags(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('<') {
        match rest[open..].find('>') {
            Some(close) => {
                output.push_str(&rest[..open]);
                rest = &rest[open + close + 1..];
            }
            None => break,
        }
    }

    output.push_str(rest);
    output
}

/// If a block-level tag starts at `start` (which holds `<`), return the
/// byte offset just past its closing `>`.
fn block_tag_end(text: &str, start: usize) -> Option<usize> {
    let rest = &text.as_bytes()[start + 1..];

    if let Some(name) = rest.strip_prefix(b"/") {
        return BLOCK_TAGS.iter().find_map(|tag| {
            let len = tag.len();
            let matches = name.get(len) == Some(&b'>')
                && name[..len].eq_ignore_ascii_case(tag.as_bytes());
            matches.then_some(start + len + 3)
        });
    }

    let opens_block = BLOCK_TAGS.iter().any(|tag| {
        rest.get(..tag.len())
            .map_or(false, |prefix| prefix.eq_ignore_ascii_case(tag.as_bytes()))
    });
    if !opens_block {
        return None;
    }

    text[start..].find('>').map(|close| start + close + 1)
}
