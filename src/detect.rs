//! Input detection and loading for HTML and text files.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// File extensions accepted as converter input (lowercase, no dot).
pub const SUPPORTED_EXTENSIONS: &[&str] = &["html", "htm", "xhtml", "txt", "text"];

/// UTF-8 byte order mark.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Check whether a path has an accepted extension (case-insensitive).
///
/// # Example
/// ```
/// use unhtml::detect::is_supported_path;
///
/// assert!(is_supported_path("page.HTML"));
/// assert!(is_supported_path("notes.txt"));
/// assert!(!is_supported_path("photo.png"));
/// ```
pub fn is_supported_path<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

/// Sniff whether bytes look like markup: a `<` followed by a letter, `/`
/// or `!` somewhere in the first 1024 bytes.
pub fn looks_like_html(data: &[u8]) -> bool {
    let head = &data[..data.len().min(1024)];
    head.windows(2)
        .any(|w| w[0] == b'<' && (w[1].is_ascii_alphabetic() || w[1] == b'/' || w[1] == b'!'))
}

/// Decode input bytes as UTF-8, dropping a leading byte order mark.
pub fn decode_bytes(data: &[u8]) -> Result<String> {
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);
    String::from_utf8(data.to_vec())
        .map_err(|e| Error::Encoding(format!("input is not valid UTF-8: {}", e)))
}

/// Read an HTML or text file.
///
/// Files with a supported extension are always accepted; anything else is
/// accepted only if its content looks like markup.
pub fn read_input_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let data = fs::read(path)?;

    if !is_supported_path(path) && !looks_like_html(&data) {
        return Err(Error::UnsupportedInput(format!(
            "{} is not an HTML or text file",
            path.display()
        )));
    }

    decode_bytes(&data)
}
