//! # unhtml
//!
//! Fast HTML to plain text conversion for Rust.
//!
//! This library strips markup from HTML, decodes character entities, turns
//! block-level elements into line breaks, and normalizes whitespace. Each
//! stage can be switched off through [`ConversionOptions`].
//!
//! ## Quick Start
//!
//! ```
//! use unhtml::{convert, ConversionOptions};
//!
//! let result = convert("<h1>Title</h1><p>Fish &amp; Chips</p>", &ConversionOptions::default());
//! assert_eq!(result.text, "Title\n\nFish & Chips");
//! assert_eq!(result.stats.word_count, 4);
//! ```
//!
//! ## Features
//!
//! - **Entity decoding**: common named entities plus decimal and hex references
//! - **Structure preservation**: block elements become line breaks
//! - **Whitespace cleanup**: collapsed spaces, at most one blank line, trimmed lines
//! - **Statistics**: characters removed and word count for every conversion
//! - **Service contract**: JSON request/response handling in [`api`]
//! - **Parallel processing**: uses Rayon for batches of documents

pub mod api;
pub mod convert;
pub mod detect;
pub mod error;
pub mod options;
pub mod result;

#[cfg(feature = "ffi")]
pub mod ffi;

// Re-export commonly used types
pub use api::{handle, handle_json, ConvertRequest, ConvertResponse, JsonFormat};
pub use convert::{convert, convert_many, HtmlToTextConverter};
pub use detect::{is_supported_path, looks_like_html};
pub use error::{Error, Result};
pub use options::ConversionOptions;
pub use result::{ConversionResult, ConversionStats, TextCounts};

use std::path::Path;

/// Convert HTML to plain text with default options.
///
/// # Example
///
/// ```
/// assert_eq!(unhtml::to_text("Line1<br>Line2"), "Line1\nLine2");
/// ```
pub fn to_text(html: &str) -> String {
    HtmlToTextConverter::default().convert_text(html)
}

/// Read an HTML file and convert it.
///
/// The file must be an HTML/text file (see [`detect::read_input_file`]) and
/// must not be blank.
///
/// # Example
///
/// ```no_run
/// use unhtml::{convert_file, ConversionOptions};
///
/// let result = convert_file("page.html", &ConversionOptions::default()).unwrap();
/// println!("{}", result.text);
/// ```
pub fn convert_file<P: AsRef<Path>>(
    path: P,
    options: &ConversionOptions,
) -> Result<ConversionResult> {
    let html = detect::read_input_file(path)?;
    Unhtml::with_options(*options).convert(&html)
}

/// Builder for validated HTML conversion.
///
/// Unlike [`convert`], the builder rejects blank input the same way the
/// request interface does.
///
/// # Example
///
/// ```
/// use unhtml::Unhtml;
///
/// let result = Unhtml::new()
///     .with_entities(false)
///     .convert("<p>1 &lt; 2</p>")?;
/// assert_eq!(result.text, "1 &lt; 2");
///
/// assert!(Unhtml::new().convert("   ").is_err());
/// # Ok::<(), unhtml::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Unhtml {
    options: ConversionOptions,
}

impl Unhtml {
    /// Create a new builder with every stage enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder from existing options.
    pub fn with_options(options: ConversionOptions) -> Self {
        Self { options }
    }

    /// Enable or disable block-element line breaks.
    pub fn with_line_breaks(mut self, preserve: bool) -> Self {
        self.options = self.options.with_line_breaks(preserve);
        self
    }

    /// Enable or disable whitespace normalization.
    pub fn with_extra_space_removal(mut self, remove: bool) -> Self {
        self.options = self.options.with_extra_space_removal(remove);
        self
    }

    /// Enable or disable entity decoding.
    pub fn with_entities(mut self, convert: bool) -> Self {
        self.options = self.options.with_entities(convert);
        self
    }

    /// Get the configured options.
    pub fn options(&self) -> &ConversionOptions {
        &self.options
    }

    /// Convert HTML, rejecting missing or blank input.
    pub fn convert(&self, html: &str) -> Result<ConversionResult> {
        if html.trim().is_empty() {
            return Err(Error::MissingHtml);
        }
        Ok(HtmlToTextConverter::new(self.options).convert(html))
    }

    /// Convert a batch of documents in parallel, rejecting the batch if any
    /// document is blank.
    pub fn convert_many<S>(&self, inputs: &[S]) -> Result<Vec<ConversionResult>>
    where
        S: AsRef<str> + Sync,
    {
        if inputs.iter().any(|html| html.as_ref().trim().is_empty()) {
            return Err(Error::MissingHtml);
        }
        Ok(HtmlToTextConverter::new(self.options).convert_many(inputs))
    }
}
