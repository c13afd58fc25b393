//! HTML to plain text conversion pipeline.
//!
//! The converter runs four stages in a fixed order, each one consuming the
//! complete output of the previous stage:
//!
//! 1. [`decode_entities`] (if `convert_entities`)
//! 2. [`insert_block_breaks`] (if `preserve_line_breaks`)
//! 3. [`strip_tags`] (always)
//! 4. [`normalize_whitespace`] (if `remove_extra_spaces`)
//!
//! Decoding runs before tag handling, so `&lt;b&gt;` becomes `<b>` and is
//! then stripped like any other tag.
//!
//! # Example
//!
//! ```
//! use unhtml::convert::HtmlToTextConverter;
//! use unhtml::ConversionOptions;
//!
//! let converter = HtmlToTextConverter::new(ConversionOptions::default());
//! let result = converter.convert("<p>Hello</p><p>World</p>");
//!
//! assert_eq!(result.text, "Hello\n\nWorld");
//! assert_eq!(result.stats.word_count, 2);
//! ```

mod entities;
mod tags;
mod whitespace;

pub use entities::{decode_entities, NAMED_ENTITIES};
pub use tags::{insert_block_breaks, is_block_tag, strip_tags, BLOCK_TAGS};
pub use whitespace::normalize_whitespace;

use crate::options::ConversionOptions;
use crate::result::ConversionResult;
use rayon::prelude::*;

/// Converts HTML markup to normalized plain text.
///
/// The converter holds only its options and can be shared freely between
/// threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HtmlToTextConverter {
    options: ConversionOptions,
}

impl HtmlToTextConverter {
    /// Create a converter with the given options.
    pub fn new(options: ConversionOptions) -> Self {
        Self { options }
    }

    /// Get the converter options.
    pub fn options(&self) -> &ConversionOptions {
        &self.options
    }

    /// Convert `html` to plain text with statistics.
    ///
    /// Total over its input: empty HTML yields empty text.
    pub fn convert(&self, html: &str) -> ConversionResult {
        let text = self.convert_text(html);
        let result = ConversionResult::new(html, text);

        log::debug!(
            "Converted {} chars to {} chars ({} words)",
            result.stats.original_length,
            result.stats.converted_length,
            result.stats.word_count
        );

        result
    }

    /// Convert `html` to plain text without computing statistics.
    pub fn convert_text(&self, html: &str) -> String {
        let mut text = if self.options.convert_entities {
            decode_entities(html)
        } else {
            html.to_string()
        };

        if self.options.preserve_line_breaks {
            text = insert_block_breaks(&text);
        }

        text = strip_tags(&text);

        if self.options.remove_extra_spaces {
            text = normalize_whitespace(&text);
        }

        text
    }

    /// Convert many independent documents in parallel.
    ///
    /// Results are returned in input order.
    pub fn convert_many<S>(&self, inputs: &[S]) -> Vec<ConversionResult>
    where
        S: AsRef<str> + Sync,
    {
        inputs
            .par_iter()
            .map(|html| self.convert(html.as_ref()))
            .collect()
    }
}

/// Convert `html` with the given options.
pub fn convert(html: &str, options: &ConversionOptions) -> ConversionResult {
    HtmlToTextConverter::new(*options).convert(html)
}

/// Convert many documents in parallel with the given options.
pub fn convert_many<S>(inputs: &[S], options: &ConversionOptions) -> Vec<ConversionResult>
where
    S: AsRef<str> + Sync,
{
    HtmlToTextConverter::new(*options).convert_many(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(html: &str) -> String {
        convert(html, &ConversionOptions::default()).text
    }

    #[test]
    fn test_entities() {
        assert_eq!(text("&amp;&lt;&gt;"), "&<>");
        assert_eq!(text("&#65;&#x42;"), "AB");
    }

    #[test]
    fn test_paragraphs() {
        assert_eq!(text("<p>Hello</p><p>World</p>"), "Hello\n\nWorld");
    }

    #[test]
    fn test_line_break() {
        assert_eq!(text("Line1<br>Line2"), "Line1\nLine2");
    }

    #[test]
    fn test_extra_spaces() {
        assert_eq!(text("A   B"), "A B");
    }

    #[test]
    fn test_empty_input() {
        let result = convert("", &ConversionOptions::default());
        assert_eq!(result.text, "");
        assert_eq!(result.stats.original_length, 0);
        assert_eq!(result.stats.word_count, 0);
    }

    #[test]
    fn test_entities_decoded_before_tags() {
        // decoded markup is treated as markup
        assert_eq!(text("&lt;b&gt;bold&lt;/b&gt;"), "bold");
        assert_eq!(text("x&lt;br&gt;y"), "x\ny");
    }

    #[test]
    fn test_entities_disabled() {
        let options = ConversionOptions::default().with_entities(false);
        let result = convert("<p>Fish &amp; Chips</p>", &options);
        assert_eq!(result.text, "Fish &amp; Chips");
    }

    #[test]
    fn test_line_breaks_disabled() {
        let options = ConversionOptions::default().with_line_breaks(false);
        let result = convert("<p>Hello</p><p>World</p>", &options);
        assert_eq!(result.text, "HelloWorld");
    }

    #[test]
    fn test_spaces_kept() {
        let options = ConversionOptions::default().with_extra_space_removal(false);
        let result = convert("<p>Hello   there</p>", &options);
        assert_eq!(result.text, "\nHello   there\n");
    }

    #[test]
    fn test_raw_only_strips_tags() {
        let result = convert("<p>a &amp;   b</p>", &ConversionOptions::raw());
        assert_eq!(result.text, "a &amp;   b");
    }

    #[test]
    fn test_nested_blocks() {
        let html = "<div>\n  <h1>Title</h1>\n  <ul>\n    <li>One</li>\n    <li>Two</li>\n  </ul>\n</div>";
        assert_eq!(text(html), "Title\n\nOne\n\nTwo");
    }

    #[test]
    fn test_inline_markup_joins_words() {
        assert_eq!(
            text("<p>Some <b>bold</b> and <a href=\"#\">linked</a> text.</p>"),
            "Some bold and linked text."
        );
    }

    #[test]
    fn test_stats_invariant() {
        let result = convert("<div>  Fish &amp; Chips  </div>", &ConversionOptions::default());
        assert_eq!(result.text, "Fish & Chips");
        assert_eq!(
            result.stats.characters_removed,
            result.stats.original_length as i64 - result.stats.converted_length as i64
        );
        assert_eq!(result.stats.word_count, 3);
    }

    #[test]
    fn test_whitespace_only_output_has_no_words() {
        let result = convert("<p> </p><br>", &ConversionOptions::default());
        assert_eq!(result.text, "");
        assert_eq!(result.stats.word_count, 0);
    }

    #[test]
    fn test_convert_many_preserves_order() {
        let inputs = ["<p>one</p>", "<b>two</b>", "three &amp; four"];
        let results = convert_many(&inputs, &ConversionOptions::default());
        let texts: Vec<_> = results.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two", "three & four"]);
    }

    #[test]
    fn test_converter_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HtmlToTextConverter>();
    }
}
