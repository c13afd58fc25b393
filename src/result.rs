//! Conversion result with statistics.

use serde::{Deserialize, Serialize};

/// Result of converting an HTML document to plain text.
///
/// Serializes flat: `{ text, originalLength, convertedLength,
/// charactersRemoved, wordCount }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// The converted plain text
    pub text: String,

    /// Length and word statistics
    #[serde(flatten)]
    pub stats: ConversionStats,
}

impl ConversionResult {
    /// Create a result, computing statistics from the original input.
    pub fn new(original: &str, text: String) -> Self {
        let stats = ConversionStats::between(original, &text);
        Self { text, stats }
    }

    /// Consume the result, keeping only the text.
    pub fn into_text(self) -> String {
        self.text
    }
}

/// Statistics describing a single conversion.
///
/// Lengths are counted in UTF-16 code units, the unit browsers report for
/// string length, so a character outside the Basic Multilingual Plane (an
/// emoji, for instance) counts as 2.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionStats {
    /// Character length of the HTML input
    pub original_length: usize,

    /// Character length of the converted text
    pub converted_length: usize,

    /// `original_length - converted_length`, not clamped
    pub characters_removed: i64,

    /// Whitespace-separated tokens in the converted text
    pub word_count: usize,
}

impl ConversionStats {
    /// Compute statistics for an input/output pair.
    pub fn between(original: &str, converted: &str) -> Self {
        let original_length = text_length(original);
        let converted_length = text_length(converted);

        Self {
            original_length,
            converted_length,
            characters_removed: original_length as i64 - converted_length as i64,
            word_count: count_words(converted),
        }
    }
}

/// Character and word counts for a piece of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextCounts {
    /// Length in UTF-16 code units
    pub characters: usize,

    /// Number of whitespace-separated words
    pub words: usize,
}

impl TextCounts {
    /// Count characters and words in `text`.
    pub fn of(text: &str) -> Self {
        Self {
            characters: text_length(text),
            words: count_words(text),
        }
    }
}

/// Length of `text` in UTF-16 code units.
pub fn text_length(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Count whitespace-separated tokens; zero for blank text.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
