//! Conversion options and configuration.

use serde::{Deserialize, Serialize};

/// Options controlling the HTML to text pipeline.
///
/// Every flag defaults to `true`. When deserialized, missing fields take
/// their default, so `{}` and `{"convertEntities": true}` are equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConversionOptions {
    /// Turn block-level tags (`<p>`, `<div>`, `<br>`, ...) into newlines
    pub preserve_line_breaks: bool,

    /// Collapse runs of spaces, limit blank lines and trim every line
    pub remove_extra_spaces: bool,

    /// Decode named and numeric character entities
    pub convert_entities: bool,
}

impl ConversionOptions {
    /// Create options with every stage enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with every optional stage disabled; only tag stripping runs.
    pub fn raw() -> Self {
        Self {
            preserve_line_breaks: false,
            remove_extra_spaces: false,
            convert_entities: false,
        }
    }

    /// Enable or disable block-element line breaks.
    pub fn with_line_breaks(mut self, preserve: bool) -> Self {
        self.preserve_line_breaks = preserve;
        self
    }

    /// Enable or disable whitespace normalization.
    pub fn with_extra_space_removal(mut self, remove: bool) -> Self {
        self.remove_extra_spaces = remove;
        self
    }

    /// Enable or disable entity decoding.
    pub fn with_entities(mut self, convert: bool) -> Self {
        self.convert_entities = convert;
        self
    }
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            preserve_line_breaks: true,
            remove_extra_spaces: true,
            convert_entities: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_all_enabled() {
        let options = ConversionOptions::default();
        assert!(options.preserve_line_breaks);
        assert!(options.remove_extra_spaces);
        assert!(options.convert_entities);
    }

    #[test]
    fn test_builder() {
        let options = ConversionOptions::new()
            .with_line_breaks(false)
            .with_entities(false);

        assert!(!options.preserve_line_breaks);
        assert!(options.remove_extra_spaces);
        assert!(!options.convert_entities);
    }

    #[test]
    fn test_raw() {
        let options = ConversionOptions::raw();
        assert_eq!(
            options,
            ConversionOptions::new()
                .with_line_breaks(false)
                .with_extra_space_removal(false)
                .with_entities(false)
        );
    }

    #[test]
    fn test_deserialize_partial() {
        let options: ConversionOptions =
            serde_json::from_str(r#"{"removeExtraSpaces": false}"#).unwrap();
        assert!(options.preserve_line_breaks);
        assert!(!options.remove_extra_spaces);
        assert!(options.convert_entities);

        let options: ConversionOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, ConversionOptions::default());
    }

    #[test]
    fn test_serialize_camel_case() {
        let json = serde_json::to_string(&ConversionOptions::default()).unwrap();
        assert!(json.contains("\"preserveLineBreaks\":true"));
        assert!(json.contains("\"removeExtraSpaces\":true"));
        assert!(json.contains("\"convertEntities\":true"));
    }
}
