//! Character entity decoding.

use once_cell::sync::Lazy;
use regex::{Captures, NoExpand, Regex};

/// Named entities recognized by the decoder, in replacement order.
///
/// `&nbsp;` decodes to a plain space so that later whitespace collapsing
/// treats it like any other space.
pub const NAMED_ENTITIES: [(&str, &str); 17] = [
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&apos;", "'"),
    ("&nbsp;", " "),
    ("&copy;", "\u{00A9}"),
    ("&reg;", "\u{00AE}"),
    ("&trade;", "\u{2122}"),
    ("&hellip;", "\u{2026}"),
    ("&mdash;", "\u{2014}"),
    ("&ndash;", "\u{2013}"),
    ("&lsquo;", "\u{2018}"),
    ("&rsquo;", "\u{2019}"),
    ("&ldquo;", "\u{201C}"),
    ("&rdquo;", "\u{201D}"),
];

static NAMED_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    NAMED_ENTITIES
        .iter()
        .map(|(entity, replacement)| {
            let pattern = format!("(?i){}", regex::escape(entity));
            (Regex::new(&pattern).expect("entity pattern"), *replacement)
        })
        .collect()
});

static DECIMAL_ENTITY: Lazy<Regex> = Lazy::new(|| Regex::new(r"&#([0-9]+);").expect("decimal"));

static HEX_ENTITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)&#x([0-9a-f]+);").expect("hex"));

/// Decode named, decimal and hexadecimal entities.
///
/// Each named entity is replaced over the whole string in table order, then
/// decimal references, then hexadecimal ones. Because every pass sees the
/// previous pass's output, `&amp;lt;` ends up as `<`.
///
/// Anything that does not form a complete entity (missing `;`, non-numeric
/// body, code point outside Unicode) is left as written.
///
/// # Example
///
/// ```
/// use unhtml::convert::decode_entities;
///
/// assert_eq!(decode_entities("&amp;&lt;&gt;"), "&<>");
/// assert_eq!(decode_entities("&#65;&#x42;"), "AB");
/// assert_eq!(decode_entities("AT&T"), "AT&T");
/// ```
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    let mut result = text.to_string();

    for (pattern, replacement) in NAMED_PATTERNS.iter() {
        if result.contains('&') {
            result = pattern
                .replace_all(&result, NoExpand(*replacement))
                .into_owned();
        }
    }

    result = DECIMAL_ENTITY
        .replace_all(&result, |caps: &Captures| {
            decode_code_point(&caps[1], 10).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned();

    HEX_ENTITY
        .replace_all(&result, |caps: &Captures| {
            decode_code_point(&caps[1], 16).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn decode_code_point(digits: &str, radix: u32) -> Option<String> {
    let code_point = u32::from_str_radix(digits, radix).ok()?;
    char::from_u32(code_point).map(|ch| ch.to_string())
}
