//! Request/response contract for exposing the converter as a service.
//!
//! A request carries the HTML and optional options; a response is either
//! `{ "success": true, "text": ..., "stats": {...} }` or
//! `{ "success": false, "error": ... }`.
//!
//! # Example
//!
//! ```
//! use unhtml::api::{handle_json, JsonFormat};
//!
//! let response = handle_json(r#"{"html": "<p>Hi &amp; bye</p>"}"#);
//! assert!(response.is_success());
//! assert_eq!(response.status_code(), 200);
//!
//! let json = response.to_json(JsonFormat::Compact).unwrap();
//! assert!(json.contains(r#""text":"Hi & bye""#));
//! ```

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use serde::{Deserialize, Serialize};

use crate::convert::HtmlToTextConverter;
use crate::error::{Error, Result};
use crate::options::ConversionOptions;
use crate::result::{ConversionResult, ConversionStats};

/// Message returned for failures that are not the caller's fault.
pub const INTERNAL_ERROR_MESSAGE: &str = "Failed to convert HTML to text";

/// A conversion request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertRequest {
    /// HTML to convert; required and non-empty
    #[serde(default)]
    pub html: Option<String>,

    /// Conversion options; every field defaults to `true`
    #[serde(default)]
    pub options: Option<ConversionOptions>,
}

impl ConvertRequest {
    /// Create a request with default options.
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html: Some(html.into()),
            options: None,
        }
    }

    /// Set conversion options.
    pub fn with_options(mut self, options: ConversionOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Return the HTML if present and not blank.
    pub fn validate(&self) -> Result<&str> {
        match self.html.as_deref() {
            Some(html) if !html.trim().is_empty() => Ok(html),
            _ => Err(Error::MissingHtml),
        }
    }
}

/// Why a request failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The request itself was unusable
    Validation,
    /// Something went wrong inside the converter
    Internal,
}

/// Response to a conversion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertResponse {
    /// Conversion succeeded
    Success(ConversionResult),

    /// Conversion failed; no partial output is returned
    Failure {
        /// Failure category
        kind: FailureKind,
        /// Message safe to show to the caller
        error: String,
    },
}

impl ConvertResponse {
    /// Build a response from a library result.
    ///
    /// Validation errors keep their message. Any other error is logged and
    /// replaced by a generic message.
    pub fn from_result(result: Result<ConversionResult>) -> Self {
        match result {
            Ok(result) => Self::Success(result),
            Err(e) if e.is_validation() => Self::validation(e.to_string()),
            Err(e) => {
                log::error!("HTML conversion failed: {}", e);
                Self::internal()
            }
        }
    }

    /// A validation failure with the given message.
    pub fn validation(error: impl Into<String>) -> Self {
        Self::Failure {
            kind: FailureKind::Validation,
            error: error.into(),
        }
    }

    /// An internal failure with the generic message.
    pub fn internal() -> Self {
        Self::Failure {
            kind: FailureKind::Internal,
            error: INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }

    /// Whether the conversion succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// HTTP-style status: 200, 400 for validation failures, 500 otherwise.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Success(_) => 200,
            Self::Failure {
                kind: FailureKind::Validation,
                ..
            } => 400,
            Self::Failure {
                kind: FailureKind::Internal,
                ..
            } => 500,
        }
    }

    /// The converted text, if the conversion succeeded.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Success(result) => Some(&result.text),
            Self::Failure { .. } => None,
        }
    }

    /// The error message, if the conversion failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure { error, .. } => Some(error),
        }
    }

    /// Serialize the response.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        let wire = WireResponse::from(self);
        let json = match format {
            JsonFormat::Pretty => serde_json::to_string_pretty(&wire)?,
            JsonFormat::Compact => serde_json::to_string(&wire)?,
        };
        Ok(json)
    }
}

impl Serialize for ConvertResponse {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        WireResponse::from(self).serialize(serializer)
    }
}

#[derive(Serialize)]
struct WireResponse<'a> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<&'a ConversionStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

impl<'a> From<&'a ConvertResponse> for WireResponse<'a> {
    fn from(response: &'a ConvertResponse) -> Self {
        match response {
            ConvertResponse::Success(result) => Self {
                success: true,
                text: Some(&result.text),
                stats: Some(&result.stats),
                error: None,
            },
            ConvertResponse::Failure { error, .. } => Self {
                success: false,
                text: None,
                stats: None,
                error: Some(error),
            },
        }
    }
}

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Handle a conversion request.
///
/// Missing or blank HTML is rejected before the converter runs. A panic
/// inside the converter is caught, logged, and reported as an internal
/// failure.
pub fn handle(request: &ConvertRequest) -> ConvertResponse {
    let html = match request.validate() {
        Ok(html) => html,
        Err(e) => {
            log::warn!("Rejected conversion request: {}", e);
            return ConvertResponse::validation(e.to_string());
        }
    };

    let converter = HtmlToTextConverter::new(request.options.unwrap_or_default());

    match panic::catch_unwind(AssertUnwindSafe(|| converter.convert(html))) {
        Ok(result) => ConvertResponse::Success(result),
        Err(payload) => {
            log::error!("HTML conversion panicked: {}", panic_message(&*payload));
            ConvertResponse::internal()
        }
    }
}

/// Handle a JSON-encoded conversion request.
///
/// A body that is not a valid request is a validation failure.
pub fn handle_json(body: &str) -> ConvertResponse {
    match serde_json::from_str::<ConvertRequest>(body) {
        Ok(request) => handle(&request),
        Err(e) => {
            let err = Error::InvalidRequest(e.to_string());
            log::warn!("Rejected conversion request: {}", err);
            ConvertResponse::validation(err.to_string())
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        *message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic"
    }
}
