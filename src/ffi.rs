//! C-ABI FFI bindings for cross-language integration.
//!
//! This module provides a C-compatible API for using unhtml from other
//! languages such as C#, Python, and Node.js. Requests and responses use the
//! same JSON shapes as [`crate::api`].

use std::ffi::{c_char, CStr, CString};
use std::ptr;

use crate::api::{self, ConvertRequest, JsonFormat};

/// Result structure returned by FFI functions.
#[repr(C)]
pub struct UnhtmlResult {
    /// Whether the operation succeeded.
    pub success: bool,
    /// The result data (null if failed). Must be freed with `unhtml_free_result`.
    pub data: *mut c_char,
    /// Error message (null if succeeded). Must be freed with `unhtml_free_result`.
    pub error: *mut c_char,
}

impl UnhtmlResult {
    fn success(data: String) -> Self {
        match CString::new(data) {
            Ok(data) => Self {
                success: true,
                data: data.into_raw(),
                error: ptr::null_mut(),
            },
            Err(_) => Self::error("Output contains a NUL character".to_string()),
        }
    }

    fn error(message: String) -> Self {
        Self {
            success: false,
            data: ptr::null_mut(),
            error: CString::new(message).unwrap_or_default().into_raw(),
        }
    }
}

unsafe fn read_str<'a>(ptr: *const c_char, what: &str) -> Result<&'a str, String> {
    if ptr.is_null() {
        return Err(format!("{} cannot be null", what));
    }
    CStr::from_ptr(ptr)
        .to_str()
        .map_err(|_| format!("Invalid UTF-8 {}", what))
}

/// Handle a JSON conversion request.
///
/// `data` receives the JSON response, which carries its own `success`
/// flag; the result's `success` mirrors it.
///
/// # Safety
///
/// The `request` must be a valid null-terminated UTF-8 string.
/// The returned result must be freed with `unhtml_free_result`.
#[no_mangle]
pub unsafe extern "C" fn unhtml_convert_json(request: *const c_char) -> UnhtmlResult {
    let body = match read_str(request, "Request") {
        Ok(s) => s,
        Err(e) => return UnhtmlResult::error(e),
    };

    let response = api::handle_json(body);
    match response.to_json(JsonFormat::Compact) {
        Ok(json) if response.is_success() => UnhtmlResult::success(json),
        Ok(json) => match CString::new(json) {
            Ok(data) => UnhtmlResult {
                success: false,
                data: data.into_raw(),
                error: CString::new(response.error().unwrap_or_default())
                    .unwrap_or_default()
                    .into_raw(),
            },
            Err(e) => UnhtmlResult::error(e.to_string()),
        },
        Err(e) => UnhtmlResult::error(e.to_string()),
    }
}

/// Convert HTML to plain text with default options.
///
/// # Safety
///
/// The `html` must be a valid null-terminated UTF-8 string.
/// The returned result must be freed with `unhtml_free_result`.
#[no_mangle]
pub unsafe extern "C" fn unhtml_to_text(html: *const c_char) -> UnhtmlResult {
    let html = match read_str(html, "HTML") {
        Ok(s) => s,
        Err(e) => return UnhtmlResult::error(e),
    };

    let response = api::handle(&ConvertRequest::new(html));
    match response.text() {
        Some(text) => UnhtmlResult::success(text.to_string()),
        None => UnhtmlResult::error(response.error().unwrap_or_default().to_string()),
    }
}

/// Free a result returned by any unhtml function.
///
/// # Safety
///
/// The `result` must have been returned by an unhtml function.
/// This function should only be called once per result.
#[no_mangle]
pub unsafe extern "C" fn unhtml_free_result(result: UnhtmlResult) {
    if !result.data.is_null() {
        drop(CString::from_raw(result.data));
    }
    if !result.error.is_null() {
        drop(CString::from_raw(result.error));
    }
}

/// Free a string allocated by unhtml.
///
/// # Safety
///
/// The `ptr` must have been allocated by unhtml.
/// This function should only be called once per pointer.
#[no_mangle]
pub unsafe extern "C" fn unhtml_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

/// Get the version of the unhtml library.
///
/// The returned string is statically allocated and should not be freed.
#[no_mangle]
pub extern "C" fn unhtml_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}
