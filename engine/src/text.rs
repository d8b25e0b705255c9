//! String sanitization helpers
//!
//! Applied to free-text fields (names, descriptions) before length checks.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Pattern to match runs of whitespace characters
    static ref MULTI_WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Trim leading and trailing whitespace from a string
pub fn trim(value: &str) -> String {
    value.trim().to_string()
}

/// Normalize whitespace: collapse runs of spaces/newlines into single spaces
pub fn normalize_whitespace(value: &str) -> String {
    MULTI_WHITESPACE.replace_all(value.trim(), " ").to_string()
}
