//! Helpers over raw `Option<&Value>` inputs
//!
//! An absent key is *undefined* (`None`); a present `Value::Null` is *null*.
//! The distinction matters: several policies treat the two differently.

use serde_json::Value;

/// The key was absent from the record.
pub fn is_undefined(raw: Option<&Value>) -> bool {
    raw.is_none()
}

/// The key was present with an explicit null.
pub fn is_null(raw: Option<&Value>) -> bool {
    matches!(raw, Some(Value::Null))
}

/// Absent or explicitly null.
pub fn is_missing(raw: Option<&Value>) -> bool {
    is_undefined(raw) || is_null(raw)
}

/// Extract a finite integer.
///
/// Returns `Some` only for JSON integers: floats, numeric strings, booleans
/// and everything else are `None`.
pub fn as_finite_int(raw: Option<&Value>) -> Option<i64> {
    match raw {
        Some(Value::Number(n)) => n.as_i64(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_undefined_vs_null() {
        assert!(is_undefined(None));
        assert!(!is_undefined(Some(&Value::Null)));
        assert!(is_null(Some(&Value::Null)));
        assert!(!is_null(None));
        assert!(is_missing(None));
        assert!(is_missing(Some(&Value::Null)));
        assert!(!is_missing(Some(&json!(1))));
    }

    #[test]
    fn test_as_finite_int() {
        assert_eq!(as_finite_int(Some(&json!(5))), Some(5));
        assert_eq!(as_finite_int(Some(&json!(-3))), Some(-3));
        // Floats, numeric strings and booleans are not integers
        assert_eq!(as_finite_int(Some(&json!(5.5))), None);
        assert_eq!(as_finite_int(Some(&json!("5"))), None);
        assert_eq!(as_finite_int(Some(&json!(true))), None);
        assert_eq!(as_finite_int(Some(&Value::Null)), None);
        assert_eq!(as_finite_int(None), None);
    }
}
