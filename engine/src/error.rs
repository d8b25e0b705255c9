//! Rule violation taxonomy and error payload shapes
//!
//! Every validator in this crate resolves a failure into exactly one
//! [`Violation`] per field. Violations are data, not panics: the orchestrator
//! turns them into [`ValidationError`]s and the host boundary decides how to
//! render the list (typically as an HTTP 422 body, see [`ErrorBody`]).

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The kind of rule a value violated.
///
/// Serialized camelCase so it can be used directly as a constraint key in
/// error payloads (e.g. `"nullRejected"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleKind {
    /// Value absent, undefined not permitted
    Required,
    /// Value null, null not permitted
    NullRejected,
    /// Wrong primitive or structural type
    TypeInvalid,
    /// Length / min / max / index bounds
    RangeInvalid,
    /// Not a member of the allowed set
    EnumInvalid,
    /// Repeated identifier, column or index
    DuplicateInvalid,
    /// More than one flagged item
    CardinalityInvalid,
    /// Both or neither of a mutually exclusive pair set
    MutualExclusionInvalid,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::Required => "required",
            RuleKind::NullRejected => "nullRejected",
            RuleKind::TypeInvalid => "typeInvalid",
            RuleKind::RangeInvalid => "rangeInvalid",
            RuleKind::EnumInvalid => "enumInvalid",
            RuleKind::DuplicateInvalid => "duplicateInvalid",
            RuleKind::CardinalityInvalid => "cardinalityInvalid",
            RuleKind::MutualExclusionInvalid => "mutualExclusionInvalid",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single resolved rule violation: the kind plus a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub kind: RuleKind,
    pub message: String,
}

impl Violation {
    pub fn new(kind: RuleKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

/// One validation failure for one field.
///
/// Created on failure, returned to the caller, never mutated afterwards.
/// `value` holds the rejected (transformed) value; an undefined field
/// serializes as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    pub property: String,
    pub value: Value,
    pub constraints: BTreeMap<RuleKind, String>,
}

impl ValidationError {
    pub fn new(property: impl Into<String>, value: Option<&Value>, violation: Violation) -> Self {
        let mut constraints = BTreeMap::new();
        constraints.insert(violation.kind, violation.message);
        Self {
            property: property.into(),
            value: value.cloned().unwrap_or(Value::Null),
            constraints,
        }
    }

    /// The first constraint message, used when a boundary reports a single
    /// message per property.
    pub fn first_message(&self) -> &str {
        self.constraints
            .values()
            .next()
            .map(String::as_str)
            .unwrap_or_default()
    }
}

/// The serialized body an HTTP boundary wraps a failed validation run in.
///
/// The engine itself performs no I/O; this type only pins the wire shape:
/// `{ "error": "UnprocessableEntity", "message": { <property>: <firstMessage> },
/// "statusCode": 422 }`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: serde_json::Map<String, Value>,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

impl ErrorBody {
    /// Build the 422 body from an ordered error list. The first error wins
    /// when a property appears more than once.
    pub fn unprocessable_entity(errors: &[ValidationError]) -> Self {
        let mut message = serde_json::Map::new();
        for err in errors {
            if !message.contains_key(&err.property) {
                message.insert(
                    err.property.clone(),
                    Value::String(err.first_message().to_string()),
                );
            }
        }
        Self {
            error: "UnprocessableEntity".to_string(),
            message,
            status_code: 422,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rule_kind_serializes_camel_case() {
        let kind = serde_json::to_value(RuleKind::MutualExclusionInvalid).unwrap();
        assert_eq!(kind, json!("mutualExclusionInvalid"));
        assert_eq!(RuleKind::NullRejected.as_str(), "nullRejected");
    }

    #[test]
    fn test_validation_error_shape() {
        let raw = json!("abc");
        let err = ValidationError::new(
            "page",
            Some(&raw),
            Violation::new(RuleKind::TypeInvalid, "page must be an integer"),
        );

        let serialized = serde_json::to_value(&err).unwrap();
        assert_eq!(serialized["property"], "page");
        assert_eq!(serialized["value"], "abc");
        assert_eq!(serialized["constraints"]["typeInvalid"], "page must be an integer");
    }

    #[test]
    fn test_undefined_value_serializes_as_null() {
        let err = ValidationError::new(
            "roles",
            None,
            Violation::new(RuleKind::Required, "roles is required"),
        );
        assert_eq!(err.value, Value::Null);
        assert_eq!(err.first_message(), "roles is required");
    }

    #[test]
    fn test_error_body_first_message_per_property() {
        let raw = json!(0);
        let errors = vec![
            ValidationError::new(
                "pageSize",
                Some(&raw),
                Violation::new(RuleKind::TypeInvalid, "pageSize must be an integer"),
            ),
            ValidationError::new(
                "sort",
                None,
                Violation::new(RuleKind::EnumInvalid, "sort contains an unknown column"),
            ),
        ];

        let body = ErrorBody::unprocessable_entity(&errors);
        assert_eq!(body.error, "UnprocessableEntity");
        assert_eq!(body.status_code, 422);
        assert_eq!(
            body.message["pageSize"],
            json!("pageSize must be an integer")
        );
        assert_eq!(body.message["sort"], json!("sort contains an unknown column"));
    }
}
