//! Identifier-list validation under configurable null/undefined policies
//!
//! State checks run in a fixed priority order; the first match decides which
//! single violation gets reported. On success the list is deduplicated while
//! preserving first-occurrence order. There is no default substitution for
//! lists: null stays null and undefined stays undefined.

use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use crate::error::{RuleKind, Violation};

/// Per-field list configuration. Never mutated at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListPolicy {
    pub allow_null: bool,
    pub allow_undefined: bool,
    pub allow_null_item: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

/// Why a list was rejected. Checks are priority-ordered: the first failing
/// rule wins and is the only one reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListViolation {
    #[error("must not be null")]
    NullRejected,
    #[error("is required")]
    Required,
    #[error("must be an array")]
    NotAnArray,
    #[error("must contain at least {0} items")]
    TooShort(usize),
    #[error("must contain at most {0} items")]
    TooLong(usize),
    #[error("must not contain null items (index {0})")]
    NullItem(usize),
    #[error("contains an invalid item (index {0})")]
    InvalidItem(usize),
}

impl ListViolation {
    pub fn kind(&self) -> RuleKind {
        match self {
            ListViolation::NullRejected | ListViolation::NullItem(_) => RuleKind::NullRejected,
            ListViolation::Required => RuleKind::Required,
            ListViolation::NotAnArray | ListViolation::InvalidItem(_) => RuleKind::TypeInvalid,
            ListViolation::TooShort(_) | ListViolation::TooLong(_) => RuleKind::RangeInvalid,
        }
    }
}

impl From<ListViolation> for Violation {
    fn from(v: ListViolation) -> Self {
        Violation::new(v.kind(), v.to_string())
    }
}

/// The normalized identity of a list field: the policy-permitted null and
/// undefined states survive normalization unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum ListValue {
    Undefined,
    Null,
    Items(Vec<Value>),
}

impl ListValue {
    /// Render back into a record value; `Undefined` means "omit the key".
    pub fn into_value(self) -> Option<Value> {
        match self {
            ListValue::Undefined => None,
            ListValue::Null => Some(Value::Null),
            ListValue::Items(items) => Some(Value::Array(items)),
        }
    }
}

/// Validate and normalize a homogeneous list.
///
/// Checks, in priority order:
/// 1. null while the policy forbids null
/// 2. undefined while the policy forbids undefined
/// 3. defined but not an array
/// 4. length bounds
/// 5. null items while the policy forbids them
/// 6. non-null items failing the item predicate
///
/// On success, items are deduplicated preserving first-occurrence order.
pub fn validate_list<F>(
    raw: Option<&Value>,
    policy: &ListPolicy,
    is_valid_item: F,
) -> Result<ListValue, ListViolation>
where
    F: Fn(&Value) -> bool,
{
    let value = match raw {
        Some(Value::Null) => {
            return if policy.allow_null {
                Ok(ListValue::Null)
            } else {
                Err(ListViolation::NullRejected)
            };
        }
        None => {
            return if policy.allow_undefined {
                Ok(ListValue::Undefined)
            } else {
                Err(ListViolation::Required)
            };
        }
        Some(value) => value,
    };

    let items = value.as_array().ok_or(ListViolation::NotAnArray)?;

    if let Some(min) = policy.min_length {
        if items.len() < min {
            return Err(ListViolation::TooShort(min));
        }
    }
    if let Some(max) = policy.max_length {
        if items.len() > max {
            return Err(ListViolation::TooLong(max));
        }
    }

    if !policy.allow_null_item {
        if let Some(idx) = items.iter().position(Value::is_null) {
            return Err(ListViolation::NullItem(idx));
        }
    }

    if let Some(idx) = items
        .iter()
        .position(|item| !item.is_null() && !is_valid_item(item))
    {
        return Err(ListViolation::InvalidItem(idx));
    }

    // Dedup preserving first occurrence; id lists are short, so the
    // quadratic scan is fine.
    let mut deduped: Vec<Value> = Vec::with_capacity(items.len());
    for item in items {
        if !deduped.contains(item) {
            deduped.push(item.clone());
        }
    }

    Ok(ListValue::Items(deduped))
}

/// Item predicates for common identifier lists.
pub mod items {
    use super::*;

    /// A positive (non-zero) JSON integer.
    pub fn positive_int(value: &Value) -> bool {
        value.as_i64().is_some_and(|n| n > 0)
    }

    /// A string holding a syntactically valid UUID.
    pub fn uuid_string(value: &Value) -> bool {
        value.as_str().is_some_and(|s| Uuid::parse_str(s).is_ok())
    }
}
