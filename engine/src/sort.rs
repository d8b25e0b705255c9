//! Sort-token validation and normalization
//!
//! A sort parameter arrives as a literal array of tokens, a comma-separated
//! string, or a JSON-array-encoded string. Each token has the shape
//! `<field>_<asc|desc>`; splitting on the final `_` yields the base column
//! and the direction. A token list is valid when every token is a canonical
//! enum member and no base column repeats (regardless of direction).

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::coerce::EnumDef;
use crate::error::{RuleKind, Violation};

lazy_static! {
    /// Token shape: `<field>_<asc|desc>`, field segments alphanumeric
    static ref SORT_TOKEN_REGEX: Regex =
        Regex::new(r"^[A-Za-z][A-Za-z0-9]*(?:_[A-Za-z0-9]+)*_(asc|desc)$").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// One parsed sort token: base column plus direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortToken {
    pub column: String,
    pub direction: SortDirection,
}

/// Why a sort list was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortViolation {
    #[error("must be a list of sort tokens")]
    NotAList,
    #[error("malformed sort token '{0}'")]
    Malformed(String),
    #[error("'{0}' is not a sortable column")]
    UnknownToken(String),
    #[error("duplicate sort column '{0}'")]
    DuplicateColumn(String),
}

impl SortViolation {
    pub fn kind(&self) -> RuleKind {
        match self {
            SortViolation::NotAList | SortViolation::Malformed(_) => RuleKind::TypeInvalid,
            SortViolation::UnknownToken(_) => RuleKind::EnumInvalid,
            SortViolation::DuplicateColumn(_) => RuleKind::DuplicateInvalid,
        }
    }
}

impl From<SortViolation> for Violation {
    fn from(v: SortViolation) -> Self {
        Violation::new(v.kind(), v.to_string())
    }
}

/// Materialize a raw sort value into a flat list of token strings.
///
/// - array → its items (non-strings rendered as their JSON text, to be
///   rejected by validation)
/// - string → a JSON-array-encoded string if it parses as one, otherwise
///   split on commas with empty segments dropped
/// - null / undefined → an empty list
///
/// Returns `None` for values that cannot be materialized at all (numbers,
/// booleans, objects).
pub fn materialize(raw: Option<&Value>) -> Option<Vec<String>> {
    match raw {
        None | Some(Value::Null) => Some(Vec::new()),
        Some(Value::Array(items)) => Some(
            items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect(),
        ),
        Some(Value::String(s)) => {
            if let Ok(tokens) = serde_json::from_str::<Vec<String>>(s) {
                return Some(tokens);
            }
            Some(
                s.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_string)
                    .collect(),
            )
        }
        Some(_) => None,
    }
}

/// Normalize a raw sort value into the array validation will run against.
///
/// Null, undefined, or anything materializing to an empty list is replaced
/// by the default token list. A non-empty list - valid or not - passes
/// through unchanged so the validator decides its fate; so does a value that
/// cannot be materialized at all.
pub fn normalize(raw: Option<&Value>, defaults: &[&str]) -> Value {
    match materialize(raw) {
        Some(tokens) if tokens.is_empty() => Value::Array(
            defaults
                .iter()
                .map(|t| Value::String((*t).to_string()))
                .collect(),
        ),
        Some(tokens) => Value::Array(tokens.into_iter().map(Value::String).collect()),
        None => raw.cloned().unwrap_or(Value::Null),
    }
}

/// Validate a normalized sort value against a token enum.
///
/// Runs against the *transformed* value: a raw value that normalized to the
/// defaults is never rejected here, no matter how nonsensical the original
/// input was.
pub fn validate(value: Option<&Value>, def: &EnumDef) -> Result<Vec<SortToken>, SortViolation> {
    let items = match value {
        Some(Value::Array(items)) => items,
        _ => return Err(SortViolation::NotAList),
    };

    let mut tokens = Vec::with_capacity(items.len());
    let mut seen_columns: Vec<String> = Vec::new();

    for item in items {
        let token = match item {
            Value::String(s) => s.as_str(),
            _ => return Err(SortViolation::NotAList),
        };

        if !def.contains(token) {
            if SORT_TOKEN_REGEX.is_match(token) {
                return Err(SortViolation::UnknownToken(token.to_string()));
            }
            return Err(SortViolation::Malformed(token.to_string()));
        }

        // Membership guarantees the shape, so the split cannot fail
        let (column, direction) = token
            .rsplit_once('_')
            .ok_or_else(|| SortViolation::Malformed(token.to_string()))?;
        let direction = match direction {
            "asc" => SortDirection::Asc,
            "desc" => SortDirection::Desc,
            _ => return Err(SortViolation::Malformed(token.to_string())),
        };

        if seen_columns.iter().any(|c| c == column) {
            return Err(SortViolation::DuplicateColumn(column.to_string()));
        }
        seen_columns.push(column.to_string());

        tokens.push(SortToken {
            column: column.to_string(),
            direction,
        });
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn def() -> EnumDef {
        EnumDef::new(
            "sort",
            ["name_asc", "name_desc", "createdAt_asc", "createdAt_desc"],
        )
    }

    #[test]
    fn test_materialize_array_and_strings() {
        assert_eq!(
            materialize(Some(&json!(["name_asc", "createdAt_desc"]))),
            Some(vec!["name_asc".to_string(), "createdAt_desc".to_string()])
        );
        assert_eq!(
            materialize(Some(&json!("name_asc,createdAt_desc"))),
            Some(vec!["name_asc".to_string(), "createdAt_desc".to_string()])
        );
        assert_eq!(
            materialize(Some(&json!("[\"name_asc\",\"name_desc\"]"))),
            Some(vec!["name_asc".to_string(), "name_desc".to_string()])
        );
        assert_eq!(materialize(Some(&json!(""))), Some(vec![]));
        assert_eq!(materialize(None), Some(vec![]));
        assert_eq!(materialize(Some(&Value::Null)), Some(vec![]));
        assert_eq!(materialize(Some(&json!(5))), None);
    }

    #[test]
    fn test_normalize_substitutes_defaults_when_empty() {
        let defaults = ["name_asc"];
        assert_eq!(normalize(None, &defaults), json!(["name_asc"]));
        assert_eq!(normalize(Some(&Value::Null), &defaults), json!(["name_asc"]));
        assert_eq!(normalize(Some(&json!("")), &defaults), json!(["name_asc"]));
        assert_eq!(normalize(Some(&json!([])), &defaults), json!(["name_asc"]));
    }

    #[test]
    fn test_normalize_passes_invalid_lists_through() {
        let defaults = ["name_asc"];
        // Non-empty but invalid: never replaced by defaults
        assert_eq!(
            normalize(Some(&json!(["bogus_token"])), &defaults),
            json!(["bogus_token"])
        );
        // Unmaterializable values pass through for the validator to reject
        assert_eq!(normalize(Some(&json!(5)), &defaults), json!(5));
    }

    #[test]
    fn test_validate_accepts_canonical_tokens() {
        let value = json!(["name_asc", "createdAt_desc"]);
        let tokens = validate(Some(&value), &def()).unwrap();
        assert_eq!(
            tokens,
            vec![
                SortToken { column: "name".to_string(), direction: SortDirection::Asc },
                SortToken { column: "createdAt".to_string(), direction: SortDirection::Desc },
            ]
        );
    }

    #[test]
    fn test_validate_rejects_duplicate_columns_across_directions() {
        // Both tokens are individually valid members
        let value = json!(["name_asc", "name_desc"]);
        assert_eq!(
            validate(Some(&value), &def()),
            Err(SortViolation::DuplicateColumn("name".to_string()))
        );
    }

    #[test]
    fn test_validate_rejects_unknown_and_malformed_tokens() {
        let unknown = json!(["price_asc"]);
        assert_eq!(
            validate(Some(&unknown), &def()),
            Err(SortViolation::UnknownToken("price_asc".to_string()))
        );

        let malformed = json!(["name"]);
        assert_eq!(
            validate(Some(&malformed), &def()),
            Err(SortViolation::Malformed("name".to_string()))
        );

        let not_a_list = json!(5);
        assert_eq!(
            validate(Some(&not_a_list), &def()),
            Err(SortViolation::NotAList)
        );
    }

    #[test]
    fn test_default_tokens_round_trip() {
        let defaults = ["name_asc"];
        let once = normalize(Some(&json!(["name_asc"])), &defaults);
        let twice = normalize(Some(&once), &defaults);
        assert_eq!(once, json!(["name_asc"]));
        assert_eq!(once, twice);
        assert!(validate(Some(&once), &def()).is_ok());
    }

    #[test]
    fn test_empty_string_normalizes_then_validates() {
        // Validation runs against the transformed value, so a raw empty
        // string is never rejected: it became the defaults first.
        let defaults = ["name_asc"];
        let transformed = normalize(Some(&json!("")), &defaults);
        assert!(validate(Some(&transformed), &def()).is_ok());
    }
}
