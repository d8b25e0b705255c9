//! Enum coercion with defaulting
//!
//! [`coerce`] normalizes a raw value against a finite set of canonical string
//! members, substituting a default when the value is absent. Coercion never
//! fails: an unrecognized value passes through unchanged so the paired
//! membership check ([`EnumDef::check`]) rejects it with a proper violation.

use serde_json::Value;

use crate::error::{RuleKind, Violation};

/// An ordered, immutable set of canonical string members for one enumerated
/// field. Created once at schema-definition time and shared read-only.
///
/// Members are strings only: every enumerated field is string-encoded on the
/// wire, so integer-valued enums are out of scope here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDef {
    name: String,
    members: Vec<String>,
}

impl EnumDef {
    pub fn new<I, S>(name: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = Vec::new();
        for member in members {
            let member = member.into();
            if !seen.contains(&member) {
                seen.push(member);
            }
        }
        Self {
            name: name.into(),
            members: seen,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.members.iter().any(|m| m == candidate)
    }

    /// Membership check for the paired validator.
    ///
    /// After coercion a value is only valid if it is one of the canonical
    /// members; anything else (including non-strings that passed through)
    /// is an `EnumInvalid` violation.
    pub fn check(&self, value: Option<&Value>) -> Option<Violation> {
        match value {
            Some(Value::String(s)) if self.contains(s) => None,
            _ => Some(Violation::new(
                RuleKind::EnumInvalid,
                format!("{} must be one of: {}", self.name, self.members.join(", ")),
            )),
        }
    }
}

/// Normalize a raw value against an enum definition.
///
/// - absent or null → the default member
/// - a string equal to a canonical member → that member
/// - anything else → passed through unchanged (rejected later by
///   [`EnumDef::check`], never here)
///
/// Pure and idempotent: `coerce(coerce(x)) == coerce(x)`.
pub fn coerce(raw: Option<&Value>, def: &EnumDef, default: &str) -> Value {
    match raw {
        None | Some(Value::Null) => Value::String(default.to_string()),
        Some(Value::String(s)) => match def.members().iter().find(|m| *m == s) {
            Some(member) => Value::String(member.clone()),
            None => Value::String(s.clone()),
        },
        Some(other) => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn def() -> EnumDef {
        EnumDef::new("status", ["all", "active", "inactive"])
    }

    #[test]
    fn test_coerce_substitutes_default_for_missing() {
        assert_eq!(coerce(None, &def(), "active"), json!("active"));
        assert_eq!(coerce(Some(&Value::Null), &def(), "active"), json!("active"));
    }

    #[test]
    fn test_coerce_returns_canonical_member() {
        assert_eq!(coerce(Some(&json!("all")), &def(), "active"), json!("all"));
        assert_eq!(
            coerce(Some(&json!("inactive")), &def(), "active"),
            json!("inactive")
        );
    }

    #[test]
    fn test_coerce_passes_unknown_values_through() {
        // Case-sensitive: "Active" is not a member
        assert_eq!(coerce(Some(&json!("Active")), &def(), "active"), json!("Active"));
        assert_eq!(coerce(Some(&json!(true)), &def(), "active"), json!(true));
        assert_eq!(coerce(Some(&json!([1])), &def(), "active"), json!([1]));
    }

    #[test]
    fn test_coerce_is_idempotent() {
        for raw in [json!("all"), json!("bogus"), json!(7), Value::Null] {
            let once = coerce(Some(&raw), &def(), "active");
            let twice = coerce(Some(&once), &def(), "active");
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_check_accepts_members_only() {
        assert!(def().check(Some(&json!("all"))).is_none());
        assert!(def().check(Some(&json!("bogus"))).is_some());
        assert!(def().check(Some(&json!(1))).is_some());
        assert!(def().check(None).is_some());

        let violation = def().check(Some(&json!("bogus"))).unwrap();
        assert_eq!(violation.kind, RuleKind::EnumInvalid);
        assert!(violation.message.contains("all, active, inactive"));
    }

    #[test]
    fn test_enum_def_deduplicates_preserving_order() {
        let def = EnumDef::new("x", ["b", "a", "b", "c", "a"]);
        assert_eq!(def.members(), ["b", "a", "c"]);
    }
}
