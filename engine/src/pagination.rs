//! Pagination normalization: clamping page/page-size and deriving offset/limit
//!
//! The transform side ([`PaginationPolicy::normalize_page`],
//! [`PaginationPolicy::normalize_page_size`]) always produces a usable
//! integer, substituting the policy default for absent or non-integer input
//! so downstream offset/limit math stays well-defined. The paired validator
//! ([`check_integer`]) runs against the *raw* value and is what actually
//! rejects non-integer input.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::error::{RuleKind, Violation};
use crate::field::Record;
use crate::raw;

/// Constant pagination configuration. Never mutated at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationPolicy {
    pub min_page: i64,
    pub default_page: i64,
    pub min_page_size: i64,
    pub default_page_size: i64,
    pub max_page_size: i64,
}

impl Default for PaginationPolicy {
    fn default() -> Self {
        Self {
            min_page: 1,
            default_page: 1,
            min_page_size: 1,
            default_page_size: 12,
            max_page_size: 40,
        }
    }
}

impl PaginationPolicy {
    /// Normalize a raw page value.
    ///
    /// Integers at or above `min_page` are accepted unchanged; everything
    /// else (absent, null, below minimum, float, string, ...) yields the
    /// default page, itself raised to `min_page`.
    pub fn normalize_page(&self, raw: Option<&Value>) -> i64 {
        match raw::as_finite_int(raw) {
            Some(page) if page >= self.min_page => page,
            _ => self.default_page.max(self.min_page),
        }
    }

    /// Normalize a raw page-size value.
    ///
    /// Integers clamp into `[min_page_size, max_page_size]`; absent or
    /// non-integer input substitutes the default (also clamped).
    pub fn normalize_page_size(&self, raw: Option<&Value>) -> i64 {
        let size = raw::as_finite_int(raw).unwrap_or(self.default_page_size);
        size.clamp(self.min_page_size, self.max_page_size)
    }
}

/// Violation raised by the integer-type check paired with the transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageViolation {
    #[error("must be an integer number")]
    NotAnInteger,
}

impl PageViolation {
    pub fn kind(&self) -> RuleKind {
        RuleKind::TypeInvalid
    }
}

impl From<PageViolation> for Violation {
    fn from(v: PageViolation) -> Self {
        Violation::new(v.kind(), v.to_string())
    }
}

/// Reject a defined raw value that is not a finite integer.
///
/// Absent and null are fine (the transform substitutes the default); a
/// defined string, float, boolean, array or object is a type violation even
/// though the transform also substituted the default for it.
pub fn check_integer(raw: Option<&Value>) -> Result<(), PageViolation> {
    if raw::is_missing(raw) || raw::as_finite_int(raw).is_some() {
        Ok(())
    } else {
        Err(PageViolation::NotAnInteger)
    }
}

/// Derived query window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetLimit {
    pub offset: i64,
    pub limit: i64,
}

/// `offset = page_size * (page - 1)`, `limit = page_size`.
///
/// Page has no upper bound, so the multiplication saturates at `i64::MAX`
/// instead of overflowing.
pub fn to_offset_limit(page: i64, page_size: i64) -> OffsetLimit {
    OffsetLimit {
        offset: page_size.saturating_mul(page.saturating_sub(1)),
        limit: page_size,
    }
}

/// Fully normalized pagination state for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: i64,
    #[serde(rename = "pageSize")]
    pub page_size: i64,
    pub offset: i64,
    pub limit: i64,
}

impl Pagination {
    /// Read `page`/`pageSize` out of a (raw or normalized) record and derive
    /// the offset/limit window.
    pub fn from_record(record: &Record, policy: &PaginationPolicy) -> Self {
        let page = policy.normalize_page(record.get("page"));
        let page_size = policy.normalize_page_size(record.get("pageSize"));
        let window = to_offset_limit(page, page_size);
        Self {
            page,
            page_size,
            offset: window.offset,
            limit: window.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn policy() -> PaginationPolicy {
        PaginationPolicy::default()
    }

    #[test]
    fn test_normalize_page_accepts_valid_integers() {
        assert_eq!(policy().normalize_page(Some(&json!(1))), 1);
        assert_eq!(policy().normalize_page(Some(&json!(5))), 5);
        assert_eq!(policy().normalize_page(Some(&json!(10_000))), 10_000);
    }

    #[test]
    fn test_normalize_page_defaults_everything_else() {
        let p = policy();
        assert_eq!(p.normalize_page(None), 1);
        assert_eq!(p.normalize_page(Some(&Value::Null)), 1);
        assert_eq!(p.normalize_page(Some(&json!(0))), 1);
        assert_eq!(p.normalize_page(Some(&json!(-7))), 1);
        assert_eq!(p.normalize_page(Some(&json!(2.5))), 1);
        assert_eq!(p.normalize_page(Some(&json!("3"))), 1);
        assert_eq!(p.normalize_page(Some(&json!(true))), 1);
    }

    #[test]
    fn test_normalize_page_size_clamps() {
        let p = policy();
        // In-range values are accepted unchanged, boundaries included
        assert_eq!(p.normalize_page_size(Some(&json!(1))), 1);
        assert_eq!(p.normalize_page_size(Some(&json!(12))), 12);
        assert_eq!(p.normalize_page_size(Some(&json!(40))), 40);
        // Below min clamps to min (not to default), above max to max
        assert_eq!(p.normalize_page_size(Some(&json!(0))), 1);
        assert_eq!(p.normalize_page_size(Some(&json!(-5))), 1);
        assert_eq!(p.normalize_page_size(Some(&json!(41))), 40);
        assert_eq!(p.normalize_page_size(Some(&json!(500))), 40);
        // Absent or non-integer substitutes the default
        assert_eq!(p.normalize_page_size(None), 12);
        assert_eq!(p.normalize_page_size(Some(&Value::Null)), 12);
        assert_eq!(p.normalize_page_size(Some(&json!("20"))), 12);
        assert_eq!(p.normalize_page_size(Some(&json!(3.5))), 12);
    }

    #[test]
    fn test_check_integer() {
        assert!(check_integer(Some(&json!(4))).is_ok());
        assert!(check_integer(None).is_ok());
        assert!(check_integer(Some(&Value::Null)).is_ok());
        assert_eq!(
            check_integer(Some(&json!("4"))),
            Err(PageViolation::NotAnInteger)
        );
        assert_eq!(
            check_integer(Some(&json!(1.5))),
            Err(PageViolation::NotAnInteger)
        );
        assert_eq!(
            check_integer(Some(&json!([]))),
            Err(PageViolation::NotAnInteger)
        );
    }

    #[test]
    fn test_to_offset_limit() {
        assert_eq!(to_offset_limit(1, 12), OffsetLimit { offset: 0, limit: 12 });
        assert_eq!(to_offset_limit(5, 10), OffsetLimit { offset: 40, limit: 10 });
    }

    #[test]
    fn test_to_offset_limit_saturates_for_huge_pages() {
        // Any accepted page must yield a well-defined window
        let page = policy().normalize_page(Some(&json!(i64::MAX)));
        let window = to_offset_limit(page, 12);
        assert_eq!(window, OffsetLimit { offset: i64::MAX, limit: 12 });
    }

    #[test]
    fn test_pagination_from_record_defaults() {
        let record = serde_json::from_value::<Record>(json!({
            "page": null,
            "pageSize": null,
        }))
        .unwrap();
        let pagination = Pagination::from_record(&record, &policy());
        assert_eq!(
            pagination,
            Pagination { page: 1, page_size: 12, offset: 0, limit: 12 }
        );
    }

    #[test]
    fn test_pagination_from_record_window() {
        let record = serde_json::from_value::<Record>(json!({
            "page": 5,
            "pageSize": 10,
        }))
        .unwrap();
        let pagination = Pagination::from_record(&record, &policy());
        assert_eq!(pagination.offset, 40);
        assert_eq!(pagination.limit, 10);
    }
}
