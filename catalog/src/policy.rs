//! Canonical limits for catalog queries

use engine::list::ListPolicy;
use engine::pagination::PaginationPolicy;

/// Listing pages start at 1
pub const MIN_PAGE: i64 = 1;
/// Default page when the query omits one
pub const DEFAULT_PAGE: i64 = 1;
/// Smallest accepted page size
pub const MIN_PAGE_SIZE: i64 = 1;
/// Default page size when the query omits one
pub const DEFAULT_PAGE_SIZE: i64 = 12;
/// Largest accepted page size
pub const MAX_PAGE_SIZE: i64 = 40;
/// Maximum number of identifiers in a list filter
pub const MAX_ID_LIST_LENGTH: usize = 100;

/// The catalog pagination policy: page ≥ 1 default 1, page size default 12
/// clamped to [1, 40].
pub const PAGINATION: PaginationPolicy = PaginationPolicy {
    min_page: MIN_PAGE,
    default_page: DEFAULT_PAGE,
    min_page_size: MIN_PAGE_SIZE,
    default_page_size: DEFAULT_PAGE_SIZE,
    max_page_size: MAX_PAGE_SIZE,
};

/// An optional identifier-list filter: the query may omit it entirely, but a
/// present value must be a proper non-null list of non-null identifiers.
pub const OPTIONAL_ID_LIST: ListPolicy = ListPolicy {
    allow_null: false,
    allow_undefined: true,
    allow_null_item: false,
    min_length: None,
    max_length: Some(MAX_ID_LIST_LENGTH),
};

/// A required identifier list: neither null nor undefined is accepted.
pub const REQUIRED_ID_LIST: ListPolicy = ListPolicy {
    allow_null: false,
    allow_undefined: false,
    allow_null_item: false,
    min_length: None,
    max_length: Some(MAX_ID_LIST_LENGTH),
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pagination_policy_values() {
        assert_eq!(PAGINATION.normalize_page(None), DEFAULT_PAGE);
        assert_eq!(PAGINATION.normalize_page_size(None), DEFAULT_PAGE_SIZE);
        assert_eq!(
            PAGINATION.normalize_page_size(Some(&json!(MAX_PAGE_SIZE + 1))),
            MAX_PAGE_SIZE
        );
    }

    #[test]
    fn test_id_list_policies() {
        assert!(OPTIONAL_ID_LIST.allow_undefined);
        assert!(!OPTIONAL_ID_LIST.allow_null);
        assert!(!REQUIRED_ID_LIST.allow_undefined);
        assert_eq!(OPTIONAL_ID_LIST.max_length, Some(MAX_ID_LIST_LENGTH));
    }
}
