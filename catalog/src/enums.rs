//! Canonical enum members for catalog query parameters
//!
//! Each query-level enum exposes its wire members through an
//! [`EnumDef`] so the engine can coerce and check raw values, and a typed
//! Rust enum for code that consumes the normalized record.

use engine::coerce::EnumDef;
use serde::{Deserialize, Serialize};

/// Visibility filter for listing queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveFilter {
    All,
    Active,
    Inactive,
}

impl ActiveFilter {
    pub const DEFAULT: ActiveFilter = ActiveFilter::Active;

    pub fn as_str(&self) -> &'static str {
        match self {
            ActiveFilter::All => "all",
            ActiveFilter::Active => "active",
            ActiveFilter::Inactive => "inactive",
        }
    }

    pub fn definition() -> EnumDef {
        EnumDef::new("active", ["all", "active", "inactive"])
    }
}

impl std::fmt::Display for ActiveFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Soft-deletion filter for listing queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeletedFilter {
    All,
    Deleted,
    Existing,
}

impl DeletedFilter {
    pub const DEFAULT: DeletedFilter = DeletedFilter::Existing;

    pub fn as_str(&self) -> &'static str {
        match self {
            DeletedFilter::All => "all",
            DeletedFilter::Deleted => "deleted",
            DeletedFilter::Existing => "existing",
        }
    }

    pub fn definition() -> EnumDef {
        EnumDef::new("deleted", ["all", "deleted", "existing"])
    }
}

impl std::fmt::Display for DeletedFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build a sort-token enum from base columns: each column contributes an
/// `_asc` and a `_desc` member, in column order.
fn sort_def(name: &str, columns: &[&str]) -> EnumDef {
    let members: Vec<String> = columns
        .iter()
        .flat_map(|col| [format!("{col}_asc"), format!("{col}_desc")])
        .collect();
    EnumDef::new(name, members)
}

pub fn brand_sort_def() -> EnumDef {
    sort_def("sort", &["name", "createdAt"])
}

pub const BRAND_SORT_DEFAULTS: &[&str] = &["name_asc"];

pub fn category_sort_def() -> EnumDef {
    sort_def("sort", &["name", "createdAt"])
}

pub const CATEGORY_SORT_DEFAULTS: &[&str] = &["name_asc"];

pub fn product_sort_def() -> EnumDef {
    sort_def("sort", &["name", "price", "createdAt", "updatedAt"])
}

pub const PRODUCT_SORT_DEFAULTS: &[&str] = &["createdAt_desc"];

pub fn user_sort_def() -> EnumDef {
    sort_def("sort", &["name", "email", "createdAt"])
}

pub const USER_SORT_DEFAULTS: &[&str] = &["name_asc"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_wire_values() {
        assert_eq!(ActiveFilter::DEFAULT.as_str(), "active");
        assert_eq!(DeletedFilter::DEFAULT.as_str(), "existing");
        assert_eq!(
            serde_json::to_value(ActiveFilter::All).unwrap(),
            serde_json::json!("all")
        );
        assert!(ActiveFilter::definition().contains(ActiveFilter::DEFAULT.as_str()));
        assert!(DeletedFilter::definition().contains(DeletedFilter::DEFAULT.as_str()));
    }

    #[test]
    fn test_sort_defs_cover_both_directions() {
        let def = product_sort_def();
        assert!(def.contains("name_asc"));
        assert!(def.contains("price_desc"));
        assert!(def.contains("updatedAt_asc"));
        assert!(!def.contains("email_asc"));
        assert_eq!(def.members().len(), 8);
    }

    #[test]
    fn test_sort_defaults_are_members() {
        for token in PRODUCT_SORT_DEFAULTS {
            assert!(product_sort_def().contains(token));
        }
        for token in BRAND_SORT_DEFAULTS {
            assert!(brand_sort_def().contains(token));
        }
        for token in USER_SORT_DEFAULTS {
            assert!(user_sort_def().contains(token));
        }
    }
}
