//! Ready-made validation schemas for listing queries
//!
//! One schema per request type. Every schema binds the same pagination pair
//! and then whatever filters the entity supports; field declaration order is
//! the reporting order in both orchestration modes.

use engine::coerce::{coerce, EnumDef};
use engine::field::FieldSpec;
use engine::list::{self, ListPolicy};
use engine::pagination::check_integer;
use engine::schema::Schema;
use engine::sort;
use serde_json::{json, Value};

use crate::enums::{
    brand_sort_def, category_sort_def, product_sort_def, user_sort_def, ActiveFilter,
    DeletedFilter, BRAND_SORT_DEFAULTS, CATEGORY_SORT_DEFAULTS, PRODUCT_SORT_DEFAULTS,
    USER_SORT_DEFAULTS,
};
use crate::policy::{OPTIONAL_ID_LIST, PAGINATION};

// ─────────────────────────────────────────────────────────────────────────────
// Field constructors shared by every listing schema
// ─────────────────────────────────────────────────────────────────────────────

fn page_field() -> FieldSpec {
    FieldSpec::new("page")
        .transform(|raw, _| Some(json!(PAGINATION.normalize_page(raw))))
        .validate(|_, raw| check_integer(raw).err().map(Into::into))
}

fn page_size_field() -> FieldSpec {
    FieldSpec::new("pageSize")
        .transform(|raw, _| Some(json!(PAGINATION.normalize_page_size(raw))))
        .validate(|_, raw| check_integer(raw).err().map(Into::into))
}

fn enum_field(name: &str, def: EnumDef, default: &'static str) -> FieldSpec {
    let check = def.clone();
    FieldSpec::new(name)
        .transform(move |raw, _| Some(coerce(raw, &def, default)))
        .validate(move |value, _| check.check(value))
}

fn active_field() -> FieldSpec {
    enum_field(
        "active",
        ActiveFilter::definition(),
        ActiveFilter::DEFAULT.as_str(),
    )
}

fn deleted_field() -> FieldSpec {
    enum_field(
        "deleted",
        DeletedFilter::definition(),
        DeletedFilter::DEFAULT.as_str(),
    )
}

fn sort_field(def: EnumDef, defaults: &'static [&'static str]) -> FieldSpec {
    FieldSpec::new("sort")
        .transform(move |raw, _| Some(sort::normalize(raw, defaults)))
        .validate(move |value, _| sort::validate(value, &def).err().map(Into::into))
}

fn id_list_field(name: &str, policy: ListPolicy, is_valid_item: fn(&Value) -> bool) -> FieldSpec {
    FieldSpec::new(name)
        .transform(move |raw, _| {
            match list::validate_list(raw, &policy, is_valid_item) {
                Ok(normalized) => normalized.into_value(),
                // Invalid lists pass through so the validator reports them
                Err(_) => raw.cloned(),
            }
        })
        .validate(move |_, raw| {
            list::validate_list(raw, &policy, is_valid_item)
                .err()
                .map(Into::into)
        })
}

// ─────────────────────────────────────────────────────────────────────────────
// Brand listing
// ─────────────────────────────────────────────────────────────────────────────

pub fn brand_list_schema() -> Schema {
    Schema::new()
        .field(page_field())
        .field(page_size_field())
        .field(active_field())
        .field(deleted_field())
        .field(sort_field(brand_sort_def(), BRAND_SORT_DEFAULTS))
}

// ─────────────────────────────────────────────────────────────────────────────
// Category listing
// ─────────────────────────────────────────────────────────────────────────────

pub fn category_list_schema() -> Schema {
    Schema::new()
        .field(page_field())
        .field(page_size_field())
        .field(active_field())
        .field(deleted_field())
        .field(sort_field(category_sort_def(), CATEGORY_SORT_DEFAULTS))
}

// ─────────────────────────────────────────────────────────────────────────────
// Product listing: adds brand/category identifier filters
// ─────────────────────────────────────────────────────────────────────────────

pub fn product_list_schema() -> Schema {
    Schema::new()
        .field(page_field())
        .field(page_size_field())
        .field(active_field())
        .field(deleted_field())
        .field(sort_field(product_sort_def(), PRODUCT_SORT_DEFAULTS))
        .field(id_list_field(
            "brandIds",
            OPTIONAL_ID_LIST,
            list::items::positive_int,
        ))
        .field(id_list_field(
            "categoryIds",
            OPTIONAL_ID_LIST,
            list::items::positive_int,
        ))
}

// ─────────────────────────────────────────────────────────────────────────────
// User listing: role filter is a UUID list
// ─────────────────────────────────────────────────────────────────────────────

pub fn user_list_schema() -> Schema {
    Schema::new()
        .field(page_field())
        .field(page_size_field())
        .field(active_field())
        .field(sort_field(user_sort_def(), USER_SORT_DEFAULTS))
        .field(id_list_field(
            "roleIds",
            OPTIONAL_ID_LIST,
            list::items::uuid_string,
        ))
}
