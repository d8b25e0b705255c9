//! Field Validation & Normalization Engine
//!
//! This crate turns loosely-typed request payloads (query strings, JSON
//! bodies) into strongly-typed, invariant-respecting values before they reach
//! business logic.
//!
//! # Overview
//!
//! The engine consists of three layers:
//!
//! 1. **Leaf validators** - enum coercion ([`coerce`]), pagination
//!    normalization ([`pagination`]), identifier lists ([`list`]), sort
//!    tokens ([`sort`]) and image metadata arrays ([`metadata`])
//! 2. **Field binding** - [`field::FieldSpec`] pairs one field name with a
//!    transform step, a validation step and a message table
//! 3. **Orchestration** - [`schema::Schema`] runs a full set of field specs
//!    over a raw record, in stop-at-first-error or collect-all mode
//!
//! Raw values are `serde_json::Value`s. JavaScript's null/undefined
//! distinction is preserved: an absent key is *undefined* (`None`), a present
//! `Value::Null` is *null*. All validators take `Option<&Value>` so the two
//! states stay distinguishable end to end.
//!
//! The engine is pure and synchronous: no I/O, no shared mutable state.
//! Schemas, enum definitions and policies are immutable configuration that
//! can be shared read-only across any number of threads.
//!
//! # Usage
//!
//! ```
//! use engine::coerce::{coerce, EnumDef};
//! use engine::field::FieldSpec;
//! use engine::schema::Schema;
//! use serde_json::json;
//!
//! let schema = Schema::new().field(
//!     FieldSpec::new("status")
//!         .transform(|raw, _| {
//!             let def = EnumDef::new("status", ["draft", "published"]);
//!             Some(coerce(raw, &def, "draft"))
//!         })
//!         .validate(|value, _| {
//!             EnumDef::new("status", ["draft", "published"]).check(value)
//!         }),
//! );
//!
//! let record = json!({ "status": "published" });
//! let normalized = schema.check_first(record.as_object().unwrap()).unwrap();
//! assert_eq!(normalized["status"], json!("published"));
//! ```

pub mod coerce;
pub mod error;
pub mod field;
pub mod list;
pub mod metadata;
pub mod pagination;
pub mod raw;
pub mod schema;
pub mod sort;
pub mod text;

pub use coerce::{coerce, EnumDef};
pub use error::{ErrorBody, RuleKind, ValidationError, Violation};
pub use field::{FieldSpec, Record};
pub use list::{ListPolicy, ListValue, ListViolation};
pub use metadata::{MetadataItem, MetadataViolation};
pub use pagination::{OffsetLimit, Pagination, PaginationPolicy};
pub use schema::Schema;
pub use sort::{SortDirection, SortToken, SortViolation};
