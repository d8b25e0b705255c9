//! Catalog request schemas
//!
//! The concrete schema layer on top of the `engine` crate: canonical enum
//! definitions for catalog filters and sort columns, the catalog pagination
//! policy, and ready-made validation schemas for the listing queries
//! (brands, categories, products, users) and the product image metadata
//! payload.
//!
//! Everything here is immutable configuration: build a schema once, share it
//! read-only, run it against as many raw records as needed.

pub mod enums;
pub mod images;
pub mod policy;
pub mod queries;

pub use enums::{ActiveFilter, DeletedFilter};
pub use images::product_images_schema;
pub use queries::{
    brand_list_schema, category_list_schema, product_list_schema, user_list_schema,
};
