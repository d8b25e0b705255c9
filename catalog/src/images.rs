//! Product image metadata schema
//!
//! Binds the `imagesMetadata` field of the product image update payload to
//! the engine's metadata-array validator. Resolving `imageIdx` entries
//! against the uploaded files (and enforcing per-product image limits) is
//! the upload collaborator's job, not this schema's.

use engine::field::{FieldSpec, Record};
use engine::metadata::{self, MetadataItem};
use engine::schema::Schema;

pub const IMAGES_METADATA_FIELD: &str = "imagesMetadata";

pub fn product_images_schema() -> Schema {
    Schema::new().field(
        FieldSpec::new(IMAGES_METADATA_FIELD)
            .validate(|value, _| metadata::validate(value).err().map(Into::into)),
    )
}

/// Read the typed items back out of a record that already passed the schema.
/// `None` means the field was absent or null: no image changes requested.
pub fn parse_images(record: &Record) -> Option<Vec<MetadataItem>> {
    metadata::validate(record.get(IMAGES_METADATA_FIELD))
        .ok()
        .flatten()
}
