//! Image metadata array validation
//!
//! Validates an array of structured metadata items with per-item field rules
//! plus whole-array invariants. Items are only materialized into typed
//! [`MetadataItem`]s after every structural check passes; the cross-item
//! invariants (single main flag, unique image references) run last.
//!
//! Each item references its image in exactly one of two ways: `imageId`
//! selects an existing stored image by UUID, `imageIdx` selects a
//! newly-uploaded file by position. Resolving `imageIdx` against the actual
//! upload list happens outside this module; here only the structural and
//! intra-array consistency of the metadata is guaranteed.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use uuid::Uuid;

use crate::error::{RuleKind, Violation};
use crate::text;

/// Maximum length for an item name
pub const MAX_NAME_LENGTH: usize = 255;
/// Maximum length for an item description
pub const MAX_DESCRIPTION_LENGTH: usize = 1000;

/// One fully validated metadata item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataItem {
    pub name: Option<String>,
    pub description: Option<String>,
    pub main: Option<bool>,
    pub active: Option<bool>,
    pub delete: Option<bool>,
    #[serde(rename = "imageId")]
    pub image_id: Option<Uuid>,
    #[serde(rename = "imageIdx")]
    pub image_idx: Option<u64>,
}

/// Why a metadata array was rejected. Item checks run in array order and the
/// first failing rule wins for the whole array.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataViolation {
    #[error("must be an array of image metadata objects")]
    NotAnArray,
    #[error("item {0} is not defined")]
    ItemNotDefined(usize),
    #[error("item {0} must be an object")]
    ItemInvalidType(usize),
    #[error("item {idx}: {field} must be a string")]
    FieldNotString { idx: usize, field: &'static str },
    #[error("item {idx}: {field} must be at most {max} characters")]
    FieldTooLong {
        idx: usize,
        field: &'static str,
        max: usize,
    },
    #[error("item {idx}: {field} is null")]
    FlagIsNull { idx: usize, field: &'static str },
    #[error("item {idx}: {field} must be a boolean")]
    FlagNotBoolean { idx: usize, field: &'static str },
    #[error("item {0}: imageId must be a valid UUID")]
    InvalidImageId(usize),
    #[error("item {0}: imageIdx must be an integer")]
    ImageIdxNotInteger(usize),
    #[error("item {0}: imageIdx must not be negative")]
    ImageIdxNegative(usize),
    #[error("item {0}: exactly one of imageId and imageIdx must be defined")]
    ImageRefNotExclusive(usize),
    #[error("at most one item may have main set to true")]
    MultipleMain,
    #[error("duplicate imageId '{0}'")]
    DuplicateImageId(Uuid),
    #[error("duplicate imageIdx {0}")]
    DuplicateImageIdx(u64),
}

impl MetadataViolation {
    pub fn kind(&self) -> RuleKind {
        match self {
            MetadataViolation::NotAnArray
            | MetadataViolation::ItemInvalidType(_)
            | MetadataViolation::FieldNotString { .. }
            | MetadataViolation::FlagNotBoolean { .. }
            | MetadataViolation::InvalidImageId(_)
            | MetadataViolation::ImageIdxNotInteger(_) => RuleKind::TypeInvalid,
            MetadataViolation::ItemNotDefined(_) | MetadataViolation::FlagIsNull { .. } => {
                RuleKind::NullRejected
            }
            MetadataViolation::FieldTooLong { .. } | MetadataViolation::ImageIdxNegative(_) => {
                RuleKind::RangeInvalid
            }
            MetadataViolation::ImageRefNotExclusive(_) => RuleKind::MutualExclusionInvalid,
            MetadataViolation::MultipleMain => RuleKind::CardinalityInvalid,
            MetadataViolation::DuplicateImageId(_) | MetadataViolation::DuplicateImageIdx(_) => {
                RuleKind::DuplicateInvalid
            }
        }
    }
}

impl From<MetadataViolation> for Violation {
    fn from(v: MetadataViolation) -> Self {
        Violation::new(v.kind(), v.to_string())
    }
}

/// Validate a raw metadata array.
///
/// A null or undefined value is always valid and means "no change"
/// (`Ok(None)`). Otherwise the value must be an array whose items all pass
/// the per-item rules; cross-item invariants are checked only once every
/// item passed individually.
pub fn validate(raw: Option<&Value>) -> Result<Option<Vec<MetadataItem>>, MetadataViolation> {
    let items = match raw {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Array(items)) => items,
        Some(_) => return Err(MetadataViolation::NotAnArray),
    };

    let mut parsed = Vec::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        parsed.push(check_item(idx, item)?);
    }

    check_cross_item(&parsed)?;

    Ok(Some(parsed))
}

/// Diagnostic message for a failing raw value, for boundaries that report a
/// single text per field.
pub fn default_message(raw: Option<&Value>) -> String {
    match validate(raw) {
        Err(violation) => violation.to_string(),
        Ok(_) => "images metadata is invalid".to_string(),
    }
}

/// Per-item structural checks, in rule order; builds the typed item only
/// from fields that already passed.
fn check_item(idx: usize, item: &Value) -> Result<MetadataItem, MetadataViolation> {
    let map = match item {
        Value::Null => return Err(MetadataViolation::ItemNotDefined(idx)),
        Value::Object(map) => map,
        _ => return Err(MetadataViolation::ItemInvalidType(idx)),
    };

    let name = check_text(idx, map, "name", MAX_NAME_LENGTH, text::normalize_whitespace)?;
    let description = check_text(idx, map, "description", MAX_DESCRIPTION_LENGTH, text::trim)?;

    let main = check_flag(idx, map, "main")?;
    let active = check_flag(idx, map, "active")?;
    let delete = check_flag(idx, map, "delete")?;

    let image_id = match map.get("imageId") {
        None => None,
        Some(Value::String(s)) => {
            Some(Uuid::parse_str(s).map_err(|_| MetadataViolation::InvalidImageId(idx))?)
        }
        Some(_) => return Err(MetadataViolation::InvalidImageId(idx)),
    };

    let image_idx = match map.get("imageIdx") {
        None => None,
        Some(Value::Number(n)) => match n.as_u64() {
            Some(i) => Some(i),
            None if n.as_i64().is_some() => {
                return Err(MetadataViolation::ImageIdxNegative(idx))
            }
            None => return Err(MetadataViolation::ImageIdxNotInteger(idx)),
        },
        Some(_) => return Err(MetadataViolation::ImageIdxNotInteger(idx)),
    };

    // XOR invariant: the item must reference its image exactly one way
    if map.contains_key("imageId") == map.contains_key("imageIdx") {
        return Err(MetadataViolation::ImageRefNotExclusive(idx));
    }

    Ok(MetadataItem {
        name,
        description,
        main,
        active,
        delete,
        image_id,
        image_idx,
    })
}

/// An optional text field: if present it must be a string within `max`
/// characters after sanitization.
fn check_text(
    idx: usize,
    map: &Map<String, Value>,
    field: &'static str,
    max: usize,
    sanitize: fn(&str) -> String,
) -> Result<Option<String>, MetadataViolation> {
    match map.get(field) {
        None => Ok(None),
        Some(Value::String(s)) => {
            let s = sanitize(s);
            if s.chars().count() > max {
                return Err(MetadataViolation::FieldTooLong { idx, field, max });
            }
            Ok(Some(s))
        }
        Some(_) => Err(MetadataViolation::FieldNotString { idx, field }),
    }
}

/// An optional boolean flag: an explicit null gets its own message, distinct
/// from a wrong type.
fn check_flag(
    idx: usize,
    map: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<bool>, MetadataViolation> {
    match map.get(field) {
        None => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(Value::Null) => Err(MetadataViolation::FlagIsNull { idx, field }),
        Some(_) => Err(MetadataViolation::FlagNotBoolean { idx, field }),
    }
}

/// Whole-array invariants; only reached when every item passed individually.
fn check_cross_item(items: &[MetadataItem]) -> Result<(), MetadataViolation> {
    let mains = items.iter().filter(|i| i.main == Some(true)).count();
    if mains > 1 {
        return Err(MetadataViolation::MultipleMain);
    }

    let mut seen_ids: Vec<Uuid> = Vec::new();
    for id in items.iter().filter_map(|i| i.image_id) {
        if seen_ids.contains(&id) {
            return Err(MetadataViolation::DuplicateImageId(id));
        }
        seen_ids.push(id);
    }

    let mut seen_idxs: Vec<u64> = Vec::new();
    for image_idx in items.iter().filter_map(|i| i.image_idx) {
        if seen_idxs.contains(&image_idx) {
            return Err(MetadataViolation::DuplicateImageIdx(image_idx));
        }
        seen_idxs.push(image_idx);
    }

    Ok(())
}
