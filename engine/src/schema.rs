//! Schema orchestration: running every field spec over one raw record
//!
//! Stateless per invocation. A [`Schema`] is immutable configuration built
//! once and shared read-only across any number of concurrent validation
//! runs; each run gets its own input record and produces a fresh result.

use tracing::{debug, trace};

use crate::error::ValidationError;
use crate::field::{FieldSpec, Record};

/// An ordered list of field specs plus the two orchestration modes.
#[derive(Debug, Default)]
pub struct Schema {
    fields: Vec<FieldSpec>,
}

impl Schema {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Stop-at-first-error mode.
    ///
    /// Fields run in declaration order; the first validation failure returns
    /// immediately with exactly one error. The failing field's transform has
    /// already run by then - transforms always run before validation.
    pub fn check_first(&self, record: &Record) -> Result<Record, ValidationError> {
        let mut normalized = Record::new();

        for spec in &self.fields {
            let transformed = spec.run_transform(record);
            let raw = record.get(spec.name());

            if let Some(violation) = spec.run_validate(transformed.as_ref(), raw) {
                debug!(
                    field = spec.name(),
                    kind = %violation.kind,
                    "validation failed"
                );
                return Err(ValidationError::new(
                    spec.name(),
                    transformed.as_ref(),
                    violation,
                ));
            }

            trace!(field = spec.name(), "validation passed");
            if let Some(value) = transformed {
                normalized.insert(spec.name().to_string(), value);
            }
        }

        Ok(normalized)
    }

    /// Collect-all mode.
    ///
    /// Every field is transformed and validated independently; a failure in
    /// one field never blocks evaluation of another. Returns one error per
    /// failing field, in declaration order. No partial normalization leaks
    /// past a failure: the normalized record is only returned when every
    /// field passed.
    pub fn check_all(&self, record: &Record) -> Result<Record, Vec<ValidationError>> {
        let mut normalized = Record::new();
        let mut errors = Vec::new();

        for spec in &self.fields {
            let transformed = spec.run_transform(record);
            let raw = record.get(spec.name());

            if let Some(violation) = spec.run_validate(transformed.as_ref(), raw) {
                debug!(
                    field = spec.name(),
                    kind = %violation.kind,
                    "validation failed"
                );
                errors.push(ValidationError::new(
                    spec.name(),
                    transformed.as_ref(),
                    violation,
                ));
                continue;
            }

            if let Some(value) = transformed {
                normalized.insert(spec.name().to_string(), value);
            }
        }

        if errors.is_empty() {
            Ok(normalized)
        } else {
            Err(errors)
        }
    }
}
