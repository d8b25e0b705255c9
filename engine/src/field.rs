//! Field binding: one name, one transform, one validation, one message table
//!
//! A [`FieldSpec`] is owned by a schema and built once at schema-definition
//! time with the builder methods; at run time it is shared read-only.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

use crate::error::{RuleKind, Violation};

/// A raw or normalized input record.
pub type Record = serde_json::Map<String, Value>;

type TransformFn = dyn Fn(Option<&Value>, &Record) -> Option<Value> + Send + Sync;
type ValidateFn = dyn Fn(Option<&Value>, Option<&Value>) -> Option<Violation> + Send + Sync;

/// The bound (transform, validate, messages) triple for one schema field.
///
/// The transform receives the field's raw value plus the whole raw record
/// (some transforms depend on sibling values) and produces the normalized
/// value, `None` meaning "leave the field undefined". The validator receives
/// the *transformed* value first and the raw value second; most validators
/// only look at the former, but validators paired with default-substituting
/// transforms (pagination) need the raw one.
pub struct FieldSpec {
    name: String,
    transform: Option<Box<TransformFn>>,
    validate: Option<Box<ValidateFn>>,
    messages: BTreeMap<RuleKind, String>,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: None,
            validate: None,
            messages: BTreeMap::new(),
        }
    }

    /// Set the transform step. Without one the raw value passes through
    /// unchanged.
    pub fn transform<F>(mut self, f: F) -> Self
    where
        F: Fn(Option<&Value>, &Record) -> Option<Value> + Send + Sync + 'static,
    {
        self.transform = Some(Box::new(f));
        self
    }

    /// Set the validation step. Without one the field always passes.
    pub fn validate<F>(mut self, f: F) -> Self
    where
        F: Fn(Option<&Value>, Option<&Value>) -> Option<Violation> + Send + Sync + 'static,
    {
        self.validate = Some(Box::new(f));
        self
    }

    /// Override the message reported for one violation kind.
    pub fn message(mut self, kind: RuleKind, text: impl Into<String>) -> Self {
        self.messages.insert(kind, text.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the transform against the raw record. Always runs, even when the
    /// field is about to fail validation.
    pub(crate) fn run_transform(&self, record: &Record) -> Option<Value> {
        let raw = record.get(&self.name);
        match &self.transform {
            Some(transform) => transform(raw, record),
            None => raw.cloned(),
        }
    }

    /// Run the validation against the transformed value, applying any
    /// per-kind message override.
    pub(crate) fn run_validate(
        &self,
        transformed: Option<&Value>,
        raw: Option<&Value>,
    ) -> Option<Violation> {
        let validate = self.validate.as_ref()?;
        let mut violation = validate(transformed, raw)?;
        if let Some(text) = self.messages.get(&violation.kind) {
            violation.message = text.clone();
        }
        Some(violation)
    }
}

impl fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("name", &self.name)
            .field("has_transform", &self.transform.is_some())
            .field("has_validate", &self.validate.is_some())
            .field("messages", &self.messages)
            .finish()
    }
}
