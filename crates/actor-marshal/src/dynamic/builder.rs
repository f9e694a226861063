// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Fluent builder API for ObjectSchema.

use std::sync::Arc;

use super::{FieldKind, FieldSchema, ObjectSchema};
use crate::primitive::PrimitiveKind;

/// Builder for creating ObjectSchema instances.
#[derive(Debug)]
pub struct SchemaBuilder {
    name: String,
    fields: Vec<FieldSchema>,
}

impl SchemaBuilder {
    /// Create a new builder for an object type.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Add a field of any shape.
    pub fn field(mut self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.fields.push(FieldSchema::new(name, kind));
        self
    }

    /// Add a primitive field.
    pub fn value(self, name: impl Into<String>, kind: PrimitiveKind) -> Self {
        self.field(name, FieldKind::Value(kind))
    }

    /// Add a UTF-8 string field.
    pub fn string(self, name: impl Into<String>) -> Self {
        self.value(name, PrimitiveKind::String)
    }

    /// Add a fixed-length primitive run.
    pub fn tuple(self, name: impl Into<String>, kinds: Vec<PrimitiveKind>) -> Self {
        self.field(name, FieldKind::Tuple(kinds))
    }

    /// Add a sequence of primitives.
    pub fn sequence(self, name: impl Into<String>, element_kind: PrimitiveKind) -> Self {
        self.field(
            name,
            FieldKind::Sequence(Box::new(FieldKind::Value(element_kind))),
        )
    }

    /// Add a sequence of nested objects.
    pub fn object_sequence(self, name: impl Into<String>, element: Arc<ObjectSchema>) -> Self {
        self.field(name, FieldKind::Sequence(Box::new(FieldKind::Object(element))))
    }

    /// Add a nested object field.
    pub fn object(self, name: impl Into<String>, nested: Arc<ObjectSchema>) -> Self {
        self.field(name, FieldKind::Object(nested))
    }

    /// Build the ObjectSchema.
    pub fn build(self) -> ObjectSchema {
        ObjectSchema::new(self.name, self.fields)
    }
}
