// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Runtime object schemas.

use std::any::Any;
use std::sync::Arc;

use super::{DynamicObject, DynamicValue};
use crate::de::Deserializer;
use crate::descriptor::{Object, TypeDescriptor};
use crate::error::{MarshalError, MarshalResult};
use crate::primitive::{PrimitiveKind, PrimitiveValue};
use crate::ser::Serializer;

/// Shape of one field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// Single primitive.
    Value(PrimitiveKind),
    /// Fixed-length run of primitives.
    Tuple(Vec<PrimitiveKind>),
    /// Runtime-length sequence of elements of one shape.
    Sequence(Box<FieldKind>),
    /// Nested object.
    Object(Arc<ObjectSchema>),
}

impl FieldKind {
    /// Zero / empty value of this shape.
    pub fn default_value(&self) -> DynamicValue {
        match self {
            Self::Value(kind) => DynamicValue::Value(PrimitiveValue::default_for(*kind)),
            Self::Tuple(kinds) => DynamicValue::Tuple(
                kinds.iter().map(|k| PrimitiveValue::default_for(*k)).collect(),
            ),
            Self::Sequence(_) => DynamicValue::Sequence(Vec::new()),
            Self::Object(schema) => DynamicValue::Object(schema.new_object()),
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Value(kind) => kind.name().to_string(),
            Self::Tuple(kinds) => format!("tuple of {}", kinds.len()),
            Self::Sequence(_) => "sequence".to_string(),
            Self::Object(schema) => format!("object {}", schema.name()),
        }
    }
}

/// Named field of an [`ObjectSchema`].
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSchema {
    pub name: String,
    pub kind: FieldKind,
}

impl FieldSchema {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Runtime description of an object type; doubles as its [`TypeDescriptor`].
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectSchema {
    name: String,
    fields: Vec<FieldSchema>,
}

impl ObjectSchema {
    pub fn new(name: impl Into<String>, fields: Vec<FieldSchema>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// An object of this type with every field at its default.
    pub fn new_object(&self) -> DynamicObject {
        self.fields
            .iter()
            .fold(DynamicObject::new(&self.name), |obj, f| {
                obj.with(f.name.clone(), f.kind.default_value())
            })
    }

    /// Write `obj` as a complete object scope.
    pub fn write_object(&self, obj: &DynamicObject, sink: &mut dyn Serializer) -> MarshalResult<()> {
        if obj.type_name() != self.name {
            return Err(MarshalError::mismatch(&self.name, obj.type_name()));
        }
        sink.begin_object(&self.name)?;
        for field in &self.fields {
            let value = obj.get(&field.name).ok_or_else(|| {
                MarshalError::mismatch(
                    format!("field {}.{}", self.name, field.name),
                    "missing field",
                )
            })?;
            write_field(&field.kind, value, sink)?;
        }
        sink.end_object()
    }

    /// Read a complete object scope of this type.
    pub fn read_object(&self, source: &mut dyn Deserializer) -> MarshalResult<DynamicObject> {
        source.expect_object(&self.name)?;
        let mut obj = DynamicObject::new(&self.name);
        for field in &self.fields {
            obj.set(field.name.clone(), read_field(&field.kind, source)?);
        }
        source.end_object()?;
        Ok(obj)
    }
}

fn write_field(kind: &FieldKind, value: &DynamicValue, sink: &mut dyn Serializer) -> MarshalResult<()> {
    match (kind, value) {
        (FieldKind::Value(k), DynamicValue::Value(v)) if v.kind() == *k => sink.write_value(v),
        (FieldKind::Tuple(ks), DynamicValue::Tuple(vs))
            if ks.len() == vs.len() && ks.iter().zip(vs).all(|(k, v)| v.kind() == *k) =>
        {
            sink.write_tuple(vs)
        }
        (FieldKind::Sequence(element), DynamicValue::Sequence(items)) => {
            sink.begin_sequence(items.len())?;
            for item in items {
                write_field(element, item, sink)?;
            }
            sink.end_sequence()
        }
        (FieldKind::Object(schema), DynamicValue::Object(obj)) => schema.write_object(obj, sink),
        _ => Err(MarshalError::mismatch(kind.describe(), value.describe())),
    }
}

fn read_field(kind: &FieldKind, source: &mut dyn Deserializer) -> MarshalResult<DynamicValue> {
    match kind {
        FieldKind::Value(k) => source.read_value(*k).map(DynamicValue::Value),
        FieldKind::Tuple(ks) => source.read_tuple(ks).map(DynamicValue::Tuple),
        FieldKind::Sequence(element) => {
            let count = source.begin_sequence()?;
            let mut items = Vec::new();
            for _ in 0..count {
                items.push(read_field(element, source)?);
            }
            source.end_sequence()?;
            Ok(DynamicValue::Sequence(items))
        }
        FieldKind::Object(schema) => schema.read_object(source).map(DynamicValue::Object),
    }
}

impl TypeDescriptor for ObjectSchema {
    fn name(&self) -> &str {
        &self.name
    }

    fn serialize(&self, value: &dyn Any, sink: &mut dyn Serializer) -> MarshalResult<()> {
        let obj = value.downcast_ref::<DynamicObject>().ok_or_else(|| {
            MarshalError::mismatch("DynamicObject", "value of another Rust type")
        })?;
        self.write_object(obj, sink)
    }

    fn deserialize(&self, source: &mut dyn Deserializer) -> MarshalResult<Object> {
        let obj = self.read_object(source)?;
        Ok(Object::new(self.name.clone(), obj))
    }
}
