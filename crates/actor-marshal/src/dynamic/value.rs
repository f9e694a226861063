// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Dynamic value types.

use crate::primitive::PrimitiveValue;

/// One field of a [`DynamicObject`].
#[derive(Debug, Clone, PartialEq)]
pub enum DynamicValue {
    Value(PrimitiveValue),
    Tuple(Vec<PrimitiveValue>),
    Sequence(Vec<DynamicValue>),
    Object(DynamicObject),
}

impl DynamicValue {
    /// Short shape description for diagnostics.
    pub fn describe(&self) -> String {
        match self {
            Self::Value(v) => v.kind().name().to_string(),
            Self::Tuple(vs) => format!("tuple of {}", vs.len()),
            Self::Sequence(items) => format!("sequence of {}", items.len()),
            Self::Object(obj) => format!("object {}", obj.type_name()),
        }
    }

    pub fn as_value(&self) -> Option<&PrimitiveValue> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_tuple(&self) -> Option<&[PrimitiveValue]> {
        match self {
            Self::Tuple(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[DynamicValue]> {
        match self {
            Self::Sequence(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&DynamicObject> {
        match self {
            Self::Object(v) => Some(v),
            _ => None,
        }
    }
}

macro_rules! impl_from_primitive {
    ($($type:ty),* $(,)?) => {
        $(
            impl From<$type> for DynamicValue {
                fn from(v: $type) -> Self {
                    Self::Value(v.into())
                }
            }
        )*
    };
}

impl_from_primitive!(
    PrimitiveValue,
    bool,
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    u64,
    f32,
    f64,
    String,
    &str,
);

impl From<DynamicObject> for DynamicValue {
    fn from(v: DynamicObject) -> Self {
        Self::Object(v)
    }
}

/// Type-erased object whose layout is given by an
/// [`ObjectSchema`](super::ObjectSchema). Fields keep insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicObject {
    type_name: String,
    fields: Vec<(String, DynamicValue)>,
}

impl DynamicObject {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: Vec::new(),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<DynamicValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Set a field, replacing an existing one of the same name in place.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<DynamicValue>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&DynamicValue> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut DynamicValue> {
        self.fields
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Primitive field shortcut.
    pub fn value(&self, name: &str) -> Option<&PrimitiveValue> {
        self.get(name)?.as_value()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &DynamicValue)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
