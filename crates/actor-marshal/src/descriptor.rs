// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type descriptors and type-erased objects.
//!
//! A [`TypeDescriptor`] binds a canonical type name to the code that drives a
//! [`Serializer`] / [`Deserializer`] for values of that type. Concrete Rust
//! types implement [`Marshal`] and are adapted with [`TypedDescriptor`].

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;

use crate::de::Deserializer;
use crate::error::{MarshalError, MarshalResult};
use crate::primitive::Scalar;
use crate::ser::Serializer;

/// A value of any registered type, tagged with its canonical type name.
pub struct Object {
    type_name: String,
    value: Box<dyn Any + Send>,
}

impl Object {
    pub fn new<T: Any + Send>(type_name: impl Into<String>, value: T) -> Self {
        Self {
            type_name: type_name.into(),
            value: Box::new(value),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// Take the concrete value out, or get the object back if `T` is wrong.
    pub fn downcast<T: Any>(self) -> Result<T, Self> {
        let type_name = self.type_name;
        match self.value.downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(value) => Err(Self { type_name, value }),
        }
    }

    /// The payload, for handing back to a descriptor's `serialize`.
    pub fn as_any(&self) -> &dyn Any {
        &*self.value
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// Registry entry: serialize/deserialize behavior for one type name.
pub trait TypeDescriptor: Send + Sync {
    /// Canonical, registry-unique type name.
    fn name(&self) -> &str;

    /// Drive `sink` with `value`, which must be of this descriptor's type.
    fn serialize(&self, value: &dyn Any, sink: &mut dyn Serializer) -> MarshalResult<()>;

    /// Rebuild a value by driving `source`.
    fn deserialize(&self, source: &mut dyn Deserializer) -> MarshalResult<Object>;
}

/// Concrete types with a fixed field layout.
///
/// `write_fields` and `read_fields` must issue the same sequence of calls;
/// the binary codec relies on it.
///
/// ```
/// use actor_marshal::{read_scalar, write_scalar, Deserializer, Marshal, MarshalResult, Serializer};
///
/// #[derive(Debug, PartialEq)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl Marshal for Point {
///     const TYPE_NAME: &'static str = "Point";
///
///     fn write_fields(&self, sink: &mut dyn Serializer) -> MarshalResult<()> {
///         write_scalar(sink, &self.x)?;
///         write_scalar(sink, &self.y)
///     }
///
///     fn read_fields(source: &mut dyn Deserializer) -> MarshalResult<Self> {
///         Ok(Self {
///             x: read_scalar(source)?,
///             y: read_scalar(source)?,
///         })
///     }
/// }
///
/// let text = actor_marshal::to_text(&Point { x: 1, y: -2 }).unwrap();
/// assert_eq!(text, "Point ( 1, -2 )");
/// assert_eq!(actor_marshal::from_text::<Point>(&text).unwrap(), Point { x: 1, y: -2 });
/// ```
pub trait Marshal: Any + Send + Sized {
    const TYPE_NAME: &'static str;

    fn write_fields(&self, sink: &mut dyn Serializer) -> MarshalResult<()>;

    fn read_fields(source: &mut dyn Deserializer) -> MarshalResult<Self>;
}

/// Write `value` as a complete object scope.
pub fn write_object<T: Marshal>(value: &T, sink: &mut dyn Serializer) -> MarshalResult<()> {
    sink.begin_object(T::TYPE_NAME)?;
    value.write_fields(sink)?;
    sink.end_object()
}

/// Read a complete object scope, checking its name where the format carries one.
pub fn read_object<T: Marshal>(source: &mut dyn Deserializer) -> MarshalResult<T> {
    source.expect_object(T::TYPE_NAME)?;
    let value = T::read_fields(source)?;
    source.end_object()?;
    Ok(value)
}

pub fn write_scalar<T: Scalar>(sink: &mut dyn Serializer, value: &T) -> MarshalResult<()> {
    sink.write_value(&value.to_value())
}

pub fn read_scalar<T: Scalar>(source: &mut dyn Deserializer) -> MarshalResult<T> {
    let value = source.read_value(T::KIND)?;
    let found = value.kind();
    T::from_value(value).ok_or_else(|| MarshalError::mismatch(T::KIND.name(), found.name()))
}

/// Write a sequence of scalars.
pub fn write_scalars<T: Scalar>(sink: &mut dyn Serializer, values: &[T]) -> MarshalResult<()> {
    sink.begin_sequence(values.len())?;
    for value in values {
        sink.write_value(&value.to_value())?;
    }
    sink.end_sequence()
}

pub fn read_scalars<T: Scalar>(source: &mut dyn Deserializer) -> MarshalResult<Vec<T>> {
    let count = source.begin_sequence()?;
    let mut values = Vec::new();
    for _ in 0..count {
        values.push(read_scalar(source)?);
    }
    source.end_sequence()?;
    Ok(values)
}

/// Write a sequence of nested objects.
pub fn write_objects<T: Marshal>(sink: &mut dyn Serializer, values: &[T]) -> MarshalResult<()> {
    sink.begin_sequence(values.len())?;
    for value in values {
        write_object(value, sink)?;
    }
    sink.end_sequence()
}

pub fn read_objects<T: Marshal>(source: &mut dyn Deserializer) -> MarshalResult<Vec<T>> {
    let count = source.begin_sequence()?;
    let mut values = Vec::new();
    for _ in 0..count {
        values.push(read_object(source)?);
    }
    source.end_sequence()?;
    Ok(values)
}

/// [`TypeDescriptor`] for a [`Marshal`] type.
pub struct TypedDescriptor<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T: Marshal> TypedDescriptor<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T: Marshal> Default for TypedDescriptor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Marshal> TypeDescriptor for TypedDescriptor<T> {
    fn name(&self) -> &str {
        T::TYPE_NAME
    }

    fn serialize(&self, value: &dyn Any, sink: &mut dyn Serializer) -> MarshalResult<()> {
        let value = value.downcast_ref::<T>().ok_or_else(|| {
            MarshalError::mismatch(T::TYPE_NAME, "value of another Rust type")
        })?;
        write_object(value, sink)
    }

    fn deserialize(&self, source: &mut dyn Deserializer) -> MarshalResult<Object> {
        let value = read_object::<T>(source)?;
        Ok(Object::new(T::TYPE_NAME, value))
    }
}
