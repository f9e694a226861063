// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Marshal facade: bind a codec to a descriptor or registry for one operation.
//!
//! Every call builds a fresh reader or writer over the given buffer and drops
//! it afterwards; nothing is shared between calls.

use std::any::Any;
use std::sync::Arc;

use crate::binary::{BinaryReader, BinaryWriter};
use crate::config::MarshalConfig;
use crate::de::Deserializer;
use crate::descriptor::{read_object, write_object, Marshal, Object, TypeDescriptor};
use crate::error::{MarshalError, MarshalResult};
use crate::registry::TypeRegistry;
use crate::text::{TextReader, TextWriter};

/// Render `value` as text through `descriptor`.
pub fn render(value: &dyn Any, descriptor: &dyn TypeDescriptor) -> MarshalResult<String> {
    render_with(&MarshalConfig::default(), value, descriptor)
}

/// Parse text into an object, looking its type up in `registry`.
pub fn parse(text: &str, registry: &dyn TypeRegistry) -> MarshalResult<Object> {
    parse_with(&MarshalConfig::default(), text, registry)
}

/// Render a [`Marshal`] value without going through a registry.
pub fn to_text<T: Marshal>(value: &T) -> MarshalResult<String> {
    let mut out = String::new();
    write_object(value, &mut TextWriter::new(&mut out))?;
    Ok(out)
}

/// Parse text holding exactly one `T`.
pub fn from_text<T: Marshal>(text: &str) -> MarshalResult<T> {
    read_object(&mut TextReader::new(text))
}

/// Append the binary encoding of `value` to `buf`.
pub fn encode(
    value: &dyn Any,
    descriptor: &dyn TypeDescriptor,
    buf: &mut Vec<u8>,
) -> MarshalResult<()> {
    descriptor.serialize(value, &mut BinaryWriter::new(buf))
}

/// Decode one value of `descriptor`'s type from the start of `bytes`.
pub fn decode(bytes: &[u8], descriptor: &dyn TypeDescriptor) -> MarshalResult<Object> {
    let mut reader = BinaryReader::new(bytes);
    let obj = descriptor.deserialize(&mut reader)?;
    check_consumed(&reader)?;
    Ok(obj)
}

pub fn to_binary<T: Marshal>(value: &T, buf: &mut Vec<u8>) -> MarshalResult<()> {
    write_object(value, &mut BinaryWriter::new(buf))
}

pub fn from_binary<T: Marshal>(bytes: &[u8]) -> MarshalResult<T> {
    let mut reader = BinaryReader::new(bytes);
    let value = read_object(&mut reader)?;
    check_consumed(&reader)?;
    Ok(value)
}

fn check_consumed(reader: &BinaryReader<'_>) -> MarshalResult<()> {
    if reader.remaining() != 0 {
        return Err(MarshalError::malformed(
            reader.offset(),
            format!("{} trailing bytes after value", reader.remaining()),
        ));
    }
    Ok(())
}

fn render_with(
    config: &MarshalConfig,
    value: &dyn Any,
    descriptor: &dyn TypeDescriptor,
) -> MarshalResult<String> {
    let mut out = String::new();
    descriptor.serialize(value, &mut TextWriter::with_config(&mut out, config))?;
    Ok(out)
}

fn parse_with(
    config: &MarshalConfig,
    text: &str,
    registry: &dyn TypeRegistry,
) -> MarshalResult<Object> {
    if let Some(limit) = config.max_input_len {
        if text.len() > limit {
            return Err(MarshalError::malformed(
                limit,
                format!("input of {} bytes exceeds limit of {}", text.len(), limit),
            ));
        }
    }
    let mut reader = TextReader::with_config(text, config);
    let name = reader.peek_object()?;
    let descriptor = registry.lookup(&name).ok_or_else(|| {
        log::debug!("[marshal::parse] '{}' is not registered", name);
        MarshalError::UnregisteredType(name.clone())
    })?;
    let obj = descriptor.deserialize(&mut reader)?;
    if reader.open_objects() != 0 {
        return Err(MarshalError::misuse(format!(
            "descriptor for '{}' left {} object(s) open",
            name,
            reader.open_objects()
        )));
    }
    Ok(obj)
}

/// Facade bound to a configuration and a shared registry.
#[derive(Clone)]
pub struct Marshaller {
    config: MarshalConfig,
    registry: Arc<dyn TypeRegistry>,
}

impl Marshaller {
    pub fn new(registry: Arc<dyn TypeRegistry>) -> Self {
        Self::with_config(MarshalConfig::default(), registry)
    }

    pub fn with_config(config: MarshalConfig, registry: Arc<dyn TypeRegistry>) -> Self {
        Self { config, registry }
    }

    pub fn config(&self) -> &MarshalConfig {
        &self.config
    }

    pub fn registry(&self) -> &Arc<dyn TypeRegistry> {
        &self.registry
    }

    /// Descriptor registered under `name`.
    pub fn descriptor(&self, name: &str) -> MarshalResult<Arc<dyn TypeDescriptor>> {
        self.registry
            .lookup(name)
            .ok_or_else(|| MarshalError::UnregisteredType(name.to_string()))
    }

    /// Render an object previously obtained from [`parse`](Self::parse) or built by hand.
    pub fn render(&self, obj: &Object) -> MarshalResult<String> {
        let descriptor = self.descriptor(obj.type_name())?;
        render_with(&self.config, obj.as_any(), descriptor.as_ref())
    }

    /// Render `value` as the registered type `type_name`.
    pub fn render_as(&self, type_name: &str, value: &dyn Any) -> MarshalResult<String> {
        let descriptor = self.descriptor(type_name)?;
        render_with(&self.config, value, descriptor.as_ref())
    }

    pub fn parse(&self, text: &str) -> MarshalResult<Object> {
        parse_with(&self.config, text, self.registry.as_ref())
    }

    /// Append the binary encoding of `obj` to `buf`.
    pub fn encode(&self, obj: &Object, buf: &mut Vec<u8>) -> MarshalResult<()> {
        let descriptor = self.descriptor(obj.type_name())?;
        encode(obj.as_any(), descriptor.as_ref(), buf)
    }

    /// Decode a value of the registered type `type_name`.
    pub fn decode(&self, type_name: &str, bytes: &[u8]) -> MarshalResult<Object> {
        let descriptor = self.descriptor(type_name)?;
        decode(bytes, descriptor.as_ref())
    }
}
