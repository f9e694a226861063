// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # actor-marshal - value marshaling for actor messages
//!
//! Turns message values into a human-readable text form (for logs, consoles
//! and configuration) or a compact binary form, and back. Types describe
//! themselves through a [`TypeDescriptor`]; the codecs only see a stream of
//! structural events (object, sequence, primitive).
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use actor_marshal::{
//!     read_scalar, write_scalar, Deserializer, HashMapTypeRegistry, Marshal, MarshalResult,
//!     Marshaller, Serializer,
//! };
//!
//! #[derive(Debug, PartialEq)]
//! struct Ping {
//!     seq: u32,
//! }
//!
//! impl Marshal for Ping {
//!     const TYPE_NAME: &'static str = "Ping";
//!
//!     fn write_fields(&self, sink: &mut dyn Serializer) -> MarshalResult<()> {
//!         write_scalar(sink, &self.seq)
//!     }
//!
//!     fn read_fields(source: &mut dyn Deserializer) -> MarshalResult<Self> {
//!         Ok(Self { seq: read_scalar(source)? })
//!     }
//! }
//!
//! let mut registry = HashMapTypeRegistry::new();
//! registry.register_type::<Ping>();
//! let marshaller = Marshaller::new(Arc::new(registry));
//!
//! let obj = marshaller.parse("Ping ( 7 )").unwrap();
//! assert_eq!(obj.downcast_ref::<Ping>(), Some(&Ping { seq: 7 }));
//! assert_eq!(marshaller.render(&obj).unwrap(), "Ping ( 7 )");
//! ```
//!
//! ## Text format
//!
//! ```text
//! value    := object | sequence | primitive
//! object   := NAME | NAME "(" value ("," value)* ")"
//! sequence := "{" [ value ("," value)* ] "}"
//! ```
//!
//! ## Modules Overview
//!
//! - [`text`] - text writer and reader
//! - [`binary`] - little-endian binary writer and reader
//! - [`dynamic`] - runtime schemas for types without a Rust definition
//! - [`config`] - codec limits and policies, loadable from TOML

/// Little-endian binary codec.
pub mod binary;
/// Codec configuration (depth limits, wide string policy).
pub mod config;
mod de;
mod descriptor;
/// Runtime object schemas and dynamic values.
pub mod dynamic;
mod error;
mod marshal;
mod primitive;
mod registry;
mod ser;
/// Human-readable text codec.
pub mod text;

pub use config::{ConfigError, MarshalConfig, WideStringPolicy};
pub use de::Deserializer;
pub use descriptor::{
    read_object, read_objects, read_scalar, read_scalars, write_object, write_objects,
    write_scalar, write_scalars, Marshal, Object, TypeDescriptor, TypedDescriptor,
};
pub use error::{MarshalError, MarshalResult};
pub use marshal::{
    decode, encode, from_binary, from_text, parse, render, to_binary, to_text, Marshaller,
};
pub use primitive::{PrimitiveKind, PrimitiveValue, Scalar};
pub use registry::{HashMapTypeRegistry, TypeRegistry};
pub use ser::Serializer;

pub use binary::{BinaryReader, BinaryWriter};
pub use text::{TextReader, TextWriter};
