// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Dynamic objects
//!
//! Marshal values whose layout is only known at runtime: generic tools,
//! bridges and tests that have no Rust type for a message.
//!
//! # Example
//!
//! ```rust
//! use actor_marshal::dynamic::{DynamicObject, SchemaBuilder};
//! use actor_marshal::{render, PrimitiveKind};
//!
//! let schema = SchemaBuilder::new("SensorReading")
//!     .value("sensor_id", PrimitiveKind::U32)
//!     .value("temperature", PrimitiveKind::F64)
//!     .string("unit")
//!     .build();
//!
//! let reading = DynamicObject::new("SensorReading")
//!     .with("sensor_id", 42u32)
//!     .with("temperature", 23.5f64)
//!     .with("unit", "C");
//!
//! let text = render(&reading, &schema).unwrap();
//! assert_eq!(text, r#"SensorReading ( 42, 23.5, "C" )"#);
//! ```

mod builder;
mod schema;
mod value;

pub use builder::SchemaBuilder;
pub use schema::{FieldKind, FieldSchema, ObjectSchema};
pub use value::{DynamicObject, DynamicValue};
