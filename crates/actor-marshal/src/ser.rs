// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Sink side of the marshaling contract.

use crate::error::{MarshalError, MarshalResult};
use crate::primitive::PrimitiveValue;

/// Abstract sink driven by a type descriptor.
///
/// Scopes must be closed in the reverse order they were opened. A sink is
/// bound to one buffer for one top-level marshal operation and then dropped.
pub trait Serializer {
    /// Open an object scope named `type_name`. Objects nest.
    fn begin_object(&mut self, type_name: &str) -> MarshalResult<()>;

    /// Close the innermost object scope.
    fn end_object(&mut self) -> MarshalResult<()>;

    /// Open a sequence of `count` elements. The count is advisory for text sinks.
    fn begin_sequence(&mut self, count: usize) -> MarshalResult<()>;

    /// Close the innermost sequence scope.
    fn end_sequence(&mut self) -> MarshalResult<()>;

    /// Emit one primitive leaf.
    fn write_value(&mut self, value: &PrimitiveValue) -> MarshalResult<()>;

    /// Emit a fixed-length run of primitive leaves as one block.
    fn write_tuple(&mut self, values: &[PrimitiveValue]) -> MarshalResult<()>;

    /// Emit opaque bytes verbatim.
    fn write_raw(&mut self, bytes: &[u8]) -> MarshalResult<()> {
        Err(MarshalError::Unsupported(format!(
            "raw write of {} bytes",
            bytes.len()
        )))
    }
}
