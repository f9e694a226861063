// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Source side of the marshaling contract, dual to [`Serializer`](crate::Serializer).

use crate::error::{MarshalError, MarshalResult};
use crate::primitive::{PrimitiveKind, PrimitiveValue};

/// Abstract source replaying the structure a [`Serializer`](crate::Serializer) produced.
pub trait Deserializer {
    /// Skip leading separators and consume the next object's type name.
    fn seek_object(&mut self) -> MarshalResult<String>;

    /// Like [`seek_object`](Self::seek_object) but leaves the position untouched.
    fn peek_object(&mut self) -> MarshalResult<String>;

    /// Open an object scope. `type_name` is informational; it is not re-validated.
    fn begin_object(&mut self, type_name: &str) -> MarshalResult<()>;

    /// Close the innermost object scope.
    fn end_object(&mut self) -> MarshalResult<()>;

    /// Consume the next object's name, check it is `type_name`, then open its scope.
    ///
    /// Formats that carry no type names only open the scope.
    fn expect_object(&mut self, type_name: &str) -> MarshalResult<()> {
        let found = self.seek_object()?;
        if found != type_name {
            return Err(MarshalError::mismatch(type_name, found));
        }
        self.begin_object(type_name)
    }

    /// Open a sequence scope and return how many elements follow.
    fn begin_sequence(&mut self) -> MarshalResult<usize>;

    /// Close the innermost sequence scope.
    fn end_sequence(&mut self) -> MarshalResult<()>;

    /// Read one primitive of the expected kind.
    fn read_value(&mut self, kind: PrimitiveKind) -> MarshalResult<PrimitiveValue>;

    /// Read a fixed-length run of primitives, one per entry of `kinds`, in order.
    fn read_tuple(&mut self, kinds: &[PrimitiveKind]) -> MarshalResult<Vec<PrimitiveValue>>;

    /// Read `len` opaque bytes.
    fn read_raw(&mut self, len: usize) -> MarshalResult<Vec<u8>> {
        Err(MarshalError::Unsupported(format!("raw read of {} bytes", len)))
    }
}
