// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Binary serializer appending to a caller-owned buffer.

use crate::error::{MarshalError, MarshalResult};
use crate::primitive::PrimitiveValue;
use crate::ser::Serializer;

/// Binary [`Serializer`] writing into `sink`.
///
/// The buffer must outlive the writer; it is only ever appended to. The only
/// failure is a length that does not fit the `u32` prefix.
pub struct BinaryWriter<'a> {
    sink: &'a mut Vec<u8>,
}

impl<'a> BinaryWriter<'a> {
    pub fn new(sink: &'a mut Vec<u8>) -> Self {
        Self { sink }
    }

    /// Bytes in the underlying buffer (including anything written before this writer).
    pub fn len(&self) -> usize {
        self.sink.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sink.is_empty()
    }

    fn write_len(&mut self, len: usize) -> MarshalResult<()> {
        let len = u32::try_from(len).map_err(|_| {
            MarshalError::Unsupported(format!("length {} exceeds the u32 length prefix", len))
        })?;
        self.sink.extend(&len.to_le_bytes());
        Ok(())
    }

    fn encode_primitive(&mut self, value: &PrimitiveValue) -> MarshalResult<()> {
        match value {
            PrimitiveValue::Bool(v) => self.sink.push(u8::from(*v)),
            PrimitiveValue::I8(v) => self.sink.extend(&v.to_le_bytes()),
            PrimitiveValue::I16(v) => self.sink.extend(&v.to_le_bytes()),
            PrimitiveValue::I32(v) => self.sink.extend(&v.to_le_bytes()),
            PrimitiveValue::I64(v) => self.sink.extend(&v.to_le_bytes()),
            PrimitiveValue::U8(v) => self.sink.push(*v),
            PrimitiveValue::U16(v) => self.sink.extend(&v.to_le_bytes()),
            PrimitiveValue::U32(v) => self.sink.extend(&v.to_le_bytes()),
            PrimitiveValue::U64(v) => self.sink.extend(&v.to_le_bytes()),
            PrimitiveValue::F32(v) => self.sink.extend(&v.to_le_bytes()),
            PrimitiveValue::F64(v) => self.sink.extend(&v.to_le_bytes()),
            PrimitiveValue::String(s) => {
                self.write_len(s.len())?;
                self.sink.extend(s.as_bytes());
            }
            PrimitiveValue::U16String(units) => {
                self.write_len(units.len())?;
                for unit in units {
                    self.sink.extend(&unit.to_le_bytes());
                }
            }
            PrimitiveValue::U32String(units) => {
                self.write_len(units.len())?;
                for unit in units {
                    self.sink.extend(&unit.to_le_bytes());
                }
            }
        }
        Ok(())
    }
}

impl Serializer for BinaryWriter<'_> {
    fn begin_object(&mut self, _type_name: &str) -> MarshalResult<()> {
        Ok(())
    }

    fn end_object(&mut self) -> MarshalResult<()> {
        Ok(())
    }

    fn begin_sequence(&mut self, count: usize) -> MarshalResult<()> {
        self.write_len(count)
    }

    fn end_sequence(&mut self) -> MarshalResult<()> {
        Ok(())
    }

    fn write_value(&mut self, value: &PrimitiveValue) -> MarshalResult<()> {
        self.encode_primitive(value)
    }

    fn write_tuple(&mut self, values: &[PrimitiveValue]) -> MarshalResult<()> {
        for value in values {
            self.encode_primitive(value)?;
        }
        Ok(())
    }

    fn write_raw(&mut self, bytes: &[u8]) -> MarshalResult<()> {
        self.sink.extend_from_slice(bytes);
        Ok(())
    }
}
