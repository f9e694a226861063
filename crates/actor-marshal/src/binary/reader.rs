// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Binary deserializer replaying a [`BinaryWriter`](super::BinaryWriter) stream.

use crate::de::Deserializer;
use crate::error::{MarshalError, MarshalResult};
use crate::primitive::{PrimitiveKind, PrimitiveValue};

/// Generate little-endian read methods for fixed-width scalars.
macro_rules! impl_read_le {
    ($name:ident, $type:ty, $size:expr) => {
        fn $name(&mut self) -> MarshalResult<$type> {
            let mut bytes = [0u8; $size];
            bytes.copy_from_slice(self.read_bytes($size)?);
            Ok(<$type>::from_le_bytes(bytes))
        }
    };
}

/// Binary [`Deserializer`] over a borrowed byte slice (bounds-checked, zero-copy).
pub struct BinaryReader<'a> {
    buffer: &'a [u8],
    offset: usize,
}

impl<'a> BinaryReader<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self { buffer, offset: 0 }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.offset)
    }

    fn read_bytes(&mut self, count: usize) -> MarshalResult<&'a [u8]> {
        if count > self.remaining() {
            return Err(MarshalError::Truncated {
                offset: self.offset,
                need: count,
                have: self.remaining(),
            });
        }
        let slice = &self.buffer[self.offset..self.offset + count];
        self.offset += count;
        Ok(slice)
    }

    impl_read_le!(read_i8, i8, 1);
    impl_read_le!(read_i16, i16, 2);
    impl_read_le!(read_i32, i32, 4);
    impl_read_le!(read_i64, i64, 8);
    impl_read_le!(read_u8, u8, 1);
    impl_read_le!(read_u16, u16, 2);
    impl_read_le!(read_u32, u32, 4);
    impl_read_le!(read_u64, u64, 8);
    impl_read_le!(read_f32, f32, 4);
    impl_read_le!(read_f64, f64, 8);

    fn read_len(&mut self) -> MarshalResult<usize> {
        Ok(self.read_u32()? as usize)
    }

    fn decode_primitive(&mut self, kind: PrimitiveKind) -> MarshalResult<PrimitiveValue> {
        let value = match kind {
            PrimitiveKind::Bool => PrimitiveValue::Bool(self.read_u8()? != 0),
            PrimitiveKind::I8 => PrimitiveValue::I8(self.read_i8()?),
            PrimitiveKind::I16 => PrimitiveValue::I16(self.read_i16()?),
            PrimitiveKind::I32 => PrimitiveValue::I32(self.read_i32()?),
            PrimitiveKind::I64 => PrimitiveValue::I64(self.read_i64()?),
            PrimitiveKind::U8 => PrimitiveValue::U8(self.read_u8()?),
            PrimitiveKind::U16 => PrimitiveValue::U16(self.read_u16()?),
            PrimitiveKind::U32 => PrimitiveValue::U32(self.read_u32()?),
            PrimitiveKind::U64 => PrimitiveValue::U64(self.read_u64()?),
            PrimitiveKind::F32 => PrimitiveValue::F32(self.read_f32()?),
            PrimitiveKind::F64 => PrimitiveValue::F64(self.read_f64()?),
            PrimitiveKind::String => {
                let len = self.read_len()?;
                let start = self.offset;
                let bytes = self.read_bytes(len)?;
                let s = std::str::from_utf8(bytes).map_err(|e| {
                    MarshalError::malformed(start + e.valid_up_to(), "invalid UTF-8 in string")
                })?;
                PrimitiveValue::String(s.to_string())
            }
            PrimitiveKind::U16String => {
                let len = self.read_len()?;
                let bytes = self.read_bytes(len.saturating_mul(2))?;
                PrimitiveValue::U16String(
                    bytes
                        .chunks_exact(2)
                        .map(|c| u16::from_le_bytes([c[0], c[1]]))
                        .collect(),
                )
            }
            PrimitiveKind::U32String => {
                let len = self.read_len()?;
                let bytes = self.read_bytes(len.saturating_mul(4))?;
                PrimitiveValue::U32String(
                    bytes
                        .chunks_exact(4)
                        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
                        .collect(),
                )
            }
        };
        Ok(value)
    }
}

impl Deserializer for BinaryReader<'_> {
    fn seek_object(&mut self) -> MarshalResult<String> {
        Err(MarshalError::Unsupported(
            "binary streams carry no type names".into(),
        ))
    }

    fn peek_object(&mut self) -> MarshalResult<String> {
        self.seek_object()
    }

    fn begin_object(&mut self, _type_name: &str) -> MarshalResult<()> {
        Ok(())
    }

    fn end_object(&mut self) -> MarshalResult<()> {
        Ok(())
    }

    fn expect_object(&mut self, type_name: &str) -> MarshalResult<()> {
        self.begin_object(type_name)
    }

    fn begin_sequence(&mut self) -> MarshalResult<usize> {
        self.read_len()
    }

    fn end_sequence(&mut self) -> MarshalResult<()> {
        Ok(())
    }

    fn read_value(&mut self, kind: PrimitiveKind) -> MarshalResult<PrimitiveValue> {
        self.decode_primitive(kind)
    }

    fn read_tuple(&mut self, kinds: &[PrimitiveKind]) -> MarshalResult<Vec<PrimitiveValue>> {
        kinds.iter().map(|k| self.decode_primitive(*k)).collect()
    }

    fn read_raw(&mut self, len: usize) -> MarshalResult<Vec<u8>> {
        Ok(self.read_bytes(len)?.to_vec())
    }
}
