// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Compact binary codec.
//!
//! The stream is a flat run of little-endian primitive encodings with no
//! structural markers and no type names:
//!
//! | Item                  | Encoding                                   |
//! |-----------------------|--------------------------------------------|
//! | bool                  | 1 byte, non-zero = true                    |
//! | fixed-width scalars   | `to_le_bytes()`                            |
//! | UTF-8 string          | `u32` byte count, then bytes               |
//! | UTF-16 / UTF-32       | `u32` unit count, then LE code units       |
//! | sequence              | `u32` element count, then elements         |
//! | object / tuple bounds | nothing                                    |
//! | raw bytes             | bytes verbatim                             |
//!
//! Structure is recovered only because reader and writer are driven by the
//! same descriptor in the same call order. The format is not self-describing
//! and must stay that way for wire compatibility.

mod reader;
mod writer;

pub use reader::BinaryReader;
pub use writer::BinaryWriter;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::de::Deserializer;
    use crate::primitive::{PrimitiveKind, PrimitiveValue};
    use crate::ser::Serializer;

    #[test]
    fn test_writer_reader_replay_same_call_sequence() {
        let mut buf = Vec::new();
        {
            let mut w = BinaryWriter::new(&mut buf);
            w.begin_object("Envelope").unwrap();
            w.write_value(&PrimitiveValue::U32(7)).unwrap();
            w.begin_sequence(2).unwrap();
            w.write_value(&"a".into()).unwrap();
            w.write_value(&"bc".into()).unwrap();
            w.end_sequence().unwrap();
            w.write_tuple(&[PrimitiveValue::I16(-2), PrimitiveValue::Bool(true)])
                .unwrap();
            w.write_raw(&[0xde, 0xad]).unwrap();
            w.end_object().unwrap();
        }

        let mut r = BinaryReader::new(&buf);
        r.begin_object("Envelope").unwrap();
        assert_eq!(r.read_value(PrimitiveKind::U32).unwrap(), PrimitiveValue::U32(7));
        assert_eq!(r.begin_sequence().unwrap(), 2);
        assert_eq!(r.read_value(PrimitiveKind::String).unwrap(), "a".into());
        assert_eq!(r.read_value(PrimitiveKind::String).unwrap(), "bc".into());
        r.end_sequence().unwrap();
        assert_eq!(
            r.read_tuple(&[PrimitiveKind::I16, PrimitiveKind::Bool]).unwrap(),
            vec![PrimitiveValue::I16(-2), PrimitiveValue::Bool(true)]
        );
        assert_eq!(r.read_raw(2).unwrap(), vec![0xde, 0xad]);
        r.end_object().unwrap();
        assert_eq!(r.remaining(), 0);
    }
}
