// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Text deserializer.
//!
//! Recursive-descent style: the driving descriptor supplies the structure and
//! the reader only checks that the text agrees with it. Spaces and commas are
//! pure separators; the reader has no notion of where a separator is
//! *expected*, so misplaced separators are tolerated.

use std::str::FromStr;

use super::scan;
use crate::config::{MarshalConfig, WideStringPolicy};
use crate::de::Deserializer;
use crate::error::{MarshalError, MarshalResult};
use crate::primitive::{PrimitiveKind, PrimitiveValue};

/// Whether an open object's `(` was present in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ObjectFrame {
    /// Void object: bare type name, no parentheses.
    NoFields,
    /// `(` consumed; a matching `)` is owed.
    HasFields,
}

/// One open scope, innermost last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    Object(ObjectFrame),
    Sequence,
}

/// Text [`Deserializer`] over a borrowed string.
pub struct TextReader<'a> {
    text: &'a str,
    pos: usize,
    scopes: Vec<Scope>,
    max_depth: usize,
    wide_strings: WideStringPolicy,
}

impl<'a> TextReader<'a> {
    pub fn new(text: &'a str) -> Self {
        Self::with_config(text, &MarshalConfig::default())
    }

    pub fn with_config(text: &'a str, config: &MarshalConfig) -> Self {
        Self {
            text,
            pos: 0,
            scopes: Vec::new(),
            max_depth: config.max_depth,
            wide_strings: config.wide_strings,
        }
    }

    /// Byte offset of the cursor.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of currently open objects.
    pub fn open_objects(&self) -> usize {
        self.scopes
            .iter()
            .filter(|scope| matches!(scope, Scope::Object(_)))
            .count()
    }

    /// True once only separators remain.
    pub fn is_exhausted(&self) -> bool {
        scan::skip_separators(self.bytes(), self.pos) == self.text.len()
    }

    fn bytes(&self) -> &'a [u8] {
        self.text.as_bytes()
    }

    fn peek(&self) -> Option<u8> {
        self.bytes().get(self.pos).copied()
    }

    fn found(&self) -> String {
        match self.text.get(self.pos..).and_then(|rest| rest.chars().next()) {
            Some(c) => format!("'{}'", c),
            None => "end of input".to_string(),
        }
    }

    fn malformed(&self, reason: impl Into<String>) -> MarshalError {
        let err = MarshalError::malformed(self.pos, reason);
        log::debug!("[TextReader] {}", err);
        err
    }

    fn skip_space_and_comma(&mut self) {
        self.pos = scan::skip_separators(self.bytes(), self.pos);
    }

    fn consume(&mut self, expected: u8) -> MarshalResult<()> {
        self.skip_space_and_comma();
        if self.peek() != Some(expected) {
            return Err(self.malformed(format!(
                "expected '{}' found {}",
                expected as char,
                self.found()
            )));
        }
        self.pos += 1;
        Ok(())
    }

    fn try_consume(&mut self, expected: u8) -> bool {
        self.skip_space_and_comma();
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Values and sequences may only appear inside an object that declared fields.
    fn integrity_check(&self) -> MarshalResult<()> {
        match self.scopes.last() {
            None => Err(MarshalError::misuse("missing begin_object()")),
            Some(Scope::Object(ObjectFrame::NoFields)) => Err(self.malformed(
                "expected left parenthesis after begin_object() or void value",
            )),
            Some(Scope::Object(ObjectFrame::HasFields) | Scope::Sequence) => Ok(()),
        }
    }

    fn check_depth(&self) -> MarshalResult<()> {
        if self.scopes.len() >= self.max_depth {
            return Err(self.malformed(format!(
                "nesting exceeds limit of {}",
                self.max_depth
            )));
        }
        Ok(())
    }

    fn read_quoted(&mut self) -> MarshalResult<String> {
        let body = self.pos + 1;
        let close = scan::closing_quote(self.bytes(), body)
            .ok_or_else(|| self.malformed("unterminated quoted value"))?;
        let raw = &self.text[body..close];
        self.pos = close + 1;
        Ok(scan::unescape(raw).into_owned())
    }

    fn read_token(&mut self) -> MarshalResult<&'a str> {
        let end = scan::value_end(self.bytes(), self.pos)
            .ok_or_else(|| self.malformed("unterminated value"))?;
        let text: &'a str = self.text;
        let token = &text[self.pos..end];
        self.pos = end;
        Ok(token)
    }

    fn parse_token(
        &self,
        kind: PrimitiveKind,
        token: &str,
        start: usize,
    ) -> MarshalResult<PrimitiveValue> {
        fn num<T: FromStr>(token: &str, kind: PrimitiveKind, start: usize) -> MarshalResult<T> {
            token.parse().map_err(|_| {
                MarshalError::malformed(start, format!("invalid {} literal '{}'", kind, token))
            })
        }

        let value = match kind {
            PrimitiveKind::Bool => match token {
                "true" | "1" => PrimitiveValue::Bool(true),
                "false" | "0" => PrimitiveValue::Bool(false),
                _ => {
                    return Err(MarshalError::malformed(
                        start,
                        format!("invalid bool literal '{}'", token),
                    ))
                }
            },
            PrimitiveKind::I8 => PrimitiveValue::I8(num(token, kind, start)?),
            PrimitiveKind::I16 => PrimitiveValue::I16(num(token, kind, start)?),
            PrimitiveKind::I32 => PrimitiveValue::I32(num(token, kind, start)?),
            PrimitiveKind::I64 => PrimitiveValue::I64(num(token, kind, start)?),
            PrimitiveKind::U8 => PrimitiveValue::U8(num(token, kind, start)?),
            PrimitiveKind::U16 => PrimitiveValue::U16(num(token, kind, start)?),
            PrimitiveKind::U32 => PrimitiveValue::U32(num(token, kind, start)?),
            PrimitiveKind::U64 => PrimitiveValue::U64(num(token, kind, start)?),
            PrimitiveKind::F32 => PrimitiveValue::F32(num(token, kind, start)?),
            PrimitiveKind::F64 => PrimitiveValue::F64(num(token, kind, start)?),
            PrimitiveKind::String => PrimitiveValue::String(token.to_string()),
            PrimitiveKind::U16String | PrimitiveKind::U32String => {
                PrimitiveValue::default_for(kind)
            }
        };
        Ok(value)
    }
}

impl Deserializer for TextReader<'_> {
    fn seek_object(&mut self) -> MarshalResult<String> {
        self.skip_space_and_comma();
        let end = scan::next_delimiter(self.bytes(), self.pos).unwrap_or(self.text.len());
        if end == self.pos {
            return Err(self.malformed(format!(
                "could not seek object type name, found {}",
                self.found()
            )));
        }
        let name = self.text[self.pos..end].to_string();
        self.pos = end;
        Ok(name)
    }

    fn peek_object(&mut self) -> MarshalResult<String> {
        let saved = self.pos;
        let result = self.seek_object();
        self.pos = saved;
        result
    }

    fn begin_object(&mut self, type_name: &str) -> MarshalResult<()> {
        self.check_depth()?;
        let frame = if self.try_consume(b'(') {
            ObjectFrame::HasFields
        } else {
            ObjectFrame::NoFields
        };
        self.scopes.push(Scope::Object(frame));
        log::trace!(
            "[TextReader::begin_object] {} {:?} (depth {})",
            type_name,
            frame,
            self.scopes.len()
        );
        Ok(())
    }

    fn end_object(&mut self) -> MarshalResult<()> {
        let frame = match self.scopes.last() {
            Some(Scope::Object(frame)) => *frame,
            Some(Scope::Sequence) => {
                return Err(MarshalError::misuse(
                    "end_object() while a sequence is the innermost open scope",
                ))
            }
            None => return Err(MarshalError::misuse("end_object() without begin_object()")),
        };
        if frame == ObjectFrame::HasFields {
            self.consume(b')')?;
        }
        self.scopes.pop();
        if self.scopes.is_empty() {
            self.skip_space_and_comma();
            if self.pos != self.text.len() {
                return Err(self.malformed(format!(
                    "expected end of string, found {}",
                    self.found()
                )));
            }
        }
        Ok(())
    }

    fn begin_sequence(&mut self) -> MarshalResult<usize> {
        self.integrity_check()?;
        self.check_depth()?;
        self.consume(b'{')?;
        let count = scan::count_elements(self.bytes(), self.pos)
            .ok_or_else(|| self.malformed("unterminated sequence, missing '}'"))?;
        self.scopes.push(Scope::Sequence);
        Ok(count)
    }

    fn end_sequence(&mut self) -> MarshalResult<()> {
        match self.scopes.last() {
            Some(Scope::Sequence) => {}
            Some(Scope::Object(_)) => {
                return Err(MarshalError::misuse(
                    "end_sequence() while an object is the innermost open scope",
                ))
            }
            None => return Err(MarshalError::misuse("end_sequence() without begin_sequence()")),
        }
        self.consume(b'}')?;
        self.scopes.pop();
        Ok(())
    }

    fn read_value(&mut self, kind: PrimitiveKind) -> MarshalResult<PrimitiveValue> {
        if kind.is_wide_string() {
            return match self.wide_strings {
                WideStringPolicy::Reject => Err(MarshalError::Unsupported(format!(
                    "{} values have no text form",
                    kind
                ))),
                // the writer emitted nothing, so there is nothing to consume
                WideStringPolicy::Omit if self.scopes.is_empty() => {
                    Err(MarshalError::misuse("missing begin_object()"))
                }
                WideStringPolicy::Omit => Ok(PrimitiveValue::default_for(kind)),
            };
        }
        self.integrity_check()?;
        self.skip_space_and_comma();
        if kind == PrimitiveKind::String && self.peek() == Some(b'"') {
            return self.read_quoted().map(PrimitiveValue::String);
        }
        let start = self.pos;
        let token = self.read_token()?;
        self.parse_token(kind, token, start)
    }

    fn read_tuple(&mut self, kinds: &[PrimitiveKind]) -> MarshalResult<Vec<PrimitiveValue>> {
        self.integrity_check()?;
        self.consume(b'{')?;
        let values = kinds
            .iter()
            .map(|kind| self.read_value(*kind))
            .collect::<MarshalResult<Vec<_>>>()?;
        self.consume(b'}')?;
        Ok(values)
    }

    fn read_raw(&mut self, len: usize) -> MarshalResult<Vec<u8>> {
        Err(MarshalError::Unsupported(format!(
            "raw read of {} bytes from text input",
            len
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ser::Serializer;
    use crate::text::TextWriter;

    #[test]
    fn test_void_object() {
        let mut r = TextReader::new("Ping");
        assert_eq!(r.seek_object().unwrap(), "Ping");
        r.begin_object("Ping").unwrap();
        r.end_object().unwrap();
        assert!(r.is_exhausted());
    }

    #[test]
    fn test_values_inside_void_object_are_rejected() {
        let mut r = TextReader::new("Ping");
        r.seek_object().unwrap();
        r.begin_object("Ping").unwrap();
        assert!(matches!(
            r.read_value(PrimitiveKind::I32),
            Err(MarshalError::MalformedInput { .. })
        ));
    }

    #[test]
    fn test_peek_restores_position() {
        let mut r = TextReader::new("  Point ( 1, 2 )");
        assert_eq!(r.peek_object().unwrap(), "Point");
        assert_eq!(r.position(), 0);
        assert_eq!(r.peek_object().unwrap(), "Point");
        assert_eq!(r.seek_object().unwrap(), "Point");
        assert_eq!(r.position(), 7);
    }

    #[test]
    fn test_reads_fields_in_order() {
        let mut r = TextReader::new(r#"Msg ( -7, "a \"b\"", bare, 2.5, true )"#);
        r.seek_object().unwrap();
        r.begin_object("Msg").unwrap();
        assert_eq!(r.read_value(PrimitiveKind::I16).unwrap(), PrimitiveValue::I16(-7));
        assert_eq!(
            r.read_value(PrimitiveKind::String).unwrap(),
            PrimitiveValue::from(r#"a "b""#)
        );
        assert_eq!(r.read_value(PrimitiveKind::String).unwrap(), "bare".into());
        assert_eq!(r.read_value(PrimitiveKind::F32).unwrap(), PrimitiveValue::F32(2.5));
        assert_eq!(r.read_value(PrimitiveKind::Bool).unwrap(), PrimitiveValue::Bool(true));
        r.end_object().unwrap();
    }

    #[test]
    fn test_sequence_count_and_empty_sequence() {
        let mut r = TextReader::new("Bag ( { 1, 2, 3 }, { } )");
        r.seek_object().unwrap();
        r.begin_object("Bag").unwrap();
        assert_eq!(r.begin_sequence().unwrap(), 3);
        for expected in 1..=3u32 {
            assert_eq!(r.read_value(PrimitiveKind::U32).unwrap().as_u32(), Some(expected));
        }
        r.end_sequence().unwrap();
        assert_eq!(r.begin_sequence().unwrap(), 0);
        r.end_sequence().unwrap();
        r.end_object().unwrap();
    }

    #[test]
    fn test_tuple() {
        let mut r = TextReader::new(r#"T ( { 1, "x", 0 } )"#);
        r.seek_object().unwrap();
        r.begin_object("T").unwrap();
        let values = r
            .read_tuple(&[PrimitiveKind::U64, PrimitiveKind::String, PrimitiveKind::Bool])
            .unwrap();
        assert_eq!(
            values,
            vec![
                PrimitiveValue::U64(1),
                PrimitiveValue::from("x"),
                PrimitiveValue::Bool(false)
            ]
        );
        r.end_object().unwrap();
    }

    #[test]
    fn test_missing_close_paren() {
        let mut r = TextReader::new("Foo ( 1, 2");
        r.seek_object().unwrap();
        r.begin_object("Foo").unwrap();
        r.read_value(PrimitiveKind::I32).unwrap();
        let err = r.read_value(PrimitiveKind::I32).unwrap_err();
        assert!(matches!(err, MarshalError::MalformedInput { offset: 9, .. }));
    }

    #[test]
    fn test_trailing_garbage() {
        let mut r = TextReader::new("Foo ( 1 ) junk");
        r.seek_object().unwrap();
        r.begin_object("Foo").unwrap();
        r.read_value(PrimitiveKind::I32).unwrap();
        let err = r.end_object().unwrap_err();
        assert_eq!(
            err,
            MarshalError::MalformedInput {
                offset: 10,
                reason: "expected end of string, found 'j'".into()
            }
        );
    }

    #[test]
    fn test_scope_misuse() {
        let mut r = TextReader::new("{ 1 }");
        assert!(matches!(r.end_object(), Err(MarshalError::ProtocolMisuse(_))));
        assert!(matches!(r.end_sequence(), Err(MarshalError::ProtocolMisuse(_))));
        assert!(matches!(r.begin_sequence(), Err(MarshalError::ProtocolMisuse(_))));
        assert!(matches!(
            r.read_value(PrimitiveKind::I8),
            Err(MarshalError::ProtocolMisuse(_))
        ));
    }

    #[test]
    fn test_bad_literal_reports_token_offset() {
        let mut r = TextReader::new("N ( 300 )");
        r.seek_object().unwrap();
        r.begin_object("N").unwrap();
        let err = r.read_value(PrimitiveKind::U8).unwrap_err();
        assert_eq!(
            err,
            MarshalError::MalformedInput {
                offset: 4,
                reason: "invalid uint8 literal '300'".into()
            }
        );
    }

    #[test]
    fn test_depth_limit() {
        let config = MarshalConfig {
            max_depth: 2,
            ..MarshalConfig::default()
        };
        let mut r = TextReader::with_config("A ( B ( C ) )", &config);
        r.seek_object().unwrap();
        r.begin_object("A").unwrap();
        r.seek_object().unwrap();
        r.begin_object("B").unwrap();
        r.seek_object().unwrap();
        assert!(matches!(
            r.begin_object("C"),
            Err(MarshalError::MalformedInput { .. })
        ));
    }

    #[test]
    fn test_multibyte_text_is_sliced_on_char_boundaries() {
        let mut r = TextReader::new("Grüße ( \"ünï\", ß )");
        assert_eq!(r.seek_object().unwrap(), "Grüße");
        r.begin_object("Grüße").unwrap();
        assert_eq!(r.read_value(PrimitiveKind::String).unwrap(), "ünï".into());
        assert_eq!(r.read_value(PrimitiveKind::String).unwrap(), "ß".into());
        r.end_object().unwrap();
    }

    #[test]
    fn test_close_must_match_innermost_scope() {
        let mut r = TextReader::new("A ( { B ( 1 ) } )");
        r.expect_object("A").unwrap();
        assert_eq!(r.begin_sequence().unwrap(), 1);
        r.expect_object("B").unwrap();
        r.read_value(PrimitiveKind::U8).unwrap();
        let err = r.end_sequence().unwrap_err();
        assert!(matches!(err, MarshalError::ProtocolMisuse(_)), "{:?}", err);
        r.end_object().unwrap();

        let err = r.end_object().unwrap_err();
        assert!(matches!(err, MarshalError::ProtocolMisuse(_)), "{:?}", err);
        r.end_sequence().unwrap();
        r.end_object().unwrap();
        assert_eq!(r.open_objects(), 0);
    }

    #[test]
    fn test_stray_commas_in_sequence() {
        for text in [r#"N ( { "a", } )"#, r#"N ( { , "a" } )"#] {
            let mut r = TextReader::new(text);
            r.expect_object("N").unwrap();
            assert_eq!(r.begin_sequence().unwrap(), 1, "{}", text);
            assert_eq!(r.read_value(PrimitiveKind::String).unwrap(), "a".into());
            r.end_sequence().unwrap();
            r.end_object().unwrap();
        }
    }

    #[test]
    fn test_space_separated_sequence() {
        let mut r = TextReader::new("N ( { 1 2 3 } )");
        r.expect_object("N").unwrap();
        assert_eq!(r.begin_sequence().unwrap(), 3);
        for expected in 1..=3i32 {
            assert_eq!(r.read_value(PrimitiveKind::I32).unwrap(), PrimitiveValue::I32(expected));
        }
        r.end_sequence().unwrap();
        r.end_object().unwrap();
    }

    fn omit_config() -> MarshalConfig {
        MarshalConfig {
            wide_strings: WideStringPolicy::Omit,
            ..MarshalConfig::default()
        }
    }

    #[test]
    fn test_wide_string_rejected_by_default() {
        let mut r = TextReader::new("W ( 1 )");
        r.expect_object("W").unwrap();
        for kind in [PrimitiveKind::U16String, PrimitiveKind::U32String] {
            assert!(matches!(r.read_value(kind), Err(MarshalError::Unsupported(_))));
        }
        assert_eq!(r.position(), 3);
    }

    #[test]
    fn test_omitted_wide_string_keeps_fields_aligned() {
        let config = omit_config();
        let mut out = String::new();
        {
            let mut w = TextWriter::with_config(&mut out, &config);
            w.begin_object("W").unwrap();
            w.write_value(&PrimitiveValue::U16String(vec![0x68, 0x69])).unwrap();
            w.write_value(&PrimitiveValue::I8(-4)).unwrap();
            w.end_object().unwrap();
        }
        assert_eq!(out, "W ( -4 )");

        let mut r = TextReader::with_config(&out, &config);
        r.expect_object("W").unwrap();
        assert_eq!(
            r.read_value(PrimitiveKind::U16String).unwrap(),
            PrimitiveValue::U16String(Vec::new())
        );
        assert_eq!(r.read_value(PrimitiveKind::I8).unwrap(), PrimitiveValue::I8(-4));
        r.end_object().unwrap();
    }

    #[test]
    fn test_object_of_only_wide_strings_renders_void() {
        let config = omit_config();
        let mut out = String::new();
        {
            let mut w = TextWriter::with_config(&mut out, &config);
            w.begin_object("Wide").unwrap();
            w.write_value(&PrimitiveValue::U32String(vec![0x1F600])).unwrap();
            w.end_object().unwrap();
        }
        assert_eq!(out, "Wide");

        let mut r = TextReader::with_config(&out, &config);
        r.expect_object("Wide").unwrap();
        assert_eq!(
            r.read_value(PrimitiveKind::U32String).unwrap(),
            PrimitiveValue::U32String(Vec::new())
        );
        r.end_object().unwrap();
        assert!(r.is_exhausted());
    }
}
