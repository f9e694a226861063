// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Rejection of malformed text and registry misses.

use std::sync::Arc;

use actor_marshal::{
    from_text, parse, read_scalar, write_scalar, Deserializer, HashMapTypeRegistry, Marshal,
    MarshalConfig, MarshalError, MarshalResult, Marshaller, Serializer, TextReader,
    WideStringPolicy,
};

#[derive(Debug, PartialEq)]
struct Foo {
    a: i32,
    b: i32,
}

impl Marshal for Foo {
    const TYPE_NAME: &'static str = "Foo";

    fn write_fields(&self, sink: &mut dyn Serializer) -> MarshalResult<()> {
        write_scalar(sink, &self.a)?;
        write_scalar(sink, &self.b)
    }

    fn read_fields(source: &mut dyn Deserializer) -> MarshalResult<Self> {
        Ok(Self {
            a: read_scalar(source)?,
            b: read_scalar(source)?,
        })
    }
}

#[derive(Debug, PartialEq)]
struct Label {
    text: String,
}

impl Marshal for Label {
    const TYPE_NAME: &'static str = "Label";

    fn write_fields(&self, sink: &mut dyn Serializer) -> MarshalResult<()> {
        write_scalar(sink, &self.text)
    }

    fn read_fields(source: &mut dyn Deserializer) -> MarshalResult<Self> {
        Ok(Self {
            text: read_scalar(source)?,
        })
    }
}

fn registry() -> HashMapTypeRegistry {
    let mut registry = HashMapTypeRegistry::new();
    registry.register_type::<Foo>().register_type::<Label>();
    registry
}

fn malformed(result: MarshalResult<impl std::fmt::Debug>) -> (usize, String) {
    match result {
        Err(MarshalError::MalformedInput { offset, reason }) => (offset, reason),
        other => panic!("expected MalformedInput, got {:?}", other),
    }
}

#[test]
fn test_missing_close_paren() {
    let (offset, _) = malformed(from_text::<Foo>("Foo ( 1, 2"));
    assert_eq!(offset, 9);
    assert!(parse("Foo ( 1, 2", &registry()).is_err());
}

#[test]
fn test_missing_close_paren_after_last_field() {
    let (offset, reason) = malformed(from_text::<Foo>("Foo ( 1, 2 "));
    assert_eq!(offset, 11);
    assert_eq!(reason, "expected ')' found end of input");
}

#[test]
fn test_trailing_garbage() {
    let (offset, reason) = malformed(from_text::<Foo>("Foo ( 1, 2 ) Bar"));
    assert_eq!(offset, 13);
    assert_eq!(reason, "expected end of string, found 'B'");
}

#[test]
fn test_missing_field() {
    let (_, reason) = malformed(from_text::<Foo>("Foo ( 1 )"));
    assert!(reason.contains("invalid int32 literal"), "{}", reason);
}

#[test]
fn test_extra_field() {
    let (offset, _) = malformed(from_text::<Foo>("Foo ( 1, 2, 3 )"));
    assert_eq!(offset, 12);
}

#[test]
fn test_void_form_for_object_with_fields() {
    let (offset, _) = malformed(from_text::<Foo>("Foo"));
    assert_eq!(offset, 3);
}

#[test]
fn test_unterminated_string() {
    let (offset, reason) = malformed(from_text::<Label>(r#"Label ( "abc )"#));
    assert_eq!(offset, 8);
    assert_eq!(reason, "unterminated quoted value");
}

#[test]
fn test_empty_input() {
    let (offset, _) = malformed(parse("", &registry()));
    assert_eq!(offset, 0);
    let (offset, _) = malformed(parse("   ", &registry()));
    assert_eq!(offset, 3);
}

#[test]
fn test_unregistered_type() {
    let err = parse("Bar ( 1 )", &registry()).unwrap_err();
    assert_eq!(err, MarshalError::UnregisteredType("Bar".into()));
    assert_eq!(err.to_string(), "type 'Bar' is not registered");
    assert!(!err.is_input_error());
}

#[test]
fn test_peek_is_idempotent() {
    let mut reader = TextReader::new("Foo ( 1, 2 )");
    assert_eq!(reader.peek_object().unwrap(), "Foo");
    assert_eq!(reader.peek_object().unwrap(), "Foo");
    assert_eq!(reader.position(), 0);
    assert_eq!(reader.seek_object().unwrap(), "Foo");
}

#[test]
fn test_name_mismatch_is_not_malformed() {
    let err = from_text::<Foo>("Label ( \"x\" )").unwrap_err();
    assert!(matches!(err, MarshalError::TypeMismatch { .. }));
}

#[test]
fn test_depth_limit_from_config() {
    let config = MarshalConfig {
        max_depth: 1,
        ..MarshalConfig::default()
    };
    let marshaller = Marshaller::with_config(config, Arc::new(registry()));
    assert!(marshaller.parse("Foo ( 1, 2 )").is_ok());

    let mut reader = TextReader::with_config("Foo ( Foo ( 1, 2 ), 3 )", marshaller.config());
    reader.expect_object("Foo").unwrap();
    let (offset, reason) = malformed(reader.expect_object("Foo"));
    assert_eq!(offset, 9);
    assert_eq!(reason, "nesting exceeds limit of 1");
}

#[test]
fn test_wide_strings_have_no_text_form_by_default() {
    use actor_marshal::{PrimitiveValue, TextWriter};

    let mut out = String::new();
    let mut writer = TextWriter::new(&mut out);
    writer.begin_object("W").unwrap();
    assert!(matches!(
        writer.write_value(&PrimitiveValue::U16String(vec![0x41])),
        Err(MarshalError::Unsupported(_))
    ));

    let config = MarshalConfig {
        wide_strings: WideStringPolicy::Omit,
        ..MarshalConfig::default()
    };
    let mut out = String::new();
    let mut writer = TextWriter::with_config(&mut out, &config);
    writer.begin_object("W").unwrap();
    writer.write_value(&PrimitiveValue::U32String(vec![0x41])).unwrap();
    writer.write_value(&PrimitiveValue::U8(1)).unwrap();
    writer.end_object().unwrap();
    assert_eq!(out, "W ( 1 )");
}
