// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Text serializer.

use super::scan;
use crate::config::{MarshalConfig, WideStringPolicy};
use crate::error::{MarshalError, MarshalResult};
use crate::primitive::PrimitiveValue;
use crate::ser::Serializer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    Object,
    Sequence,
}

/// Text [`Serializer`] appending `TYPE ( field, ... )` syntax to `out`.
pub struct TextWriter<'a> {
    out: &'a mut String,
    /// Open scopes, innermost last.
    scopes: Vec<Scope>,
    /// A value or closing bracket was just emitted; the next token needs `", "`.
    after_value: bool,
    /// A type name was just emitted; the first field needs `" ( "`.
    object_just_opened: bool,
    wide_strings: WideStringPolicy,
}

impl<'a> TextWriter<'a> {
    pub fn new(out: &'a mut String) -> Self {
        Self::with_config(out, &MarshalConfig::default())
    }

    pub fn with_config(out: &'a mut String, config: &MarshalConfig) -> Self {
        Self {
            out,
            scopes: Vec::new(),
            after_value: false,
            object_just_opened: false,
            wide_strings: config.wide_strings,
        }
    }

    /// Pop `expected` if it is the innermost open scope.
    fn close_scope(&mut self, expected: Scope) -> MarshalResult<()> {
        match self.scopes.last() {
            Some(scope) if *scope == expected => {
                self.scopes.pop();
                Ok(())
            }
            Some(scope) => Err(MarshalError::misuse(format!(
                "closing {:?} while {:?} is the innermost open scope",
                expected, scope
            ))),
            None => Err(MarshalError::misuse(format!(
                "closing {:?} with no open scope",
                expected
            ))),
        }
    }

    /// Emit the separator owed by the previous token, if any.
    fn clear(&mut self) {
        if self.after_value {
            self.out.push_str(", ");
            self.after_value = false;
        } else if self.object_just_opened {
            self.out.push_str(" ( ");
            self.object_just_opened = false;
        }
    }

    fn close_bracket(&mut self, bracket: char) {
        if self.after_value {
            self.out.push(' ');
        }
        self.out.push(bracket);
        self.after_value = true;
    }

    fn render_primitive(&mut self, value: &PrimitiveValue) {
        match value {
            PrimitiveValue::Bool(v) => self.out.push_str(if *v { "true" } else { "false" }),
            PrimitiveValue::I8(v) => self.out.push_str(&v.to_string()),
            PrimitiveValue::I16(v) => self.out.push_str(&v.to_string()),
            PrimitiveValue::I32(v) => self.out.push_str(&v.to_string()),
            PrimitiveValue::I64(v) => self.out.push_str(&v.to_string()),
            PrimitiveValue::U8(v) => self.out.push_str(&v.to_string()),
            PrimitiveValue::U16(v) => self.out.push_str(&v.to_string()),
            PrimitiveValue::U32(v) => self.out.push_str(&v.to_string()),
            PrimitiveValue::U64(v) => self.out.push_str(&v.to_string()),
            PrimitiveValue::F32(v) => self.out.push_str(&v.to_string()),
            PrimitiveValue::F64(v) => self.out.push_str(&v.to_string()),
            PrimitiveValue::String(s) => scan::quote(s, self.out),
            // filtered out by write_value
            PrimitiveValue::U16String(_) | PrimitiveValue::U32String(_) => {}
        }
    }
}

impl Serializer for TextWriter<'_> {
    fn begin_object(&mut self, type_name: &str) -> MarshalResult<()> {
        self.clear();
        self.scopes.push(Scope::Object);
        self.out.push_str(type_name);
        self.object_just_opened = true;
        log::trace!(
            "[TextWriter::begin_object] {} (depth {})",
            type_name,
            self.scopes.len()
        );
        Ok(())
    }

    fn end_object(&mut self) -> MarshalResult<()> {
        self.close_scope(Scope::Object)?;
        if self.object_just_opened {
            // no fields: a void object renders as its bare name
            self.object_just_opened = false;
            self.after_value = true;
        } else {
            self.close_bracket(')');
        }
        Ok(())
    }

    fn begin_sequence(&mut self, _count: usize) -> MarshalResult<()> {
        self.clear();
        self.scopes.push(Scope::Sequence);
        self.out.push_str("{ ");
        Ok(())
    }

    fn end_sequence(&mut self) -> MarshalResult<()> {
        self.close_scope(Scope::Sequence)?;
        self.close_bracket('}');
        Ok(())
    }

    fn write_value(&mut self, value: &PrimitiveValue) -> MarshalResult<()> {
        if value.kind().is_wide_string() {
            return match self.wide_strings {
                WideStringPolicy::Reject => Err(MarshalError::Unsupported(format!(
                    "{} values have no text form",
                    value.kind()
                ))),
                WideStringPolicy::Omit => {
                    log::warn!(
                        "[TextWriter::write_value] omitting {} value from text output",
                        value.kind()
                    );
                    Ok(())
                }
            };
        }
        self.clear();
        self.render_primitive(value);
        self.after_value = true;
        Ok(())
    }

    fn write_tuple(&mut self, values: &[PrimitiveValue]) -> MarshalResult<()> {
        self.begin_sequence(values.len())?;
        for value in values {
            self.write_value(value)?;
        }
        self.end_sequence()
    }

    fn write_raw(&mut self, bytes: &[u8]) -> MarshalResult<()> {
        Err(MarshalError::Unsupported(format!(
            "raw write of {} bytes to text output",
            bytes.len()
        )))
    }
}
