// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Human-readable text codec.
//!
//! # Grammar
//!
//! ```text
//! object      := TYPENAME [ "(" field-list ")" ]
//! field-list  := field ( "," field )*
//! field       := value | object | sequence
//! sequence    := "{" value-list? "}"
//! tuple       := "{" value-list? "}"
//! value-list  := value ( "," value )*
//! value       := quoted-string | bare-token
//! ```
//!
//! The writer always emits `TYPE ( a, b )`, `{ a, b }` and `{ }`; an object
//! without fields is its bare type name. Strings are double-quoted with `"`
//! and `\` backslash-escaped. Numbers are decimal, booleans `true`/`false`.
//!
//! Escaping `\` deviates from quote-only escaping. The writer renders `C:\tmp`
//! as `"C:\\tmp"`, which a peer that escapes only `"` reads back with two
//! backslashes. In the other direction the reader keeps unknown escapes
//! verbatim, so quote-only text only differs where it contains `\\` or `\"`
//! meant literally.
//!
//! Spaces and commas are interchangeable separators and may repeat; a
//! sequence's length is the number of elements between its braces.

pub(crate) mod scan;

mod reader;
mod writer;

pub use reader::TextReader;
pub use writer::TextWriter;
