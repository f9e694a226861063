// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Pure scanning helpers over the text grammar.
//!
//! Every helper takes the input bytes and a start index and returns an index
//! (or `None` when the searched-for byte never appears). All structural
//! characters are ASCII, so returned indices are always valid `str` char
//! boundaries.

use std::borrow::Cow;

/// Space and comma are interchangeable separators.
pub fn is_separator(b: u8) -> bool {
    b == b' ' || b == b','
}

/// Bytes terminating a type name.
fn is_delimiter(b: u8) -> bool {
    matches!(b, b'(' | b')' | b'{' | b'}' | b' ' | b',')
}

/// Bytes terminating a bare value token.
fn is_value_delimiter(b: u8) -> bool {
    matches!(b, b')' | b'}' | b' ' | b',')
}

/// First index at or after `start` that is not a separator.
pub fn skip_separators(text: &[u8], start: usize) -> usize {
    let mut pos = start;
    while pos < text.len() && is_separator(text[pos]) {
        pos += 1;
    }
    pos
}

/// Next `( ) { }`, space or comma at or after `start`.
pub fn next_delimiter(text: &[u8], start: usize) -> Option<usize> {
    find_from(text, start, is_delimiter)
}

/// Next `) }`, space or comma at or after `start`.
pub fn value_end(text: &[u8], start: usize) -> Option<usize> {
    find_from(text, start, is_value_delimiter)
}

/// Index of the unescaped `"` closing a quoted string whose body starts at `start`.
pub fn closing_quote(text: &[u8], start: usize) -> Option<usize> {
    let mut pos = start;
    while pos < text.len() {
        match text[pos] {
            b'\\' => pos += 2,
            b'"' => return Some(pos),
            _ => pos += 1,
        }
    }
    None
}

/// Count the elements of a brace-delimited list whose body starts at `start`.
///
/// An element starts at the first non-separator byte at the list's own
/// nesting level after a separator, the opening `{`, a closed quote or a
/// closed nested group. Separators are interchangeable and may repeat, so
/// stray commas add nothing and space-separated elements still count. A `(`
/// continues the type name before it. Returns `None` when the closing `}` is
/// missing.
pub fn count_elements(text: &[u8], start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut count = 0usize;
    let mut boundary = true;
    let mut pos = start;
    while pos < text.len() {
        let b = text[pos];
        if depth == 0 {
            match b {
                b'}' => return Some(count),
                b'(' | b')' => {}
                b if is_separator(b) => boundary = true,
                _ if boundary => {
                    count += 1;
                    boundary = false;
                }
                _ => {}
            }
        }
        match b {
            b'"' => {
                pos = closing_quote(text, pos + 1)?;
                boundary |= depth == 0;
            }
            b'(' | b'{' => depth += 1,
            b')' | b'}' if depth > 0 => {
                depth -= 1;
                boundary |= depth == 0;
            }
            _ => {}
        }
        pos += 1;
    }
    None
}

/// Quote `s`, escaping `"` and `\`.
pub fn quote(s: &str, out: &mut String) {
    out.reserve(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
}

/// Undo [`quote`]'s escaping. Unknown escapes are kept verbatim.
pub fn unescape(raw: &str) -> Cow<'_, str> {
    if !raw.contains('\\') {
        return Cow::Borrowed(raw);
    }
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some(next @ ('"' | '\\')) => out.push(next),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    Cow::Owned(out)
}

fn find_from(text: &[u8], start: usize, pred: impl Fn(u8) -> bool) -> Option<usize> {
    text.get(start..)?
        .iter()
        .position(|b| pred(*b))
        .map(|offset| start + offset)
}
