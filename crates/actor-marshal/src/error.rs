// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Marshaling error types.

use thiserror::Error;

/// Errors raised by codecs, descriptors and the marshal facade.
///
/// None of these are retried inside the crate. A reader that returned an
/// error is left at an unspecified position and must be discarded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarshalError {
    /// Text input does not follow the grammar.
    #[error("malformed string at offset {offset}: {reason}")]
    MalformedInput { offset: usize, reason: String },

    /// No descriptor is registered under this type name.
    #[error("type '{0}' is not registered")]
    UnregisteredType(String),

    /// Scope bookkeeping violated by the caller (descriptor bug, not bad input).
    #[error("protocol misuse: {0}")]
    ProtocolMisuse(String),

    /// A value, or a parsed type name, does not match what was expected.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// Operation the codec cannot express.
    #[error("unsupported: {0}")]
    Unsupported(String),

    /// Binary input ended before the requested bytes.
    #[error("read failed at offset {offset}: need {need} bytes, have {have}")]
    Truncated {
        offset: usize,
        need: usize,
        have: usize,
    },
}

impl MarshalError {
    pub(crate) fn malformed(offset: usize, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            offset,
            reason: reason.into(),
        }
    }

    pub(crate) fn misuse(reason: impl Into<String>) -> Self {
        Self::ProtocolMisuse(reason.into())
    }

    pub(crate) fn mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// True for errors caused by the input text or bytes rather than by the caller.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::MalformedInput { .. } | Self::Truncated { .. })
    }
}

pub type MarshalResult<T> = core::result::Result<T, MarshalError>;
