/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ldapx-OSS developers.
 */

use thiserror::Error;

use ldapx_codec::ber::BerElementParseError;

/// Caller contract violations on request and result value objects.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("value object is unmodifiable")]
    UnsupportedOperation,
    #[error("empty value for required field {0}")]
    EmptyRequiredField(&'static str),
}

/// Malformed extended operation payloads.
///
/// Never retried at this layer; the caller decides whether to fail the
/// operation or fall back to generic handling.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("malformed element: {0}")]
    MalformedElement(#[from] BerElementParseError),
    #[error("expected a sequence, found tag 0x{0:02x}")]
    NotASequence(u8),
    #[error("unexpected tag 0x{0:02x}")]
    UnexpectedTag(u8),
    #[error("trailing data after value sequence")]
    TrailingData,
}
