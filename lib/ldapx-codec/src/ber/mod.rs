/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ldapx-OSS developers.
 */

mod length;
pub use length::{BerLength, BerLengthParseError};

mod element;
pub use element::{BerElement, BerElementParseError};

mod encode;
pub use encode::encode_tagged;

/// Universal constructed SEQUENCE identifier octet
pub const TAG_SEQUENCE: u8 = 0x30;
