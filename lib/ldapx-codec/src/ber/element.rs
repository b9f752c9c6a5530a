/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ldapx-OSS developers.
 */

use thiserror::Error;

use super::{BerLength, BerLengthParseError};

#[derive(Debug, PartialEq, Eq, Error)]
pub enum BerElementParseError {
    #[error("need {0} bytes more data")]
    NeedMoreData(usize),
    #[error("too large length")]
    TooLargeLength,
    #[error("indefinite length")]
    IndefiniteLength,
}

impl From<BerLengthParseError> for BerElementParseError {
    fn from(value: BerLengthParseError) -> Self {
        match value {
            BerLengthParseError::NeedMoreData(n) => BerElementParseError::NeedMoreData(n),
            BerLengthParseError::TooLargeValue => BerElementParseError::TooLargeLength,
        }
    }
}

/// A single tag-length-value element borrowed from the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BerElement<'a> {
    tag: u8,
    value: &'a [u8],
    encoded_len: usize,
}

impl<'a> BerElement<'a> {
    pub fn parse(data: &'a [u8]) -> Result<Self, BerElementParseError> {
        if data.is_empty() {
            return Err(BerElementParseError::NeedMoreData(1));
        }
        let tag = data[0];

        let length = BerLength::parse(&data[1..])?;
        if length.indefinite() {
            return Err(BerElementParseError::IndefiniteLength);
        }
        let Ok(value_len) = usize::try_from(length.value()) else {
            return Err(BerElementParseError::TooLargeLength);
        };

        let offset = 1 + length.encoded_len();
        let left = &data[offset..];
        if left.len() < value_len {
            return Err(BerElementParseError::NeedMoreData(value_len - left.len()));
        }
        Ok(BerElement {
            tag,
            value: &left[..value_len],
            encoded_len: offset + value_len,
        })
    }

    /// Parse the next element only if it carries the expected tag.
    ///
    /// An empty buffer or a mismatched tag both yield `None`, so optional
    /// positional fields can be probed without consuming data.
    pub fn parse_expected(data: &'a [u8], tag: u8) -> Result<Option<Self>, BerElementParseError> {
        if data.is_empty() {
            return Ok(None);
        }
        if data[0] != tag {
            return Ok(None);
        }
        Self::parse(data).map(Some)
    }

    #[inline]
    pub fn tag(&self) -> u8 {
        self.tag
    }

    #[inline]
    pub fn value(&self) -> &'a [u8] {
        self.value
    }

    #[inline]
    pub fn encoded_len(&self) -> usize {
        self.encoded_len
    }
}
