/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ldapx-OSS developers.
 */

use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum BerLengthParseError {
    #[error("need {0} bytes more data")]
    NeedMoreData(usize),
    #[error("too large value")]
    TooLargeValue,
}

#[derive(Debug, Clone, Copy)]
pub struct BerLength {
    value: u64,
    indefinite: bool,
    encoded_len: usize,
}

impl BerLength {
    /// Try to parse a BER length value from the buffer
    pub fn parse(data: &[u8]) -> Result<Self, BerLengthParseError> {
        let Some(byte0) = data.first() else {
            return Err(BerLengthParseError::NeedMoreData(1));
        };
        if *byte0 < 0x80 {
            return Ok(BerLength {
                value: u64::from(*byte0),
                indefinite: false,
                encoded_len: 1,
            });
        }
        if *byte0 == 0x80 {
            return Ok(BerLength {
                value: 0,
                indefinite: true,
                encoded_len: 1,
            });
        }

        let octets = (byte0 & 0x7F) as usize;
        if octets > 8 {
            return Err(BerLengthParseError::TooLargeValue);
        }
        let left = &data[1..];
        if left.len() < octets {
            return Err(BerLengthParseError::NeedMoreData(octets - left.len()));
        }
        let mut value = 0u64;
        for byte in &left[..octets] {
            value = (value << 8) | u64::from(*byte);
        }
        Ok(BerLength {
            value,
            indefinite: false,
            encoded_len: 1 + octets,
        })
    }

    /// Write the minimal definite length form for the given value
    pub fn encode(value: usize, buf: &mut Vec<u8>) {
        if value < 0x80 {
            buf.push(value as u8);
            return;
        }
        let bytes = value.to_be_bytes();
        let skip = bytes.iter().take_while(|b| **b == 0).count();
        buf.push(0x80 | (bytes.len() - skip) as u8);
        buf.extend_from_slice(&bytes[skip..]);
    }

    #[inline]
    pub fn indefinite(&self) -> bool {
        self.indefinite
    }

    #[inline]
    pub fn encoded_len(&self) -> usize {
        self.encoded_len
    }

    #[inline]
    pub fn value(&self) -> u64 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        let e = BerLength::parse(b"").unwrap_err();
        assert_eq!(e, BerLengthParseError::NeedMoreData(1));

        let v = BerLength::parse(&[0x02]).unwrap();
        assert_eq!(v.value(), 2);
        assert_eq!(v.encoded_len(), 1);
        assert!(!v.indefinite());

        let v = BerLength::parse(&[0x7F]).unwrap();
        assert_eq!(v.value(), 0x7F);
        assert_eq!(v.encoded_len(), 1);

        let v = BerLength::parse(&[0x80]).unwrap();
        assert!(v.indefinite());
        assert_eq!(v.encoded_len(), 1);

        let v = BerLength::parse(&[0x81, 0x80]).unwrap();
        assert_eq!(v.value(), 0x80);
        assert_eq!(v.encoded_len(), 2);

        let v = BerLength::parse(&[0x82, 0x01, 0x2C]).unwrap();
        assert_eq!(v.value(), 300);
        assert_eq!(v.encoded_len(), 3);

        let e = BerLength::parse(&[0x82, 0x01]).unwrap_err();
        assert_eq!(e, BerLengthParseError::NeedMoreData(1));

        let e = BerLength::parse(&[0x89, 0, 0, 0, 0, 0, 0, 0, 0, 1]).unwrap_err();
        assert_eq!(e, BerLengthParseError::TooLargeValue);
    }

    #[test]
    fn encode() {
        let mut buf = Vec::new();
        BerLength::encode(0, &mut buf);
        assert_eq!(buf, [0x00]);

        buf.clear();
        BerLength::encode(0x7F, &mut buf);
        assert_eq!(buf, [0x7F]);

        buf.clear();
        BerLength::encode(0x80, &mut buf);
        assert_eq!(buf, [0x81, 0x80]);

        buf.clear();
        BerLength::encode(300, &mut buf);
        assert_eq!(buf, [0x82, 0x01, 0x2C]);

        let parsed = BerLength::parse(&buf).unwrap();
        assert_eq!(parsed.value(), 300);
        assert_eq!(parsed.encoded_len(), buf.len());
    }
}
