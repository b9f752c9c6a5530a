/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ldapx-OSS developers.
 */

use super::BerLength;

/// Append a tag-length-value element with a definite length encoding
pub fn encode_tagged(buf: &mut Vec<u8>, tag: u8, value: &[u8]) {
    buf.push(tag);
    BerLength::encode(value.len(), buf);
    buf.extend_from_slice(value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ber::{BerElement, TAG_SEQUENCE};
    use hex_literal::hex;

    #[test]
    fn tagged_octet_string() {
        let mut buf = Vec::new();
        encode_tagged(&mut buf, 0x80, b"u:bob");
        assert_eq!(buf, hex!("80 05 75 3a 62 6f 62"));

        let parsed = BerElement::parse(&buf).unwrap();
        assert_eq!(parsed.tag(), 0x80);
        assert_eq!(parsed.value(), b"u:bob");
        assert_eq!(parsed.encoded_len(), buf.len());
    }

    #[test]
    fn nested_sequence() {
        let mut inner = Vec::new();
        encode_tagged(&mut inner, 0x81, &[0x61, 0x62]);

        let mut buf = Vec::new();
        encode_tagged(&mut buf, TAG_SEQUENCE, &inner);
        assert_eq!(buf, hex!("30 04 81 02 61 62"));
    }

    #[test]
    fn long_form_length() {
        let value = vec![0xA5u8; 0x80];
        let mut buf = Vec::new();
        encode_tagged(&mut buf, 0x04, &value);
        assert_eq!(buf[..3], hex!("04 81 80"));

        let parsed = BerElement::parse(&buf).unwrap();
        assert_eq!(parsed.value(), &value[..]);
        assert_eq!(parsed.encoded_len(), buf.len());
    }
}
