/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ldapx-OSS developers.
 */

use log::debug;

use ldapx_codec::ber::{BerElement, TAG_SEQUENCE, encode_tagged};

use crate::{Control, DecodeError, RequestError, ResultCode, Unmodifiable};

use super::ExtendedResult;

const TAG_GENERATED_PASSWORD: u8 = 0x80;

/// The Password Modify extended result, RFC 3062.
///
/// A generated password is only ever present on a success result; the
/// payload tag space is independent of the request tag space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordModifyExtendedResult {
    result_code: ResultCode,
    matched_dn: Option<String>,
    diagnostic_message: Option<String>,
    generated_password: Option<Vec<u8>>,
    controls: Vec<Control>,
}

impl PasswordModifyExtendedResult {
    pub fn new(result_code: ResultCode) -> Self {
        PasswordModifyExtendedResult {
            result_code,
            matched_dn: None,
            diagnostic_message: None,
            generated_password: None,
            controls: Vec::new(),
        }
    }

    #[inline]
    pub fn result_code(&self) -> ResultCode {
        self.result_code
    }

    pub fn matched_dn(&self) -> Option<&str> {
        self.matched_dn.as_deref()
    }

    pub fn set_matched_dn(&mut self, matched_dn: impl Into<String>) -> &mut Self {
        self.matched_dn = Some(matched_dn.into());
        self
    }

    pub fn diagnostic_message(&self) -> Option<&str> {
        self.diagnostic_message.as_deref()
    }

    pub fn set_diagnostic_message(&mut self, message: impl Into<String>) -> &mut Self {
        self.diagnostic_message = Some(message.into());
        self
    }

    pub fn generated_password(&self) -> Option<&[u8]> {
        self.generated_password.as_deref()
    }

    pub fn set_generated_password(&mut self, password: Option<Vec<u8>>) -> &mut Self {
        self.generated_password = password;
        self
    }

    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    pub fn add_control(&mut self, control: Control) -> &mut Self {
        self.controls.push(control);
        self
    }

    /// Encode the result payload in wire form
    pub fn encode_value(&self) -> Option<Vec<u8>> {
        let generated_password = self.generated_password.as_ref()?;
        let mut inner = Vec::new();
        encode_tagged(&mut inner, TAG_GENERATED_PASSWORD, generated_password);
        let mut buf = Vec::with_capacity(inner.len() + 4);
        encode_tagged(&mut buf, TAG_SEQUENCE, &inner);
        Some(buf)
    }

    fn decode_value(value: &[u8]) -> Result<Option<Vec<u8>>, DecodeError> {
        let sequence = BerElement::parse(value)?;
        if sequence.tag() != TAG_SEQUENCE {
            return Err(DecodeError::NotASequence(sequence.tag()));
        }
        if sequence.encoded_len() != value.len() {
            return Err(DecodeError::TrailingData);
        }

        let left = sequence.value();
        match BerElement::parse_expected(left, TAG_GENERATED_PASSWORD)? {
            Some(element) => {
                if element.encoded_len() != left.len() {
                    let next = BerElement::parse(&left[element.encoded_len()..])?;
                    return Err(DecodeError::UnexpectedTag(next.tag()));
                }
                Ok(Some(element.value().to_vec()))
            }
            None => match left.is_empty() {
                true => Ok(None),
                false => {
                    let element = BerElement::parse(left)?;
                    Err(DecodeError::UnexpectedTag(element.tag()))
                }
            },
        }
    }

    /// Convert a generic extended result into its typed form.
    ///
    /// An already typed result is returned as is. The payload is parsed as a
    /// generated password only on a success result code; a non-success
    /// result with a payload present keeps the password unset without any
    /// parse attempt.
    pub fn decode(result: ExtendedResult) -> Result<Self, DecodeError> {
        match result {
            ExtendedResult::PasswordModify(result) => Ok(result),
            ExtendedResult::Generic(generic) => {
                let generated_password = if generic.result_code.is_success() {
                    match &generic.value {
                        Some(value) => Self::decode_value(value)?,
                        None => None,
                    }
                } else {
                    if generic.value.is_some() {
                        debug!(
                            "ignoring payload on non-success password modify result {}",
                            generic.result_code
                        );
                    }
                    None
                };

                Ok(PasswordModifyExtendedResult {
                    result_code: generic.result_code,
                    matched_dn: generic.matched_dn,
                    diagnostic_message: generic.diagnostic_message,
                    generated_password,
                    controls: generic.controls,
                })
            }
        }
    }
}

impl Unmodifiable<PasswordModifyExtendedResult> {
    #[inline]
    pub fn result_code(&self) -> ResultCode {
        self.get_ref().result_code()
    }

    pub fn matched_dn(&self) -> Option<&str> {
        self.get_ref().matched_dn()
    }

    pub fn diagnostic_message(&self) -> Option<&str> {
        self.get_ref().diagnostic_message()
    }

    /// Fresh copy on every call
    pub fn generated_password(&self) -> Option<Vec<u8>> {
        self.get_ref().generated_password().map(<[u8]>::to_vec)
    }

    /// Owned copy of the attached controls
    pub fn controls(&self) -> Vec<Control> {
        self.get_ref().controls().to_vec()
    }

    pub fn set_generated_password(&mut self, _password: Option<Vec<u8>>) -> Result<(), RequestError> {
        Err(RequestError::UnsupportedOperation)
    }

    pub fn add_control(&mut self, _control: Control) -> Result<(), RequestError> {
        Err(RequestError::UnsupportedOperation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::GenericExtendedResult;
    use hex_literal::hex;

    #[test]
    fn success_without_value() {
        let generic = GenericExtendedResult::new(ResultCode::Success);
        let result = PasswordModifyExtendedResult::decode(generic.into()).unwrap();
        assert_eq!(result.result_code(), ResultCode::Success);
        assert!(result.generated_password().is_none());
    }

    #[test]
    fn success_with_generated_password() {
        let mut generic = GenericExtendedResult::new(ResultCode::Success);
        generic.set_value(Some(hex!("30 08 80 06 73 33 63 72 33 74").to_vec()));

        let result = PasswordModifyExtendedResult::decode(generic.into()).unwrap();
        assert_eq!(result.generated_password(), Some(&b"s3cr3t"[..]));
    }

    #[test]
    fn success_with_empty_sequence() {
        let mut generic = GenericExtendedResult::new(ResultCode::Success);
        generic.set_value(Some(hex!("30 00").to_vec()));

        let result = PasswordModifyExtendedResult::decode(generic.into()).unwrap();
        assert!(result.generated_password().is_none());
    }

    #[test]
    fn non_success_value_is_not_parsed() {
        let mut generic = GenericExtendedResult::new(ResultCode::UnwillingToPerform);
        generic.set_diagnostic_message("password changes not allowed");
        // deliberately malformed payload; it must be ignored, not parsed
        generic.set_value(Some(vec![0xFF, 0xFF, 0xFF]));

        let result = PasswordModifyExtendedResult::decode(generic.into()).unwrap();
        assert_eq!(result.result_code(), ResultCode::UnwillingToPerform);
        assert!(result.generated_password().is_none());
        assert_eq!(
            result.diagnostic_message(),
            Some("password changes not allowed")
        );
    }

    #[test]
    fn malformed_success_value_fails() {
        let mut generic = GenericExtendedResult::new(ResultCode::Success);
        generic.set_value(Some(hex!("30 02 81 00").to_vec()));
        let e = PasswordModifyExtendedResult::decode(generic.into()).unwrap_err();
        assert_eq!(e, DecodeError::UnexpectedTag(0x81));
    }

    #[test]
    fn decode_identity_short_circuit() {
        let mut result = PasswordModifyExtendedResult::new(ResultCode::Success);
        result.set_generated_password(Some(b"generated".to_vec()));
        let expected = result.clone();

        let decoded = PasswordModifyExtendedResult::decode(result.into()).unwrap();
        assert_eq!(decoded, expected);
    }

    #[test]
    fn encode_round_trip() {
        let mut result = PasswordModifyExtendedResult::new(ResultCode::Success);
        assert!(result.encode_value().is_none());

        result.set_generated_password(Some(b"s3cr3t".to_vec()));
        let encoded = result.encode_value().unwrap();
        assert_eq!(encoded, hex!("30 08 80 06 73 33 63 72 33 74"));

        let mut generic = GenericExtendedResult::new(ResultCode::Success);
        generic.set_value(Some(encoded));
        let decoded = PasswordModifyExtendedResult::decode(generic.into()).unwrap();
        assert_eq!(decoded.generated_password(), Some(&b"s3cr3t"[..]));
    }

    #[test]
    fn unmodifiable_view() {
        let mut result = PasswordModifyExtendedResult::new(ResultCode::Success);
        result.set_generated_password(Some(b"generated".to_vec()));

        let mut view = Unmodifiable::new(result);
        assert_eq!(
            view.set_generated_password(None),
            Err(RequestError::UnsupportedOperation)
        );

        let first = view.generated_password().unwrap();
        let mut second = view.generated_password().unwrap();
        assert_eq!(first, second);
        second[0] ^= 0xFF;
        assert_eq!(view.generated_password().unwrap(), first);

        let result = view.into_inner();
        assert_eq!(result.generated_password(), Some(&b"generated"[..]));
    }
}
