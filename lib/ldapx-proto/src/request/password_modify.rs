/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ldapx-OSS developers.
 */

use ldapx_codec::ber::{BerElement, TAG_SEQUENCE, encode_tagged};

use crate::{Control, DecodeError, RequestError, Unmodifiable};

use super::{ExtendedRequest, impl_request_controls};

const TAG_USER_IDENTITY: u8 = 0x80;
const TAG_OLD_PASSWORD: u8 = 0x81;
const TAG_NEW_PASSWORD: u8 = 0x82;

/// The Password Modify extended request, RFC 3062.
///
/// The payload is a SEQUENCE of up to three context tagged octet strings,
/// written in ascending tag order. Every field is optional; absent fields
/// are omitted from the encoding entirely. A request with all fields absent
/// carries no payload at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordModifyExtendedRequest {
    user_identity: Option<Vec<u8>>,
    old_password: Option<Vec<u8>>,
    new_password: Option<Vec<u8>>,
    controls: Vec<Control>,
}

impl PasswordModifyExtendedRequest {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn oid(&self) -> &'static str {
        crate::oid::PASSWORD_MODIFY_REQUEST
    }

    pub fn user_identity(&self) -> Option<&[u8]> {
        self.user_identity.as_deref()
    }

    pub fn set_user_identity(&mut self, user_identity: Option<Vec<u8>>) -> &mut Self {
        self.user_identity = user_identity;
        self
    }

    pub fn old_password(&self) -> Option<&[u8]> {
        self.old_password.as_deref()
    }

    pub fn set_old_password(&mut self, old_password: Option<Vec<u8>>) -> &mut Self {
        self.old_password = old_password;
        self
    }

    pub fn new_password(&self) -> Option<&[u8]> {
        self.new_password.as_deref()
    }

    pub fn set_new_password(&mut self, new_password: Option<Vec<u8>>) -> &mut Self {
        self.new_password = new_password;
        self
    }

    /// Encode the request payload in wire form
    pub fn encode_value(&self) -> Option<Vec<u8>> {
        if self.user_identity.is_none()
            && self.old_password.is_none()
            && self.new_password.is_none()
        {
            return None;
        }

        let mut inner = Vec::new();
        if let Some(user_identity) = &self.user_identity {
            encode_tagged(&mut inner, TAG_USER_IDENTITY, user_identity);
        }
        if let Some(old_password) = &self.old_password {
            encode_tagged(&mut inner, TAG_OLD_PASSWORD, old_password);
        }
        if let Some(new_password) = &self.new_password {
            encode_tagged(&mut inner, TAG_NEW_PASSWORD, new_password);
        }

        let mut buf = Vec::with_capacity(inner.len() + 4);
        encode_tagged(&mut buf, TAG_SEQUENCE, &inner);
        Some(buf)
    }

    /// Decode a raw request payload.
    ///
    /// A missing payload yields a request with every field absent. Fields
    /// may be omitted from the front or middle of the sequence, but any
    /// element left over once all expected positions have been matched is
    /// an out of order or unknown tag and fails the decode.
    pub fn decode_value(value: Option<&[u8]>) -> Result<Self, DecodeError> {
        let Some(data) = value else {
            return Ok(Self::default());
        };

        let sequence = BerElement::parse(data)?;
        if sequence.tag() != TAG_SEQUENCE {
            return Err(DecodeError::NotASequence(sequence.tag()));
        }
        if sequence.encoded_len() != data.len() {
            return Err(DecodeError::TrailingData);
        }

        let mut left = sequence.value();
        let mut request = Self::default();
        request.user_identity = read_field(&mut left, TAG_USER_IDENTITY)?;
        request.old_password = read_field(&mut left, TAG_OLD_PASSWORD)?;
        request.new_password = read_field(&mut left, TAG_NEW_PASSWORD)?;
        expect_end(left)?;
        Ok(request)
    }

    /// Convert a generic extended request into its typed form.
    ///
    /// An already typed request is returned as is; a raw one has its payload
    /// decoded and its controls moved across opaquely.
    pub fn decode(request: ExtendedRequest) -> Result<Self, DecodeError> {
        let generic = match request {
            ExtendedRequest::PasswordModify(request) => return Ok(request),
            ExtendedRequest::Generic(generic) => generic,
            other => other.to_generic(),
        };
        let (_oid, value, controls) = generic.into_parts();
        let mut request = Self::decode_value(value.as_deref())?;
        request.controls = controls;
        Ok(request)
    }
}

impl_request_controls!(PasswordModifyExtendedRequest);

fn read_field(left: &mut &[u8], tag: u8) -> Result<Option<Vec<u8>>, DecodeError> {
    match BerElement::parse_expected(left, tag)? {
        Some(element) => {
            *left = &left[element.encoded_len()..];
            Ok(Some(element.value().to_vec()))
        }
        None => Ok(None),
    }
}

fn expect_end(left: &[u8]) -> Result<(), DecodeError> {
    if left.is_empty() {
        return Ok(());
    }
    let element = BerElement::parse(left)?;
    Err(DecodeError::UnexpectedTag(element.tag()))
}

impl Unmodifiable<PasswordModifyExtendedRequest> {
    /// Fresh copy on every call
    pub fn user_identity(&self) -> Option<Vec<u8>> {
        self.get_ref().user_identity().map(<[u8]>::to_vec)
    }

    /// Fresh copy on every call
    pub fn old_password(&self) -> Option<Vec<u8>> {
        self.get_ref().old_password().map(<[u8]>::to_vec)
    }

    /// Fresh copy on every call
    pub fn new_password(&self) -> Option<Vec<u8>> {
        self.get_ref().new_password().map(<[u8]>::to_vec)
    }

    pub fn set_user_identity(&mut self, _value: Option<Vec<u8>>) -> Result<(), RequestError> {
        Err(RequestError::UnsupportedOperation)
    }

    pub fn set_old_password(&mut self, _value: Option<Vec<u8>>) -> Result<(), RequestError> {
        Err(RequestError::UnsupportedOperation)
    }

    pub fn set_new_password(&mut self, _value: Option<Vec<u8>>) -> Result<(), RequestError> {
        Err(RequestError::UnsupportedOperation)
    }
}
