/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ldapx-OSS developers.
 */

use smol_str::SmolStr;

use crate::{Control, RequestError, Unmodifiable, oid};

use super::password_modify::PasswordModifyExtendedRequest;
use super::{Request, impl_request_controls};

/// An extended request carried in its raw wire form: an OID naming the
/// operation and an opaque, operation defined payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericExtendedRequest {
    oid: SmolStr,
    value: Option<Vec<u8>>,
    controls: Vec<Control>,
}

impl GenericExtendedRequest {
    pub fn new(oid: impl Into<SmolStr>) -> Self {
        GenericExtendedRequest {
            oid: oid.into(),
            value: None,
            controls: Vec::new(),
        }
    }

    #[inline]
    pub fn oid(&self) -> &str {
        &self.oid
    }

    /// The request OID is required; empty input is rejected before any state
    /// changes.
    pub fn set_oid(&mut self, oid: impl Into<SmolStr>) -> Result<&mut Self, RequestError> {
        let oid = oid.into();
        if oid.is_empty() {
            return Err(RequestError::EmptyRequiredField("oid"));
        }
        self.oid = oid;
        Ok(self)
    }

    pub fn value(&self) -> Option<&[u8]> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: Option<Vec<u8>>) -> &mut Self {
        self.value = value;
        self
    }

    pub(crate) fn from_parts(
        oid: SmolStr,
        value: Option<Vec<u8>>,
        controls: Vec<Control>,
    ) -> Self {
        GenericExtendedRequest {
            oid,
            value,
            controls,
        }
    }

    pub(crate) fn into_parts(self) -> (SmolStr, Option<Vec<u8>>, Vec<Control>) {
        (self.oid, self.value, self.controls)
    }
}

impl_request_controls!(GenericExtendedRequest);

impl Unmodifiable<GenericExtendedRequest> {
    #[inline]
    pub fn oid(&self) -> &str {
        self.get_ref().oid()
    }

    /// Fresh copy on every call
    pub fn value(&self) -> Option<Vec<u8>> {
        self.get_ref().value().map(<[u8]>::to_vec)
    }

    pub fn set_oid(&mut self, _oid: &str) -> Result<(), RequestError> {
        Err(RequestError::UnsupportedOperation)
    }

    pub fn set_value(&mut self, _value: Option<Vec<u8>>) -> Result<(), RequestError> {
        Err(RequestError::UnsupportedOperation)
    }
}

/// The StartTLS extended request, RFC 4511 section 4.14.
///
/// Identified by its OID alone; carries no request value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartTlsExtendedRequest {
    controls: Vec<Control>,
}

impl StartTlsExtendedRequest {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn oid(&self) -> &'static str {
        oid::START_TLS_REQUEST
    }
}

impl_request_controls!(StartTlsExtendedRequest);

/// The Who Am I? extended request, RFC 4532.
///
/// Identified by its OID alone; carries no request value. The authorization
/// identity comes back in the result payload, unframed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhoAmIExtendedRequest {
    controls: Vec<Control>,
}

impl WhoAmIExtendedRequest {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn oid(&self) -> &'static str {
        oid::WHO_AM_I_REQUEST
    }
}

impl_request_controls!(WhoAmIExtendedRequest);

/// An extended request that is either still in raw form or already decoded
/// to a known operation.
///
/// Typed payloads flowing back through a generic API stay typed, so decoding
/// them again is a cheap move instead of a re-parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtendedRequest {
    Generic(GenericExtendedRequest),
    PasswordModify(PasswordModifyExtendedRequest),
    StartTls(StartTlsExtendedRequest),
    WhoAmI(WhoAmIExtendedRequest),
}

impl ExtendedRequest {
    pub fn oid(&self) -> &str {
        match self {
            ExtendedRequest::Generic(r) => r.oid(),
            ExtendedRequest::PasswordModify(_) => oid::PASSWORD_MODIFY_REQUEST,
            ExtendedRequest::StartTls(_) => oid::START_TLS_REQUEST,
            ExtendedRequest::WhoAmI(_) => oid::WHO_AM_I_REQUEST,
        }
    }

    /// The payload in wire form, encoding typed variants on demand
    pub fn value(&self) -> Option<Vec<u8>> {
        match self {
            ExtendedRequest::Generic(r) => r.value().map(<[u8]>::to_vec),
            ExtendedRequest::PasswordModify(r) => r.encode_value(),
            ExtendedRequest::StartTls(_) | ExtendedRequest::WhoAmI(_) => None,
        }
    }

    /// Lower to the raw wire form, carrying the controls across
    pub fn to_generic(&self) -> GenericExtendedRequest {
        match self {
            ExtendedRequest::Generic(r) => r.clone(),
            ExtendedRequest::PasswordModify(r) => GenericExtendedRequest::from_parts(
                SmolStr::new_static(oid::PASSWORD_MODIFY_REQUEST),
                r.encode_value(),
                r.controls().to_vec(),
            ),
            ExtendedRequest::StartTls(r) => GenericExtendedRequest::from_parts(
                SmolStr::new_static(oid::START_TLS_REQUEST),
                None,
                r.controls().to_vec(),
            ),
            ExtendedRequest::WhoAmI(r) => GenericExtendedRequest::from_parts(
                SmolStr::new_static(oid::WHO_AM_I_REQUEST),
                None,
                r.controls().to_vec(),
            ),
        }
    }
}

impl Request for ExtendedRequest {
    fn controls(&self) -> &[Control] {
        match self {
            ExtendedRequest::Generic(r) => r.controls(),
            ExtendedRequest::PasswordModify(r) => r.controls(),
            ExtendedRequest::StartTls(r) => r.controls(),
            ExtendedRequest::WhoAmI(r) => r.controls(),
        }
    }

    fn add_control(&mut self, control: Control) -> Result<(), RequestError> {
        match self {
            ExtendedRequest::Generic(r) => r.add_control(control),
            ExtendedRequest::PasswordModify(r) => r.add_control(control),
            ExtendedRequest::StartTls(r) => r.add_control(control),
            ExtendedRequest::WhoAmI(r) => r.add_control(control),
        }
    }

    fn clear_controls(&mut self) -> Result<(), RequestError> {
        match self {
            ExtendedRequest::Generic(r) => r.clear_controls(),
            ExtendedRequest::PasswordModify(r) => r.clear_controls(),
            ExtendedRequest::StartTls(r) => r.clear_controls(),
            ExtendedRequest::WhoAmI(r) => r.clear_controls(),
        }
    }
}

impl From<GenericExtendedRequest> for ExtendedRequest {
    fn from(value: GenericExtendedRequest) -> Self {
        ExtendedRequest::Generic(value)
    }
}

impl From<PasswordModifyExtendedRequest> for ExtendedRequest {
    fn from(value: PasswordModifyExtendedRequest) -> Self {
        ExtendedRequest::PasswordModify(value)
    }
}

impl From<StartTlsExtendedRequest> for ExtendedRequest {
    fn from(value: StartTlsExtendedRequest) -> Self {
        ExtendedRequest::StartTls(value)
    }
}

impl From<WhoAmIExtendedRequest> for ExtendedRequest {
    fn from(value: WhoAmIExtendedRequest) -> Self {
        ExtendedRequest::WhoAmI(value)
    }
}
