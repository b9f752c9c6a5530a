/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ldapx-OSS developers.
 */

use smol_str::SmolStr;

use crate::{Control, RequestError, Unmodifiable};

use super::{Request, impl_request_controls};

/// A bind request using a SASL mechanism.
///
/// The challenge/response exchange itself belongs to the connection layer;
/// these objects only carry the per-mechanism fields.
pub trait SaslBindRequest: Request {
    /// The mechanism name sent in the bind request
    fn mechanism(&self) -> &'static str;
}

/// ANONYMOUS mechanism, RFC 4505
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnonymousSaslBindRequest {
    trace_string: String,
    controls: Vec<Control>,
}

impl AnonymousSaslBindRequest {
    pub const MECHANISM: &'static str = "ANONYMOUS";

    pub fn new(trace_string: impl Into<String>) -> Self {
        AnonymousSaslBindRequest {
            trace_string: trace_string.into(),
            controls: Vec::new(),
        }
    }

    #[inline]
    pub fn trace_string(&self) -> &str {
        &self.trace_string
    }

    pub fn set_trace_string(&mut self, trace_string: impl Into<String>) -> &mut Self {
        self.trace_string = trace_string.into();
        self
    }
}

impl_request_controls!(AnonymousSaslBindRequest);

impl SaslBindRequest for AnonymousSaslBindRequest {
    fn mechanism(&self) -> &'static str {
        Self::MECHANISM
    }
}

/// PLAIN mechanism, RFC 4616
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainSaslBindRequest {
    authentication_id: String,
    authorization_id: Option<String>,
    password: Vec<u8>,
    controls: Vec<Control>,
}

impl PlainSaslBindRequest {
    pub const MECHANISM: &'static str = "PLAIN";

    pub fn new(authentication_id: impl Into<String>, password: Vec<u8>) -> Self {
        PlainSaslBindRequest {
            authentication_id: authentication_id.into(),
            authorization_id: None,
            password,
            controls: Vec::new(),
        }
    }

    #[inline]
    pub fn authentication_id(&self) -> &str {
        &self.authentication_id
    }

    /// The authentication identity is required by the mechanism; empty input
    /// is rejected before any state changes.
    pub fn set_authentication_id(
        &mut self,
        authentication_id: impl Into<String>,
    ) -> Result<&mut Self, RequestError> {
        let authentication_id = authentication_id.into();
        if authentication_id.is_empty() {
            return Err(RequestError::EmptyRequiredField("authentication_id"));
        }
        self.authentication_id = authentication_id;
        Ok(self)
    }

    pub fn authorization_id(&self) -> Option<&str> {
        self.authorization_id.as_deref()
    }

    pub fn set_authorization_id(&mut self, authorization_id: impl Into<String>) -> &mut Self {
        self.authorization_id = Some(authorization_id.into());
        self
    }

    pub fn password(&self) -> &[u8] {
        &self.password
    }

    pub fn set_password(&mut self, password: Vec<u8>) -> &mut Self {
        self.password = password;
        self
    }
}

impl_request_controls!(PlainSaslBindRequest);

impl SaslBindRequest for PlainSaslBindRequest {
    fn mechanism(&self) -> &'static str {
        Self::MECHANISM
    }
}

impl Unmodifiable<PlainSaslBindRequest> {
    #[inline]
    pub fn authentication_id(&self) -> &str {
        self.get_ref().authentication_id()
    }

    pub fn authorization_id(&self) -> Option<&str> {
        self.get_ref().authorization_id()
    }

    /// Fresh copy on every call
    pub fn password(&self) -> Vec<u8> {
        self.get_ref().password().to_vec()
    }

    pub fn set_authentication_id(&mut self, _id: &str) -> Result<(), RequestError> {
        Err(RequestError::UnsupportedOperation)
    }

    pub fn set_password(&mut self, _password: &[u8]) -> Result<(), RequestError> {
        Err(RequestError::UnsupportedOperation)
    }
}

/// CRAM-MD5 mechanism
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CramMd5SaslBindRequest {
    authentication_id: String,
    password: Vec<u8>,
    controls: Vec<Control>,
}

impl CramMd5SaslBindRequest {
    pub const MECHANISM: &'static str = "CRAM-MD5";

    pub fn new(authentication_id: impl Into<String>, password: Vec<u8>) -> Self {
        CramMd5SaslBindRequest {
            authentication_id: authentication_id.into(),
            password,
            controls: Vec::new(),
        }
    }

    #[inline]
    pub fn authentication_id(&self) -> &str {
        &self.authentication_id
    }

    pub fn set_authentication_id(
        &mut self,
        authentication_id: impl Into<String>,
    ) -> Result<&mut Self, RequestError> {
        let authentication_id = authentication_id.into();
        if authentication_id.is_empty() {
            return Err(RequestError::EmptyRequiredField("authentication_id"));
        }
        self.authentication_id = authentication_id;
        Ok(self)
    }

    pub fn password(&self) -> &[u8] {
        &self.password
    }

    pub fn set_password(&mut self, password: Vec<u8>) -> &mut Self {
        self.password = password;
        self
    }
}

impl_request_controls!(CramMd5SaslBindRequest);

impl SaslBindRequest for CramMd5SaslBindRequest {
    fn mechanism(&self) -> &'static str {
        Self::MECHANISM
    }
}

impl Unmodifiable<CramMd5SaslBindRequest> {
    #[inline]
    pub fn authentication_id(&self) -> &str {
        self.get_ref().authentication_id()
    }

    /// Fresh copy on every call
    pub fn password(&self) -> Vec<u8> {
        self.get_ref().password().to_vec()
    }

    pub fn set_authentication_id(&mut self, _id: &str) -> Result<(), RequestError> {
        Err(RequestError::UnsupportedOperation)
    }

    pub fn set_password(&mut self, _password: &[u8]) -> Result<(), RequestError> {
        Err(RequestError::UnsupportedOperation)
    }
}

/// DIGEST-MD5 mechanism, RFC 2831
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestMd5SaslBindRequest {
    authentication_id: String,
    authorization_id: Option<String>,
    password: Vec<u8>,
    realm: Option<String>,
    qop: Vec<SmolStr>,
    cipher: Option<SmolStr>,
    controls: Vec<Control>,
}

impl DigestMd5SaslBindRequest {
    pub const MECHANISM: &'static str = "DIGEST-MD5";

    pub const QOP_AUTH: &'static str = "auth";
    pub const QOP_AUTH_INT: &'static str = "auth-int";
    pub const QOP_AUTH_CONF: &'static str = "auth-conf";

    pub fn new(authentication_id: impl Into<String>, password: Vec<u8>) -> Self {
        DigestMd5SaslBindRequest {
            authentication_id: authentication_id.into(),
            authorization_id: None,
            password,
            realm: None,
            qop: Vec::new(),
            cipher: None,
            controls: Vec::new(),
        }
    }

    #[inline]
    pub fn authentication_id(&self) -> &str {
        &self.authentication_id
    }

    pub fn set_authentication_id(
        &mut self,
        authentication_id: impl Into<String>,
    ) -> Result<&mut Self, RequestError> {
        let authentication_id = authentication_id.into();
        if authentication_id.is_empty() {
            return Err(RequestError::EmptyRequiredField("authentication_id"));
        }
        self.authentication_id = authentication_id;
        Ok(self)
    }

    pub fn authorization_id(&self) -> Option<&str> {
        self.authorization_id.as_deref()
    }

    pub fn set_authorization_id(&mut self, authorization_id: impl Into<String>) -> &mut Self {
        self.authorization_id = Some(authorization_id.into());
        self
    }

    pub fn password(&self) -> &[u8] {
        &self.password
    }

    pub fn set_password(&mut self, password: Vec<u8>) -> &mut Self {
        self.password = password;
        self
    }

    pub fn realm(&self) -> Option<&str> {
        self.realm.as_deref()
    }

    pub fn set_realm(&mut self, realm: impl Into<String>) -> &mut Self {
        self.realm = Some(realm.into());
        self
    }

    /// Requested quality of protection values, in preference order
    pub fn qop(&self) -> &[SmolStr] {
        &self.qop
    }

    pub fn add_qop(&mut self, qop: impl Into<SmolStr>) -> &mut Self {
        self.qop.push(qop.into());
        self
    }

    pub fn cipher(&self) -> Option<&str> {
        self.cipher.as_deref()
    }

    pub fn set_cipher(&mut self, cipher: impl Into<SmolStr>) -> &mut Self {
        self.cipher = Some(cipher.into());
        self
    }
}

impl_request_controls!(DigestMd5SaslBindRequest);

impl SaslBindRequest for DigestMd5SaslBindRequest {
    fn mechanism(&self) -> &'static str {
        Self::MECHANISM
    }
}

impl Unmodifiable<DigestMd5SaslBindRequest> {
    #[inline]
    pub fn authentication_id(&self) -> &str {
        self.get_ref().authentication_id()
    }

    /// Fresh copy on every call
    pub fn password(&self) -> Vec<u8> {
        self.get_ref().password().to_vec()
    }

    /// Owned copy of the QOP list
    pub fn qop(&self) -> Vec<SmolStr> {
        self.get_ref().qop().to_vec()
    }

    pub fn set_password(&mut self, _password: &[u8]) -> Result<(), RequestError> {
        Err(RequestError::UnsupportedOperation)
    }

    pub fn add_qop(&mut self, _qop: &str) -> Result<(), RequestError> {
        Err(RequestError::UnsupportedOperation)
    }
}

/// GSSAPI mechanism, RFC 4752.
///
/// Only the credential fields are modelled here; ticket acquisition and the
/// security layer negotiation belong to the connection layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GssApiSaslBindRequest {
    authentication_id: String,
    authorization_id: Option<String>,
    password: Vec<u8>,
    realm: Option<String>,
    kdc_address: Option<String>,
    controls: Vec<Control>,
}

impl GssApiSaslBindRequest {
    pub const MECHANISM: &'static str = "GSSAPI";

    pub fn new(authentication_id: impl Into<String>, password: Vec<u8>) -> Self {
        GssApiSaslBindRequest {
            authentication_id: authentication_id.into(),
            authorization_id: None,
            password,
            realm: None,
            kdc_address: None,
            controls: Vec::new(),
        }
    }

    #[inline]
    pub fn authentication_id(&self) -> &str {
        &self.authentication_id
    }

    pub fn set_authentication_id(
        &mut self,
        authentication_id: impl Into<String>,
    ) -> Result<&mut Self, RequestError> {
        let authentication_id = authentication_id.into();
        if authentication_id.is_empty() {
            return Err(RequestError::EmptyRequiredField("authentication_id"));
        }
        self.authentication_id = authentication_id;
        Ok(self)
    }

    pub fn authorization_id(&self) -> Option<&str> {
        self.authorization_id.as_deref()
    }

    pub fn set_authorization_id(&mut self, authorization_id: impl Into<String>) -> &mut Self {
        self.authorization_id = Some(authorization_id.into());
        self
    }

    pub fn password(&self) -> &[u8] {
        &self.password
    }

    pub fn set_password(&mut self, password: Vec<u8>) -> &mut Self {
        self.password = password;
        self
    }

    pub fn realm(&self) -> Option<&str> {
        self.realm.as_deref()
    }

    pub fn set_realm(&mut self, realm: impl Into<String>) -> &mut Self {
        self.realm = Some(realm.into());
        self
    }

    pub fn kdc_address(&self) -> Option<&str> {
        self.kdc_address.as_deref()
    }

    pub fn set_kdc_address(&mut self, kdc_address: impl Into<String>) -> &mut Self {
        self.kdc_address = Some(kdc_address.into());
        self
    }
}

impl_request_controls!(GssApiSaslBindRequest);

impl SaslBindRequest for GssApiSaslBindRequest {
    fn mechanism(&self) -> &'static str {
        Self::MECHANISM
    }
}

impl Unmodifiable<GssApiSaslBindRequest> {
    #[inline]
    pub fn authentication_id(&self) -> &str {
        self.get_ref().authentication_id()
    }

    /// Fresh copy on every call
    pub fn password(&self) -> Vec<u8> {
        self.get_ref().password().to_vec()
    }

    pub fn set_password(&mut self, _password: &[u8]) -> Result<(), RequestError> {
        Err(RequestError::UnsupportedOperation)
    }
}

/// EXTERNAL mechanism, RFC 4422 Appendix A
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExternalSaslBindRequest {
    authorization_id: Option<String>,
    controls: Vec<Control>,
}

impl ExternalSaslBindRequest {
    pub const MECHANISM: &'static str = "EXTERNAL";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn authorization_id(&self) -> Option<&str> {
        self.authorization_id.as_deref()
    }

    pub fn set_authorization_id(&mut self, authorization_id: impl Into<String>) -> &mut Self {
        self.authorization_id = Some(authorization_id.into());
        self
    }
}

impl_request_controls!(ExternalSaslBindRequest);

impl SaslBindRequest for ExternalSaslBindRequest {
    fn mechanism(&self) -> &'static str {
        Self::MECHANISM
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mechanism_names() {
        assert_eq!(AnonymousSaslBindRequest::new("trace").mechanism(), "ANONYMOUS");
        assert_eq!(
            PlainSaslBindRequest::new("u:bob", b"pw".to_vec()).mechanism(),
            "PLAIN"
        );
        assert_eq!(
            CramMd5SaslBindRequest::new("u:bob", b"pw".to_vec()).mechanism(),
            "CRAM-MD5"
        );
        assert_eq!(
            DigestMd5SaslBindRequest::new("u:bob", b"pw".to_vec()).mechanism(),
            "DIGEST-MD5"
        );
        assert_eq!(
            GssApiSaslBindRequest::new("bob@EXAMPLE.COM", b"pw".to_vec()).mechanism(),
            "GSSAPI"
        );
        assert_eq!(ExternalSaslBindRequest::new().mechanism(), "EXTERNAL");
    }

    #[test]
    fn unmodifiable_cram_md5() {
        let request = CramMd5SaslBindRequest::new("u:bob", b"secret".to_vec());
        let mut view = Unmodifiable::new(request);

        assert_eq!(
            view.set_authentication_id("u:alice"),
            Err(RequestError::UnsupportedOperation)
        );
        assert_eq!(
            view.set_password(b"hunter2"),
            Err(RequestError::UnsupportedOperation)
        );
        assert_eq!(view.authentication_id(), "u:bob");

        let first = view.password();
        let mut second = view.password();
        assert_eq!(first, second);
        second[0] ^= 0xFF;
        assert_ne!(first, second);
        assert_eq!(view.password(), first);

        let request = view.into_inner();
        assert_eq!(request.password(), b"secret");
        assert_eq!(request.authentication_id(), "u:bob");
    }

    #[test]
    fn gssapi_fields() {
        let mut request = GssApiSaslBindRequest::new("bob@EXAMPLE.COM", b"pw".to_vec());
        request
            .set_realm("EXAMPLE.COM")
            .set_kdc_address("kdc.example.com:88");
        assert_eq!(request.realm(), Some("EXAMPLE.COM"));
        assert_eq!(request.kdc_address(), Some("kdc.example.com:88"));

        let mut view = Unmodifiable::new(request);
        assert_eq!(
            view.set_password(b"other"),
            Err(RequestError::UnsupportedOperation)
        );
        assert_eq!(view.password(), b"pw");
    }

    #[test]
    fn required_field_rejected_before_mutation() {
        let mut request = PlainSaslBindRequest::new("u:bob", b"pw".to_vec());
        let e = request.set_authentication_id("").unwrap_err();
        assert_eq!(e, RequestError::EmptyRequiredField("authentication_id"));
        assert_eq!(request.authentication_id(), "u:bob");

        request.set_authentication_id("u:alice").unwrap();
        assert_eq!(request.authentication_id(), "u:alice");
    }

    #[test]
    fn digest_md5_qop() {
        let mut request = DigestMd5SaslBindRequest::new("u:bob", b"pw".to_vec());
        request
            .add_qop(DigestMd5SaslBindRequest::QOP_AUTH)
            .add_qop(DigestMd5SaslBindRequest::QOP_AUTH_CONF);
        request.set_realm("example.com").set_cipher("3des");
        assert_eq!(request.qop().len(), 2);
        assert_eq!(request.qop()[0], "auth");
        assert_eq!(request.qop()[1], "auth-conf");
        assert_eq!(request.realm(), Some("example.com"));
        assert_eq!(request.cipher(), Some("3des"));

        let mut view = Unmodifiable::new(request);
        assert_eq!(view.add_qop("auth-int"), Err(RequestError::UnsupportedOperation));

        let mut qop = view.qop();
        qop.push(SmolStr::new("auth-int"));
        assert_eq!(view.qop().len(), 2);

        let request = view.into_inner();
        assert_eq!(request.qop().len(), 2);
    }
}
