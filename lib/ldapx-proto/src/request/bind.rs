/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ldapx-OSS developers.
 */

use crate::{Control, RequestError, Unmodifiable};

use super::impl_request_controls;

/// Simple authentication: a bind DN and a cleartext password.
///
/// Both fields may be empty, which is the anonymous simple bind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimpleBindRequest {
    name: String,
    password: Vec<u8>,
    controls: Vec<Control>,
}

impl SimpleBindRequest {
    pub fn new(name: impl Into<String>, password: Vec<u8>) -> Self {
        SimpleBindRequest {
            name: name.into(),
            password,
            controls: Vec::new(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
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

impl_request_controls!(SimpleBindRequest);

impl Unmodifiable<SimpleBindRequest> {
    #[inline]
    pub fn name(&self) -> &str {
        self.get_ref().name()
    }

    /// Fresh copy on every call
    pub fn password(&self) -> Vec<u8> {
        self.get_ref().password().to_vec()
    }

    pub fn set_name(&mut self, _name: &str) -> Result<(), RequestError> {
        Err(RequestError::UnsupportedOperation)
    }

    pub fn set_password(&mut self, _password: &[u8]) -> Result<(), RequestError> {
        Err(RequestError::UnsupportedOperation)
    }
}

/// A bind request with a raw authentication choice tag and value.
///
/// Used to relay bind methods this layer does not model directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenericBindRequest {
    name: String,
    authentication_type: u8,
    authentication_value: Vec<u8>,
    controls: Vec<Control>,
}

impl GenericBindRequest {
    pub fn new(
        name: impl Into<String>,
        authentication_type: u8,
        authentication_value: Vec<u8>,
    ) -> Self {
        GenericBindRequest {
            name: name.into(),
            authentication_type,
            authentication_value,
            controls: Vec::new(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    #[inline]
    pub fn authentication_type(&self) -> u8 {
        self.authentication_type
    }

    pub fn authentication_value(&self) -> &[u8] {
        &self.authentication_value
    }

    pub fn set_authentication_value(&mut self, value: Vec<u8>) -> &mut Self {
        self.authentication_value = value;
        self
    }
}

impl_request_controls!(GenericBindRequest);

impl Unmodifiable<GenericBindRequest> {
    #[inline]
    pub fn name(&self) -> &str {
        self.get_ref().name()
    }

    #[inline]
    pub fn authentication_type(&self) -> u8 {
        self.get_ref().authentication_type()
    }

    /// Fresh copy on every call
    pub fn authentication_value(&self) -> Vec<u8> {
        self.get_ref().authentication_value().to_vec()
    }

    pub fn set_name(&mut self, _name: &str) -> Result<(), RequestError> {
        Err(RequestError::UnsupportedOperation)
    }

    pub fn set_authentication_value(&mut self, _value: &[u8]) -> Result<(), RequestError> {
        Err(RequestError::UnsupportedOperation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_bind() {
        let mut request = SimpleBindRequest::default();
        assert!(request.name().is_empty());
        assert!(request.password().is_empty());

        request
            .set_name("uid=bob,dc=example,dc=com")
            .set_password(b"secret".to_vec());
        assert_eq!(request.name(), "uid=bob,dc=example,dc=com");
        assert_eq!(request.password(), b"secret");
    }

    #[test]
    fn unmodifiable_simple_bind() {
        let request = SimpleBindRequest::new("cn=admin", b"secret".to_vec());
        let mut view = Unmodifiable::new(request);

        assert_eq!(view.set_name("cn=other"), Err(RequestError::UnsupportedOperation));
        assert_eq!(
            view.set_password(b"hunter2"),
            Err(RequestError::UnsupportedOperation)
        );
        assert_eq!(view.name(), "cn=admin");

        // two reads yield equal but independent buffers
        let first = view.password();
        let mut second = view.password();
        assert_eq!(first, second);
        second[0] ^= 0xFF;
        assert_ne!(first, second);
        assert_eq!(view.password(), first);

        let request = view.into_inner();
        assert_eq!(request.password(), b"secret");
    }

    #[test]
    fn generic_bind() {
        let request = GenericBindRequest::new("", 0xA3, b"blob".to_vec());
        assert_eq!(request.authentication_type(), 0xA3);
        assert_eq!(request.authentication_value(), b"blob");

        let view = Unmodifiable::new(request);
        let value = view.authentication_value();
        assert_eq!(value, b"blob");
    }
}
