/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ldapx-OSS developers.
 */

use crate::{Control, RequestError, Unmodifiable};

use super::impl_request_controls;

/// An attribute of an entry being added
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    description: String,
    values: Vec<Vec<u8>>,
}

impl Attribute {
    pub fn new(description: impl Into<String>) -> Self {
        Attribute {
            description: description.into(),
            values: Vec::new(),
        }
    }

    pub fn with_value(mut self, value: Vec<u8>) -> Self {
        self.values.push(value);
        self
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn values(&self) -> &[Vec<u8>] {
        &self.values
    }
}

/// Add a new entry named by an opaque DN string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddRequest {
    name: String,
    attributes: Vec<Attribute>,
    controls: Vec<Control>,
}

impl AddRequest {
    pub fn new(name: impl Into<String>) -> Self {
        AddRequest {
            name: name.into(),
            attributes: Vec::new(),
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

    pub fn add_attribute(&mut self, attribute: Attribute) -> &mut Self {
        self.attributes.push(attribute);
        self
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }
}

impl_request_controls!(AddRequest);

impl Unmodifiable<AddRequest> {
    #[inline]
    pub fn name(&self) -> &str {
        self.get_ref().name()
    }

    /// Owned copy of the attribute list, elements included
    pub fn attributes(&self) -> Vec<Attribute> {
        self.get_ref().attributes().to_vec()
    }

    pub fn add_attribute(&mut self, _attribute: Attribute) -> Result<(), RequestError> {
        Err(RequestError::UnsupportedOperation)
    }

    pub fn set_name(&mut self, _name: &str) -> Result<(), RequestError> {
        Err(RequestError::UnsupportedOperation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build() {
        let mut request = AddRequest::new("uid=bob,ou=people,dc=example,dc=com");
        request
            .add_attribute(
                Attribute::new("objectClass")
                    .with_value(b"top".to_vec())
                    .with_value(b"person".to_vec()),
            )
            .add_attribute(Attribute::new("cn").with_value(b"Bob".to_vec()));

        assert_eq!(request.attributes().len(), 2);
        let first = &request.attributes()[0];
        assert_eq!(first.description(), "objectClass");
        assert_eq!(first.values(), [b"top".to_vec(), b"person".to_vec()]);
    }

    #[test]
    fn unmodifiable_deep_copy() {
        let mut request = AddRequest::new("uid=bob,dc=example,dc=com");
        request.add_attribute(Attribute::new("cn").with_value(b"Bob".to_vec()));

        let mut view = Unmodifiable::new(request);
        assert_eq!(
            view.add_attribute(Attribute::new("sn")),
            Err(RequestError::UnsupportedOperation)
        );

        let mut copy = view.attributes();
        copy.push(Attribute::new("sn"));
        assert_eq!(view.attributes().len(), 1);
        assert_eq!(view.into_inner().attributes().len(), 1);
    }
}
