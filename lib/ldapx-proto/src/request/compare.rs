/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ldapx-OSS developers.
 */

use crate::{Control, RequestError, Unmodifiable};

use super::impl_request_controls;

/// Compare an assertion value against a single attribute of an entry.
///
/// The entry name is carried as an opaque DN string; schema aware parsing
/// belongs to a collaborator outside this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareRequest {
    name: String,
    attribute_description: String,
    assertion_value: Vec<u8>,
    controls: Vec<Control>,
}

impl CompareRequest {
    pub fn new(
        name: impl Into<String>,
        attribute_description: impl Into<String>,
        assertion_value: Vec<u8>,
    ) -> Self {
        CompareRequest {
            name: name.into(),
            attribute_description: attribute_description.into(),
            assertion_value,
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
    pub fn attribute_description(&self) -> &str {
        &self.attribute_description
    }

    pub fn set_attribute_description(
        &mut self,
        attribute_description: impl Into<String>,
    ) -> Result<&mut Self, RequestError> {
        let attribute_description = attribute_description.into();
        if attribute_description.is_empty() {
            return Err(RequestError::EmptyRequiredField("attribute_description"));
        }
        self.attribute_description = attribute_description;
        Ok(self)
    }

    pub fn assertion_value(&self) -> &[u8] {
        &self.assertion_value
    }

    pub fn set_assertion_value(&mut self, assertion_value: Vec<u8>) -> &mut Self {
        self.assertion_value = assertion_value;
        self
    }
}

impl_request_controls!(CompareRequest);

impl Unmodifiable<CompareRequest> {
    #[inline]
    pub fn name(&self) -> &str {
        self.get_ref().name()
    }

    #[inline]
    pub fn attribute_description(&self) -> &str {
        self.get_ref().attribute_description()
    }

    /// Fresh copy on every call
    pub fn assertion_value(&self) -> Vec<u8> {
        self.get_ref().assertion_value().to_vec()
    }

    pub fn set_name(&mut self, _name: &str) -> Result<(), RequestError> {
        Err(RequestError::UnsupportedOperation)
    }

    pub fn set_assertion_value(&mut self, _value: &[u8]) -> Result<(), RequestError> {
        Err(RequestError::UnsupportedOperation)
    }
}
