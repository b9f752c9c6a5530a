/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ldapx-OSS developers.
 */

use crate::{Control, RequestError, Unmodifiable};

use super::impl_request_controls;

/// Modification operation selector, RFC 4511 section 4.6
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ModificationType {
    Add = 0,
    Delete = 1,
    Replace = 2,
    /// RFC 4525 increment extension
    Increment = 3,
}

impl ModificationType {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(ModificationType::Add),
            1 => Some(ModificationType::Delete),
            2 => Some(ModificationType::Replace),
            3 => Some(ModificationType::Increment),
            _ => None,
        }
    }

    #[inline]
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }
}

/// One attribute change inside a modify request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modification {
    operation: ModificationType,
    attribute_description: String,
    values: Vec<Vec<u8>>,
}

impl Modification {
    pub fn new(operation: ModificationType, attribute_description: impl Into<String>) -> Self {
        Modification {
            operation,
            attribute_description: attribute_description.into(),
            values: Vec::new(),
        }
    }

    pub fn with_value(mut self, value: Vec<u8>) -> Self {
        self.values.push(value);
        self
    }

    #[inline]
    pub fn operation(&self) -> ModificationType {
        self.operation
    }

    #[inline]
    pub fn attribute_description(&self) -> &str {
        &self.attribute_description
    }

    pub fn values(&self) -> &[Vec<u8>] {
        &self.values
    }
}

/// Modify the attributes of an entry named by an opaque DN string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifyRequest {
    name: String,
    modifications: Vec<Modification>,
    controls: Vec<Control>,
}

impl ModifyRequest {
    pub fn new(name: impl Into<String>) -> Self {
        ModifyRequest {
            name: name.into(),
            modifications: Vec::new(),
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

    pub fn add_modification(&mut self, modification: Modification) -> &mut Self {
        self.modifications.push(modification);
        self
    }

    pub fn modifications(&self) -> &[Modification] {
        &self.modifications
    }
}

impl_request_controls!(ModifyRequest);

impl Unmodifiable<ModifyRequest> {
    #[inline]
    pub fn name(&self) -> &str {
        self.get_ref().name()
    }

    /// Owned copy of the modification list, elements included
    pub fn modifications(&self) -> Vec<Modification> {
        self.get_ref().modifications().to_vec()
    }

    pub fn add_modification(&mut self, _modification: Modification) -> Result<(), RequestError> {
        Err(RequestError::UnsupportedOperation)
    }

    pub fn set_name(&mut self, _name: &str) -> Result<(), RequestError> {
        Err(RequestError::UnsupportedOperation)
    }
}
