/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ldapx-OSS developers.
 */

use crate::{Control, RequestError, Unmodifiable};

use super::impl_request_controls;

/// Rename an entry and optionally move it below a new superior
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifyDnRequest {
    name: String,
    new_rdn: String,
    delete_old_rdn: bool,
    new_superior: Option<String>,
    controls: Vec<Control>,
}

impl ModifyDnRequest {
    pub fn new(name: impl Into<String>, new_rdn: impl Into<String>) -> Self {
        ModifyDnRequest {
            name: name.into(),
            new_rdn: new_rdn.into(),
            delete_old_rdn: false,
            new_superior: None,
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
    pub fn new_rdn(&self) -> &str {
        &self.new_rdn
    }

    pub fn set_new_rdn(&mut self, new_rdn: impl Into<String>) -> Result<&mut Self, RequestError> {
        let new_rdn = new_rdn.into();
        if new_rdn.is_empty() {
            return Err(RequestError::EmptyRequiredField("new_rdn"));
        }
        self.new_rdn = new_rdn;
        Ok(self)
    }

    #[inline]
    pub fn delete_old_rdn(&self) -> bool {
        self.delete_old_rdn
    }

    pub fn set_delete_old_rdn(&mut self, delete_old_rdn: bool) -> &mut Self {
        self.delete_old_rdn = delete_old_rdn;
        self
    }

    pub fn new_superior(&self) -> Option<&str> {
        self.new_superior.as_deref()
    }

    pub fn set_new_superior(&mut self, new_superior: impl Into<String>) -> &mut Self {
        self.new_superior = Some(new_superior.into());
        self
    }
}

impl_request_controls!(ModifyDnRequest);

impl Unmodifiable<ModifyDnRequest> {
    #[inline]
    pub fn name(&self) -> &str {
        self.get_ref().name()
    }

    #[inline]
    pub fn new_rdn(&self) -> &str {
        self.get_ref().new_rdn()
    }

    #[inline]
    pub fn delete_old_rdn(&self) -> bool {
        self.get_ref().delete_old_rdn()
    }

    pub fn new_superior(&self) -> Option<&str> {
        self.get_ref().new_superior()
    }

    pub fn set_new_rdn(&mut self, _new_rdn: &str) -> Result<(), RequestError> {
        Err(RequestError::UnsupportedOperation)
    }

    pub fn set_delete_old_rdn(&mut self, _delete_old_rdn: bool) -> Result<(), RequestError> {
        Err(RequestError::UnsupportedOperation)
    }
}
