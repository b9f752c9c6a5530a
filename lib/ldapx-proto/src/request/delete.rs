/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ldapx-OSS developers.
 */

use crate::{Control, RequestError, Unmodifiable};

use super::impl_request_controls;

/// Delete an entry named by an opaque DN string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteRequest {
    name: String,
    controls: Vec<Control>,
}

impl DeleteRequest {
    pub fn new(name: impl Into<String>) -> Self {
        DeleteRequest {
            name: name.into(),
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
}

impl_request_controls!(DeleteRequest);

impl Unmodifiable<DeleteRequest> {
    #[inline]
    pub fn name(&self) -> &str {
        self.get_ref().name()
    }

    pub fn set_name(&mut self, _name: &str) -> Result<(), RequestError> {
        Err(RequestError::UnsupportedOperation)
    }
}
