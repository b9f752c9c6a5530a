/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ldapx-OSS developers.
 */

use crate::request::Request;
use crate::{Control, RequestError};

/// Read-only facade over a request or result value object.
///
/// The facade owns the wrapped value. Byte string accessors hand out a fresh
/// copy on every call, so a caller can never alias internal buffers. Every
/// mutator fails with [`RequestError::UnsupportedOperation`] before touching
/// the wrapped value; that is a caller contract violation, not an
/// environmental failure.
///
/// The wrapped value can only be recovered through [`Unmodifiable::into_inner`],
/// which consumes the facade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unmodifiable<R> {
    inner: R,
}

impl<R> Unmodifiable<R> {
    pub fn new(inner: R) -> Self {
        Unmodifiable { inner }
    }

    /// Shared borrow of the wrapped value
    #[inline]
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Consume the facade and hand the wrapped value back
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Request> Request for Unmodifiable<R> {
    fn controls(&self) -> &[Control] {
        self.inner.controls()
    }

    fn add_control(&mut self, _control: Control) -> Result<(), RequestError> {
        Err(RequestError::UnsupportedOperation)
    }

    fn clear_controls(&mut self) -> Result<(), RequestError> {
        Err(RequestError::UnsupportedOperation)
    }
}

impl<R> Unmodifiable<R>
where
    R: Request,
{
    /// Owned copy of the attached controls
    pub fn controls_vec(&self) -> Vec<Control> {
        self.inner.controls().to_vec()
    }
}
