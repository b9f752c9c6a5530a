/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ldapx-OSS developers.
 */

use crate::{Control, RequestError, Unmodifiable};

use super::impl_request_controls;

/// Abandon a previously issued operation by its message id.
///
/// The peer never answers an abandon; delivery is fire and forget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbandonRequest {
    request_id: i32,
    controls: Vec<Control>,
}

impl AbandonRequest {
    pub fn new(request_id: i32) -> Self {
        AbandonRequest {
            request_id,
            controls: Vec::new(),
        }
    }

    #[inline]
    pub fn request_id(&self) -> i32 {
        self.request_id
    }

    pub fn set_request_id(&mut self, request_id: i32) -> &mut Self {
        self.request_id = request_id;
        self
    }
}

impl_request_controls!(AbandonRequest);

impl Unmodifiable<AbandonRequest> {
    #[inline]
    pub fn request_id(&self) -> i32 {
        self.get_ref().request_id()
    }

    pub fn set_request_id(&mut self, _request_id: i32) -> Result<(), RequestError> {
        Err(RequestError::UnsupportedOperation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build() {
        let request = AbandonRequest::new(42);
        assert_eq!(request.request_id(), 42);

        let mut view = Unmodifiable::new(request);
        assert_eq!(view.set_request_id(7), Err(RequestError::UnsupportedOperation));
        assert_eq!(view.request_id(), 42);
    }
}
