/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ldapx-OSS developers.
 */

use crate::Control;

use super::impl_request_controls;

/// Terminate the protocol session.
///
/// Carries no fields of its own; the peer closes the connection without
/// answering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnbindRequest {
    controls: Vec<Control>,
}

impl UnbindRequest {
    pub fn new() -> Self {
        Self::default()
    }
}

impl_request_controls!(UnbindRequest);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RequestError;
    use crate::Unmodifiable;
    use crate::request::Request;

    #[test]
    fn controls_only() {
        let mut request = UnbindRequest::new();
        request.add_control(Control::new("1.2.3.4")).unwrap();

        let mut view = Unmodifiable::new(request);
        assert_eq!(
            view.add_control(Control::new("5.6.7.8")),
            Err(RequestError::UnsupportedOperation)
        );
        assert_eq!(view.controls().len(), 1);
    }
}
