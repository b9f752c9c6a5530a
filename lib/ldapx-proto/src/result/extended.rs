/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ldapx-OSS developers.
 */

use smol_str::SmolStr;

use crate::{Control, RequestError, ResultCode, Unmodifiable};

use super::password_modify::PasswordModifyExtendedResult;

/// An extended result in its raw wire form.
///
/// The response OID and payload are optional even on success; non-success
/// results usually carry neither.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericExtendedResult {
    pub(super) result_code: ResultCode,
    pub(super) matched_dn: Option<String>,
    pub(super) diagnostic_message: Option<String>,
    pub(super) oid: Option<SmolStr>,
    pub(super) value: Option<Vec<u8>>,
    pub(super) controls: Vec<Control>,
}

impl GenericExtendedResult {
    pub fn new(result_code: ResultCode) -> Self {
        GenericExtendedResult {
            result_code,
            matched_dn: None,
            diagnostic_message: None,
            oid: None,
            value: None,
            controls: Vec::new(),
        }
    }

    #[inline]
    pub fn result_code(&self) -> ResultCode {
        self.result_code
    }

    pub fn matched_dn(&self) -> Option<&str> {
        self.matched_dn.as_deref()
    }

    pub fn set_matched_dn(&mut self, matched_dn: impl Into<String>) -> &mut Self {
        self.matched_dn = Some(matched_dn.into());
        self
    }

    pub fn diagnostic_message(&self) -> Option<&str> {
        self.diagnostic_message.as_deref()
    }

    pub fn set_diagnostic_message(&mut self, message: impl Into<String>) -> &mut Self {
        self.diagnostic_message = Some(message.into());
        self
    }

    pub fn oid(&self) -> Option<&str> {
        self.oid.as_deref()
    }

    pub fn set_oid(&mut self, oid: impl Into<SmolStr>) -> &mut Self {
        self.oid = Some(oid.into());
        self
    }

    pub fn value(&self) -> Option<&[u8]> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: Option<Vec<u8>>) -> &mut Self {
        self.value = value;
        self
    }

    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    pub fn add_control(&mut self, control: Control) -> &mut Self {
        self.controls.push(control);
        self
    }

    /// Whether this is the Notice Of Disconnection unsolicited notification,
    /// sent by the peer just before it closes the connection
    pub fn is_notice_of_disconnection(&self) -> bool {
        self.oid.as_deref() == Some(crate::oid::NOTICE_OF_DISCONNECTION)
    }
}

impl Unmodifiable<GenericExtendedResult> {
    #[inline]
    pub fn result_code(&self) -> ResultCode {
        self.get_ref().result_code()
    }

    pub fn matched_dn(&self) -> Option<&str> {
        self.get_ref().matched_dn()
    }

    pub fn diagnostic_message(&self) -> Option<&str> {
        self.get_ref().diagnostic_message()
    }

    pub fn oid(&self) -> Option<&str> {
        self.get_ref().oid()
    }

    /// Fresh copy on every call
    pub fn value(&self) -> Option<Vec<u8>> {
        self.get_ref().value().map(<[u8]>::to_vec)
    }

    /// Owned copy of the attached controls
    pub fn controls(&self) -> Vec<Control> {
        self.get_ref().controls().to_vec()
    }

    pub fn set_value(&mut self, _value: Option<Vec<u8>>) -> Result<(), RequestError> {
        Err(RequestError::UnsupportedOperation)
    }

    pub fn add_control(&mut self, _control: Control) -> Result<(), RequestError> {
        Err(RequestError::UnsupportedOperation)
    }
}

/// An extended result that is either still in raw form or already decoded
/// to a known operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtendedResult {
    Generic(GenericExtendedResult),
    PasswordModify(PasswordModifyExtendedResult),
}

impl ExtendedResult {
    pub fn result_code(&self) -> ResultCode {
        match self {
            ExtendedResult::Generic(r) => r.result_code(),
            ExtendedResult::PasswordModify(r) => r.result_code(),
        }
    }

    pub fn controls(&self) -> &[Control] {
        match self {
            ExtendedResult::Generic(r) => r.controls(),
            ExtendedResult::PasswordModify(r) => r.controls(),
        }
    }
}

impl From<GenericExtendedResult> for ExtendedResult {
    fn from(value: GenericExtendedResult) -> Self {
        ExtendedResult::Generic(value)
    }
}

impl From<PasswordModifyExtendedResult> for ExtendedResult {
    fn from(value: PasswordModifyExtendedResult) -> Self {
        ExtendedResult::PasswordModify(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oid;

    #[test]
    fn build() {
        let mut result = GenericExtendedResult::new(ResultCode::NoSuchObject);
        result
            .set_matched_dn("dc=example,dc=com")
            .set_diagnostic_message("entry not found");
        assert_eq!(result.result_code(), ResultCode::NoSuchObject);
        assert_eq!(result.matched_dn(), Some("dc=example,dc=com"));
        assert_eq!(result.diagnostic_message(), Some("entry not found"));
        assert!(result.oid().is_none());
        assert!(result.value().is_none());
    }

    #[test]
    fn notice_of_disconnection() {
        let mut result = GenericExtendedResult::new(ResultCode::Unavailable);
        result
            .set_oid(oid::NOTICE_OF_DISCONNECTION)
            .set_diagnostic_message("shutting down");
        assert!(result.is_notice_of_disconnection());

        let mut result = GenericExtendedResult::new(ResultCode::Success);
        result.set_oid(oid::WHO_AM_I_REQUEST);
        assert!(!result.is_notice_of_disconnection());
        assert!(!GenericExtendedResult::new(ResultCode::Success).is_notice_of_disconnection());
    }

    #[test]
    fn unmodifiable_view() {
        let mut result = GenericExtendedResult::new(ResultCode::Success);
        result.set_oid(oid::WHO_AM_I_REQUEST);
        result.set_value(Some(b"u:bob".to_vec()));

        let mut view = Unmodifiable::new(result);
        assert_eq!(
            view.set_value(None),
            Err(RequestError::UnsupportedOperation)
        );
        assert_eq!(
            view.add_control(Control::new("1.2.3.4")),
            Err(RequestError::UnsupportedOperation)
        );

        let first = view.value().unwrap();
        let mut second = view.value().unwrap();
        assert_eq!(first, second);
        second[0] = 0;
        assert_eq!(view.value().unwrap(), first);

        let result = view.into_inner();
        assert_eq!(result.value(), Some(&b"u:bob"[..]));
        assert!(result.controls().is_empty());
    }
}
