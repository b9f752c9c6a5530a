/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ldapx-OSS developers.
 */

use crate::{Control, RequestError, Unmodifiable};

use super::impl_request_controls;

/// Search scope selector, RFC 4511 section 4.5.1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SearchScope {
    BaseObject = 0,
    SingleLevel = 1,
    WholeSubtree = 2,
}

impl SearchScope {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(SearchScope::BaseObject),
            1 => Some(SearchScope::SingleLevel),
            2 => Some(SearchScope::WholeSubtree),
            _ => None,
        }
    }

    #[inline]
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }
}

/// Search below a base entry for entries matching a filter.
///
/// The base name and filter are carried as opaque strings; schema aware
/// parsing belongs to a collaborator outside this crate. No requested
/// attributes means all user attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    name: String,
    scope: SearchScope,
    filter: String,
    attributes: Vec<String>,
    size_limit: u32,
    time_limit: u32,
    types_only: bool,
    controls: Vec<Control>,
}

impl SearchRequest {
    pub fn new(name: impl Into<String>, scope: SearchScope, filter: impl Into<String>) -> Self {
        SearchRequest {
            name: name.into(),
            scope,
            filter: filter.into(),
            attributes: Vec::new(),
            size_limit: 0,
            time_limit: 0,
            types_only: false,
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
    pub fn scope(&self) -> SearchScope {
        self.scope
    }

    pub fn set_scope(&mut self, scope: SearchScope) -> &mut Self {
        self.scope = scope;
        self
    }

    #[inline]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// The filter is required; empty input is rejected before any state
    /// changes.
    pub fn set_filter(&mut self, filter: impl Into<String>) -> Result<&mut Self, RequestError> {
        let filter = filter.into();
        if filter.is_empty() {
            return Err(RequestError::EmptyRequiredField("filter"));
        }
        self.filter = filter;
        Ok(self)
    }

    pub fn add_attribute(&mut self, attribute: impl Into<String>) -> &mut Self {
        self.attributes.push(attribute.into());
        self
    }

    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Maximum entries to return, zero for no client side limit
    #[inline]
    pub fn size_limit(&self) -> u32 {
        self.size_limit
    }

    pub fn set_size_limit(&mut self, size_limit: u32) -> &mut Self {
        self.size_limit = size_limit;
        self
    }

    /// Maximum seconds the server may spend, zero for no client side limit
    #[inline]
    pub fn time_limit(&self) -> u32 {
        self.time_limit
    }

    pub fn set_time_limit(&mut self, time_limit: u32) -> &mut Self {
        self.time_limit = time_limit;
        self
    }

    #[inline]
    pub fn types_only(&self) -> bool {
        self.types_only
    }

    pub fn set_types_only(&mut self, types_only: bool) -> &mut Self {
        self.types_only = types_only;
        self
    }
}

impl_request_controls!(SearchRequest);

impl Unmodifiable<SearchRequest> {
    #[inline]
    pub fn name(&self) -> &str {
        self.get_ref().name()
    }

    #[inline]
    pub fn scope(&self) -> SearchScope {
        self.get_ref().scope()
    }

    #[inline]
    pub fn filter(&self) -> &str {
        self.get_ref().filter()
    }

    /// Owned copy of the requested attribute list
    pub fn attributes(&self) -> Vec<String> {
        self.get_ref().attributes().to_vec()
    }

    pub fn set_filter(&mut self, _filter: &str) -> Result<(), RequestError> {
        Err(RequestError::UnsupportedOperation)
    }

    pub fn add_attribute(&mut self, _attribute: &str) -> Result<(), RequestError> {
        Err(RequestError::UnsupportedOperation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope() {
        assert_eq!(SearchScope::from_u8(0), Some(SearchScope::BaseObject));
        assert_eq!(SearchScope::from_u8(2), Some(SearchScope::WholeSubtree));
        assert_eq!(SearchScope::from_u8(3), None);
        assert_eq!(SearchScope::SingleLevel.as_u8(), 1);
    }

    #[test]
    fn build() {
        let mut request = SearchRequest::new(
            "ou=people,dc=example,dc=com",
            SearchScope::WholeSubtree,
            "(uid=bob)",
        );
        request.add_attribute("cn").add_attribute("mail");
        request.set_size_limit(100).set_types_only(true);

        assert_eq!(request.scope(), SearchScope::WholeSubtree);
        assert_eq!(request.filter(), "(uid=bob)");
        assert_eq!(request.attributes(), ["cn", "mail"]);
        assert_eq!(request.size_limit(), 100);
        assert_eq!(request.time_limit(), 0);
        assert!(request.types_only());

        let e = request.set_filter("").unwrap_err();
        assert_eq!(e, RequestError::EmptyRequiredField("filter"));
        assert_eq!(request.filter(), "(uid=bob)");
    }

    #[test]
    fn unmodifiable_view() {
        let request = SearchRequest::new("dc=example,dc=com", SearchScope::BaseObject, "(cn=*)");
        let mut view = Unmodifiable::new(request);
        assert_eq!(
            view.set_filter("(sn=*)"),
            Err(RequestError::UnsupportedOperation)
        );
        assert_eq!(
            view.add_attribute("cn"),
            Err(RequestError::UnsupportedOperation)
        );
        assert_eq!(view.filter(), "(cn=*)");
        assert!(view.attributes().is_empty());
    }
}
