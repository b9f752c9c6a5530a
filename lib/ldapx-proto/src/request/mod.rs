/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ldapx-OSS developers.
 */

use crate::{Control, RequestError};

mod abandon;
pub use abandon::AbandonRequest;

mod add;
pub use add::{AddRequest, Attribute};

mod bind;
pub use bind::{GenericBindRequest, SimpleBindRequest};

mod sasl;
pub use sasl::{
    AnonymousSaslBindRequest, CramMd5SaslBindRequest, DigestMd5SaslBindRequest,
    ExternalSaslBindRequest, GssApiSaslBindRequest, PlainSaslBindRequest, SaslBindRequest,
};

mod compare;
pub use compare::CompareRequest;

mod delete;
pub use delete::DeleteRequest;

mod modify;
pub use modify::{Modification, ModificationType, ModifyRequest};

mod modify_dn;
pub use modify_dn::ModifyDnRequest;

mod search;
pub use search::{SearchRequest, SearchScope};

mod unbind;
pub use unbind::UnbindRequest;

mod extended;
pub use extended::{
    ExtendedRequest, GenericExtendedRequest, StartTlsExtendedRequest, WhoAmIExtendedRequest,
};

mod password_modify;
pub use password_modify::PasswordModifyExtendedRequest;

/// Capability surface shared by every request kind.
///
/// Each concrete request owns its control list; this trait is the seam the
/// unmodifiable facade plugs into, in place of a base-class hierarchy.
pub trait Request {
    /// All controls attached to this request
    fn controls(&self) -> &[Control];

    /// Attach a control. Fails on unmodifiable views.
    fn add_control(&mut self, control: Control) -> Result<(), RequestError>;

    /// Drop all attached controls. Fails on unmodifiable views.
    fn clear_controls(&mut self) -> Result<(), RequestError>;
}

macro_rules! impl_request_controls {
    ($request:ty) => {
        impl crate::request::Request for $request {
            fn controls(&self) -> &[crate::Control] {
                &self.controls
            }

            fn add_control(
                &mut self,
                control: crate::Control,
            ) -> Result<(), crate::RequestError> {
                self.controls.push(control);
                Ok(())
            }

            fn clear_controls(&mut self) -> Result<(), crate::RequestError> {
                self.controls.clear();
                Ok(())
            }
        }
    };
}
pub(crate) use impl_request_controls;
