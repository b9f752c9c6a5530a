/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ldapx-OSS developers.
 */

mod error;
pub use error::{DecodeError, RequestError};

mod control;
pub use control::Control;

mod result_code;
pub use result_code::ResultCode;

pub mod oid;

pub mod request;
pub mod result;

mod unmodifiable;
pub use unmodifiable::Unmodifiable;
