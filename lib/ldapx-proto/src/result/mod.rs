/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ldapx-OSS developers.
 */

mod extended;
pub use extended::{ExtendedResult, GenericExtendedResult};

mod password_modify;
pub use password_modify::PasswordModifyExtendedResult;
