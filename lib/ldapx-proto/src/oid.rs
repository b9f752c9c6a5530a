/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ldapx-OSS developers.
 */

//! Well known operation OID strings

/// Password Modify extended operation, RFC 3062
pub const PASSWORD_MODIFY_REQUEST: &str = "1.3.6.1.4.1.4203.1.11.1";

/// StartTLS extended operation, RFC 4511
pub const START_TLS_REQUEST: &str = "1.3.6.1.4.1.1466.20037";

/// Who Am I? extended operation, RFC 4532
pub const WHO_AM_I_REQUEST: &str = "1.3.6.1.4.1.4203.1.11.3";

/// Notice Of Disconnection unsolicited notification, RFC 4511
pub const NOTICE_OF_DISCONNECTION: &str = "1.3.6.1.4.1.1466.20036";
