/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ldapx-OSS developers.
 */

use smol_str::SmolStr;

/// A protocol control attached to a request or result.
///
/// Controls are opaque at this layer: they are carried and copied across
/// decode boundaries but never interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    oid: SmolStr,
    critical: bool,
    value: Option<Vec<u8>>,
}

impl Control {
    pub fn new(oid: impl Into<SmolStr>) -> Self {
        Control {
            oid: oid.into(),
            critical: false,
            value: None,
        }
    }

    pub fn with_criticality(mut self, critical: bool) -> Self {
        self.critical = critical;
        self
    }

    pub fn with_value(mut self, value: Vec<u8>) -> Self {
        self.value = Some(value);
        self
    }

    #[inline]
    pub fn oid(&self) -> &str {
        &self.oid
    }

    #[inline]
    pub fn is_critical(&self) -> bool {
        self.critical
    }

    pub fn value(&self) -> Option<&[u8]> {
        self.value.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build() {
        let control = Control::new("1.2.840.113556.1.4.473")
            .with_criticality(true)
            .with_value(vec![0x30, 0x00]);
        assert_eq!(control.oid(), "1.2.840.113556.1.4.473");
        assert!(control.is_critical());
        assert_eq!(control.value(), Some(&[0x30u8, 0x00][..]));

        let control = Control::new("2.16.840.1.113730.3.4.2");
        assert!(!control.is_critical());
        assert!(control.value().is_none());
    }
}
