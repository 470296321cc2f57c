//! Account addresses.
//!
//! An address is 20 opaque bytes derived from the account's public key. The
//! all-zero address is reserved: it is the mandatory recipient marker for
//! delegate registrations and is otherwise a burn sink.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 20-byte account identifier.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Address([u8; 20]);

impl Address {
    pub const LEN: usize = 20;

    /// The distinguished all-zero address.
    pub const EMPTY: Self = Self([0u8; 20]);

    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Whether this is the reserved all-zero address.
    pub fn is_empty(&self) -> bool {
        self.0 == [0u8; 20]
    }

    /// Parse from a byte slice; `None` unless it is exactly 20 bytes.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        let bytes: [u8; 20] = bytes.try_into().ok()?;
        Some(Self(bytes))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address(")?;
        for b in &self.0[..4] {
            write!(f, "{:02x}", b)?;
        }
        write!(f, "..)")
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_all_zero() {
        assert!(Address::EMPTY.is_empty());
        assert!(!Address::new([1u8; 20]).is_empty());
    }

    #[test]
    fn from_slice_checks_length() {
        assert!(Address::from_slice(&[0u8; 20]).is_some());
        assert!(Address::from_slice(&[0u8; 19]).is_none());
        assert!(Address::from_slice(&[0u8; 21]).is_none());
    }

    #[test]
    fn display_is_full_hex() {
        let addr = Address::new([0xAB; 20]);
        assert_eq!(addr.to_string(), "ab".repeat(20));
    }
}
