//! Address derivation.
//!
//! An account address is the trailing 20 bytes of the Blake2b-256 digest of
//! the account's public key. Hashing before truncation means the address
//! reveals nothing about the key's structure, and two distinct keys collide
//! only with negligible probability.

use crate::hash::blake2b_256;
use sema_types::{Address, PublicKey};

/// Derive the 20-byte account address owned by `public_key`.
pub fn address_of_pubkey(public_key: &PublicKey) -> Address {
    let digest = blake2b_256(public_key.as_bytes());
    let mut bytes = [0u8; 20];
    bytes.copy_from_slice(&digest[12..]);
    Address::new(bytes)
}
