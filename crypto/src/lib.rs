//! Cryptographic operations for the Sema ledger.
//!
//! The rest of the workspace treats this crate as a facade: Blake2b-256
//! hashing, Ed25519 signing/verification, and derivation of 20-byte account
//! addresses from public keys. Key and signature *types* live in
//! `sema_types`; only the operations live here.

pub mod address;
pub mod hash;
pub mod keys;
pub mod sign;

pub use address::address_of_pubkey;
pub use hash::{blake2b_256, hash_transaction};
pub use keys::{generate_keypair, keypair_from_seed, public_from_private};
pub use sign::{sign_message, verify_signature};
