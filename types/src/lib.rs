//! Fundamental types for the Sema ledger.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: amounts, addresses, hashes, key material, network identifiers
//! and protocol parameters.

pub mod address;
pub mod amount;
pub mod keys;
pub mod network;
pub mod params;
pub mod time;
pub mod tx_hash;

pub use address::Address;
pub use amount::{Amount, AmountError, ParseAmountError, Unit, NANO_SEM, SEM};
pub use keys::{KeyPair, PrivateKey, PublicKey, Signature};
pub use network::Network;
pub use params::NetworkParams;
pub use time::Timestamp;
pub use tx_hash::TxHash;
