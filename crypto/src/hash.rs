//! Blake2b-256 hashing.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use sema_types::TxHash;

type Blake2b256 = Blake2b<U32>;

/// 256-bit Blake2b digest of `data`.
pub fn blake2b_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    hasher.update(data);
    let digest = hasher.finalize();
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    out
}

/// Hash a canonical transaction payload to its [`TxHash`].
pub fn hash_transaction(payload: &[u8]) -> TxHash {
    TxHash::new(blake2b_256(payload))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic() {
        assert_eq!(blake2b_256(b"sema"), blake2b_256(b"sema"));
    }

    #[test]
    fn input_sensitive() {
        assert_ne!(blake2b_256(b"sema"), blake2b_256(b"semb"));
    }

    #[test]
    fn transaction_hash_nonzero() {
        assert!(!hash_transaction(b"payload").is_zero());
        assert!(!hash_transaction(b"").is_zero());
    }
}
