//! Ed25519 key pair construction.

use ed25519_dalek::SigningKey;
use rand::rngs::OsRng;
use sema_types::{KeyPair, PrivateKey, PublicKey};

/// Generate a key pair from the operating system's secure random source.
pub fn generate_keypair() -> KeyPair {
    let signing = SigningKey::generate(&mut OsRng);
    keypair_from_signing(signing)
}

/// Deterministically derive a key pair from a 32-byte seed.
pub fn keypair_from_seed(seed: &[u8; 32]) -> KeyPair {
    keypair_from_signing(SigningKey::from_bytes(seed))
}

/// Derive the public key matching a private key.
pub fn public_from_private(private: &PrivateKey) -> PublicKey {
    let signing = SigningKey::from_bytes(&private.0);
    PublicKey(signing.verifying_key().to_bytes())
}

fn keypair_from_signing(signing: SigningKey) -> KeyPair {
    KeyPair {
        public: PublicKey(signing.verifying_key().to_bytes()),
        private: PrivateKey(signing.to_bytes()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_keys_are_distinct() {
        let a = generate_keypair();
        let b = generate_keypair();
        assert_ne!(a.public, b.public);
    }

    #[test]
    fn seed_derivation_is_deterministic() {
        let a = keypair_from_seed(&[5u8; 32]);
        let b = keypair_from_seed(&[5u8; 32]);
        assert_eq!(a.public, b.public);
        assert_eq!(a.private.0, b.private.0);
    }

    #[test]
    fn public_matches_private() {
        let kp = keypair_from_seed(&[9u8; 32]);
        assert_eq!(public_from_private(&kp.private), kp.public);
    }
}
