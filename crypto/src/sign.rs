//! Ed25519 signing and verification.

use ed25519_dalek::{Signer, SigningKey, Verifier, VerifyingKey};
use sema_types::{PrivateKey, PublicKey, Signature};

/// Sign `message` with `private_key`.
pub fn sign_message(message: &[u8], private_key: &PrivateKey) -> Signature {
    let signing = SigningKey::from_bytes(&private_key.0);
    Signature(signing.sign(message).to_bytes())
}

/// Verify `signature` over `message` against `public_key`.
///
/// Returns `false` for malformed public keys as well as for signatures that
/// do not verify.
pub fn verify_signature(message: &[u8], signature: &Signature, public_key: &PublicKey) -> bool {
    let Ok(verifying) = VerifyingKey::from_bytes(&public_key.0) else {
        return false;
    };
    let sig = ed25519_dalek::Signature::from_bytes(&signature.0);
    verifying.verify(message, &sig).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{generate_keypair, keypair_from_seed};

    #[test]
    fn sign_and_verify() {
        let kp = generate_keypair();
        let sig = sign_message(b"sema transfer", &kp.private);
        assert!(verify_signature(b"sema transfer", &sig, &kp.public));
    }

    #[test]
    fn wrong_message_fails() {
        let kp = generate_keypair();
        let sig = sign_message(b"original", &kp.private);
        assert!(!verify_signature(b"tampered", &sig, &kp.public));
    }

    #[test]
    fn wrong_key_fails() {
        let signer = generate_keypair();
        let other = generate_keypair();
        let sig = sign_message(b"message", &signer.private);
        assert!(!verify_signature(b"message", &sig, &other.public));
    }

    #[test]
    fn signatures_are_deterministic() {
        let kp = keypair_from_seed(&[42u8; 32]);
        let a = sign_message(b"message", &kp.private);
        let b = sign_message(b"message", &kp.private);
        assert_eq!(a, b);
    }

    #[test]
    fn malformed_public_key_rejected() {
        let kp = generate_keypair();
        let sig = sign_message(b"message", &kp.private);
        assert!(!verify_signature(b"message", &sig, &PublicKey([0xFF; 32])));
    }
}
