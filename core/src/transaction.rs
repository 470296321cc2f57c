//! Signed transactions and their canonical wire codec.
//!
//! The payload encoding is the signing preimage and therefore fixed by the
//! protocol, byte for byte: big-endian integers, a length-prefixed `data`
//! field, nothing else. The transaction hash is the Blake2b-256 digest of
//! that payload; the signature (plus the signer's public key, from which the
//! sender address is derived) is appended after it on the wire.

use sema_crypto::{address_of_pubkey, hash_transaction, sign_message, verify_signature};
use sema_types::{Address, Amount, KeyPair, Network, PublicKey, Signature, Timestamp, TxHash};
use thiserror::Error;

/// Upper bound on the free-form `data` field, in bytes.
pub const MAX_DATA_SIZE: usize = 128;

/// Fixed-size part of the payload: network, kind, recipient, value, fee,
/// nonce, timestamp and the data length prefix.
const PAYLOAD_FIXED_LEN: usize = 1 + 1 + 20 + 8 + 8 + 8 + 8 + 4;

/// Trailer appended to the payload on the wire: signature plus public key.
const SEAL_LEN: usize = 64 + 32;

/// The closed set of transaction kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    /// Move available funds to any address (the empty address burns them).
    Transfer,
    /// Register the sender as a named delegate, burning the registration value.
    Delegate,
    /// Lock available funds onto a registered delegate.
    Vote,
    /// Release previously locked funds from a delegate.
    Unvote,
}

impl TransactionKind {
    /// Wire id, the second byte of the payload.
    pub const fn id(self) -> u8 {
        match self {
            Self::Transfer => 0,
            Self::Delegate => 1,
            Self::Vote => 2,
            Self::Unvote => 3,
        }
    }

    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(Self::Transfer),
            1 => Some(Self::Delegate),
            2 => Some(Self::Vote),
            3 => Some(Self::Unvote),
            _ => None,
        }
    }
}

/// Why a transaction failed structural validation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InvalidTransaction {
    #[error("transaction is not signed")]
    Unsigned,

    #[error("transaction hash does not match its payload")]
    HashMismatch,

    #[error("signature does not verify against the transaction hash")]
    BadSignature,

    #[error("transaction targets network {actual}, expected {expected}")]
    WrongNetwork { expected: Network, actual: Network },

    #[error("data field is {0} bytes, limit is {MAX_DATA_SIZE}")]
    OversizedData(usize),
}

/// Why wire bytes failed to decode into a transaction.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("transaction bytes truncated")]
    Truncated,

    #[error("unknown network id {0}")]
    UnknownNetwork(u8),

    #[error("unknown transaction kind {0}")]
    UnknownKind(u8),

    #[error("declared data length {0} exceeds the {MAX_DATA_SIZE}-byte limit")]
    OversizedData(u32),

    #[error("{0} trailing bytes after the signature")]
    TrailingBytes(usize),
}

/// Signature envelope: the Ed25519 signature over the hash plus the signer's
/// public key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxSignature {
    pub signature: Signature,
    pub public_key: PublicKey,
}

/// An immutable transaction record.
///
/// Fields are private: a transaction is assembled by [`Transaction::new`],
/// sealed by [`Transaction::sign`], and never modified afterwards. The hash
/// is derived from the payload at construction time.
#[derive(Clone, Debug, PartialEq)]
pub struct Transaction {
    network: Network,
    kind: TransactionKind,
    to: Address,
    value: Amount,
    fee: Amount,
    nonce: u64,
    timestamp: Timestamp,
    data: Vec<u8>,
    hash: TxHash,
    signature: Option<TxSignature>,
}

impl Transaction {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        network: Network,
        kind: TransactionKind,
        to: Address,
        value: Amount,
        fee: Amount,
        nonce: u64,
        timestamp: Timestamp,
        data: Vec<u8>,
    ) -> Self {
        let mut tx = Self {
            network,
            kind,
            to,
            value,
            fee,
            nonce,
            timestamp,
            data,
            hash: TxHash::ZERO,
            signature: None,
        };
        tx.hash = hash_transaction(&tx.encode_payload());
        tx
    }

    /// Sign the transaction, fixing its sender. Consumes and returns `self`
    /// so a signed transaction is never half-built.
    pub fn sign(mut self, key: &KeyPair) -> Self {
        let signature = sign_message(self.hash.as_bytes(), &key.private);
        self.signature = Some(TxSignature {
            signature,
            public_key: key.public.clone(),
        });
        self
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn to(&self) -> Address {
        self.to
    }

    pub fn value(&self) -> Amount {
        self.value
    }

    pub fn fee(&self) -> Amount {
        self.fee
    }

    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn hash(&self) -> TxHash {
        self.hash
    }

    pub fn signature(&self) -> Option<&TxSignature> {
        self.signature.as_ref()
    }

    /// Sender address, derived from the signer's public key. `None` until
    /// the transaction is signed.
    pub fn sender(&self) -> Option<Address> {
        self.signature
            .as_ref()
            .map(|seal| address_of_pubkey(&seal.public_key))
    }

    /// The canonical signing preimage.
    pub fn encode_payload(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(PAYLOAD_FIXED_LEN + self.data.len());
        buf.push(self.network.id());
        buf.push(self.kind.id());
        buf.extend_from_slice(self.to.as_bytes());
        buf.extend_from_slice(&self.value.nano().to_be_bytes());
        buf.extend_from_slice(&self.fee.nano().to_be_bytes());
        buf.extend_from_slice(&self.nonce.to_be_bytes());
        buf.extend_from_slice(&self.timestamp.as_millis().to_be_bytes());
        buf.extend_from_slice(&(self.data.len() as u32).to_be_bytes());
        buf.extend_from_slice(&self.data);
        buf
    }

    /// Full wire form: payload followed by `signature:64 | public_key:32`.
    /// Unsigned transactions have no wire form.
    pub fn to_bytes(&self) -> Option<Vec<u8>> {
        let seal = self.signature.as_ref()?;
        let mut buf = self.encode_payload();
        buf.reserve(SEAL_LEN);
        buf.extend_from_slice(seal.signature.as_bytes());
        buf.extend_from_slice(seal.public_key.as_bytes());
        Some(buf)
    }

    /// Decode a signed transaction off the wire. The hash is recomputed from
    /// the payload; signature verification is left to [`Transaction::validate`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        let mut reader = Reader { bytes, pos: 0 };

        let network_id = reader.array::<1>()?[0];
        let network = Network::from_id(network_id).ok_or(DecodeError::UnknownNetwork(network_id))?;
        let kind_id = reader.array::<1>()?[0];
        let kind = TransactionKind::from_id(kind_id).ok_or(DecodeError::UnknownKind(kind_id))?;
        let to = Address::new(reader.array()?);
        let value = Amount::from_nano(u64::from_be_bytes(reader.array()?));
        let fee = Amount::from_nano(u64::from_be_bytes(reader.array()?));
        let nonce = u64::from_be_bytes(reader.array()?);
        let timestamp = Timestamp::new(i64::from_be_bytes(reader.array()?));
        let data_len = u32::from_be_bytes(reader.array()?);
        if data_len as usize > MAX_DATA_SIZE {
            return Err(DecodeError::OversizedData(data_len));
        }
        let data = reader.take(data_len as usize)?.to_vec();
        let signature = Signature(reader.array()?);
        let public_key = PublicKey(reader.array()?);
        if reader.pos != bytes.len() {
            return Err(DecodeError::TrailingBytes(bytes.len() - reader.pos));
        }

        let mut tx = Self::new(network, kind, to, value, fee, nonce, timestamp, data);
        tx.signature = Some(TxSignature {
            signature,
            public_key,
        });
        Ok(tx)
    }

    /// Structural validation: everything checkable without state.
    ///
    /// Verifies that the hash is nonzero and matches the payload, the data
    /// field is within bounds, the transaction is signed for `network`, and
    /// the signature verifies over the hash. (`value` and `fee` are
    /// non-negative by construction.)
    pub fn validate(&self, network: Network) -> Result<(), InvalidTransaction> {
        if self.network != network {
            return Err(InvalidTransaction::WrongNetwork {
                expected: network,
                actual: self.network,
            });
        }
        if self.data.len() > MAX_DATA_SIZE {
            return Err(InvalidTransaction::OversizedData(self.data.len()));
        }
        if self.hash.is_zero() || self.hash != hash_transaction(&self.encode_payload()) {
            return Err(InvalidTransaction::HashMismatch);
        }
        let seal = self.signature.as_ref().ok_or(InvalidTransaction::Unsigned)?;
        if !verify_signature(self.hash.as_bytes(), &seal.signature, &seal.public_key) {
            return Err(InvalidTransaction::BadSignature);
        }
        Ok(())
    }
}

struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn take(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        let end = self.pos.checked_add(len).ok_or(DecodeError::Truncated)?;
        if end > self.bytes.len() {
            return Err(DecodeError::Truncated);
        }
        let slice = &self.bytes[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let slice = self.take(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(slice);
        Ok(out)
    }
}
