//! Outcome of executing one transaction.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Receipt codes for rejected transactions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionError {
    /// A kind-specific precondition failed (wrong recipient, wrong burn value).
    Invalid,
    /// Structural validation failed: encoding, hash, signature or network.
    InvalidFormat,
    /// The transaction nonce does not match the sender's account nonce.
    InvalidNonce,
    /// The fee is below the network minimum.
    InvalidFee,
    /// Delegate registration failed: bad name, or address/name already taken.
    InvalidDelegating,
    /// The vote target is not a registered delegate.
    InvalidVoting,
    /// The sender's available balance cannot cover the required funds.
    InsufficientAvailable,
    /// The sender's locked balance or vote edge cannot cover the unvote.
    InsufficientLocked,
}

impl TransactionError {
    /// Wire code as it appears in block receipts.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Invalid => "INVALID",
            Self::InvalidFormat => "INVALID_FORMAT",
            Self::InvalidNonce => "INVALID_NONCE",
            Self::InvalidFee => "INVALID_FEE",
            Self::InvalidDelegating => "INVALID_DELEGATING",
            Self::InvalidVoting => "INVALID_VOTING",
            Self::InsufficientAvailable => "INSUFFICIENT_AVAILABLE",
            Self::InsufficientLocked => "INSUFFICIENT_LOCKED",
        }
    }
}

impl fmt::Display for TransactionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Result of one `execute` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransactionResult {
    /// Every guard passed and every state delta was applied.
    Success {
        /// Event records emitted during execution.
        logs: Vec<Vec<u8>>,
        /// Opaque return payload.
        return_data: Vec<u8>,
    },
    /// A guard failed; the staged views were left untouched.
    Rejected(TransactionError),
}

impl TransactionResult {
    /// A success with no logs and no return payload.
    pub const fn success() -> Self {
        Self::Success {
            logs: Vec::new(),
            return_data: Vec::new(),
        }
    }

    pub const fn rejected(error: TransactionError) -> Self {
        Self::Rejected(error)
    }

    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub const fn error(&self) -> Option<TransactionError> {
        match self {
            Self::Success { .. } => None,
            Self::Rejected(error) => Some(*error),
        }
    }

    /// Receipt code: `SUCCESS` or the rejection's wire code.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Success { .. } => "SUCCESS",
            Self::Rejected(error) => error.code(),
        }
    }
}

impl fmt::Display for TransactionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
