//! Network identifier.
//!
//! The network byte is part of every transaction's signing preimage, so a
//! transaction signed for one network can never replay on another.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies which Sema network a transaction or node belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Network {
    /// The production network.
    Mainnet,
    /// The public test network.
    Testnet,
    /// Local development network.
    Devnet,
}

impl Network {
    /// Wire id, the first byte of the transaction payload.
    pub const fn id(self) -> u8 {
        match self {
            Self::Mainnet => 0,
            Self::Testnet => 1,
            Self::Devnet => 2,
        }
    }

    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(Self::Mainnet),
            1 => Some(Self::Testnet),
            2 => Some(Self::Devnet),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
            Self::Devnet => "devnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_ids_roundtrip() {
        for network in [Network::Mainnet, Network::Testnet, Network::Devnet] {
            assert_eq!(Network::from_id(network.id()), Some(network));
        }
        assert_eq!(Network::from_id(3), None);
    }
}
