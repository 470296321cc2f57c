//! Network parameters consulted by transaction execution.
//!
//! These are ambient constants for a given network, not governance-tunable
//! runtime state.

use crate::amount::{Amount, SEM};
use crate::network::Network;
use serde::{Deserialize, Serialize};

/// Execution-relevant constants of a network.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkParams {
    pub network: Network,

    /// Lowest fee a transaction may carry. Fees are burned.
    pub min_transaction_fee: Amount,

    /// Exact value a delegate-registration transaction must burn.
    pub min_delegate_burn_amount: Amount,
}

impl NetworkParams {
    pub fn mainnet() -> Self {
        Self::for_network(Network::Mainnet)
    }

    pub fn testnet() -> Self {
        Self::for_network(Network::Testnet)
    }

    pub fn devnet() -> Self {
        Self::for_network(Network::Devnet)
    }

    /// The fee schedule is currently uniform across networks:
    /// 0.005 SEM minimum fee, 1000 SEM delegate burn.
    pub fn for_network(network: Network) -> Self {
        Self {
            network,
            min_transaction_fee: Amount::from_nano(5_000_000),
            min_delegate_burn_amount: SEM.of(1000),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amount::NANO_SEM;

    #[test]
    fn fee_schedule() {
        let params = NetworkParams::devnet();
        assert_eq!(params.network, Network::Devnet);
        assert_eq!(params.min_transaction_fee, NANO_SEM.of(5_000_000));
        assert_eq!(params.min_delegate_burn_amount, SEM.of(1000));
    }
}
