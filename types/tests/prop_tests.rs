use proptest::prelude::*;

use sema_types::{Address, Amount, AmountError, Network, Timestamp, TxHash, NANO_SEM, SEM};

proptest! {
    /// Address roundtrip: new -> as_bytes produces identical bytes.
    #[test]
    fn address_roundtrip(bytes in prop::array::uniform20(0u8..)) {
        let addr = Address::new(bytes);
        prop_assert_eq!(addr.as_bytes(), &bytes);
        prop_assert_eq!(Address::from_slice(&bytes), Some(addr));
    }

    /// Address::is_empty holds only for the all-zero address.
    #[test]
    fn address_is_empty_correct(bytes in prop::array::uniform20(0u8..)) {
        prop_assert_eq!(Address::new(bytes).is_empty(), bytes == [0u8; 20]);
    }

    /// TxHash roundtrip and zero detection.
    #[test]
    fn tx_hash_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let hash = TxHash::new(bytes);
        prop_assert_eq!(hash.as_bytes(), &bytes);
        prop_assert_eq!(hash.is_zero(), bytes == [0u8; 32]);
    }

    /// Amount sum agrees with widened integer addition.
    #[test]
    fn amount_sum(a in any::<u64>(), b in any::<u64>()) {
        let result = Amount::from_nano(a).sum(Amount::from_nano(b));
        match a.checked_add(b) {
            Some(total) => prop_assert_eq!(result, Ok(Amount::from_nano(total))),
            None => prop_assert_eq!(result, Err(AmountError::ArithmeticOverflow)),
        }
    }

    /// Amount sub fails exactly when the subtrahend is larger.
    #[test]
    fn amount_sub(a in any::<u64>(), b in any::<u64>()) {
        let result = Amount::from_nano(a).sub(Amount::from_nano(b));
        if b > a {
            prop_assert_eq!(result, Err(AmountError::ArithmeticUnderflow));
        } else {
            prop_assert_eq!(result, Ok(Amount::from_nano(a - b)));
        }
    }

    /// ZERO is the additive identity.
    #[test]
    fn amount_zero_identity(a in any::<u64>()) {
        let a = Amount::from_nano(a);
        prop_assert_eq!(a.sum(Amount::ZERO), Ok(a));
        prop_assert_eq!(a.sub(Amount::ZERO), Ok(a));
    }

    /// Unit conversions: SEM.of scales by 10^9, NANO_SEM.of is the identity.
    #[test]
    fn unit_of(units in 0u64..u64::MAX / 1_000_000_000) {
        prop_assert_eq!(NANO_SEM.of(units).nano(), units);
        prop_assert_eq!(SEM.of(units).nano(), units * 1_000_000_000);
    }

    /// Display/parse roundtrip is exact for every representable amount.
    #[test]
    fn amount_display_parse_roundtrip(nano in any::<u64>()) {
        let amount = Amount::from_nano(nano);
        let formatted = amount.to_string();
        prop_assert_eq!(formatted.parse::<Amount>(), Ok(amount));
    }

    /// Amount ordering matches the underlying nano count.
    #[test]
    fn amount_ordering(a in any::<u64>(), b in any::<u64>()) {
        prop_assert_eq!(
            Amount::from_nano(a) <= Amount::from_nano(b),
            a <= b
        );
    }

    /// Amount bincode roundtrip.
    #[test]
    fn amount_bincode_roundtrip(nano in any::<u64>()) {
        let amount = Amount::from_nano(nano);
        let encoded = bincode::serialize(&amount).unwrap();
        let decoded: Amount = bincode::deserialize(&encoded).unwrap();
        prop_assert_eq!(decoded, amount);
    }

    /// Address bincode roundtrip.
    #[test]
    fn address_bincode_roundtrip(bytes in prop::array::uniform20(0u8..)) {
        let addr = Address::new(bytes);
        let encoded = bincode::serialize(&addr).unwrap();
        let decoded: Address = bincode::deserialize(&encoded).unwrap();
        prop_assert_eq!(decoded, addr);
    }

    /// Timestamp ordering matches the underlying milliseconds.
    #[test]
    fn timestamp_ordering(a in i64::MIN..i64::MAX, b in i64::MIN..i64::MAX) {
        prop_assert_eq!(Timestamp::new(a) <= Timestamp::new(b), a <= b);
    }
}

#[test]
fn network_bincode_roundtrip() {
    for network in [Network::Mainnet, Network::Testnet, Network::Devnet] {
        let encoded = bincode::serialize(&network).unwrap();
        let decoded: Network = bincode::deserialize(&encoded).unwrap();
        assert_eq!(decoded, network);
    }
}
