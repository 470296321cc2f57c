use proptest::prelude::*;

use sema_state::{AccountState, DelegateState, Delta};
use sema_types::{Address, Amount};

fn addr(tag: u8) -> Address {
    Address::new([tag; 20])
}

fn delta(credit: bool, nano: u64) -> Delta {
    if credit {
        Delta::Credit(Amount::from_nano(nano))
    } else {
        Delta::Debit(Amount::from_nano(nano))
    }
}

/// One randomized balance adjustment: (account tag, credit?, nano, available?).
fn adjustment() -> impl Strategy<Value = (u8, bool, u64, bool)> {
    (0u8..4, any::<bool>(), 0u64..1_000, any::<bool>())
}

proptest! {
    /// Applying a batch through a staged view and committing is
    /// indistinguishable from applying it directly to the base.
    #[test]
    fn commit_equals_direct_application(ops in prop::collection::vec(adjustment(), 0..40)) {
        let mut direct = AccountState::new();
        let mut via_staged = AccountState::new();

        let mut staged = via_staged.track();
        for &(tag, credit, nano, available) in &ops {
            let a = addr(tag);
            let d = delta(credit, nano);
            let direct_result = if available {
                direct.adjust_available(&a, d)
            } else {
                direct.adjust_locked(&a, d)
            };
            let staged_result = if available {
                staged.adjust_available(&a, d)
            } else {
                staged.adjust_locked(&a, d)
            };
            prop_assert_eq!(direct_result, staged_result);
        }
        staged.commit();

        for tag in 0..4 {
            prop_assert_eq!(
                direct.get_account(&addr(tag)),
                via_staged.get_account(&addr(tag))
            );
        }
    }

    /// Dropping a staged view without committing leaves the base bit-identical.
    #[test]
    fn discard_leaves_base_unchanged(
        seed in prop::collection::vec((0u8..4, 1u64..1_000), 0..8),
        ops in prop::collection::vec(adjustment(), 1..40),
    ) {
        let mut state = AccountState::new();
        for &(tag, nano) in &seed {
            state
                .adjust_available(&addr(tag), Delta::Credit(Amount::from_nano(nano)))
                .unwrap();
        }
        let before: Vec<_> = (0..4).map(|tag| state.get_account(&addr(tag))).collect();

        let mut staged = state.track();
        for &(tag, credit, nano, available) in &ops {
            let a = addr(tag);
            let d = delta(credit, nano);
            let _ = if available {
                staged.adjust_available(&a, d)
            } else {
                staged.adjust_locked(&a, d)
            };
            staged.increase_nonce(&a);
        }
        drop(staged);

        let after: Vec<_> = (0..4).map(|tag| state.get_account(&addr(tag))).collect();
        prop_assert_eq!(before, after);
    }

    /// Every delegate's tally equals the sum of its incoming vote edges, no
    /// matter how votes and unvotes interleave.
    #[test]
    fn tally_equals_edge_sum(
        ops in prop::collection::vec((0u8..5, 0u8..3, 1u64..1_000, any::<bool>()), 0..60)
    ) {
        let mut state = DelegateState::new();
        let delegates: Vec<Address> = (0..3).map(|i| addr(100 + i)).collect();
        for (i, d) in delegates.iter().enumerate() {
            assert!(state.register(*d, format!("delegate_{}", i).into_bytes()));
        }

        for &(voter, delegate, nano, unvote) in &ops {
            let v = addr(voter);
            let d = delegates[delegate as usize];
            let amount = Amount::from_nano(nano);
            if unvote {
                state.unvote(&v, &d, amount).unwrap();
            } else {
                state.vote(&v, &d, amount).unwrap();
            }
        }

        for d in &delegates {
            let tally = state.get_delegate_by_address(d).unwrap().votes;
            let mut edge_sum = Amount::ZERO;
            for voter in 0..5 {
                edge_sum = edge_sum.sum(state.vote_amount(&addr(voter), d)).unwrap();
            }
            prop_assert_eq!(tally, edge_sum);
        }
    }
}
