//! Staged account and delegate state.
//!
//! Both stores follow the same lifecycle: `track()` opens a copy-on-write
//! overlay, the executor writes into the overlay, and the caller either
//! `commit()`s the overlay into the base store (block finalization) or drops
//! it (block rejection). Reads on a staged view consult the overlay first
//! and fall back to the committed base, so a transaction always observes the
//! writes of the transactions executed before it in the same block.

pub mod account;
pub mod delegate;

pub use account::{Account, AccountState, Delta, StagedAccounts};
pub use delegate::{Delegate, DelegateState, StagedDelegates};
