//! Transaction execution core of the Sema ledger.
//!
//! Consensus hands the executor a signed [`Transaction`] and a pair of
//! staged state views; the executor validates the transaction against the
//! current rules and balances, applies its deltas to the views, and returns
//! a [`TransactionResult`]. Committing or discarding the staged views is the
//! caller's job — a rejected transaction leaves them untouched, so block
//! processing simply keeps the views and moves on to the next transaction.

pub mod executor;
pub mod result;
pub mod transaction;

pub use executor::{validate_delegate_name, ExecutorError, TransactionExecutor};
pub use result::{TransactionError, TransactionResult};
pub use transaction::{
    DecodeError, InvalidTransaction, Transaction, TransactionKind, TxSignature, MAX_DATA_SIZE,
};
