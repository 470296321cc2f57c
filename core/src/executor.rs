//! The transaction execution state machine.
//!
//! Execution is a sequential guard list: the first failing guard rejects the
//! transaction with its receipt code and nothing has been written to the
//! staged views at that point. Only after the last guard of a kind passes do
//! the state deltas go in, and the guards are arranged so that every checked
//! operation after them is infallible — which is exactly what lets a failure
//! there be classified as a programmer error instead of a rejection.

use crate::result::{TransactionError, TransactionResult};
use crate::transaction::{Transaction, TransactionKind};
use sema_state::{Delta, StagedAccounts, StagedDelegates};
use sema_types::{Address, Amount, AmountError, NetworkParams};
use thiserror::Error;

/// Fatal, block-aborting failures.
///
/// These never describe a bad transaction — they mean the executor's own
/// preconditions were violated, and the block being processed must be thrown
/// away rather than committed from a half-written staged view.
#[derive(Debug, Error)]
pub enum ExecutorError {
    /// Checked amount arithmetic failed past the executor's own guards.
    #[error(transparent)]
    Arithmetic(#[from] AmountError),

    /// A state-store write was refused although its preconditions held.
    #[error("{op} refused for {address} after its preconditions were checked")]
    StateContract {
        op: &'static str,
        address: Address,
    },
}

/// Is `name` a well-formed delegate name: 3 to 16 bytes of `[a-z0-9_]`.
pub fn validate_delegate_name(name: &[u8]) -> bool {
    (3..=16).contains(&name.len())
        && name
            .iter()
            .all(|&b| matches!(b, b'a'..=b'z' | b'0'..=b'9' | b'_'))
}

/// Affordability guard in widened arithmetic, so the guard itself cannot
/// overflow no matter what `value` and `fee` a transaction carries.
fn covers(available: Amount, value: Amount, fee: Amount) -> bool {
    u128::from(available.nano()) >= u128::from(value.nano()) + u128::from(fee.nano())
}

/// Validates a transaction against the current rules and balances and
/// applies its deltas to a pair of staged state views.
///
/// The executor holds no mutable state of its own; identical inputs produce
/// identical staged writes. It neither commits nor discards the views it is
/// handed, and it requires exclusive use of them for the duration of a call.
pub struct TransactionExecutor {
    params: NetworkParams,
}

impl TransactionExecutor {
    pub fn new(params: NetworkParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &NetworkParams {
        &self.params
    }

    /// Execute one transaction.
    ///
    /// `Ok(TransactionResult)` covers both acceptance and rejection; a
    /// rejected transaction has written nothing to the staged views and has
    /// not consumed a nonce. `Err(ExecutorError)` is fatal: the views may be
    /// partially written and the caller must discard them.
    ///
    /// Fees are burned. For unvotes the fee comes out of the released funds
    /// (net effect on available is `value - fee`, computed through a signed
    /// intermediate); the explicit `available >= fee` guard is what keeps
    /// that net from driving the balance below zero when `value < fee`.
    pub fn execute(
        &self,
        tx: &Transaction,
        accounts: &mut StagedAccounts<'_>,
        delegates: &mut StagedDelegates<'_>,
    ) -> Result<TransactionResult, ExecutorError> {
        let result = self.dispatch(tx, accounts, delegates)?;
        match &result {
            TransactionResult::Rejected(error) => {
                tracing::debug!(hash = %tx.hash(), code = %error, "transaction rejected");
            }
            TransactionResult::Success { .. } => {
                tracing::trace!(hash = %tx.hash(), "transaction executed");
            }
        }
        Ok(result)
    }

    /// Execute a block's transactions in order over one pair of staged
    /// views, so each transaction observes its predecessors' writes.
    /// Rejections contribute their receipt and processing continues; a
    /// fatal error aborts the whole batch.
    pub fn execute_all(
        &self,
        txs: &[Transaction],
        accounts: &mut StagedAccounts<'_>,
        delegates: &mut StagedDelegates<'_>,
    ) -> Result<Vec<TransactionResult>, ExecutorError> {
        let mut results = Vec::with_capacity(txs.len());
        for tx in txs {
            results.push(self.execute(tx, accounts, delegates)?);
        }
        Ok(results)
    }

    fn dispatch(
        &self,
        tx: &Transaction,
        accounts: &mut StagedAccounts<'_>,
        delegates: &mut StagedDelegates<'_>,
    ) -> Result<TransactionResult, ExecutorError> {
        let rejected = |error| Ok(TransactionResult::rejected(error));

        if tx.validate(self.params.network).is_err() {
            return rejected(TransactionError::InvalidFormat);
        }
        let Some(sender) = tx.sender() else {
            return rejected(TransactionError::InvalidFormat);
        };

        let account = accounts.get_account(&sender);
        if tx.nonce() != account.nonce {
            return rejected(TransactionError::InvalidNonce);
        }
        if tx.fee() < self.params.min_transaction_fee {
            return rejected(TransactionError::InvalidFee);
        }

        let to = tx.to();
        let value = tx.value();
        let fee = tx.fee();

        match tx.kind() {
            TransactionKind::Transfer => {
                if !covers(account.available, value, fee) {
                    return rejected(TransactionError::InsufficientAvailable);
                }

                accounts.adjust_available(&sender, Delta::Debit(value.sum(fee)?))?;
                accounts.adjust_available(&to, Delta::Credit(value))?;
            }

            TransactionKind::Delegate => {
                if to != Address::EMPTY {
                    return rejected(TransactionError::Invalid);
                }
                if value != self.params.min_delegate_burn_amount {
                    return rejected(TransactionError::Invalid);
                }
                if !covers(account.available, value, fee) {
                    return rejected(TransactionError::InsufficientAvailable);
                }
                if !validate_delegate_name(tx.data()) {
                    return rejected(TransactionError::InvalidDelegating);
                }
                if !delegates.register(sender, tx.data().to_vec()) {
                    return rejected(TransactionError::InvalidDelegating);
                }

                // Both the registration value and the fee leave circulation.
                accounts.adjust_available(&sender, Delta::Debit(value.sum(fee)?))?;
            }

            TransactionKind::Vote => {
                if delegates.get_delegate_by_address(&to).is_none() {
                    return rejected(TransactionError::InvalidVoting);
                }
                if !covers(account.available, value, fee) {
                    return rejected(TransactionError::InsufficientAvailable);
                }

                accounts.adjust_available(&sender, Delta::Debit(value.sum(fee)?))?;
                accounts.adjust_locked(&sender, Delta::Credit(value))?;
                if !delegates.vote(&sender, &to, value)? {
                    return Err(ExecutorError::StateContract {
                        op: "vote",
                        address: to,
                    });
                }
            }

            TransactionKind::Unvote => {
                if delegates.get_delegate_by_address(&to).is_none() {
                    return rejected(TransactionError::InvalidVoting);
                }
                if account.available < fee {
                    return rejected(TransactionError::InsufficientAvailable);
                }
                if account.locked < value {
                    return rejected(TransactionError::InsufficientLocked);
                }
                // The store rejects the unvote itself when the (sender, to)
                // edge holds less than `value`, writing nothing.
                if !delegates.unvote(&sender, &to, value)? {
                    return rejected(TransactionError::InsufficientLocked);
                }

                accounts.adjust_locked(&sender, Delta::Debit(value))?;
                let net = i128::from(value.nano()) - i128::from(fee.nano());
                let delta = if net >= 0 {
                    Delta::Credit(Amount::from_nano(net as u64))
                } else {
                    Delta::Debit(Amount::from_nano(net.unsigned_abs() as u64))
                };
                accounts.adjust_available(&sender, delta)?;
            }
        }

        accounts.increase_nonce(&sender);
        Ok(TransactionResult::success())
    }
}
