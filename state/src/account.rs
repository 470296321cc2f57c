//! Account balances and nonces, with staged views.

use sema_types::{Address, Amount, AmountError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Balance and replay-protection state of one account.
///
/// Accounts come into existence implicitly on first write and are never
/// destroyed; an address that was never written reads as all-zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Strictly increases by one per executed transaction from this account.
    pub nonce: u64,
    /// Spendable balance.
    pub available: Amount,
    /// Balance committed to votes, released only by unvoting.
    pub locked: Amount,
}

/// A balance adjustment: direction plus non-negative magnitude.
///
/// Keeping the magnitude an [`Amount`] (rather than a signed quantity) means
/// a debit below zero surfaces as [`AmountError::ArithmeticUnderflow`]
/// instead of producing a negative balance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delta {
    Credit(Amount),
    Debit(Amount),
}

impl Delta {
    fn apply(self, balance: Amount) -> Result<Amount, AmountError> {
        match self {
            Self::Credit(amount) => balance.sum(amount),
            Self::Debit(amount) => balance.sub(amount),
        }
    }
}

/// The committed account store.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct AccountState {
    accounts: HashMap<Address, Account>,
}

impl AccountState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a staged view. Writes stay in the view until [`StagedAccounts::commit`].
    pub fn track(&mut self) -> StagedAccounts<'_> {
        StagedAccounts {
            base: &mut self.accounts,
            overlay: HashMap::new(),
        }
    }

    pub fn get_account(&self, address: &Address) -> Account {
        self.accounts.get(address).copied().unwrap_or_default()
    }

    /// Adjust a committed available balance directly (genesis seeding, tests).
    pub fn adjust_available(&mut self, address: &Address, delta: Delta) -> Result<(), AmountError> {
        let mut staged = self.track();
        staged.adjust_available(address, delta)?;
        staged.commit();
        Ok(())
    }

    /// Adjust a committed locked balance directly (genesis seeding, tests).
    pub fn adjust_locked(&mut self, address: &Address, delta: Delta) -> Result<(), AmountError> {
        let mut staged = self.track();
        staged.adjust_locked(address, delta)?;
        staged.commit();
        Ok(())
    }
}

/// Copy-on-write overlay over an [`AccountState`].
///
/// Dropping the view without calling [`commit`](Self::commit) discards every
/// staged write.
#[derive(Debug)]
pub struct StagedAccounts<'s> {
    base: &'s mut HashMap<Address, Account>,
    overlay: HashMap<Address, Account>,
}

impl StagedAccounts<'_> {
    /// Read an account: overlay first, then the committed base, else zeroed.
    pub fn get_account(&self, address: &Address) -> Account {
        self.overlay
            .get(address)
            .or_else(|| self.base.get(address))
            .copied()
            .unwrap_or_default()
    }

    /// Add or remove available funds. A failed adjustment writes nothing.
    pub fn adjust_available(&mut self, address: &Address, delta: Delta) -> Result<(), AmountError> {
        let mut account = self.get_account(address);
        account.available = delta.apply(account.available)?;
        self.overlay.insert(*address, account);
        Ok(())
    }

    /// Add or remove locked funds. A failed adjustment writes nothing.
    pub fn adjust_locked(&mut self, address: &Address, delta: Delta) -> Result<(), AmountError> {
        let mut account = self.get_account(address);
        account.locked = delta.apply(account.locked)?;
        self.overlay.insert(*address, account);
        Ok(())
    }

    /// Advance the account's nonce by one.
    pub fn increase_nonce(&mut self, address: &Address) {
        let mut account = self.get_account(address);
        account.nonce += 1;
        self.overlay.insert(*address, account);
    }

    /// Promote every staged write into the base store.
    pub fn commit(self) {
        let Self { base, overlay } = self;
        base.extend(overlay);
    }
}
