//! Delegate registry and vote tallies, with staged views.
//!
//! Two indexes over registered delegates (`address -> Delegate` and
//! `name -> address`) are kept bijective: a name, once registered, belongs to
//! its address forever. Alongside them lives the edge map
//! `(voter, delegate) -> Amount`, and each delegate's `votes` tally is the
//! sum of its incoming edges. Edges may return to zero but are never pruned.

use sema_types::{Address, Amount, AmountError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A registered delegate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delegate {
    pub address: Address,
    /// Permanent registered name, 3..=16 bytes of `[a-z0-9_]`.
    pub name: Vec<u8>,
    /// Total stake voted onto this delegate.
    pub votes: Amount,
}

/// The committed delegate store.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DelegateState {
    by_address: HashMap<Address, Delegate>,
    by_name: HashMap<Vec<u8>, Address>,
    edges: HashMap<(Address, Address), Amount>,
}

impl DelegateState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a staged view. Writes stay in the view until [`StagedDelegates::commit`].
    pub fn track(&mut self) -> StagedDelegates<'_> {
        StagedDelegates {
            base: self,
            delegates: HashMap::new(),
            names: HashMap::new(),
            edges: HashMap::new(),
        }
    }

    pub fn get_delegate_by_address(&self, address: &Address) -> Option<Delegate> {
        self.by_address.get(address).cloned()
    }

    pub fn get_delegate_by_name(&self, name: &[u8]) -> Option<Delegate> {
        let address = self.by_name.get(name)?;
        self.by_address.get(address).cloned()
    }

    /// Current stake `voter` has on `delegate`.
    pub fn vote_amount(&self, voter: &Address, delegate: &Address) -> Amount {
        self.edges
            .get(&(*voter, *delegate))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    /// Register directly against the committed store (genesis seeding, tests).
    pub fn register(&mut self, address: Address, name: Vec<u8>) -> bool {
        let mut staged = self.track();
        let registered = staged.register(address, name);
        staged.commit();
        registered
    }

    /// Vote directly against the committed store (genesis seeding, tests).
    pub fn vote(
        &mut self,
        voter: &Address,
        delegate: &Address,
        amount: Amount,
    ) -> Result<bool, AmountError> {
        let mut staged = self.track();
        let voted = staged.vote(voter, delegate, amount)?;
        staged.commit();
        Ok(voted)
    }

    /// Unvote directly against the committed store (tests).
    pub fn unvote(
        &mut self,
        voter: &Address,
        delegate: &Address,
        amount: Amount,
    ) -> Result<bool, AmountError> {
        let mut staged = self.track();
        let unvoted = staged.unvote(voter, delegate, amount)?;
        staged.commit();
        Ok(unvoted)
    }
}

/// Copy-on-write overlay over a [`DelegateState`].
#[derive(Debug)]
pub struct StagedDelegates<'s> {
    base: &'s mut DelegateState,
    delegates: HashMap<Address, Delegate>,
    names: HashMap<Vec<u8>, Address>,
    edges: HashMap<(Address, Address), Amount>,
}

impl StagedDelegates<'_> {
    pub fn get_delegate_by_address(&self, address: &Address) -> Option<Delegate> {
        self.delegates
            .get(address)
            .or_else(|| self.base.by_address.get(address))
            .cloned()
    }

    pub fn get_delegate_by_name(&self, name: &[u8]) -> Option<Delegate> {
        let address = *self
            .names
            .get(name)
            .or_else(|| self.base.by_name.get(name))?;
        self.get_delegate_by_address(&address)
    }

    /// Current stake `voter` has on `delegate`: overlay first, then base.
    pub fn vote_amount(&self, voter: &Address, delegate: &Address) -> Amount {
        let key = (*voter, *delegate);
        self.edges
            .get(&key)
            .or_else(|| self.base.edges.get(&key))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    /// Register `address` under `name`.
    ///
    /// Returns `false` if the address is already registered or the name is
    /// already taken. Both uniqueness checks run against the overlay as well
    /// as the base, so two registrations staged in the same block cannot
    /// collide.
    pub fn register(&mut self, address: Address, name: Vec<u8>) -> bool {
        if self.get_delegate_by_address(&address).is_some() || self.name_taken(&name) {
            return false;
        }
        self.names.insert(name.clone(), address);
        self.delegates.insert(
            address,
            Delegate {
                address,
                name,
                votes: Amount::ZERO,
            },
        );
        true
    }

    /// Add `amount` to the `(voter, delegate)` edge and the delegate's tally.
    ///
    /// Returns `false` if the delegate is not registered; nothing is written
    /// in that case or when the checked additions fail.
    pub fn vote(
        &mut self,
        voter: &Address,
        delegate: &Address,
        amount: Amount,
    ) -> Result<bool, AmountError> {
        let Some(mut entry) = self.get_delegate_by_address(delegate) else {
            return Ok(false);
        };
        entry.votes = entry.votes.sum(amount)?;
        let edge = self.vote_amount(voter, delegate).sum(amount)?;
        self.edges.insert((*voter, *delegate), edge);
        self.delegates.insert(*delegate, entry);
        Ok(true)
    }

    /// Remove `amount` from the `(voter, delegate)` edge and the tally.
    ///
    /// Returns `false` if the delegate is unknown or the edge holds less
    /// than `amount`; nothing is written in that case. A tally underflow
    /// after the edge check passes means the indexes have diverged, and the
    /// resulting error must not be swallowed.
    pub fn unvote(
        &mut self,
        voter: &Address,
        delegate: &Address,
        amount: Amount,
    ) -> Result<bool, AmountError> {
        let Some(mut entry) = self.get_delegate_by_address(delegate) else {
            return Ok(false);
        };
        let edge = self.vote_amount(voter, delegate);
        if edge < amount {
            return Ok(false);
        }
        entry.votes = entry.votes.sub(amount)?;
        self.edges.insert((*voter, *delegate), edge.sub(amount)?);
        self.delegates.insert(*delegate, entry);
        Ok(true)
    }

    /// Promote every staged write into the base store.
    pub fn commit(self) {
        let Self {
            base,
            delegates,
            names,
            edges,
        } = self;
        base.by_address.extend(delegates);
        base.by_name.extend(names);
        base.edges.extend(edges);
    }

    fn name_taken(&self, name: &[u8]) -> bool {
        self.names.contains_key(name) || self.base.by_name.contains_key(name)
    }
}
