//! Staged balance changes committed as one unit.
//!
//! Handlers stage every debit and credit of a command here. Reads go through
//! the staged values first, so a command that touches the same account twice
//! sees its own earlier changes. Storage is only written by `commit`, and a
//! handler calls it after every precondition has passed.

use std::collections::BTreeMap;

use common::SignedAmount;
use cosmwasm_std::{Addr, StdResult, Storage, Uint128};

use crate::error::ContractError;
use crate::state::BALANCES;

#[derive(Debug, Default)]
pub struct BalanceBatch {
    staged: BTreeMap<Addr, Uint128>,
}

impl BalanceBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Balance of `account` including changes staged so far.
    pub fn balance(&self, storage: &dyn Storage, account: &Addr) -> StdResult<Uint128> {
        match self.staged.get(account) {
            Some(balance) => Ok(*balance),
            None => Ok(BALANCES
                .may_load(storage, account)?
                .unwrap_or_default()),
        }
    }

    pub fn credit(
        &mut self,
        storage: &dyn Storage,
        account: &Addr,
        amount: Uint128,
    ) -> Result<(), ContractError> {
        let balance = self.balance(storage, account)?;
        let updated = balance.checked_add(amount)?;
        self.staged.insert(account.clone(), updated);
        Ok(())
    }

    /// Rejects any debit that would take the balance below zero.
    pub fn debit(
        &mut self,
        storage: &dyn Storage,
        account: &Addr,
        amount: Uint128,
    ) -> Result<(), ContractError> {
        let balance = self.balance(storage, account)?;
        if balance < amount {
            return Err(ContractError::InsufficientBalance {
                account: account.to_string(),
                balance,
                required: amount,
            });
        }
        self.staged.insert(account.clone(), balance - amount);
        Ok(())
    }

    pub fn apply(
        &mut self,
        storage: &dyn Storage,
        account: &Addr,
        delta: &SignedAmount,
    ) -> Result<(), ContractError> {
        if delta.is_debit() {
            self.debit(storage, account, delta.magnitude)
        } else {
            self.credit(storage, account, delta.magnitude)
        }
    }

    pub fn len(&self) -> usize {
        self.staged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }

    pub fn commit(self, storage: &mut dyn Storage) -> StdResult<()> {
        for (account, balance) in self.staged {
            BALANCES.save(storage, &account, &balance)?;
        }
        Ok(())
    }
}
