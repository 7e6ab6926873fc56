//! Signed balance deltas and pending change descriptors.
//!
//! A pending change is built outside the token ledger (by a cooperating
//! contract or an off-chain client) and handed to the ledger, which inspects
//! it and either folds it into its own commit or rejects the whole message.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{OverflowError, Uint128};

/// Magnitude plus sign. Negative zero is treated as zero.
#[cw_serde]
#[derive(Copy, Eq, Default)]
pub struct SignedAmount {
    pub magnitude: Uint128,
    pub negative: bool,
}

impl SignedAmount {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn positive(magnitude: Uint128) -> Self {
        Self {
            magnitude,
            negative: false,
        }
    }

    pub fn negative(magnitude: Uint128) -> Self {
        Self {
            magnitude,
            negative: true,
        }
        .normalized()
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    /// True for a strictly negative delta.
    pub fn is_debit(&self) -> bool {
        self.negative && !self.magnitude.is_zero()
    }

    /// Clears the sign bit on zero so equality is structural.
    pub fn normalized(self) -> Self {
        if self.magnitude.is_zero() {
            Self::zero()
        } else {
            self
        }
    }

    pub fn neg(self) -> Self {
        Self {
            magnitude: self.magnitude,
            negative: !self.negative,
        }
        .normalized()
    }

    /// Whether this delta removes exactly `amount`.
    pub fn encodes_debit_of(&self, amount: Uint128) -> bool {
        self.normalized() == Self::negative(amount)
    }
}

impl From<Uint128> for SignedAmount {
    fn from(magnitude: Uint128) -> Self {
        Self::positive(magnitude)
    }
}

impl From<i128> for SignedAmount {
    fn from(value: i128) -> Self {
        Self {
            magnitude: Uint128::new(value.unsigned_abs()),
            negative: value < 0,
        }
        .normalized()
    }
}

impl std::fmt::Display for SignedAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_debit() {
            write!(f, "-{}", self.magnitude)
        } else {
            write!(f, "{}", self.magnitude)
        }
    }
}

/// Sum of a set of deltas, kept as separate credit and debit totals so the
/// running value never needs a signed type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NetDelta {
    credits: Uint128,
    debits: Uint128,
}

impl NetDelta {
    pub fn add(&mut self, delta: &SignedAmount) -> Result<(), OverflowError> {
        if delta.is_debit() {
            self.debits = self.debits.checked_add(delta.magnitude)?;
        } else {
            self.credits = self.credits.checked_add(delta.magnitude)?;
        }
        Ok(())
    }

    pub fn is_zero(&self) -> bool {
        self.credits == self.debits
    }

    pub fn net(&self) -> SignedAmount {
        if self.credits >= self.debits {
            SignedAmount::positive(self.credits - self.debits)
        } else {
            SignedAmount::negative(self.debits - self.credits)
        }
    }
}

/// One account's not-yet-committed balance delta on one token ledger.
#[cw_serde]
pub struct BalanceChange {
    /// Holder address
    pub account: String,
    /// Token ledger contract the delta is bound to
    pub token: String,
    pub delta: SignedAmount,
}

impl BalanceChange {
    pub fn debit(account: impl Into<String>, token: impl Into<String>, amount: Uint128) -> Self {
        Self {
            account: account.into(),
            token: token.into(),
            delta: SignedAmount::negative(amount),
        }
    }

    pub fn credit(account: impl Into<String>, token: impl Into<String>, amount: Uint128) -> Self {
        Self {
            account: account.into(),
            token: token.into(),
            delta: SignedAmount::positive(amount),
        }
    }
}

/// An ordered set of balance changes to be approved as one unit.
#[cw_serde]
pub struct PendingUpdate {
    pub changes: Vec<BalanceChange>,
}

impl PendingUpdate {
    pub fn net_delta(&self) -> Result<SignedAmount, OverflowError> {
        let mut net = NetDelta::default();
        for change in &self.changes {
            net.add(&change.delta)?;
        }
        Ok(net.net())
    }
}
