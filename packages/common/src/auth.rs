//! Caller credentials for privileged operations.
//!
//! The chain verifies the transaction signature before the contract runs, so
//! `MessageInfo::sender` is already proven. A `Credential` carries that
//! identity into handlers, which must compare it against the authority they
//! loaded from storage in the same transaction.

use cosmwasm_std::{Addr, MessageInfo};

/// Proof that the caller controls `holder`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credential {
    holder: Addr,
}

impl Credential {
    /// Build the credential the runtime attached to this message.
    pub fn from_info(info: &MessageInfo) -> Self {
        Self {
            holder: info.sender.clone(),
        }
    }

    pub fn holder(&self) -> &Addr {
        &self.holder
    }

    /// Whether this credential proves control of `expected`.
    pub fn proves(&self, expected: &Addr) -> bool {
        &self.holder == expected
    }
}
