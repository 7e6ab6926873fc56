//! Common - Shared Types and Utilities for the WBTC Ledger Contracts
//!
//! This package provides the types both contracts agree on:
//! - `events` - Lock/Unlock records emitted by the custody bridge
//! - `auth` - caller credential checked before privileged operations
//! - `delta` - signed balance deltas and pending change descriptors
//! - `cell` - optimistic "read and assert unchanged" checks
//! - `ledger` - the token-ledger query the bridge relies on

pub mod auth;
pub mod cell;
pub mod delta;
pub mod events;
pub mod ledger;

pub use auth::Credential;
pub use cell::{assert_unchanged, StaleState};
pub use delta::{BalanceChange, PendingUpdate, SignedAmount};
pub use events::{LockEvent, UnlockEvent};
pub use ledger::{LedgerQueryMsg, LedgerStateResponse};
