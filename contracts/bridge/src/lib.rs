//! WBTC Custody Bridge - Native-Asset Escrow
//!
//! Holds native funds locked against a token ledger and emits the records an
//! off-chain relayer uses to mirror them on the other side.
//!
//! # Lock
//! 1. User calls `LockToken` with the funds attached
//! 2. Escrow balance grows by the attached amount
//! 3. A `lock` event carries (token_address, sender, amount) to the relayer
//!
//! # Unlock
//! 1. A registered operator calls `UnlockToken`
//! 2. Escrow balance shrinks by the amount, which must be available
//! 3. Funds are sent to the receiver and an `unlock` event is emitted
//!
//! # Security
//! - Each lock/unlock emits exactly one event matching its escrow change
//! - Only operators release funds; only the admin lowers escrow without an unlock
//! - The named token address must be an initialized token ledger
//! - Emergency pause

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
