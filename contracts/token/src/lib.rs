//! WBTC Token Ledger - Capped-Supply Fungible Token
//!
//! Owns the supply accounting for a single token:
//! - `Initialize` fixes decimals, the supply cap and the minting owner, once
//! - `Mint` / `Burn` are the only operations that change circulating supply
//! - `Transfer` moves value between holders
//! - `ApproveUpdate` / `SendTokensFromLedger` fold externally-built balance
//!   changes into the ledger after validating them
//!
//! # Invariants
//! - circulating supply never exceeds the cap
//! - circulating supply equals the sum of all holder balances
//! - owner, decimals and cap never change after initialization
//!
//! Multi-step operations stage every change in a [`ledger::BalanceBatch`] and
//! commit once, after all preconditions hold.

pub mod contract;
pub mod error;
mod execute;
pub mod ledger;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
