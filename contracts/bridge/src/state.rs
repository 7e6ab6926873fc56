//! State definitions for the custody bridge.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

#[cw_serde]
pub struct Config {
    /// Admin address for pause, operators and escrow decrements
    pub admin: Addr,
    /// Native denom held in escrow
    pub denom: String,
    /// Whether lock/unlock are currently paused
    pub paused: bool,
}

/// Lock/unlock audit counters
#[cw_serde]
#[derive(Default)]
pub struct Stats {
    pub total_locks: u64,
    pub total_unlocks: u64,
    pub total_locked: Uint128,
    pub total_unlocked: Uint128,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:wbtc-bridge";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// State Storage
// ============================================================================

pub const CONFIG: Item<Config> = Item::new("config");

/// Native value held in custody
pub const ESCROW_BALANCE: Item<Uint128> = Item::new("escrow_balance");

/// Auxiliary counter kept for storage-layout compatibility; nothing reads it
/// for correctness.
pub const TEST: Item<Uint128> = Item::new("test");

pub const STATS: Item<Stats> = Item::new("stats");

/// Relayer addresses allowed to release escrow
/// Key: operator address, Value: whether active
pub const OPERATORS: Map<&Addr, bool> = Map::new("operators");
