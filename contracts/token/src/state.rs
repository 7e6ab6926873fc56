//! State definitions for the token ledger.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

/// Token metadata written at deployment
#[cw_serde]
pub struct TokenInfo {
    pub name: String,
    pub symbol: String,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:wbtc-token";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Symbol used when instantiation does not name one
pub const DEFAULT_SYMBOL: &str = "WBTC";

// ============================================================================
// Ledger Cells
// ============================================================================

pub const TOKEN_INFO: Item<TokenInfo> = Item::new("token_info");

/// Display scaling, set once by `Initialize`
pub const DECIMALS: Item<u8> = Item::new("decimals");

/// Absolute cap on circulating supply, set once by `Initialize`
pub const MAX_SUPPLY: Item<Uint128> = Item::new("max_supply");

/// Sum of all holder balances; written only by mint and burn
pub const CIRCULATING_SUPPLY: Item<Uint128> = Item::new("circulating_supply");

/// Sole mint authority. Unset until `Initialize`; its presence marks the
/// ledger as initialized.
pub const OWNER: Item<Addr> = Item::new("owner");

/// Holder balances
/// Key: holder address, Value: balance
pub const BALANCES: Map<&Addr, Uint128> = Map::new("balances");
