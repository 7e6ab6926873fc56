//! Message types for the token ledger.

pub use common::LedgerStateResponse;
use common::{BalanceChange, PendingUpdate};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

#[cw_serde]
pub struct MigrateMsg {}

/// Deployment message. Supply parameters are set later by `Initialize`.
#[cw_serde]
pub struct InstantiateMsg {
    /// Human-readable token name
    pub name: String,
    /// Ticker symbol (defaults to "WBTC")
    pub symbol: Option<String>,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    /// Fix decimals and the supply cap. The caller becomes the owner.
    ///
    /// Authorization: Anyone, exactly once
    Initialize { decimals: u8, max_supply: Uint128 },

    /// Credit `recipient` with newly issued tokens
    ///
    /// Authorization: Owner only
    Mint {
        recipient: String,
        amount: Uint128,
        /// Circulating supply the caller observed; aborts if it moved
        expected_supply: Option<Uint128>,
    },

    /// Destroy tokens held by `burner`
    ///
    /// Authorization: `burner` only
    Burn {
        burner: String,
        amount: Uint128,
        /// Circulating supply the caller observed; aborts if it moved
        expected_supply: Option<Uint128>,
    },

    /// Move tokens between holders
    ///
    /// Authorization: `sender` only
    Transfer {
        sender: String,
        recipient: String,
        amount: Uint128,
    },

    /// Approve an externally-built set of balance changes. The net delta
    /// must be exactly zero.
    ///
    /// Authorization: each debited account must be the caller
    ApproveUpdate { update: PendingUpdate },

    /// Approve a pending debit of exactly `amount` and credit `recipient`
    /// with the same amount, as one unit.
    ///
    /// Authorization: the debited account must be the caller
    SendTokensFromLedger {
        recipient: String,
        amount: Uint128,
        debit: BalanceChange,
    },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Full ledger state (supply parameters, owner, metadata). Shares its
    /// wire form with `common::LedgerQueryMsg::LedgerState`.
    #[returns(LedgerStateResponse)]
    LedgerState {},

    /// cw20-compatible token info
    #[returns(cw20::TokenInfoResponse)]
    TokenInfo {},

    /// cw20-compatible balance of one holder
    #[returns(cw20::BalanceResponse)]
    Balance { address: String },

    /// Paginated holder balances
    #[returns(AllAccountsResponse)]
    AllAccounts {
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

// ============================================================================
// Response Types
// ============================================================================

#[cw_serde]
pub struct AccountBalance {
    pub address: Addr,
    pub balance: Uint128,
}

#[cw_serde]
pub struct AllAccountsResponse {
    pub accounts: Vec<AccountBalance>,
}
