//! Message types for the custody bridge.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    /// Admin address for contract management
    pub admin: String,
    /// Native denom held in escrow (e.g. "uluna")
    pub denom: String,
    /// Initial relayer addresses allowed to unlock
    pub operators: Vec<String>,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Custody
    // ========================================================================
    /// Lock native funds into escrow against `token_address`.
    /// The caller attaches exactly `amount` of the escrow denom.
    ///
    /// Authorization: Anyone, for their own funds (`sender` must be the caller)
    LockToken {
        /// Token ledger the locked value is bridged for
        token_address: String,
        sender: String,
        amount: Uint128,
    },

    /// Release escrowed funds to `receiver`
    ///
    /// Authorization: Operator only
    UnlockToken {
        token_address: String,
        receiver: String,
        amount: Uint128,
    },

    /// Reduce the escrow balance without moving funds or emitting an event.
    /// The decremented funds stay in the contract and no message releases
    /// them afterwards.
    ///
    /// Authorization: Admin only
    DecrementBalance { amount: Uint128 },

    // ========================================================================
    // Admin Operations
    // ========================================================================
    /// Authorization: Admin only
    Pause {},

    /// Authorization: Admin only
    Unpause {},

    /// Authorization: Admin only
    AddOperator { operator: String },

    /// Authorization: Admin only
    RemoveOperator { operator: String },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(EscrowBalanceResponse)]
    EscrowBalance {},

    /// Auxiliary counter
    #[returns(TestResponse)]
    Test {},

    #[returns(StatsResponse)]
    Stats {},

    #[returns(OperatorsResponse)]
    Operators {},

    #[returns(IsOperatorResponse)]
    IsOperator { address: String },
}

// ============================================================================
// Response Types
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    pub denom: String,
    pub paused: bool,
}

#[cw_serde]
pub struct EscrowBalanceResponse {
    pub denom: String,
    pub escrow_balance: Uint128,
}

#[cw_serde]
pub struct TestResponse {
    pub test: Uint128,
}

#[cw_serde]
pub struct StatsResponse {
    pub total_locks: u64,
    pub total_unlocks: u64,
    pub total_locked: Uint128,
    pub total_unlocked: Uint128,
}

#[cw_serde]
pub struct OperatorsResponse {
    pub operators: Vec<Addr>,
}

#[cw_serde]
pub struct IsOperatorResponse {
    pub is_operator: bool,
}
