//! Cross-contract view of a token ledger.
//!
//! The bridge queries token ledgers through these types instead of linking
//! the token contract crate. `LedgerQueryMsg` serializes the same as the
//! matching variant of the token's own `QueryMsg`.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

#[cw_serde]
#[derive(QueryResponses)]
pub enum LedgerQueryMsg {
    #[returns(LedgerStateResponse)]
    LedgerState {},
}

#[cw_serde]
pub struct LedgerStateResponse {
    pub name: String,
    pub symbol: String,
    pub initialized: bool,
    /// Unset until `Initialize`
    pub decimals: Option<u8>,
    /// Unset until `Initialize`
    pub max_supply: Option<Uint128>,
    pub circulating_supply: Uint128,
    /// Unset until `Initialize`
    pub owner: Option<Addr>,
}
