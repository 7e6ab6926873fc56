//! Query handlers for the token ledger.

use cosmwasm_std::{Addr, Deps, Order, StdResult};
use cw20::{BalanceResponse, TokenInfoResponse};
use cw_storage_plus::Bound;

use crate::msg::{AccountBalance, AllAccountsResponse, LedgerStateResponse};
use crate::state::{
    BALANCES, CIRCULATING_SUPPLY, DECIMALS, MAX_SUPPLY, OWNER, TOKEN_INFO,
};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 50;

pub fn query_ledger_state(deps: Deps) -> StdResult<LedgerStateResponse> {
    let info = TOKEN_INFO.load(deps.storage)?;
    let owner = OWNER.may_load(deps.storage)?;
    Ok(LedgerStateResponse {
        name: info.name,
        symbol: info.symbol,
        initialized: owner.is_some(),
        decimals: DECIMALS.may_load(deps.storage)?,
        max_supply: MAX_SUPPLY.may_load(deps.storage)?,
        circulating_supply: CIRCULATING_SUPPLY.load(deps.storage)?,
        owner,
    })
}

/// cw20 view of the ledger. Decimals read as 0 before initialization.
pub fn query_token_info(deps: Deps) -> StdResult<TokenInfoResponse> {
    let info = TOKEN_INFO.load(deps.storage)?;
    Ok(TokenInfoResponse {
        name: info.name,
        symbol: info.symbol,
        decimals: DECIMALS.may_load(deps.storage)?.unwrap_or_default(),
        total_supply: CIRCULATING_SUPPLY.load(deps.storage)?,
    })
}

pub fn query_balance(deps: Deps, address: String) -> StdResult<BalanceResponse> {
    let address = deps.api.addr_validate(&address)?;
    let balance = BALANCES
        .may_load(deps.storage, &address)?
        .unwrap_or_default();
    Ok(BalanceResponse { balance })
}

pub fn query_all_accounts(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<AllAccountsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start_addr: Option<Addr> = start_after
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;
    let start = start_addr.as_ref().map(Bound::exclusive);

    let accounts = BALANCES
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (address, balance) = item?;
            Ok(AccountBalance { address, balance })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(AllAccountsResponse { accounts })
}
