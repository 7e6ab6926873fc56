//! Token ledger entry points.
//!
//! Handlers live in `execute/` and `query`; this module only dispatches.

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_approve_update, execute_burn, execute_initialize, execute_mint,
    execute_send_tokens_from_ledger, execute_transfer,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{query_all_accounts, query_balance, query_ledger_state, query_token_info};
use crate::state::{
    TokenInfo, CIRCULATING_SUPPLY, CONTRACT_NAME, CONTRACT_VERSION, DEFAULT_SYMBOL, TOKEN_INFO,
};

// ============================================================================
// Instantiate
// ============================================================================

/// Deploy an empty ledger. Owner, decimals and cap stay unset until
/// `Initialize`.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let info = TokenInfo {
        name: msg.name,
        symbol: msg.symbol.unwrap_or_else(|| DEFAULT_SYMBOL.to_string()),
    };
    TOKEN_INFO.save(deps.storage, &info)?;
    CIRCULATING_SUPPLY.save(deps.storage, &Uint128::zero())?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("name", info.name)
        .add_attribute("symbol", info.symbol))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Supply
        ExecuteMsg::Initialize {
            decimals,
            max_supply,
        } => execute_initialize(deps, info, decimals, max_supply),
        ExecuteMsg::Mint {
            recipient,
            amount,
            expected_supply,
        } => execute_mint(deps, info, recipient, amount, expected_supply),
        ExecuteMsg::Burn {
            burner,
            amount,
            expected_supply,
        } => execute_burn(deps, info, burner, amount, expected_supply),

        // Balance movements
        ExecuteMsg::Transfer {
            sender,
            recipient,
            amount,
        } => execute_transfer(deps, info, sender, recipient, amount),
        ExecuteMsg::ApproveUpdate { update } => execute_approve_update(deps, env, info, update),
        ExecuteMsg::SendTokensFromLedger {
            recipient,
            amount,
            debit,
        } => execute_send_tokens_from_ledger(deps, env, info, recipient, amount, debit),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::LedgerState {} => to_json_binary(&query_ledger_state(deps)?),
        QueryMsg::TokenInfo {} => to_json_binary(&query_token_info(deps)?),
        QueryMsg::Balance { address } => to_json_binary(&query_balance(deps, address)?),
        QueryMsg::AllAccounts { start_after, limit } => {
            to_json_binary(&query_all_accounts(deps, start_after, limit)?)
        }
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
