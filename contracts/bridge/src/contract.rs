//! Custody bridge entry points.
//!
//! Handlers are split into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdError,
    StdResult, Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_add_operator, execute_decrement_balance, execute_lock_token, execute_pause,
    execute_remove_operator, execute_unlock_token, execute_unpause,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_config, query_escrow_balance, query_is_operator, query_operators, query_stats,
    query_test,
};
use crate::state::{
    Config, Stats, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, ESCROW_BALANCE, OPERATORS, STATS,
    TEST,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = deps.api.addr_validate(&msg.admin)?;
    if msg.denom.is_empty() {
        return Err(StdError::generic_err("escrow denom must not be empty").into());
    }

    let config = Config {
        admin,
        denom: msg.denom,
        paused: false,
    };
    CONFIG.save(deps.storage, &config)?;

    for operator in &msg.operators {
        let operator = deps.api.addr_validate(operator)?;
        OPERATORS.save(deps.storage, &operator, &true)?;
    }

    ESCROW_BALANCE.save(deps.storage, &Uint128::zero())?;
    TEST.save(deps.storage, &Uint128::zero())?;
    STATS.save(deps.storage, &Stats::default())?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", config.admin)
        .add_attribute("denom", config.denom)
        .add_attribute("operator_count", msg.operators.len().to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Custody
        ExecuteMsg::LockToken {
            token_address,
            sender,
            amount,
        } => execute_lock_token(deps, info, token_address, sender, amount),
        ExecuteMsg::UnlockToken {
            token_address,
            receiver,
            amount,
        } => execute_unlock_token(deps, info, token_address, receiver, amount),
        ExecuteMsg::DecrementBalance { amount } => execute_decrement_balance(deps, info, amount),

        // Admin operations
        ExecuteMsg::Pause {} => execute_pause(deps, info),
        ExecuteMsg::Unpause {} => execute_unpause(deps, info),
        ExecuteMsg::AddOperator { operator } => execute_add_operator(deps, info, operator),
        ExecuteMsg::RemoveOperator { operator } => execute_remove_operator(deps, info, operator),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::EscrowBalance {} => to_json_binary(&query_escrow_balance(deps)?),
        QueryMsg::Test {} => to_json_binary(&query_test(deps)?),
        QueryMsg::Stats {} => to_json_binary(&query_stats(deps)?),
        QueryMsg::Operators {} => to_json_binary(&query_operators(deps)?),
        QueryMsg::IsOperator { address } => to_json_binary(&query_is_operator(deps, address)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    // Backfill cells missing from older deployments
    if STATS.may_load(deps.storage)?.is_none() {
        STATS.save(deps.storage, &Stats::default())?;
    }

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
