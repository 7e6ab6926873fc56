//! Admin operations handlers.
//!
//! This module handles:
//! - Pause/unpause custody operations
//! - Operator (relayer) registration

use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::state::{CONFIG, OPERATORS};

// ============================================================================
// Pause/Unpause
// ============================================================================

/// Pause the bridge (stops lock and unlock).
pub fn execute_pause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    config.paused = true;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("method", "pause"))
}

/// Unpause the bridge.
pub fn execute_unpause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    config.paused = false;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("method", "unpause"))
}

// ============================================================================
// Operators
// ============================================================================

pub fn execute_add_operator(
    deps: DepsMut,
    info: MessageInfo,
    operator: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    let operator_addr = deps.api.addr_validate(&operator)?;
    if OPERATORS
        .may_load(deps.storage, &operator_addr)?
        .unwrap_or(false)
    {
        return Err(ContractError::OperatorAlreadyRegistered);
    }

    OPERATORS.save(deps.storage, &operator_addr, &true)?;

    Ok(Response::new()
        .add_attribute("method", "add_operator")
        .add_attribute("operator", operator_addr))
}

/// Removing the last operator is allowed; unlocks stay frozen until one is
/// added again.
pub fn execute_remove_operator(
    deps: DepsMut,
    info: MessageInfo,
    operator: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    let operator_addr = deps.api.addr_validate(&operator)?;
    if !OPERATORS
        .may_load(deps.storage, &operator_addr)?
        .unwrap_or(false)
    {
        return Err(ContractError::OperatorNotRegistered);
    }

    OPERATORS.remove(deps.storage, &operator_addr);

    Ok(Response::new()
        .add_attribute("method", "remove_operator")
        .add_attribute("operator", operator_addr))
}
