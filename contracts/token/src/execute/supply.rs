//! Supply handlers: Initialize, Mint, Burn.
//!
//! Only Mint and Burn write `CIRCULATING_SUPPLY`. Both read it inside the
//! same message that writes it, so the cap is never checked against a stale
//! value.

use common::{assert_unchanged, Credential};
use cosmwasm_std::{DepsMut, MessageInfo, Response, Uint128};

use super::guards::{authorize_debit, ensure_nonzero, load_owner};
use crate::error::ContractError;
use crate::ledger::BalanceBatch;
use crate::state::{CIRCULATING_SUPPLY, DECIMALS, MAX_SUPPLY, OWNER};

// ============================================================================
// Initialize
// ============================================================================

/// Set decimals and the supply cap; the caller becomes the owner.
pub fn execute_initialize(
    deps: DepsMut,
    info: MessageInfo,
    decimals: u8,
    max_supply: Uint128,
) -> Result<Response, ContractError> {
    if OWNER.may_load(deps.storage)?.is_some() {
        return Err(ContractError::AlreadyInitialized);
    }

    let owner = Credential::from_info(&info).holder().clone();
    DECIMALS.save(deps.storage, &decimals)?;
    MAX_SUPPLY.save(deps.storage, &max_supply)?;
    OWNER.save(deps.storage, &owner)?;

    Ok(Response::new()
        .add_attribute("method", "initialize")
        .add_attribute("owner", owner)
        .add_attribute("decimals", decimals.to_string())
        .add_attribute("max_supply", max_supply))
}

// ============================================================================
// Mint
// ============================================================================

pub fn execute_mint(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
    expected_supply: Option<Uint128>,
) -> Result<Response, ContractError> {
    let owner = load_owner(deps.storage)?;
    if !Credential::from_info(&info).proves(&owner) {
        return Err(ContractError::Unauthorized);
    }
    ensure_nonzero(amount)?;

    let max_supply = MAX_SUPPLY.load(deps.storage)?;
    let circulating = CIRCULATING_SUPPLY.load(deps.storage)?;
    assert_unchanged("circulating_supply", expected_supply.as_ref(), &circulating)?;

    let new_supply = circulating
        .checked_add(amount)
        .ok()
        .filter(|supply| *supply <= max_supply)
        .ok_or(ContractError::SupplyCapExceeded {
            circulating,
            amount,
            max_supply,
        })?;

    let recipient = deps.api.addr_validate(&recipient)?;
    let mut batch = BalanceBatch::new();
    batch.credit(deps.storage, &recipient, amount)?;

    batch.commit(deps.storage)?;
    CIRCULATING_SUPPLY.save(deps.storage, &new_supply)?;

    Ok(Response::new()
        .add_attribute("method", "mint")
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount)
        .add_attribute("circulating_supply", new_supply))
}

// ============================================================================
// Burn
// ============================================================================

pub fn execute_burn(
    deps: DepsMut,
    info: MessageInfo,
    burner: String,
    amount: Uint128,
    expected_supply: Option<Uint128>,
) -> Result<Response, ContractError> {
    load_owner(deps.storage)?;

    let burner = deps.api.addr_validate(&burner)?;
    authorize_debit(&Credential::from_info(&info), &burner)?;
    ensure_nonzero(amount)?;

    let circulating = CIRCULATING_SUPPLY.load(deps.storage)?;
    assert_unchanged("circulating_supply", expected_supply.as_ref(), &circulating)?;

    let mut batch = BalanceBatch::new();
    batch.debit(deps.storage, &burner, amount)?;
    // Cannot underflow while supply equals the sum of balances
    let new_supply = circulating.checked_sub(amount)?;

    batch.commit(deps.storage)?;
    CIRCULATING_SUPPLY.save(deps.storage, &new_supply)?;

    Ok(Response::new()
        .add_attribute("method", "burn")
        .add_attribute("burner", burner)
        .add_attribute("amount", amount)
        .add_attribute("circulating_supply", new_supply))
}
