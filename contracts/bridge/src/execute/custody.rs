//! Custody handlers: LockToken, UnlockToken, DecrementBalance.
//!
//! Every change to `ESCROW_BALANCE` made by lock or unlock is paired with
//! exactly one event carrying the same amount. `DecrementBalance` is the
//! only path that changes escrow silently, and it is admin-only.

use common::{LedgerQueryMsg, LedgerStateResponse, LockEvent, UnlockEvent};
use cosmwasm_std::{
    coins, Addr, BankMsg, Deps, DepsMut, MessageInfo, Response, Storage, Uint128,
};

use crate::error::ContractError;
use crate::state::{Config, CONFIG, ESCROW_BALANCE, OPERATORS, STATS};

// ============================================================================
// LockToken
// ============================================================================

/// Lock the attached native funds into escrow.
pub fn execute_lock_token(
    deps: DepsMut,
    info: MessageInfo,
    token_address: String,
    sender: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = load_active_config(deps.storage)?;
    ensure_nonzero(amount)?;

    let sender = deps.api.addr_validate(&sender)?;
    if sender != info.sender {
        return Err(ContractError::SenderMismatch {
            sender: sender.to_string(),
            caller: info.sender.to_string(),
        });
    }
    ensure_exact_funds(&info, &config.denom, amount)?;
    let token_address = ensure_token_ledger(deps.as_ref(), &token_address)?;

    let escrow = ESCROW_BALANCE.load(deps.storage)?.checked_add(amount)?;
    ESCROW_BALANCE.save(deps.storage, &escrow)?;

    let mut stats = STATS.load(deps.storage)?;
    stats.total_locks += 1;
    stats.total_locked = stats.total_locked.checked_add(amount)?;
    STATS.save(deps.storage, &stats)?;

    let event = LockEvent::new(token_address, sender, amount);

    Ok(Response::new()
        .add_event(event.to_event())
        .add_attribute("method", "lock_token")
        .add_attribute("escrow_balance", escrow))
}

// ============================================================================
// UnlockToken
// ============================================================================

/// Release escrowed funds to `receiver`.
pub fn execute_unlock_token(
    deps: DepsMut,
    info: MessageInfo,
    token_address: String,
    receiver: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = load_active_config(deps.storage)?;
    ensure_nonzero(amount)?;

    if !OPERATORS
        .may_load(deps.storage, &info.sender)?
        .unwrap_or(false)
    {
        return Err(ContractError::UnauthorizedOperator);
    }

    let receiver = deps.api.addr_validate(&receiver)?;
    let token_address = ensure_token_ledger(deps.as_ref(), &token_address)?;

    let escrow = decrement_escrow(deps.storage, amount)?;

    let mut stats = STATS.load(deps.storage)?;
    stats.total_unlocks += 1;
    stats.total_unlocked = stats.total_unlocked.checked_add(amount)?;
    STATS.save(deps.storage, &stats)?;

    let send = BankMsg::Send {
        to_address: receiver.to_string(),
        amount: coins(amount.u128(), config.denom),
    };
    let event = UnlockEvent::new(token_address, receiver, amount);

    Ok(Response::new()
        .add_message(send)
        .add_event(event.to_event())
        .add_attribute("method", "unlock_token")
        .add_attribute("operator", info.sender)
        .add_attribute("escrow_balance", escrow))
}

// ============================================================================
// DecrementBalance
// ============================================================================

/// Reduce escrow accounting by `amount`. Moves no funds and emits no event,
/// so the contract's bank balance exceeds escrow by `amount` for good.
pub fn execute_decrement_balance(
    deps: DepsMut,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }
    ensure_nonzero(amount)?;

    let escrow = decrement_escrow(deps.storage, amount)?;

    Ok(Response::new()
        .add_attribute("method", "decrement_balance")
        .add_attribute("amount", amount)
        .add_attribute("escrow_balance", escrow))
}

// ============================================================================
// Helpers
// ============================================================================

/// Subtract from escrow, refusing to go below zero. Returns the new balance.
pub(crate) fn decrement_escrow(
    storage: &mut dyn Storage,
    amount: Uint128,
) -> Result<Uint128, ContractError> {
    let escrow = ESCROW_BALANCE.load(storage)?;
    let updated = escrow
        .checked_sub(amount)
        .map_err(|_| ContractError::InsufficientEscrow {
            escrow,
            requested: amount,
        })?;
    ESCROW_BALANCE.save(storage, &updated)?;
    Ok(updated)
}

fn load_active_config(storage: &dyn Storage) -> Result<Config, ContractError> {
    let config = CONFIG.load(storage)?;
    if config.paused {
        return Err(ContractError::BridgePaused);
    }
    Ok(config)
}

fn ensure_nonzero(amount: Uint128) -> Result<(), ContractError> {
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "Amount must be greater than zero".to_string(),
        });
    }
    Ok(())
}

/// The message must carry exactly `amount` of `denom` and nothing else.
fn ensure_exact_funds(
    info: &MessageInfo,
    denom: &str,
    amount: Uint128,
) -> Result<(), ContractError> {
    match info.funds.as_slice() {
        [coin] if coin.denom == denom && coin.amount == amount => Ok(()),
        funds => Err(ContractError::FundsMismatch {
            denom: denom.to_string(),
            expected: amount,
            got: if funds.is_empty() {
                "nothing".to_string()
            } else {
                funds
                    .iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>()
                    .join(",")
            },
        }),
    }
}

/// Resolve `token_address` and confirm it is an initialized token ledger.
fn ensure_token_ledger(deps: Deps, token_address: &str) -> Result<Addr, ContractError> {
    let token = deps.api.addr_validate(token_address)?;
    let state: Result<LedgerStateResponse, _> = deps
        .querier
        .query_wasm_smart(token.to_string(), &LedgerQueryMsg::LedgerState {});

    match state {
        Ok(state) if state.initialized => Ok(token),
        _ => Err(ContractError::TokenNotLedger {
            token: token.to_string(),
        }),
    }
}
