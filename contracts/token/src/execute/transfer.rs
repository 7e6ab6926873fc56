//! Balance-moving handlers that leave circulating supply untouched.
//!
//! `ApproveUpdate` and `SendTokensFromLedger` accept balance changes built
//! outside this contract. They validate the whole change set, stage it in one
//! `BalanceBatch`, and commit only when every sub-operation passed.

use common::{BalanceChange, Credential, PendingUpdate, SignedAmount};
use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Uint128};

use super::guards::{authorize_debit, bind_change, ensure_nonzero, load_owner};
use crate::error::ContractError;
use crate::ledger::BalanceBatch;

// ============================================================================
// Transfer
// ============================================================================

pub fn execute_transfer(
    deps: DepsMut,
    info: MessageInfo,
    sender: String,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_nonzero(amount)?;
    load_owner(deps.storage)?;

    let sender = deps.api.addr_validate(&sender)?;
    let recipient = deps.api.addr_validate(&recipient)?;
    authorize_debit(&Credential::from_info(&info), &sender)?;

    let mut batch = BalanceBatch::new();
    batch.debit(deps.storage, &sender, amount)?;
    batch.credit(deps.storage, &recipient, amount)?;
    batch.commit(deps.storage)?;

    Ok(Response::new()
        .add_attribute("method", "transfer")
        .add_attribute("sender", sender)
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount))
}

// ============================================================================
// ApproveUpdate
// ============================================================================

/// Fold a zero-sum set of external balance changes into this ledger.
pub fn execute_approve_update(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    update: PendingUpdate,
) -> Result<Response, ContractError> {
    load_owner(deps.storage)?;

    if update.changes.is_empty() {
        return Err(ContractError::InvalidAmount {
            reason: "Pending update has no balance changes".to_string(),
        });
    }
    // A zero delta would only create an empty holder row
    if update.changes.iter().any(|change| change.delta.is_zero()) {
        return Err(ContractError::InvalidAmount {
            reason: "Balance change must be non-zero".to_string(),
        });
    }

    let net = update.net_delta()?;
    if !net.is_zero() {
        return Err(ContractError::InvariantViolation {
            reason: format!("net balance change must be zero, got {}", net),
        });
    }

    let credential = Credential::from_info(&info);
    let mut batch = BalanceBatch::new();
    for change in &update.changes {
        let account = bind_change(deps.as_ref(), &env, change)?;
        if change.delta.is_debit() {
            authorize_debit(&credential, &account)?;
        }
        batch.apply(deps.storage, &account, &change.delta)?;
    }

    let accounts = batch.len();
    batch.commit(deps.storage)?;

    Ok(Response::new()
        .add_attribute("method", "approve_update")
        .add_attribute("changes", update.changes.len().to_string())
        .add_attribute("accounts", accounts.to_string()))
}

// ============================================================================
// SendTokensFromLedger
// ============================================================================

/// Approve a pending debit of exactly `amount`, then credit `recipient`.
pub fn execute_send_tokens_from_ledger(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
    debit: BalanceChange,
) -> Result<Response, ContractError> {
    ensure_nonzero(amount)?;
    load_owner(deps.storage)?;

    if !debit.delta.encodes_debit_of(amount) {
        return Err(ContractError::AmountMismatch {
            expected: SignedAmount::negative(amount).to_string(),
            got: debit.delta.to_string(),
        });
    }

    let sender = bind_change(deps.as_ref(), &env, &debit)?;
    authorize_debit(&Credential::from_info(&info), &sender)?;

    let recipient = deps.api.addr_validate(&recipient)?;
    let credit = BalanceChange::credit(recipient.as_str(), env.contract.address.as_str(), amount);

    let mut batch = BalanceBatch::new();
    batch.apply(deps.storage, &sender, &debit.delta)?;
    batch.apply(deps.storage, &recipient, &credit.delta)?;
    batch.commit(deps.storage)?;

    Ok(Response::new()
        .add_attribute("method", "send_tokens_from_ledger")
        .add_attribute("sender", sender)
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount))
}
