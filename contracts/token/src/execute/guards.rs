//! Precondition checks shared by the execute handlers.

use common::{BalanceChange, Credential};
use cosmwasm_std::{Addr, Deps, Env, Storage, Uint128};

use crate::error::ContractError;
use crate::state::OWNER;

/// Load the owner, failing if `Initialize` has not run.
pub(crate) fn load_owner(storage: &dyn Storage) -> Result<Addr, ContractError> {
    OWNER
        .may_load(storage)?
        .ok_or(ContractError::NotInitialized)
}

pub(crate) fn ensure_nonzero(amount: Uint128) -> Result<(), ContractError> {
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "Amount must be greater than zero".to_string(),
        });
    }
    Ok(())
}

/// A debit needs the signature of the account being debited.
pub(crate) fn authorize_debit(credential: &Credential, account: &Addr) -> Result<(), ContractError> {
    if !credential.proves(account) {
        return Err(ContractError::DebitNotAuthorized {
            account: account.to_string(),
        });
    }
    Ok(())
}

/// Check that `change` targets this ledger and resolve its account.
pub(crate) fn bind_change(
    deps: Deps,
    env: &Env,
    change: &BalanceChange,
) -> Result<Addr, ContractError> {
    if change.token != env.contract.address.as_str() {
        return Err(ContractError::TokenMismatch {
            expected: env.contract.address.to_string(),
            got: change.token.clone(),
        });
    }
    Ok(deps.api.addr_validate(&change.account)?)
}
