//! Error types for the token ledger.
//!
//! Every failed precondition aborts the whole message; nothing is written and
//! no attributes are kept.

use common::StaleState;
use cosmwasm_std::{OverflowError, StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only the token owner can mint")]
    Unauthorized,

    #[error("Unauthorized: debit of {account} must be signed by that account")]
    DebitNotAuthorized { account: String },

    // ========================================================================
    // Lifecycle Errors
    // ========================================================================

    #[error("Ledger already initialized")]
    AlreadyInitialized,

    #[error("Ledger not initialized")]
    NotInitialized,

    #[error("{0}")]
    StateMismatch(#[from] StaleState),

    // ========================================================================
    // Supply & Balance Errors
    // ========================================================================

    #[error("Supply cap exceeded: circulating {circulating} + {amount} > max supply {max_supply}")]
    SupplyCapExceeded {
        circulating: Uint128,
        amount: Uint128,
        max_supply: Uint128,
    },

    #[error("Insufficient balance for {account}: has {balance}, needs {required}")]
    InsufficientBalance {
        account: String,
        balance: Uint128,
        required: Uint128,
    },

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    // ========================================================================
    // Pending Update Errors
    // ========================================================================

    #[error("Invariant violation: {reason}")]
    InvariantViolation { reason: String },

    #[error("Amount mismatch: pending debit must be {expected}, got {got}")]
    AmountMismatch { expected: String, got: String },

    #[error("Token mismatch: change is bound to {got}, this ledger is {expected}")]
    TokenMismatch { expected: String, got: String },
}
