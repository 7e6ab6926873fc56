//! Error types for the custody bridge.

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

    #[error("Unauthorized: only admin can perform this action")]
    Unauthorized,

    #[error("Unauthorized: only operator can perform this action")]
    UnauthorizedOperator,

    #[error("Sender mismatch: {sender} cannot be locked by {caller}")]
    SenderMismatch { sender: String, caller: String },

    // ========================================================================
    // Bridge State Errors
    // ========================================================================

    #[error("Bridge is paused")]
    BridgePaused,

    #[error("Not an initialized token ledger: {token}")]
    TokenNotLedger { token: String },

    #[error("Operator already registered")]
    OperatorAlreadyRegistered,

    #[error("Operator not registered")]
    OperatorNotRegistered,

    // ========================================================================
    // Amount & Funds Errors
    // ========================================================================

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Funds mismatch: expected {expected}{denom}, got {got}")]
    FundsMismatch {
        denom: String,
        expected: Uint128,
        got: String,
    },

    #[error("Insufficient escrow: holds {escrow}, requested {requested}")]
    InsufficientEscrow { escrow: Uint128, requested: Uint128 },
}
