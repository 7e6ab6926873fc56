//! Execute handlers for the token ledger.
//!
//! - `supply` - Initialize, Mint and Burn (the only supply-changing paths)
//! - `transfer` - Transfer and the pending-update approvals
//! - `guards` - precondition checks shared by both

mod guards;
mod supply;
mod transfer;

pub use supply::*;
pub use transfer::*;
