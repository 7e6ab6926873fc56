//! Execute handlers for the custody bridge.
//!
//! - `custody` - LockToken, UnlockToken and DecrementBalance
//! - `admin` - Pause, unpause and operator management

mod admin;
mod custody;

pub use admin::*;
pub use custody::*;
