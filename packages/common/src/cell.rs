//! Optimistic-concurrency checks on persistent cells.
//!
//! A caller that computed its arguments from a snapshot can pass the value it
//! saw. The handler compares it with the value read in the current
//! transaction and aborts on divergence instead of acting on stale state.

use std::fmt::Display;

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
#[error("State mismatch on {cell}: expected {expected}, found {actual}")]
pub struct StaleState {
    pub cell: String,
    pub expected: String,
    pub actual: String,
}

/// Assert that `actual` still equals the caller's `expected` snapshot.
///
/// A `None` snapshot means the caller did not pin this cell.
pub fn assert_unchanged<T>(cell: &str, expected: Option<&T>, actual: &T) -> Result<(), StaleState>
where
    T: PartialEq + Display,
{
    match expected {
        Some(expected) if expected != actual => Err(StaleState {
            cell: cell.to_string(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        }),
        _ => Ok(()),
    }
}
