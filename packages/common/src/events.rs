//! Custody events consumed by the off-chain relayer.
//!
//! Each committed lock/unlock emits exactly one of these, with `amount` equal
//! to the escrow change of the same transaction. The chain prefixes custom
//! event types with `wasm-`, so parsing accepts both forms.

use std::str::FromStr;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Event, StdError, StdResult, Uint128};

pub const LOCK_EVENT: &str = "lock";
pub const UNLOCK_EVENT: &str = "unlock";

#[cw_serde]
pub struct LockEvent {
    pub token_address: Addr,
    pub sender: Addr,
    pub amount: Uint128,
}

#[cw_serde]
pub struct UnlockEvent {
    pub token_address: Addr,
    pub receiver: Addr,
    pub amount: Uint128,
}

impl LockEvent {
    pub fn new(token_address: Addr, sender: Addr, amount: Uint128) -> Self {
        Self {
            token_address,
            sender,
            amount,
        }
    }

    pub fn to_event(&self) -> Event {
        Event::new(LOCK_EVENT)
            .add_attribute("token_address", self.token_address.as_str())
            .add_attribute("sender", self.sender.as_str())
            .add_attribute("amount", self.amount.to_string())
    }

    pub fn from_event(event: &Event) -> StdResult<Self> {
        check_type(event, LOCK_EVENT)?;
        Ok(Self {
            token_address: Addr::unchecked(attribute(event, "token_address")?),
            sender: Addr::unchecked(attribute(event, "sender")?),
            amount: Uint128::from_str(attribute(event, "amount")?)?,
        })
    }
}

impl UnlockEvent {
    pub fn new(token_address: Addr, receiver: Addr, amount: Uint128) -> Self {
        Self {
            token_address,
            receiver,
            amount,
        }
    }

    pub fn to_event(&self) -> Event {
        Event::new(UNLOCK_EVENT)
            .add_attribute("token_address", self.token_address.as_str())
            .add_attribute("receiver", self.receiver.as_str())
            .add_attribute("amount", self.amount.to_string())
    }

    pub fn from_event(event: &Event) -> StdResult<Self> {
        check_type(event, UNLOCK_EVENT)?;
        Ok(Self {
            token_address: Addr::unchecked(attribute(event, "token_address")?),
            receiver: Addr::unchecked(attribute(event, "receiver")?),
            amount: Uint128::from_str(attribute(event, "amount")?)?,
        })
    }
}

/// True if `event` is a custody event of kind `kind`, prefixed or not.
pub fn is_event_type(event: &Event, kind: &str) -> bool {
    event.ty == kind || event.ty.strip_prefix("wasm-") == Some(kind)
}

fn check_type(event: &Event, kind: &str) -> StdResult<()> {
    if is_event_type(event, kind) {
        Ok(())
    } else {
        Err(StdError::generic_err(format!(
            "expected {} event, got {}",
            kind, event.ty
        )))
    }
}

fn attribute<'a>(event: &'a Event, key: &str) -> StdResult<&'a str> {
    event
        .attributes
        .iter()
        .find(|a| a.key == key)
        .map(|a| a.value.as_str())
        .ok_or_else(|| StdError::generic_err(format!("{} event missing {}", event.ty, key)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_event_attributes() {
        let lock = LockEvent::new(
            Addr::unchecked("terra1token"),
            Addr::unchecked("terra1alice"),
            Uint128::new(50),
        );
        let event = lock.to_event();

        assert_eq!(event.ty, "lock");
        assert_eq!(event.attributes.len(), 3);
        assert_eq!(LockEvent::from_event(&event).unwrap(), lock);
    }

    #[test]
    fn test_unlock_event_accepts_wasm_prefix() {
        let unlock = UnlockEvent::new(
            Addr::unchecked("terra1token"),
            Addr::unchecked("terra1bob"),
            Uint128::new(50),
        );
        let mut event = unlock.to_event();
        event.ty = "wasm-unlock".to_string();

        assert_eq!(UnlockEvent::from_event(&event).unwrap(), unlock);
    }

    #[test]
    fn test_wrong_event_type_rejected() {
        let event = LockEvent::new(
            Addr::unchecked("terra1token"),
            Addr::unchecked("terra1alice"),
            Uint128::new(1),
        )
        .to_event();

        assert!(UnlockEvent::from_event(&event).is_err());
        assert!(!is_event_type(&event, UNLOCK_EVENT));
    }

    #[test]
    fn test_missing_attribute_rejected() {
        let event = Event::new(UNLOCK_EVENT).add_attribute("token_address", "terra1token");
        assert!(UnlockEvent::from_event(&event).is_err());
    }
}
