//! Integration tests for the token ledger using cw-multi-test.
//!
//! Covers initialization, owner-gated minting, the supply cap, burn and
//! transfer, including the reference scenarios for an 8-decimal,
//! 21M-capped token.

use cosmwasm_std::{Addr, Empty, Uint128};
use cw20::{BalanceResponse, TokenInfoResponse};
use cw_multi_test::error::AnyResult;
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};

use token::msg::{ExecuteMsg, InstantiateMsg, LedgerStateResponse, QueryMsg};
use token::ContractError;

// ============================================================================
// Test Setup
// ============================================================================

fn contract_token() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        token::contract::execute,
        token::contract::instantiate,
        token::contract::query,
    )
    .with_migrate(token::contract::migrate);
    Box::new(contract)
}

/// Deploy a token without initializing it
fn deploy(app: &mut App, deployer: &Addr) -> Addr {
    let code_id = app.store_code(contract_token());
    app.instantiate_contract(
        code_id,
        deployer.clone(),
        &InstantiateMsg {
            name: "Wrapped Bitcoin".to_string(),
            symbol: None,
        },
        &[],
        "wbtc-token",
        None,
    )
    .unwrap()
}

/// Deploy and initialize with decimals=8, max_supply=21_000_000
fn setup() -> (App, Addr, Addr) {
    let mut app = App::default();
    let owner = Addr::unchecked("terra1owner");
    let token = deploy(&mut app, &owner);

    app.execute_contract(
        owner.clone(),
        token.clone(),
        &ExecuteMsg::Initialize {
            decimals: 8,
            max_supply: Uint128::new(21_000_000),
        },
        &[],
    )
    .unwrap();

    (app, token, owner)
}

fn mint(
    app: &mut App,
    caller: &Addr,
    token: &Addr,
    recipient: &Addr,
    amount: u128,
) -> AnyResult<AppResponse> {
    app.execute_contract(
        caller.clone(),
        token.clone(),
        &ExecuteMsg::Mint {
            recipient: recipient.to_string(),
            amount: Uint128::new(amount),
            expected_supply: None,
        },
        &[],
    )
}

fn balance(app: &App, token: &Addr, holder: &Addr) -> Uint128 {
    let res: BalanceResponse = app
        .wrap()
        .query_wasm_smart(
            token,
            &QueryMsg::Balance {
                address: holder.to_string(),
            },
        )
        .unwrap();
    res.balance
}

fn ledger_state(app: &App, token: &Addr) -> LedgerStateResponse {
    app.wrap()
        .query_wasm_smart(token, &QueryMsg::LedgerState {})
        .unwrap()
}

// ============================================================================
// Initialization Tests
// ============================================================================

#[test]
fn test_instantiate_leaves_ledger_uninitialized() {
    let mut app = App::default();
    let deployer = Addr::unchecked("terra1deployer");
    let token = deploy(&mut app, &deployer);

    let state = ledger_state(&app, &token);
    assert!(!state.initialized);
    assert_eq!(state.symbol, "WBTC");
    assert_eq!(state.owner, None);
    assert_eq!(state.decimals, None);
    assert_eq!(state.max_supply, None);
    assert_eq!(state.circulating_supply, Uint128::zero());
}

#[test]
fn test_initialize_sets_owner_from_caller() {
    let (app, token, owner) = setup();

    let state = ledger_state(&app, &token);
    assert!(state.initialized);
    assert_eq!(state.owner, Some(owner));
    assert_eq!(state.decimals, Some(8));
    assert_eq!(state.max_supply, Some(Uint128::new(21_000_000)));
    assert_eq!(state.circulating_supply, Uint128::zero());

    let info: TokenInfoResponse = app
        .wrap()
        .query_wasm_smart(&token, &QueryMsg::TokenInfo {})
        .unwrap();
    assert_eq!(info.decimals, 8);
    assert_eq!(info.total_supply, Uint128::zero());
}

#[test]
fn test_initialize_twice_fails() {
    let (mut app, token, _owner) = setup();
    let intruder = Addr::unchecked("terra1intruder");

    let res = app.execute_contract(
        intruder,
        token.clone(),
        &ExecuteMsg::Initialize {
            decimals: 18,
            max_supply: Uint128::new(u128::MAX),
        },
        &[],
    );
    assert_eq!(
        res.unwrap_err().root_cause().to_string(),
        ContractError::AlreadyInitialized.to_string()
    );

    let state = ledger_state(&app, &token);
    assert_eq!(state.owner, Some(Addr::unchecked("terra1owner")));
    assert_eq!(state.decimals, Some(8));
    assert_eq!(state.max_supply, Some(Uint128::new(21_000_000)));
}

#[test]
fn test_operations_before_initialize_fail() {
    let mut app = App::default();
    let deployer = Addr::unchecked("terra1deployer");
    let token = deploy(&mut app, &deployer);

    let res = mint(&mut app, &deployer, &token, &deployer, 1);
    assert_eq!(
        res.unwrap_err().root_cause().to_string(),
        ContractError::NotInitialized.to_string()
    );
}

// ============================================================================
// Mint Tests
// ============================================================================

#[test]
fn test_owner_mint_credits_receiver() {
    let (mut app, token, owner) = setup();
    let alice = Addr::unchecked("terra1alice");

    let res = mint(&mut app, &owner, &token, &alice, 100).unwrap();
    let wasm = res.events.iter().find(|e| e.ty == "wasm").unwrap();
    assert!(wasm
        .attributes
        .iter()
        .any(|a| a.key == "circulating_supply" && a.value == "100"));

    assert_eq!(balance(&app, &token, &alice), Uint128::new(100));
    assert_eq!(ledger_state(&app, &token).circulating_supply, Uint128::new(100));
}

#[test]
fn test_non_owner_mint_unauthorized() {
    let (mut app, token, owner) = setup();
    let alice = Addr::unchecked("terra1alice");
    mint(&mut app, &owner, &token, &alice, 100).unwrap();

    let res = mint(&mut app, &alice, &token, &alice, 100);
    assert_eq!(
        res.unwrap_err().root_cause().to_string(),
        ContractError::Unauthorized.to_string()
    );

    assert_eq!(balance(&app, &token, &alice), Uint128::new(100));
    assert_eq!(ledger_state(&app, &token).circulating_supply, Uint128::new(100));
}

#[test]
fn test_mint_over_cap_fails_without_effect() {
    let (mut app, token, owner) = setup();
    let alice = Addr::unchecked("terra1alice");
    mint(&mut app, &owner, &token, &alice, 100).unwrap();

    let res = mint(&mut app, &owner, &token, &alice, 21_000_000);
    assert_eq!(
        res.unwrap_err().root_cause().to_string(),
        ContractError::SupplyCapExceeded {
            circulating: Uint128::new(100),
            amount: Uint128::new(21_000_000),
            max_supply: Uint128::new(21_000_000),
        }
        .to_string()
    );

    assert_eq!(balance(&app, &token, &alice), Uint128::new(100));
    assert_eq!(ledger_state(&app, &token).circulating_supply, Uint128::new(100));
}

#[test]
fn test_mint_up_to_cap_exactly() {
    let (mut app, token, owner) = setup();
    let alice = Addr::unchecked("terra1alice");

    mint(&mut app, &owner, &token, &alice, 20_999_999).unwrap();
    mint(&mut app, &owner, &token, &alice, 1).unwrap();
    assert_eq!(
        ledger_state(&app, &token).circulating_supply,
        Uint128::new(21_000_000)
    );

    assert!(mint(&mut app, &owner, &token, &alice, 1).is_err());
}

#[test]
fn test_mint_zero_rejected() {
    let (mut app, token, owner) = setup();
    let res = mint(&mut app, &owner, &token, &owner, 0);
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("Invalid amount"));
}

#[test]
fn test_non_owner_zero_mint_is_unauthorized() {
    let (mut app, token, _owner) = setup();
    let alice = Addr::unchecked("terra1alice");

    // Authorization is checked before the amount
    let res = mint(&mut app, &alice, &token, &alice, 0);
    assert_eq!(
        res.unwrap_err().root_cause().to_string(),
        ContractError::Unauthorized.to_string()
    );
}

// ============================================================================
// Burn Tests
// ============================================================================

#[test]
fn test_burn_full_balance() {
    let (mut app, token, owner) = setup();
    let alice = Addr::unchecked("terra1alice");
    mint(&mut app, &owner, &token, &alice, 100).unwrap();

    app.execute_contract(
        alice.clone(),
        token.clone(),
        &ExecuteMsg::Burn {
            burner: alice.to_string(),
            amount: Uint128::new(100),
            expected_supply: None,
        },
        &[],
    )
    .unwrap();

    assert_eq!(balance(&app, &token, &alice), Uint128::zero());
    assert_eq!(ledger_state(&app, &token).circulating_supply, Uint128::zero());
}

#[test]
fn test_burn_more_than_balance_fails() {
    let (mut app, token, owner) = setup();
    let alice = Addr::unchecked("terra1alice");
    mint(&mut app, &owner, &token, &alice, 100).unwrap();

    let res = app.execute_contract(
        alice.clone(),
        token.clone(),
        &ExecuteMsg::Burn {
            burner: alice.to_string(),
            amount: Uint128::new(101),
            expected_supply: None,
        },
        &[],
    );
    assert_eq!(
        res.unwrap_err().root_cause().to_string(),
        ContractError::InsufficientBalance {
            account: alice.to_string(),
            balance: Uint128::new(100),
            required: Uint128::new(101),
        }
        .to_string()
    );
    assert_eq!(ledger_state(&app, &token).circulating_supply, Uint128::new(100));
}

#[test]
fn test_burn_of_other_account_not_authorized() {
    let (mut app, token, owner) = setup();
    let alice = Addr::unchecked("terra1alice");
    mint(&mut app, &owner, &token, &alice, 100).unwrap();

    // Even the owner cannot burn someone else's tokens
    let res = app.execute_contract(
        owner.clone(),
        token.clone(),
        &ExecuteMsg::Burn {
            burner: alice.to_string(),
            amount: Uint128::new(10),
            expected_supply: None,
        },
        &[],
    );
    assert_eq!(
        res.unwrap_err().root_cause().to_string(),
        ContractError::DebitNotAuthorized {
            account: alice.to_string()
        }
        .to_string()
    );
    assert_eq!(balance(&app, &token, &alice), Uint128::new(100));
}

// ============================================================================
// Transfer Tests
// ============================================================================

#[test]
fn test_transfer_moves_full_balance() {
    let (mut app, token, owner) = setup();
    let alice = Addr::unchecked("terra1alice");
    let bob = Addr::unchecked("terra1bob");
    mint(&mut app, &owner, &token, &alice, 50).unwrap();

    app.execute_contract(
        alice.clone(),
        token.clone(),
        &ExecuteMsg::Transfer {
            sender: alice.to_string(),
            recipient: bob.to_string(),
            amount: Uint128::new(50),
        },
        &[],
    )
    .unwrap();

    assert_eq!(balance(&app, &token, &alice), Uint128::zero());
    assert_eq!(balance(&app, &token, &bob), Uint128::new(50));
    assert_eq!(ledger_state(&app, &token).circulating_supply, Uint128::new(50));
}

#[test]
fn test_transfer_insufficient_balance() {
    let (mut app, token, owner) = setup();
    let alice = Addr::unchecked("terra1alice");
    let bob = Addr::unchecked("terra1bob");
    mint(&mut app, &owner, &token, &alice, 50).unwrap();

    let res = app.execute_contract(
        alice.clone(),
        token.clone(),
        &ExecuteMsg::Transfer {
            sender: alice.to_string(),
            recipient: bob.to_string(),
            amount: Uint128::new(51),
        },
        &[],
    );
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("Insufficient balance"));
    assert_eq!(balance(&app, &token, &alice), Uint128::new(50));
    assert_eq!(balance(&app, &token, &bob), Uint128::zero());
}

#[test]
fn test_self_transfer_keeps_balance() {
    let (mut app, token, owner) = setup();
    let alice = Addr::unchecked("terra1alice");
    mint(&mut app, &owner, &token, &alice, 50).unwrap();

    app.execute_contract(
        alice.clone(),
        token.clone(),
        &ExecuteMsg::Transfer {
            sender: alice.to_string(),
            recipient: alice.to_string(),
            amount: Uint128::new(50),
        },
        &[],
    )
    .unwrap();

    assert_eq!(balance(&app, &token, &alice), Uint128::new(50));
}

#[test]
fn test_transfer_from_other_account_not_authorized() {
    let (mut app, token, owner) = setup();
    let alice = Addr::unchecked("terra1alice");
    let bob = Addr::unchecked("terra1bob");
    mint(&mut app, &owner, &token, &alice, 50).unwrap();

    let res = app.execute_contract(
        bob.clone(),
        token.clone(),
        &ExecuteMsg::Transfer {
            sender: alice.to_string(),
            recipient: bob.to_string(),
            amount: Uint128::new(50),
        },
        &[],
    );
    assert_eq!(
        res.unwrap_err().root_cause().to_string(),
        ContractError::DebitNotAuthorized {
            account: alice.to_string()
        }
        .to_string()
    );
    assert_eq!(balance(&app, &token, &alice), Uint128::new(50));
}

// ============================================================================
// Migrate
// ============================================================================

#[test]
fn test_migrate_keeps_state() {
    let mut app = App::default();
    let owner = Addr::unchecked("terra1owner");
    let code_id = app.store_code(contract_token());
    let token = app
        .instantiate_contract(
            code_id,
            owner.clone(),
            &InstantiateMsg {
                name: "Wrapped Bitcoin".to_string(),
                symbol: Some("WBTC".to_string()),
            },
            &[],
            "wbtc-token",
            Some(owner.to_string()),
        )
        .unwrap();
    app.execute_contract(
        owner.clone(),
        token.clone(),
        &ExecuteMsg::Initialize {
            decimals: 8,
            max_supply: Uint128::new(21_000_000),
        },
        &[],
    )
    .unwrap();
    mint(&mut app, &owner, &token, &owner, 7).unwrap();

    app.migrate_contract(owner.clone(), token.clone(), &token::msg::MigrateMsg {}, code_id)
        .unwrap();

    let state = ledger_state(&app, &token);
    assert_eq!(state.circulating_supply, Uint128::new(7));
    assert_eq!(state.owner, Some(owner));
}
