//! Query handlers for the custody bridge.

use cosmwasm_std::{Addr, Deps, Order, StdResult};

use crate::msg::{
    ConfigResponse, EscrowBalanceResponse, IsOperatorResponse, OperatorsResponse, StatsResponse,
    TestResponse,
};
use crate::state::{CONFIG, ESCROW_BALANCE, OPERATORS, STATS, TEST};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: config.admin,
        denom: config.denom,
        paused: config.paused,
    })
}

pub fn query_escrow_balance(deps: Deps) -> StdResult<EscrowBalanceResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(EscrowBalanceResponse {
        denom: config.denom,
        escrow_balance: ESCROW_BALANCE.load(deps.storage)?,
    })
}

pub fn query_test(deps: Deps) -> StdResult<TestResponse> {
    Ok(TestResponse {
        test: TEST.load(deps.storage)?,
    })
}

pub fn query_stats(deps: Deps) -> StdResult<StatsResponse> {
    let stats = STATS.load(deps.storage)?;
    Ok(StatsResponse {
        total_locks: stats.total_locks,
        total_unlocks: stats.total_unlocks,
        total_locked: stats.total_locked,
        total_unlocked: stats.total_unlocked,
    })
}

pub fn query_operators(deps: Deps) -> StdResult<OperatorsResponse> {
    let operators = OPERATORS
        .range(deps.storage, None, None, Order::Ascending)
        .collect::<StdResult<Vec<(Addr, bool)>>>()?
        .into_iter()
        .filter_map(|(addr, active)| active.then_some(addr))
        .collect();

    Ok(OperatorsResponse { operators })
}

pub fn query_is_operator(deps: Deps, address: String) -> StdResult<IsOperatorResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let is_operator = OPERATORS.may_load(deps.storage, &addr)?.unwrap_or(false);
    Ok(IsOperatorResponse { is_operator })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::mock_dependencies;
    use cosmwasm_std::Storage;

    #[test]
    fn test_operators_skips_inactive_entries() {
        let mut deps = mock_dependencies();
        let active = Addr::unchecked("terra1active");
        let inactive = Addr::unchecked("terra1inactive");
        OPERATORS.save(deps.as_mut().storage, &active, &true).unwrap();
        OPERATORS
            .save(deps.as_mut().storage, &inactive, &false)
            .unwrap();

        let res = query_operators(deps.as_ref()).unwrap();
        assert_eq!(res.operators, vec![active]);
    }

    #[test]
    fn test_operators_surfaces_corrupt_entry() {
        let mut deps = mock_dependencies();
        let active = Addr::unchecked("terra1active");
        OPERATORS.save(deps.as_mut().storage, &active, &true).unwrap();

        let corrupt = Addr::unchecked("terra1corrupt");
        let key = OPERATORS.key(&corrupt);
        deps.storage.set(&key, b"not-a-bool");

        assert!(query_operators(deps.as_ref()).is_err());
    }
}
