//! Token allowance forwarding: the whole wrapper or the bare parameters

use super::test_utils::{address, Delegation, ForwardedAllowance, RecordingEngine};
use dappql::{
    AllowanceForwarding, DappQL, DappQLContext, NetworkId, QueryParameters, QueryScope,
    RefreshPolicy,
};

fn facade(forwarding: AllowanceForwarding) -> DappQL<RecordingEngine, Option<NetworkId>> {
    DappQL::mount(
        QueryScope::new(
            Some(QueryParameters::new().with_refresh(RefreshPolicy::EveryBlock)),
            None,
        ),
        RecordingEngine::new(),
        Some(NetworkId::MAINNET),
    )
    .with_allowance_forwarding(forwarding)
}

fn forwarded(dappql: &DappQL<RecordingEngine, Option<NetworkId>>) -> ForwardedAllowance {
    match dappql.engine().last() {
        Delegation::TokenAllowance { forwarded, .. } => forwarded,
        other => panic!("unexpected delegation: {:?}", other),
    }
}

#[test]
fn test_default_forwards_wrapper_object() {
    let dappql = facade(AllowanceForwarding::default());
    let overrides = QueryParameters::new().with_network(NetworkId::POLYGON);

    let state = dappql.token_allowance(
        Some(address(1)),
        Some(address(2)),
        Some(address(3)),
        &overrides,
    );

    assert_eq!(state.data, Some(250));
    let expected = DappQLContext {
        query_params: QueryParameters::new()
            .with_network(NetworkId::POLYGON)
            .with_refresh(RefreshPolicy::EveryBlock),
    };
    assert_eq!(forwarded(&dappql), ForwardedAllowance::Context(expected));
    assert_eq!(dappql.context(&overrides), expected);
}

#[test]
fn test_params_mode_matches_sibling_operations() {
    let dappql = facade(AllowanceForwarding::Params);
    let overrides = QueryParameters::new();

    dappql.token_allowance(Some(address(1)), Some(address(2)), Some(address(3)), &overrides);
    dappql.token_balance(Some(address(1)), Some(address(2)), &overrides);

    let sibling_params = dappql.engine().last().params().unwrap();
    assert_eq!(
        dappql.engine().delegations()[0],
        Delegation::TokenAllowance {
            token: Some(address(1)),
            owner: Some(address(2)),
            spender: Some(address(3)),
            forwarded: ForwardedAllowance::Params(sibling_params),
        }
    );
    assert_eq!(sibling_params.network_id, Some(NetworkId::MAINNET));
}

#[test]
fn test_both_modes_carry_identical_parameters() {
    let overrides = QueryParameters::new().with_static(true);
    let wrapped = facade(AllowanceForwarding::Context);
    let bare = facade(AllowanceForwarding::Params);

    for dappql in [&wrapped, &bare] {
        dappql.token_allowance(Some(address(1)), Some(address(2)), None, &overrides);
    }

    assert_eq!(
        wrapped.engine().last().params(),
        bare.engine().last().params()
    );
    assert!(matches!(forwarded(&wrapped), ForwardedAllowance::Context(_)));
    assert!(matches!(forwarded(&bare), ForwardedAllowance::Params(_)));
}

#[test]
fn test_skipped_spender_is_forwarded() {
    let dappql = facade(AllowanceForwarding::Context);

    let state = dappql.token_allowance(Some(address(1)), Some(address(2)), None, &QueryParameters::new());

    assert_eq!(state.data, None);
    assert!(matches!(
        dappql.engine().last(),
        Delegation::TokenAllowance { spender: None, .. }
    ));
}
