//! Scope establishment and the nested engine scope

use super::test_utils::{address, RecordingEngine};
use dappql::{CacheOptions, DappQL, NetworkId, QueryParameters, QueryScope};
use std::sync::Arc;

#[test]
fn test_mount_hands_cache_options_to_engine_unchanged() {
    let cache_options = CacheOptions {
        max_age_ms: Some(60_000),
        persist: Some(true),
        disabled: None,
    };
    let dappql = DappQL::mount(
        QueryScope::new(None, Some(cache_options)),
        RecordingEngine::new(),
        None::<NetworkId>,
    );

    assert_eq!(dappql.engine().mounted(), vec![cache_options]);
    assert!(dappql.engine().delegations().is_empty());
}

#[test]
fn test_scope_cache_options_do_not_leak_into_query_parameters() {
    let dappql = DappQL::mount(
        QueryScope::new(
            None,
            Some(CacheOptions {
                persist: Some(true),
                ..CacheOptions::default()
            }),
        ),
        RecordingEngine::new(),
        Some(NetworkId::MAINNET),
    );

    dappql.ether_balance(Some(address(1)), &QueryParameters::new());

    let params = dappql.engine().last().params().unwrap();
    assert!(params.cache.is_empty());
}

#[test]
fn test_unscoped_facade_mounts_nothing() {
    let dappql = DappQL::unscoped(RecordingEngine::new(), None::<NetworkId>);

    assert!(dappql.scope().is_none());
    assert!(dappql.engine().mounted().is_empty());
}

#[test]
fn test_shared_scope_serves_several_facades() {
    let scope = Arc::new(QueryScope::new(
        Some(QueryParameters::new().with_network(NetworkId::POLYGON)),
        None,
    ));
    let first = DappQL::mount(Arc::clone(&scope), RecordingEngine::new(), None::<NetworkId>);
    let second = DappQL::mount(Arc::clone(&scope), RecordingEngine::new(), Some(NetworkId::MAINNET));

    assert_eq!(
        first.resolve(&QueryParameters::new()).network_id(),
        Some(NetworkId::POLYGON)
    );
    assert_eq!(
        second.resolve(&QueryParameters::new()).network_id(),
        Some(NetworkId::POLYGON)
    );
    assert_eq!(scope.defaults().network_id, Some(NetworkId::POLYGON));
}
