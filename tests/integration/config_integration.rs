//! Integration tests for configuration-driven facades

use super::test_utils::{address, Delegation, ForwardedAllowance, RecordingEngine};
use dappql::config::ConfigLoader;
use dappql::{DappQL, NetworkId, QueryParameters, RefreshPolicy};
use tempfile::TempDir;

#[test]
fn test_facade_from_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("dappql.toml");

    std::fs::write(
        &config_file,
        r#"
[query]
network_id = 10
refresh = 2

[cache]
max_age_ms = 30000

[facade]
allowance_forwarding = "params"
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&config_file).unwrap();
    assert!(config.validate().is_ok());

    let dappql = DappQL::from_config(&config, RecordingEngine::new(), Some(NetworkId::MAINNET));

    assert_eq!(dappql.engine().mounted()[0].max_age_ms, Some(30000));

    dappql.token_allowance(
        Some(address(1)),
        Some(address(2)),
        Some(address(3)),
        &QueryParameters::new(),
    );
    match dappql.engine().last() {
        Delegation::TokenAllowance {
            forwarded: ForwardedAllowance::Params(params),
            ..
        } => {
            assert_eq!(params.network_id, Some(NetworkId::OPTIMISM));
            assert_eq!(params.refresh, Some(RefreshPolicy::Blocks(2)));
        }
        other => panic!("unexpected delegation: {:?}", other),
    }
}

#[test]
fn test_config_with_invalid_forwarding_fails_to_load() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("dappql.toml");
    std::fs::write(&config_file, "[facade]\nallowance_forwarding = \"sometimes\"\n").unwrap();

    assert!(ConfigLoader::load_from_file(&config_file).is_err());
}
