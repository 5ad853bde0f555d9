//! Integration tests for the DappQL query facade

mod allowance_forwarding;
mod config_integration;
mod scope_mounting;
mod test_utils;
