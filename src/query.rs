//! Query facade: read operations that resolve configuration and delegate to a
//! cache engine.

mod facade;
mod operations;

pub use facade::DappQL;
pub use operations::{
    AllowanceForwarding, BatchCalls, EtherBalance, QueryKind, ReadQuery, SingleCall,
    TokenAllowance, TokenBalance, TokenMetadata,
};
