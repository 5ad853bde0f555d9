//! DappQL: layered query parameters for blockchain reads
//!
//! Resolves query parameters from a scope, a call site, and the connected wallet,
//! then hands each read (contract calls, balances, token metadata, allowances) to a
//! cache engine that does the fetching and caching.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod network;
pub mod params;
pub mod query;
pub mod resolve;
pub mod scope;
pub mod types;

#[cfg(test)]
mod test_env;

pub use engine::{
    AllowanceParams, CacheEngine, CallDescriptor, CallOutput, MaybeCall, QueryState, TokenInfo,
};
pub use error::{DappQLError, EngineError};
pub use network::{NetworkSource, WalletConnection};
pub use params::{CacheOptions, QueryParameters, RefreshPolicy};
pub use query::{AllowanceForwarding, DappQL, ReadQuery};
pub use resolve::{resolve, DappQLContext, NetworkOrigin, ResolvedConfiguration};
pub use scope::QueryScope;
pub use types::{Address, NetworkId, QueryAddress};
