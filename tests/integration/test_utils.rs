//! Shared test utilities for integration tests
//!
//! `RecordingEngine` is a cache engine double that remembers every delegation it
//! receives and answers with canned query states.

use dappql::{
    Address, AllowanceParams, CacheEngine, CacheOptions, CallDescriptor, CallOutput,
    DappQLContext, EngineError, MaybeCall, QueryAddress, QueryParameters, QueryState, TokenInfo,
};
use std::cell::RefCell;

/// Configuration as it reached the allowance engine.
#[derive(Debug, Clone, PartialEq)]
pub enum ForwardedAllowance {
    Context(DappQLContext),
    Params(QueryParameters),
}

/// One call received by the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Delegation {
    Call {
        call: Option<CallDescriptor>,
        params: QueryParameters,
    },
    Calls {
        calls: Vec<MaybeCall>,
        params: QueryParameters,
    },
    EtherBalance {
        address: QueryAddress,
        params: QueryParameters,
    },
    Token {
        token: QueryAddress,
        params: QueryParameters,
    },
    TokenAllowance {
        token: QueryAddress,
        owner: QueryAddress,
        spender: QueryAddress,
        forwarded: ForwardedAllowance,
    },
    TokenBalance {
        token: QueryAddress,
        holder: QueryAddress,
        params: QueryParameters,
    },
    LookupAddress {
        address: QueryAddress,
    },
}

impl Delegation {
    /// Parameters carried by the delegation, whatever its shape.
    pub fn params(&self) -> Option<QueryParameters> {
        match self {
            Delegation::Call { params, .. }
            | Delegation::Calls { params, .. }
            | Delegation::EtherBalance { params, .. }
            | Delegation::Token { params, .. }
            | Delegation::TokenBalance { params, .. } => Some(*params),
            Delegation::TokenAllowance { forwarded, .. } => Some(match forwarded {
                ForwardedAllowance::Context(context) => context.query_params,
                ForwardedAllowance::Params(params) => *params,
            }),
            Delegation::LookupAddress { .. } => None,
        }
    }
}

#[derive(Default)]
pub struct RecordingEngine {
    mounted: RefCell<Vec<CacheOptions>>,
    delegations: RefCell<Vec<Delegation>>,
    failure: Option<EngineError>,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// An engine whose every requested query fails with `error`.
    pub fn failing(error: EngineError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    pub fn mounted(&self) -> Vec<CacheOptions> {
        self.mounted.borrow().clone()
    }

    pub fn delegations(&self) -> Vec<Delegation> {
        self.delegations.borrow().clone()
    }

    pub fn last(&self) -> Delegation {
        self.delegations
            .borrow()
            .last()
            .cloned()
            .expect("engine received no delegation")
    }

    fn record(&self, delegation: Delegation) {
        self.delegations.borrow_mut().push(delegation);
    }

    fn answer<T>(&self, requested: bool, data: impl FnOnce() -> T) -> QueryState<T> {
        match (&self.failure, requested) {
            (_, false) => QueryState::idle(),
            (Some(error), true) => QueryState::failed(error.clone()),
            (None, true) => QueryState::ready(data()),
        }
    }
}

impl CacheEngine for RecordingEngine {
    fn mount(&self, options: &CacheOptions) {
        self.mounted.borrow_mut().push(*options);
    }

    fn call(&self, call: Option<&CallDescriptor>, params: &QueryParameters) -> QueryState<CallOutput> {
        self.record(Delegation::Call {
            call: call.cloned(),
            params: *params,
        });
        self.answer(call.is_some(), || vec![serde_json::json!(42)])
    }

    fn calls(&self, calls: &[MaybeCall], params: &QueryParameters) -> Vec<QueryState<CallOutput>> {
        self.record(Delegation::Calls {
            calls: calls.to_vec(),
            params: *params,
        });
        calls
            .iter()
            .map(|call| match call {
                Some(call) => self.answer(true, || vec![serde_json::json!(call.method)]),
                None => QueryState::idle(),
            })
            .collect()
    }

    fn ether_balance(&self, address: QueryAddress, params: &QueryParameters) -> QueryState<u128> {
        self.record(Delegation::EtherBalance {
            address,
            params: *params,
        });
        self.answer(address.is_some(), || 1_000_000_000_000_000_000)
    }

    fn token(&self, token: QueryAddress, params: &QueryParameters) -> QueryState<TokenInfo> {
        self.record(Delegation::Token {
            token,
            params: *params,
        });
        self.answer(token.is_some(), || TokenInfo {
            name: "Dai Stablecoin".to_string(),
            symbol: "DAI".to_string(),
            decimals: 18,
            total_supply: 5_000_000,
        })
    }

    fn token_allowance(
        &self,
        token: QueryAddress,
        owner: QueryAddress,
        spender: QueryAddress,
        params: AllowanceParams<'_>,
    ) -> QueryState<u128> {
        let forwarded = match params {
            AllowanceParams::Context(context) => ForwardedAllowance::Context(*context),
            AllowanceParams::Params(params) => ForwardedAllowance::Params(*params),
        };
        self.record(Delegation::TokenAllowance {
            token,
            owner,
            spender,
            forwarded,
        });
        let requested = token.is_some() && owner.is_some() && spender.is_some();
        self.answer(requested, || 250)
    }

    fn token_balance(
        &self,
        token: QueryAddress,
        holder: QueryAddress,
        params: &QueryParameters,
    ) -> QueryState<u128> {
        self.record(Delegation::TokenBalance {
            token,
            holder,
            params: *params,
        });
        self.answer(token.is_some() && holder.is_some(), || 77)
    }

    fn lookup_address(&self, address: QueryAddress) -> QueryState<String> {
        self.record(Delegation::LookupAddress { address });
        self.answer(address.is_some(), || "vitalik.eth".to_string())
    }
}

pub fn address(last_byte: u8) -> Address {
    let mut bytes = [0u8; 20];
    bytes[19] = last_byte;
    Address::from_bytes(bytes)
}

pub fn call(contract: u8, method: &str) -> CallDescriptor {
    CallDescriptor::new(address(contract), method)
}
