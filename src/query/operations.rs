//! Read operation kinds.
//!
//! Each operation is a small value carrying its own arguments. All of them share
//! the same resolve-then-delegate path in [`crate::query::DappQL::read`]; only the
//! argument shape and the engine method differ.

use crate::engine::{
    AllowanceParams, CacheEngine, CallDescriptor, CallOutput, MaybeCall, QueryState, TokenInfo,
};
use crate::resolve::DappQLContext;
use crate::types::QueryAddress;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What the token allowance operation hands to the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllowanceForwarding {
    /// Forward the whole `DappQLContext` wrapper. Matches what existing
    /// allowance engines expect.
    #[default]
    Context,
    /// Forward only the resolved parameters, like every other operation.
    Params,
}

impl fmt::Display for AllowanceForwarding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllowanceForwarding::Context => f.write_str("context"),
            AllowanceForwarding::Params => f.write_str("params"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    Call,
    Calls,
    EtherBalance,
    Token,
    TokenAllowance,
    TokenBalance,
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            QueryKind::Call => "call",
            QueryKind::Calls => "calls",
            QueryKind::EtherBalance => "ether_balance",
            QueryKind::Token => "token",
            QueryKind::TokenAllowance => "token_allowance",
            QueryKind::TokenBalance => "token_balance",
        };
        f.write_str(label)
    }
}

/// A read query the facade can delegate.
pub trait ReadQuery {
    type Output;

    const KIND: QueryKind;

    /// Forward this query's arguments and the resolved configuration to `engine`.
    fn dispatch<E: CacheEngine + ?Sized>(
        &self,
        engine: &E,
        context: &DappQLContext,
        forwarding: AllowanceForwarding,
    ) -> Self::Output;
}

/// Single contract call. `None` skips it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SingleCall<'a>(pub Option<&'a CallDescriptor>);

impl ReadQuery for SingleCall<'_> {
    type Output = QueryState<CallOutput>;

    const KIND: QueryKind = QueryKind::Call;

    fn dispatch<E: CacheEngine + ?Sized>(
        &self,
        engine: &E,
        context: &DappQLContext,
        _forwarding: AllowanceForwarding,
    ) -> Self::Output {
        engine.call(self.0, &context.query_params)
    }
}

/// Ordered batch of calls. Skipped entries are forwarded in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchCalls<'a>(pub &'a [MaybeCall]);

impl ReadQuery for BatchCalls<'_> {
    type Output = Vec<QueryState<CallOutput>>;

    const KIND: QueryKind = QueryKind::Calls;

    fn dispatch<E: CacheEngine + ?Sized>(
        &self,
        engine: &E,
        context: &DappQLContext,
        _forwarding: AllowanceForwarding,
    ) -> Self::Output {
        engine.calls(self.0, &context.query_params)
    }
}

/// Native currency balance of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EtherBalance(pub QueryAddress);

impl ReadQuery for EtherBalance {
    type Output = QueryState<u128>;

    const KIND: QueryKind = QueryKind::EtherBalance;

    fn dispatch<E: CacheEngine + ?Sized>(
        &self,
        engine: &E,
        context: &DappQLContext,
        _forwarding: AllowanceForwarding,
    ) -> Self::Output {
        engine.ether_balance(self.0, &context.query_params)
    }
}

/// ERC-20 metadata of a token contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenMetadata(pub QueryAddress);

impl ReadQuery for TokenMetadata {
    type Output = QueryState<TokenInfo>;

    const KIND: QueryKind = QueryKind::Token;

    fn dispatch<E: CacheEngine + ?Sized>(
        &self,
        engine: &E,
        context: &DappQLContext,
        _forwarding: AllowanceForwarding,
    ) -> Self::Output {
        engine.token(self.0, &context.query_params)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenAllowance {
    pub token: QueryAddress,
    pub owner: QueryAddress,
    pub spender: QueryAddress,
}

impl ReadQuery for TokenAllowance {
    type Output = QueryState<u128>;

    const KIND: QueryKind = QueryKind::TokenAllowance;

    fn dispatch<E: CacheEngine + ?Sized>(
        &self,
        engine: &E,
        context: &DappQLContext,
        forwarding: AllowanceForwarding,
    ) -> Self::Output {
        let params = match forwarding {
            AllowanceForwarding::Context => AllowanceParams::Context(context),
            AllowanceForwarding::Params => AllowanceParams::Params(&context.query_params),
        };
        engine.token_allowance(self.token, self.owner, self.spender, params)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenBalance {
    pub token: QueryAddress,
    pub holder: QueryAddress,
}

impl ReadQuery for TokenBalance {
    type Output = QueryState<u128>;

    const KIND: QueryKind = QueryKind::TokenBalance;

    fn dispatch<E: CacheEngine + ?Sized>(
        &self,
        engine: &E,
        context: &DappQLContext,
        _forwarding: AllowanceForwarding,
    ) -> Self::Output {
        engine.token_balance(self.token, self.holder, &context.query_params)
    }
}
