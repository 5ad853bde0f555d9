//! Primitive chain types: network identifiers and addresses.

use crate::error::DappQLError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Identifier of a blockchain network (EIP-155 chain id).
///
/// Opaque to the resolver: ids are selected, never combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetworkId(pub u64);

const KNOWN_NETWORKS: &[(u64, &str)] = &[
    (1, "mainnet"),
    (10, "optimism"),
    (56, "bsc"),
    (100, "gnosis"),
    (137, "polygon"),
    (8453, "base"),
    (42161, "arbitrum"),
    (43114, "avalanche"),
    (11155111, "sepolia"),
];

impl NetworkId {
    pub const MAINNET: NetworkId = NetworkId(1);
    pub const OPTIMISM: NetworkId = NetworkId(10);
    pub const POLYGON: NetworkId = NetworkId(137);
    pub const ARBITRUM: NetworkId = NetworkId(42161);
    pub const SEPOLIA: NetworkId = NetworkId(11155111);

    pub const fn new(id: u64) -> Self {
        NetworkId(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// Zero is how wallets report "no chain"; resolution treats it as absent.
    pub const fn is_set(self) -> bool {
        self.get() != 0
    }

    /// Well-known short name, if this is a network we recognize.
    pub fn name(self) -> Option<&'static str> {
        KNOWN_NETWORKS
            .iter()
            .find(|(id, _)| *id == self.0)
            .map(|(_, name)| *name)
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NetworkId {
    fn from(id: u64) -> Self {
        NetworkId(id)
    }
}

/// Accepts a decimal id, a `0x`-prefixed hex id, or a well-known network name.
/// Zero is rejected: a zero chain id means "unset" to every wallet we talk to.
impl FromStr for NetworkId {
    type Err = DappQLError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = if let Some(hex_digits) = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
        {
            u64::from_str_radix(hex_digits, 16).ok()
        } else if let Ok(id) = trimmed.parse::<u64>() {
            Some(id)
        } else {
            let lowered = trimmed.to_ascii_lowercase();
            KNOWN_NETWORKS
                .iter()
                .find(|(_, name)| *name == lowered)
                .map(|(id, _)| *id)
        };

        match parsed {
            Some(0) => Err(DappQLError::InvalidNetwork(format!(
                "'{}' (network id 0 is reserved)",
                s
            ))),
            Some(id) => Ok(NetworkId(id)),
            None => Err(DappQLError::InvalidNetwork(format!("'{}'", s))),
        }
    }
}

/// 20-byte account or contract address.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address([u8; 20]);

/// Address argument that may be the skip sentinel (`None`).
pub type QueryAddress = Option<Address>;

impl Address {
    pub const ZERO: Address = Address([0u8; 20]);

    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Address(bytes)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self)
    }
}

impl FromStr for Address {
    type Err = DappQLError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        let bytes = hex::decode(digits)
            .map_err(|e| DappQLError::InvalidAddress(format!("'{}': {}", s, e)))?;
        let bytes: [u8; 20] = bytes.try_into().map_err(|b: Vec<u8>| {
            DappQLError::InvalidAddress(format!("'{}': expected 20 bytes, got {}", s, b.len()))
        })?;
        Ok(Address(bytes))
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
