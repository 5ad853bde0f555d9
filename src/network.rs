//! Ambient network source: which network the connected wallet is on.
//!
//! The resolver only ever asks one question of this source and uses the answer as
//! the lowest-precedence network id.

use crate::types::NetworkId;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

/// Supplies the currently active network id, if any.
pub trait NetworkSource {
    fn active_network(&self) -> Option<NetworkId>;
}

/// A fixed answer. `None` models a disconnected wallet.
impl NetworkSource for Option<NetworkId> {
    fn active_network(&self) -> Option<NetworkId> {
        *self
    }
}

impl NetworkSource for NetworkId {
    fn active_network(&self) -> Option<NetworkId> {
        Some(*self)
    }
}

impl<T: NetworkSource + ?Sized> NetworkSource for &T {
    fn active_network(&self) -> Option<NetworkId> {
        (**self).active_network()
    }
}

impl<T: NetworkSource + ?Sized> NetworkSource for Arc<T> {
    fn active_network(&self) -> Option<NetworkId> {
        (**self).active_network()
    }
}

/// Shared handle on a wallet connection's active network.
///
/// Clones observe the same connection, so a wallet callback can switch networks
/// while facades holding another clone keep reading it.
#[derive(Debug, Clone, Default)]
pub struct WalletConnection {
    active: Arc<RwLock<Option<NetworkId>>>,
}

impl WalletConnection {
    /// A disconnected wallet.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connected(network_id: NetworkId) -> Self {
        let connection = Self::new();
        connection.connect(network_id);
        connection
    }

    pub fn connect(&self, network_id: NetworkId) {
        let mut active = self.active.write();
        debug!(network_id = %network_id, previous = ?*active, "Wallet network changed");
        *active = Some(network_id);
    }

    /// Alias of [`WalletConnection::connect`] for chain-switch callbacks.
    pub fn switch_network(&self, network_id: NetworkId) {
        self.connect(network_id);
    }

    pub fn disconnect(&self) {
        let mut active = self.active.write();
        if active.take().is_some() {
            debug!("Wallet disconnected");
        }
    }

    pub fn is_connected(&self) -> bool {
        self.active.read().is_some()
    }
}

impl NetworkSource for WalletConnection {
    fn active_network(&self) -> Option<NetworkId> {
        *self.active.read()
    }
}
