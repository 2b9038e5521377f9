//! Chain client factory
//!
//! A client binds one network at construction. The factory never memoizes,
//! so every call reflects the registry's current selection.

use std::ops::Deref;
use std::sync::Arc;

use tracing::debug;

use super::provider::{AlloyReader, ChainReader};
use crate::domain::{Network, NetworkRegistry};

/// Builds a reader for a network; the seam tests replace
pub trait Connector: Send + Sync + 'static {
    fn connect(&self, network: &Network) -> Arc<dyn ChainReader>;
}

/// Plain HTTP JSON-RPC against the network's public endpoint
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpConnector;

impl Connector for HttpConnector {
    fn connect(&self, network: &Network) -> Arc<dyn ChainReader> {
        Arc::new(AlloyReader::http(network.rpc_endpoint.clone()))
    }
}

/// Reader bound to the network that was active when it was built
pub struct ChainClient {
    network: Network,
    reader: Arc<dyn ChainReader>,
}

impl ChainClient {
    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn reader(&self) -> &dyn ChainReader {
        self.reader.as_ref()
    }
}

impl Deref for ChainClient {
    type Target = dyn ChainReader;

    fn deref(&self) -> &Self::Target {
        self.reader.as_ref()
    }
}

#[derive(Clone)]
pub struct ClientFactory {
    registry: NetworkRegistry,
    connector: Arc<dyn Connector>,
}

impl ClientFactory {
    pub fn new(registry: NetworkRegistry, connector: Arc<dyn Connector>) -> Self {
        Self {
            registry,
            connector,
        }
    }

    pub fn http(registry: NetworkRegistry) -> Self {
        Self::new(registry, Arc::new(HttpConnector))
    }

    pub fn registry(&self) -> &NetworkRegistry {
        &self.registry
    }

    /// Fresh client for the currently active network
    pub fn client(&self) -> ChainClient {
        let network = self.registry.active();
        debug!(network = %network.label, chain_id = network.chain_id, "building chain client");
        let reader = self.connector.connect(&network);
        ChainClient { network, reader }
    }
}
