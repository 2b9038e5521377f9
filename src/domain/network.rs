//! Supported networks and the active selection

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use alloy_primitives::Address;
use reqwest::Url;

use super::address::to_checksum;
use super::units::ETHER_DECIMALS;

pub const BASE_SEPOLIA_CHAIN_ID: u64 = 84532;
pub const BASE_MAINNET_CHAIN_ID: u64 = 8453;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

impl NativeCurrency {
    pub fn ether() -> Self {
        Self {
            name: "Ether".to_string(),
            symbol: "ETH".to_string(),
            decimals: ETHER_DECIMALS,
        }
    }
}

/// Chain parameters a client needs beyond the endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainDescriptor {
    pub name: String,
    pub native_currency: NativeCurrency,
    pub testnet: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    pub chain_id: u64,
    pub rpc_endpoint: Url,
    pub explorer_base_url: String,
    pub label: String,
    pub chain: ChainDescriptor,
}

impl Network {
    pub fn base_sepolia() -> Self {
        Self {
            chain_id: BASE_SEPOLIA_CHAIN_ID,
            rpc_endpoint: builtin_url("https://sepolia.base.org"),
            explorer_base_url: "https://sepolia.basescan.org".to_string(),
            label: "Base Sepolia".to_string(),
            chain: ChainDescriptor {
                name: "base-sepolia".to_string(),
                native_currency: NativeCurrency::ether(),
                testnet: true,
            },
        }
    }

    pub fn base_mainnet() -> Self {
        Self {
            chain_id: BASE_MAINNET_CHAIN_ID,
            rpc_endpoint: builtin_url("https://mainnet.base.org"),
            explorer_base_url: "https://basescan.org".to_string(),
            label: "Base Mainnet".to_string(),
            chain: ChainDescriptor {
                name: "base".to_string(),
                native_currency: NativeCurrency::ether(),
                testnet: false,
            },
        }
    }

    pub fn address_url(&self, address: &Address) -> String {
        format!("{}/address/{}", self.explorer_root(), to_checksum(address))
    }

    pub fn block_url(&self, number: u64) -> String {
        format!("{}/block/{}", self.explorer_root(), number)
    }

    fn explorer_root(&self) -> &str {
        self.explorer_base_url.trim_end_matches('/')
    }
}

fn builtin_url(url: &str) -> Url {
    Url::parse(url).expect("built-in RPC URL is valid")
}

/// Fixed pair of networks plus the active pointer.
///
/// Cloning shares the pointer; independent registries never observe each
/// other's selection.
#[derive(Debug, Clone)]
pub struct NetworkRegistry {
    inner: Arc<RegistryInner>,
}

#[derive(Debug)]
struct RegistryInner {
    networks: [Network; 2],
    active: AtomicUsize,
}

impl Default for NetworkRegistry {
    fn default() -> Self {
        Self::new([Network::base_sepolia(), Network::base_mainnet()])
    }
}

impl NetworkRegistry {
    /// Starts on the first entry
    pub fn new(networks: [Network; 2]) -> Self {
        Self {
            inner: Arc::new(RegistryInner {
                networks,
                active: AtomicUsize::new(0),
            }),
        }
    }

    pub fn active(&self) -> Network {
        self.inner.networks[self.active_index()].clone()
    }

    pub fn networks(&self) -> &[Network; 2] {
        &self.inner.networks
    }

    pub(crate) fn active_index(&self) -> usize {
        self.inner.active.load(Ordering::SeqCst)
    }

    pub(crate) fn select(&self, index: usize) {
        debug_assert!(index < 2);
        self.inner.active.store(index, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_starts_on_sepolia() {
        let registry = NetworkRegistry::default();
        assert_eq!(registry.active().chain_id, BASE_SEPOLIA_CHAIN_ID);
        assert_eq!(registry.networks()[1].chain_id, BASE_MAINNET_CHAIN_ID);
    }

    #[test]
    fn test_clones_share_selection() {
        let registry = NetworkRegistry::default();
        let other = registry.clone();
        registry.select(1);
        assert_eq!(other.active().label, "Base Mainnet");

        let isolated = NetworkRegistry::default();
        assert_eq!(isolated.active().label, "Base Sepolia");
    }

    #[test]
    fn test_explorer_links() {
        let mut network = Network::base_mainnet();
        network.explorer_base_url = "https://basescan.org/".to_string();
        assert_eq!(network.block_url(1000), "https://basescan.org/block/1000");
        assert_eq!(
            network.address_url(&Address::ZERO),
            "https://basescan.org/address/0x0000000000000000000000000000000000000000"
        );
    }
}
