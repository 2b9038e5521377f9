//! Read-only chain access and its Alloy HTTP implementation
//!
//! Blocks are fetched as raw JSON so that L2 blocks (Base) with non-standard
//! transaction types never trip typed deserialization.

use alloy::primitives::{Address, Bytes, U256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use reqwest::Url;

use crate::domain::{InspectError, Result};

/// The subset of the latest block a snapshot reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSummary {
    pub number: u64,
    pub timestamp: u64,
    pub gas_used: u64,
}

/// Read capability against one network.
///
/// Every failure surfaces as `InspectError::Network`.
#[async_trait::async_trait]
pub trait ChainReader: Send + Sync + 'static {
    /// Native balance in wei
    async fn balance(&self, address: Address) -> Result<U256>;

    /// Transactions originated by the address (nonce)
    async fn transaction_count(&self, address: Address) -> Result<u64>;

    /// Deployed bytecode, empty for externally owned accounts
    async fn code(&self, address: Address) -> Result<Bytes>;

    async fn block_number(&self) -> Result<u64>;

    /// Gas price in wei
    async fn gas_price(&self) -> Result<u128>;

    async fn latest_block(&self) -> Result<BlockSummary>;

    /// Execute an `eth_call` against the latest block
    async fn call(&self, to: Address, input: Bytes) -> Result<Bytes>;

    /// Endpoint display name
    fn endpoint_name(&self) -> String;
}

/// HTTP JSON-RPC reader built on an Alloy provider
pub struct AlloyReader {
    provider: DynProvider,
    endpoint: String,
}

impl AlloyReader {
    /// Construction performs no I/O
    pub fn http(url: Url) -> Self {
        let endpoint = url.to_string();
        let provider = ProviderBuilder::new().connect_http(url).erased();
        Self { provider, endpoint }
    }
}

#[async_trait::async_trait]
impl ChainReader for AlloyReader {
    async fn balance(&self, address: Address) -> Result<U256> {
        Ok(self.provider.get_balance(address).await?)
    }

    async fn transaction_count(&self, address: Address) -> Result<u64> {
        Ok(self.provider.get_transaction_count(address).await?)
    }

    async fn code(&self, address: Address) -> Result<Bytes> {
        Ok(self.provider.get_code_at(address).await?)
    }

    async fn block_number(&self) -> Result<u64> {
        Ok(self.provider.get_block_number().await?)
    }

    async fn gas_price(&self) -> Result<u128> {
        Ok(self.provider.get_gas_price().await?)
    }

    async fn latest_block(&self) -> Result<BlockSummary> {
        let json: serde_json::Value = self
            .provider
            .raw_request("eth_getBlockByNumber".into(), ("latest", false))
            .await?;

        if json.is_null() {
            return Err(InspectError::network("node returned no latest block"));
        }

        parse_block_summary(&json)
    }

    async fn call(&self, to: Address, input: Bytes) -> Result<Bytes> {
        let request = TransactionRequest::default().to(to).input(input.into());
        Ok(self.provider.call(request).await?)
    }

    fn endpoint_name(&self) -> String {
        self.endpoint.clone()
    }
}

/// Parse the header fields a snapshot needs from a raw block object
pub(crate) fn parse_block_summary(json: &serde_json::Value) -> Result<BlockSummary> {
    Ok(BlockSummary {
        number: hex_field(json, "number")?,
        timestamp: hex_field(json, "timestamp")?,
        gas_used: hex_field(json, "gasUsed")?,
    })
}

fn hex_field(json: &serde_json::Value, name: &str) -> Result<u64> {
    let raw = json
        .get(name)
        .and_then(|v| v.as_str())
        .ok_or_else(|| InspectError::network(format!("block is missing field {}", name)))?;
    parse_hex_u64(raw)
        .ok_or_else(|| InspectError::network(format!("block field {} is not a quantity: {}", name, raw)))
}

/// Parse hex string to u64
fn parse_hex_u64(s: &str) -> Option<u64> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    u64::from_str_radix(s, 16).ok()
}
