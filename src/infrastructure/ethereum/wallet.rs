//! Wallet capability: account access and chain id
//!
//! The core only ever asks a wallet for two things, so the seam is exactly
//! those two requests.

use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use reqwest::Url;
use serde::Deserialize;

use crate::domain::{InspectError, Result};

/// Chain id as a wallet reports it: a hex/decimal string or a JSON number
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ChainIdentifier {
    Number(u64),
    Text(String),
}

impl ChainIdentifier {
    pub fn to_decimal(&self) -> Result<u64> {
        match self {
            ChainIdentifier::Number(id) => Ok(*id),
            ChainIdentifier::Text(text) => {
                let trimmed = text.trim();
                let parsed = match trimmed
                    .strip_prefix("0x")
                    .or_else(|| trimmed.strip_prefix("0X"))
                {
                    Some(hex) => u64::from_str_radix(hex, 16).ok(),
                    None => trimmed.parse().ok(),
                };
                parsed.ok_or_else(|| {
                    InspectError::wallet(format!("wallet reported an unreadable chain id: {}", text))
                })
            }
        }
    }
}

#[async_trait::async_trait]
pub trait Wallet: Send + Sync + 'static {
    /// Ask for account access; may prompt the operator
    async fn request_accounts(&self) -> Result<Vec<String>>;

    async fn request_chain_id(&self) -> Result<ChainIdentifier>;
}

/// Wallet reachable over JSON-RPC (e.g. a local Frame endpoint)
pub struct RpcWallet {
    provider: DynProvider,
    endpoint: String,
}

impl RpcWallet {
    pub fn http(url: Url) -> Self {
        let endpoint = url.to_string();
        let provider = ProviderBuilder::new().connect_http(url).erased();
        Self { provider, endpoint }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl Wallet for RpcWallet {
    async fn request_accounts(&self) -> Result<Vec<String>> {
        self.provider
            .raw_request("eth_requestAccounts".into(), ())
            .await
            .map_err(|e| InspectError::wallet(format!("account request failed: {}", e)))
    }

    async fn request_chain_id(&self) -> Result<ChainIdentifier> {
        self.provider
            .raw_request("eth_chainId".into(), ())
            .await
            .map_err(|e| InspectError::wallet(format!("chain id request failed: {}", e)))
    }
}

/// Stand-in when no wallet endpoint is configured
pub struct NoWallet;

#[async_trait::async_trait]
impl Wallet for NoWallet {
    async fn request_accounts(&self) -> Result<Vec<String>> {
        Err(InspectError::wallet(
            "no wallet configured (set --wallet-rpc or [wallet] rpc)",
        ))
    }

    async fn request_chain_id(&self) -> Result<ChainIdentifier> {
        Err(InspectError::wallet("no wallet configured"))
    }
}
