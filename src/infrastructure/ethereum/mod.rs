//! Ethereum infrastructure - Alloy-backed capabilities

mod client;
pub mod erc20;
mod provider;
mod wallet;

pub use client::{ChainClient, ClientFactory, Connector, HttpConnector};
pub use erc20::Erc20;
pub use provider::{AlloyReader, BlockSummary, ChainReader};
pub use wallet::{ChainIdentifier, NoWallet, RpcWallet, Wallet};
