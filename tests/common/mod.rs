//! In-process mock capabilities shared by the integration suites
#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use alloy::primitives::{Address, Bytes, U256};
use alloy_sol_types::{SolCall, SolValue};

use driftwood::domain::{AddressValidator, InspectError, Network, NetworkRegistry, Result};
use driftwood::infrastructure::ethereum::erc20::IERC20;
use driftwood::infrastructure::ethereum::{
    BlockSummary, ChainIdentifier, ChainReader, ClientFactory, Connector, Wallet,
};
use driftwood::Inspector;

pub const HOLDER: &str = "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359";
pub const TOKEN: &str = "0x036cbd53842c5426634e7929541ec2318f3dcf7e";

#[derive(Debug, Clone)]
pub struct TokenState {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: U256,
    pub balances: HashMap<Address, U256>,
}

#[derive(Debug, Clone, Default)]
pub struct ChainState {
    pub balance: U256,
    pub nonce: u64,
    pub code: Bytes,
    pub block_number: u64,
    pub gas_price: u128,
    pub block: Option<BlockSummary>,
    pub tokens: HashMap<Address, TokenState>,
}

/// Reader answering from fixed state. Reads are keyed by name
/// (`balance`, `gas_price`, `call:symbol`, ...) for delays and failures.
#[derive(Default)]
pub struct MockReader {
    pub state: ChainState,
    delays: HashMap<String, Duration>,
    failing: HashSet<String>,
    calls: AtomicUsize,
    log: Mutex<Vec<String>>,
}

impl MockReader {
    pub fn new(state: ChainState) -> Self {
        Self {
            state,
            ..Default::default()
        }
    }

    pub fn with_delay(mut self, op: &str, delay: Duration) -> Self {
        self.delays.insert(op.to_string(), delay);
        self
    }

    pub fn failing(mut self, op: &str) -> Self {
        self.failing.insert(op.to_string());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn called(&self, op: &str) -> bool {
        self.log.lock().unwrap().iter().any(|entry| entry == op)
    }

    async fn enter(&self, op: &str) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.log.lock().unwrap().push(op.to_string());
        if let Some(delay) = self.delays.get(op) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing.contains(op) {
            return Err(InspectError::network(format!("{} reverted", op)));
        }
        Ok(())
    }

    fn answer_call(&self, to: Address, input: &[u8]) -> Result<Bytes> {
        let Some(token) = self.state.tokens.get(&to) else {
            // eth_call against an account without code returns no data
            return Ok(Bytes::new());
        };
        let selector: [u8; 4] = input[..4].try_into().unwrap();
        let encoded = if selector == IERC20::nameCall::SELECTOR {
            token.name.abi_encode()
        } else if selector == IERC20::symbolCall::SELECTOR {
            token.symbol.abi_encode()
        } else if selector == IERC20::decimalsCall::SELECTOR {
            U256::from(token.decimals).abi_encode()
        } else if selector == IERC20::totalSupplyCall::SELECTOR {
            token.total_supply.abi_encode()
        } else if selector == IERC20::balanceOfCall::SELECTOR {
            let holder = Address::from_slice(&input[16..36]);
            token
                .balances
                .get(&holder)
                .copied()
                .unwrap_or_default()
                .abi_encode()
        } else {
            return Err(InspectError::network("execution reverted"));
        };
        Ok(Bytes::from(encoded))
    }
}

fn call_name(input: &[u8]) -> &'static str {
    let selector: [u8; 4] = input[..4].try_into().unwrap();
    if selector == IERC20::nameCall::SELECTOR {
        "call:name"
    } else if selector == IERC20::symbolCall::SELECTOR {
        "call:symbol"
    } else if selector == IERC20::decimalsCall::SELECTOR {
        "call:decimals"
    } else if selector == IERC20::totalSupplyCall::SELECTOR {
        "call:totalSupply"
    } else if selector == IERC20::balanceOfCall::SELECTOR {
        "call:balanceOf"
    } else {
        "call:unknown"
    }
}

#[async_trait::async_trait]
impl ChainReader for MockReader {
    async fn balance(&self, _address: Address) -> Result<U256> {
        self.enter("balance").await?;
        Ok(self.state.balance)
    }

    async fn transaction_count(&self, _address: Address) -> Result<u64> {
        self.enter("transaction_count").await?;
        Ok(self.state.nonce)
    }

    async fn code(&self, _address: Address) -> Result<Bytes> {
        self.enter("code").await?;
        Ok(self.state.code.clone())
    }

    async fn block_number(&self) -> Result<u64> {
        self.enter("block_number").await?;
        Ok(self.state.block_number)
    }

    async fn gas_price(&self) -> Result<u128> {
        self.enter("gas_price").await?;
        Ok(self.state.gas_price)
    }

    async fn latest_block(&self) -> Result<BlockSummary> {
        self.enter("latest_block").await?;
        self.state
            .block
            .ok_or_else(|| InspectError::network("node returned no latest block"))
    }

    async fn call(&self, to: Address, input: Bytes) -> Result<Bytes> {
        self.enter(call_name(&input)).await?;
        self.answer_call(to, &input)
    }

    fn endpoint_name(&self) -> String {
        "mock".to_string()
    }
}

/// Hands out one shared reader per chain id and counts connections
#[derive(Default)]
pub struct MockConnector {
    readers: HashMap<u64, Arc<MockReader>>,
    connects: Mutex<Vec<u64>>,
}

impl MockConnector {
    pub fn with_reader(mut self, chain_id: u64, reader: MockReader) -> Self {
        self.readers.insert(chain_id, Arc::new(reader));
        self
    }

    pub fn reader(&self, chain_id: u64) -> Arc<MockReader> {
        self.readers[&chain_id].clone()
    }

    pub fn connects(&self) -> Vec<u64> {
        self.connects.lock().unwrap().clone()
    }

    pub fn total_calls(&self) -> usize {
        self.readers.values().map(|r| r.calls()).sum()
    }
}

impl Connector for MockConnector {
    fn connect(&self, network: &Network) -> Arc<dyn ChainReader> {
        self.connects.lock().unwrap().push(network.chain_id);
        self.readers
            .get(&network.chain_id)
            .cloned()
            .unwrap_or_else(|| Arc::new(MockReader::default()))
    }
}

pub struct MockWallet {
    pub accounts: Result<Vec<String>, String>,
    pub chain_id: ChainIdentifier,
    pub requests: AtomicUsize,
}

impl MockWallet {
    pub fn with_account(account: &str, chain_id: ChainIdentifier) -> Self {
        Self::with_accounts(&[account], chain_id)
    }

    pub fn with_accounts(accounts: &[&str], chain_id: ChainIdentifier) -> Self {
        Self {
            accounts: Ok(accounts.iter().map(|a| a.to_string()).collect()),
            chain_id,
            requests: AtomicUsize::new(0),
        }
    }

    pub fn empty() -> Self {
        Self {
            accounts: Ok(Vec::new()),
            chain_id: ChainIdentifier::Text("0x14a34".to_string()),
            requests: AtomicUsize::new(0),
        }
    }

    pub fn denying() -> Self {
        Self {
            accounts: Err("User rejected the request.".to_string()),
            chain_id: ChainIdentifier::Text("0x14a34".to_string()),
            requests: AtomicUsize::new(0),
        }
    }
}

#[async_trait::async_trait]
impl Wallet for MockWallet {
    async fn request_accounts(&self) -> Result<Vec<String>> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.accounts.clone().map_err(InspectError::wallet)
    }

    async fn request_chain_id(&self) -> Result<ChainIdentifier> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        Ok(self.chain_id.clone())
    }
}

/// Inspector over the default Base pair with the given mocks
pub fn inspector(connector: Arc<MockConnector>, wallet: Arc<MockWallet>) -> Inspector {
    let factory = ClientFactory::new(NetworkRegistry::default(), connector);
    Inspector::new(factory, AddressValidator::default(), wallet)
}

pub fn address(raw: &str) -> Address {
    raw.parse().unwrap()
}

pub fn usdc_like(decimals: u8, total_supply: u64, holder_balance: u64) -> TokenState {
    TokenState {
        name: "USD Coin".to_string(),
        symbol: "USDC".to_string(),
        decimals,
        total_supply: U256::from(total_supply),
        balances: HashMap::from([(address(HOLDER), U256::from(holder_balance))]),
    }
}
