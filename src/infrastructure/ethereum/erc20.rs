//! ERC-20 read surface encoded over a [`ChainReader`]

use alloy::primitives::{Address, Bytes, U256};
use alloy_sol_types::{sol, SolCall};

use super::provider::ChainReader;
use crate::domain::Result;

sol! {
    #[allow(missing_docs)]
    interface IERC20 {
        function name() external view returns (string);
        function symbol() external view returns (string);
        function decimals() external view returns (uint8);
        function totalSupply() external view returns (uint256);
        function balanceOf(address account) external view returns (uint256);
    }
}

/// Read-only handle on one token contract
pub struct Erc20<'a> {
    reader: &'a dyn ChainReader,
    token: Address,
}

impl<'a> Erc20<'a> {
    pub fn new(reader: &'a dyn ChainReader, token: Address) -> Self {
        Self { reader, token }
    }

    pub fn address(&self) -> Address {
        self.token
    }

    pub async fn name(&self) -> Result<String> {
        self.read(IERC20::nameCall {}).await
    }

    pub async fn symbol(&self) -> Result<String> {
        self.read(IERC20::symbolCall {}).await
    }

    pub async fn decimals(&self) -> Result<u8> {
        self.read(IERC20::decimalsCall {}).await
    }

    pub async fn total_supply(&self) -> Result<U256> {
        self.read(IERC20::totalSupplyCall {}).await
    }

    pub async fn balance_of(&self, holder: Address) -> Result<U256> {
        self.read(IERC20::balanceOfCall { account: holder }).await
    }

    /// An address without code answers `eth_call` with empty data, which
    /// fails decoding and so surfaces as a network error.
    async fn read<C: SolCall>(&self, call: C) -> Result<C::Return> {
        let output = self
            .reader
            .call(self.token, Bytes::from(call.abi_encode()))
            .await?;
        Ok(C::abi_decode_returns(&output)?)
    }
}
