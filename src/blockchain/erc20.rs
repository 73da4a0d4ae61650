// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! ERC-20 token contract reads.

use std::str::FromStr;

use alloy::{
    primitives::{Address, U256},
    providers::Provider,
    sol,
};

use super::client::BscClientError;

// BEP-20 tokens on BSC follow the ERC-20 interface.
sol! {
    #[sol(rpc)]
    interface IERC20 {
        function name() external view returns (string);
        function symbol() external view returns (string);
        function decimals() external view returns (uint8);
        function balanceOf(address account) external view returns (uint256);
        function allowance(address owner, address spender) external view returns (uint256);
    }
}

/// ERC-20 contract wrapper for read calls.
pub struct Erc20Contract<P> {
    contract: IERC20::IERC20Instance<P>,
}

impl<P: Provider + Clone> Erc20Contract<P> {
    /// Create a new ERC-20 contract instance at a known address.
    pub fn new(provider: &P, contract_address: Address) -> Self {
        Self {
            contract: IERC20::new(contract_address, provider.clone()),
        }
    }

    /// Get the smallest-unit balance of an address.
    pub async fn balance_of(&self, holder: &str) -> Result<U256, BscClientError> {
        let addr = Address::from_str(holder)
            .map_err(|e| BscClientError::InvalidAddress(e.to_string()))?;

        self.contract
            .balanceOf(addr)
            .call()
            .await
            .map_err(|e| BscClientError::Contract(e.to_string()))
    }
}
