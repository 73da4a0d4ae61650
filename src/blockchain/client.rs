// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Read-only BNB Smart Chain client.

use alloy::{
    network::Ethereum,
    primitives::Address,
    providers::{
        fillers::{BlobGasFiller, ChainIdFiller, FillProvider, GasFiller, JoinFill, NonceFiller},
        Identity, ProviderBuilder, RootProvider,
    },
};

use super::erc20::Erc20Contract;
use super::types::*;
use crate::config::AppConfig;

/// HTTP provider type for BSC (with all fillers).
type HttpProvider = FillProvider<
    JoinFill<
        Identity,
        JoinFill<GasFiller, JoinFill<BlobGasFiller, JoinFill<NonceFiller, ChainIdFiller>>>,
    >,
    RootProvider<Ethereum>,
>;

/// Read-only BSC client for token balance queries.
pub struct BscClient {
    /// Network identity
    network: NetworkConfig,
    /// Alloy HTTP provider
    provider: HttpProvider,
    /// USDT token contract address
    usdt: Address,
}

impl BscClient {
    /// Create a new read-only client from the process configuration.
    pub async fn new(config: &AppConfig) -> Result<Self, BscClientError> {
        let provider = ProviderBuilder::new().connect_http(config.rpc_url.clone());

        Ok(Self {
            network: BSC_MAINNET,
            provider,
            usdt: config.usdt_contract,
        })
    }

    /// Get the USDT balance for an address.
    pub async fn usdt_balance(&self, holder: &str) -> Result<TokenBalance, BscClientError> {
        let contract = Erc20Contract::new(&self.provider, self.usdt);
        let balance = contract.balance_of(holder).await?;

        Ok(TokenBalance {
            symbol: USDT_TOKEN.symbol.to_string(),
            name: USDT_TOKEN.name.to_string(),
            balance_raw: balance.to_string(),
            balance_formatted: format_units(balance, USDT_TOKEN.decimals),
            decimals: USDT_TOKEN.decimals,
            contract_address: format!("{:?}", self.usdt),
        })
    }

    /// Get the network identity.
    pub fn network(&self) -> &NetworkConfig {
        &self.network
    }
}

/// Errors that can occur during blockchain operations.
#[derive(Debug, thiserror::Error)]
pub enum BscClientError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("Spender key is not configured")]
    MissingPrivateKey,

    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("Contract error: {0}")]
    Contract(String),

    #[error("Transaction failed: {0}")]
    Submission(String),

    #[error("No broadcast acknowledgment within {0}s")]
    Timeout(u64),
}

impl BscClientError {
    /// Whether this error is a service misconfiguration rather than a
    /// per-request failure.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            BscClientError::MissingPrivateKey | BscClientError::InvalidPrivateKey(_)
        )
    }
}
