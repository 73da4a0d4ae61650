// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Blockchain types and constants.

use alloy::primitives::U256;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// BNB Smart Chain network configuration. The RPC endpoint itself comes from
/// runtime configuration; this carries the fixed identity of the chain.
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// Network name for display
    pub name: &'static str,
    /// Chain ID
    pub chain_id: u64,
    /// Block explorer URL
    pub explorer_url: &'static str,
}

/// BNB Smart Chain Mainnet configuration.
pub const BSC_MAINNET: NetworkConfig = NetworkConfig {
    name: "BNB Smart Chain",
    chain_id: 56,
    explorer_url: "https://bscscan.com",
};

/// BNB Smart Chain Testnet configuration.
pub const BSC_TESTNET: NetworkConfig = NetworkConfig {
    name: "BNB Smart Chain Testnet",
    chain_id: 97,
    explorer_url: "https://testnet.bscscan.com",
};

/// Static metadata for a known token contract.
#[derive(Debug, Clone)]
pub struct Erc20Token {
    pub symbol: &'static str,
    pub name: &'static str,
    pub decimals: u8,
}

/// BSC-pegged USDT. Unlike its Ethereum counterpart it uses 18 decimals.
pub const USDT_TOKEN: Erc20Token = Erc20Token {
    symbol: "USDT",
    name: "Tether USD",
    decimals: 18,
};

/// Token balance information.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenBalance {
    /// Token symbol (e.g., "USDT")
    pub symbol: String,
    /// Token name
    pub name: String,
    /// Balance in the token's smallest unit
    pub balance_raw: String,
    /// Balance formatted with decimals
    pub balance_formatted: String,
    /// Number of decimals
    pub decimals: u8,
    /// Token contract address
    pub contract_address: String,
}

/// Status of a transaction as reported by the chain endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxStatus {
    Pending,
    Confirmed,
    Failed,
}

/// A transaction that has been signed and broadcast.
#[derive(Debug, Clone)]
pub struct SubmittedTransaction {
    /// Transaction hash returned by the endpoint.
    pub tx_hash: String,
    /// Custodial address the transaction was sent from.
    pub sender: String,
    /// Broadcast outcome. `Confirmed` here means the endpoint acknowledged
    /// the broadcast, not chain finality.
    pub status: TxStatus,
}

/// Format a smallest-unit balance with the specified number of decimals,
/// truncated to at most 6 fractional digits.
pub fn format_units(balance: U256, decimals: u8) -> String {
    if balance.is_zero() {
        return "0".to_string();
    }

    let divisor = U256::from(10u64).pow(U256::from(decimals));
    let whole = balance / divisor;
    let remainder = balance % divisor;

    if remainder.is_zero() {
        whole.to_string()
    } else {
        let decimal_str = format!("{:0>width$}", remainder, width = decimals as usize);
        let trimmed = decimal_str.trim_end_matches('0');
        if trimmed.is_empty() {
            whole.to_string()
        } else {
            format!("{}.{}", whole, &trimmed[..trimmed.len().min(6)])
        }
    }
}
