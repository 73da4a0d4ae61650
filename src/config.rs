// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! Configuration is loaded from the environment at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `SPENDER_PRIVATE_KEY` | Custodial spender key (hex, optional `0x` prefix) | Unset: transfers are refused |
//! | `BSC_RPC_URL` | BNB Smart Chain JSON-RPC endpoint | `https://bsc-dataseed.binance.org/` |
//! | `SPENDER_CONTRACT_ADDRESS` | Deployed spender contract | `0xf7b89f088f96a9137768895bb8447c80a161f013` |
//! | `USDT_CONTRACT_ADDRESS` | USDT token contract | `0x55d398326f99059ff775485246999027b3197955` |
//! | `TRANSFER_GAS_LIMIT` | Gas ceiling per transfer call | `200000` |
//! | `SUBMIT_TIMEOUT_SECS` | Broadcast acknowledgment wait bound | `30` |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use alloy::primitives::Address;
use url::Url;

/// Environment variable name for the custodial spender private key.
pub const SPENDER_PRIVATE_KEY_ENV: &str = "SPENDER_PRIVATE_KEY";

/// Environment variable name for the chain RPC endpoint.
pub const BSC_RPC_URL_ENV: &str = "BSC_RPC_URL";

/// Environment variable name for the spender contract address.
pub const SPENDER_CONTRACT_ENV: &str = "SPENDER_CONTRACT_ADDRESS";

/// Environment variable name for the USDT token contract address.
pub const USDT_CONTRACT_ENV: &str = "USDT_CONTRACT_ADDRESS";

/// Environment variable name for the per-call gas ceiling.
pub const TRANSFER_GAS_LIMIT_ENV: &str = "TRANSFER_GAS_LIMIT";

/// Environment variable name for the submission timeout (seconds).
pub const SUBMIT_TIMEOUT_ENV: &str = "SUBMIT_TIMEOUT_SECS";

/// Default public BSC mainnet data seed.
pub const DEFAULT_RPC_URL: &str = "https://bsc-dataseed.binance.org/";

/// Deployed spender contract holding the delegated-transfer entry point.
pub const DEFAULT_SPENDER_CONTRACT: &str = "0xf7b89f088f96a9137768895bb8447c80a161f013";

/// BSC-pegged USDT token contract.
pub const DEFAULT_USDT_CONTRACT: &str = "0x55d398326f99059ff775485246999027b3197955";

/// Gas ceiling attached to every `transferUSDT` call.
pub const DEFAULT_TRANSFER_GAS_LIMIT: u64 = 200_000;

/// How long to wait for broadcast acknowledgment before reporting a timeout.
pub const DEFAULT_SUBMIT_TIMEOUT_SECS: u64 = 30;

/// Process-wide application configuration, read once at startup.
#[derive(Clone)]
pub struct AppConfig {
    /// Server bind address.
    pub host: String,
    /// Server bind port.
    pub port: u16,
    /// Chain JSON-RPC endpoint.
    pub rpc_url: Url,
    /// Custodial spender key as configured (hex, optional `0x` prefix).
    /// `None` means transfers are refused with a configuration error.
    pub spender_private_key: Option<String>,
    /// Spender contract address.
    pub spender_contract: Address,
    /// USDT token contract address.
    pub usdt_contract: Address,
    /// Gas ceiling per transfer call.
    pub transfer_gas_limit: u64,
    /// Broadcast acknowledgment wait bound.
    pub submit_timeout: Duration,
}

// The spender key must never leak through debug formatting of the config.
impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("rpc_url", &self.rpc_url.as_str())
            .field(
                "spender_private_key",
                &self.spender_private_key.as_ref().map(|_| "<redacted>"),
            )
            .field("spender_contract", &self.spender_contract)
            .field("usdt_contract", &self.usdt_contract)
            .field("transfer_gas_limit", &self.transfer_gas_limit)
            .field("submit_timeout", &self.submit_timeout)
            .finish()
    }
}

/// Errors raised while loading configuration. All of these are fatal at
/// startup; a missing spender key is not an error here (it is refused
/// per-request instead).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid URL: {reason}")]
    InvalidUrl { var: &'static str, reason: String },

    #[error("{var} is not a valid address: {reason}")]
    InvalidAddress { var: &'static str, reason: String },

    #[error("{var} must be a positive integer")]
    InvalidNumber { var: &'static str },
}

impl AppConfig {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = get("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match get("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidNumber { var: "PORT" })?,
            None => 8080,
        };

        let rpc_url = get(BSC_RPC_URL_ENV).unwrap_or_else(|| DEFAULT_RPC_URL.to_string());
        let rpc_url = Url::parse(&rpc_url).map_err(|e| ConfigError::InvalidUrl {
            var: BSC_RPC_URL_ENV,
            reason: e.to_string(),
        })?;

        let spender_contract = parse_contract_address(
            get(SPENDER_CONTRACT_ENV).as_deref(),
            DEFAULT_SPENDER_CONTRACT,
            SPENDER_CONTRACT_ENV,
        )?;
        let usdt_contract = parse_contract_address(
            get(USDT_CONTRACT_ENV).as_deref(),
            DEFAULT_USDT_CONTRACT,
            USDT_CONTRACT_ENV,
        )?;

        let transfer_gas_limit = match get(TRANSFER_GAS_LIMIT_ENV) {
            Some(raw) => raw.parse::<u64>().ok().filter(|v| *v > 0).ok_or(
                ConfigError::InvalidNumber {
                    var: TRANSFER_GAS_LIMIT_ENV,
                },
            )?,
            None => DEFAULT_TRANSFER_GAS_LIMIT,
        };

        let submit_timeout_secs = match get(SUBMIT_TIMEOUT_ENV) {
            Some(raw) => raw.parse::<u64>().ok().filter(|v| *v > 0).ok_or(
                ConfigError::InvalidNumber {
                    var: SUBMIT_TIMEOUT_ENV,
                },
            )?,
            None => DEFAULT_SUBMIT_TIMEOUT_SECS,
        };

        Ok(Self {
            host,
            port,
            rpc_url,
            spender_private_key: get(SPENDER_PRIVATE_KEY_ENV).filter(|k| !k.trim().is_empty()),
            spender_contract,
            usdt_contract,
            transfer_gas_limit,
            submit_timeout: Duration::from_secs(submit_timeout_secs),
        })
    }
}

fn parse_contract_address(
    configured: Option<&str>,
    default: &str,
    var: &'static str,
) -> Result<Address, ConfigError> {
    Address::from_str(configured.unwrap_or(default)).map_err(|e| ConfigError::InvalidAddress {
        var,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn load(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let map = vars(pairs);
        AppConfig::from_vars(|name| map.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.rpc_url.as_str(), DEFAULT_RPC_URL);
        assert!(config.spender_private_key.is_none());
        assert_eq!(config.transfer_gas_limit, DEFAULT_TRANSFER_GAS_LIMIT);
        assert_eq!(
            config.submit_timeout,
            Duration::from_secs(DEFAULT_SUBMIT_TIMEOUT_SECS)
        );
    }

    #[test]
    fn overrides_are_honored() {
        let config = load(&[
            ("PORT", "9000"),
            ("BSC_RPC_URL", "http://127.0.0.1:8545/"),
            ("TRANSFER_GAS_LIMIT", "150000"),
            ("SUBMIT_TIMEOUT_SECS", "5"),
            ("SPENDER_PRIVATE_KEY", "0xabc123"),
        ])
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.rpc_url.as_str(), "http://127.0.0.1:8545/");
        assert_eq!(config.transfer_gas_limit, 150_000);
        assert_eq!(config.submit_timeout, Duration::from_secs(5));
        assert_eq!(config.spender_private_key.as_deref(), Some("0xabc123"));
    }

    #[test]
    fn blank_key_counts_as_unset() {
        let config = load(&[("SPENDER_PRIVATE_KEY", "   ")]).unwrap();
        assert!(config.spender_private_key.is_none());
    }

    #[test]
    fn malformed_settings_are_fatal() {
        assert!(matches!(
            load(&[("BSC_RPC_URL", "not a url")]),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            load(&[("SPENDER_CONTRACT_ADDRESS", "0x1234")]),
            Err(ConfigError::InvalidAddress { .. })
        ));
        assert!(matches!(
            load(&[("TRANSFER_GAS_LIMIT", "0")]),
            Err(ConfigError::InvalidNumber { .. })
        ));
        assert!(matches!(
            load(&[("SUBMIT_TIMEOUT_SECS", "soon")]),
            Err(ConfigError::InvalidNumber { .. })
        ));
        assert!(matches!(
            load(&[("PORT", "99999")]),
            Err(ConfigError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn debug_output_redacts_the_key() {
        let config = load(&[(
            "SPENDER_PRIVATE_KEY",
            "4c0883a69102937d6231471b5dcb26f0e81a4fca8cd4ff2b0b1e3cfd30d2d0f9",
        )])
        .unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("4c0883a6"));
        assert!(rendered.contains("<redacted>"));
    }
}
