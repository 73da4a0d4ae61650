// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Custodial signing key handling.
//!
//! The spender key is configured as a hex string, with or without a `0x`
//! prefix; both forms normalize to the same canonical signer. Error messages
//! here are fixed strings so no fragment of key material can leak through an
//! error path.

use alloy::{network::EthereumWallet, signers::local::PrivateKeySigner};

use super::client::BscClientError;

/// Normalize a configured private key to bare lowercase hex.
pub fn normalize_key(raw: &str) -> Result<String, BscClientError> {
    let hex = raw.trim();
    let hex = hex.strip_prefix("0x").unwrap_or(hex);

    if hex.len() != 64 {
        return Err(BscClientError::InvalidPrivateKey(
            "key must be 64 hex characters (optionally 0x-prefixed)".to_string(),
        ));
    }
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(BscClientError::InvalidPrivateKey(
            "key must contain only hex characters".to_string(),
        ));
    }

    Ok(hex.to_ascii_lowercase())
}

/// Create a signer from a configured private key.
pub fn signer_from_hex(raw: &str) -> Result<PrivateKeySigner, BscClientError> {
    let hex = normalize_key(raw)?;
    let key_bytes = alloy::hex::decode(&hex).map_err(|_| {
        BscClientError::InvalidPrivateKey("key is not valid hex".to_string())
    })?;

    PrivateKeySigner::from_slice(&key_bytes).map_err(|_| {
        BscClientError::InvalidPrivateKey("key is not a valid secp256k1 scalar".to_string())
    })
}

/// Create an Ethereum wallet from a configured private key.
pub fn wallet_from_hex(raw: &str) -> Result<EthereumWallet, BscClientError> {
    let signer = signer_from_hex(raw)?;
    Ok(EthereumWallet::from(signer))
}
