// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Blockchain integration module for BNB Smart Chain.
//!
//! This module provides functionality for:
//! - Querying USDT token balances
//! - Signing delegated transfers with the custodial spender key
//! - Broadcasting to the configured JSON-RPC endpoint

pub mod client;
pub mod erc20;
pub mod signing;
pub mod spender;
pub mod submitter;
pub mod types;

pub use client::{BscClient, BscClientError};
pub use submitter::TxSubmitter;
pub use types::*;
