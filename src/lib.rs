// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Spender Relay - Custodial USDT Delegated-Transfer Service
//!
//! This crate provides a backend relay that executes allowance-backed USDT
//! transfers on BNB Smart Chain, signed with a custodial spender key held by
//! the service itself.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `intent` - Transfer request validation and normalization
//! - `blockchain` - BNB Smart Chain integration (signing, submission, reads)

pub mod api;
pub mod blockchain;
pub mod config;
pub mod error;
pub mod intent;
pub mod models;
pub mod state;
