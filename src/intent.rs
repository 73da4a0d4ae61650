// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Transfer request validation and normalization.
//!
//! Raw caller input (two addresses and an amount) is checked here before any
//! key material or network connection comes into play. Validation is pure:
//! the same raw input always yields the same [`TransferIntent`].

use std::str::FromStr;

use alloy::primitives::{Address, U256};

/// A validated, fully normalized transfer request.
///
/// `owner` previously granted the spender contract an allowance on-chain;
/// the custodial key moves `amount` of USDT from `owner` to `receiver` on
/// that authority. Owner and receiver are allowed to be equal (a no-op
/// transfer is valid, if useless).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferIntent {
    /// Address whose allowance funds the transfer.
    pub owner: Address,
    /// Transfer destination.
    pub receiver: Address,
    /// Amount in the token's smallest unit.
    pub amount: U256,
}

/// Validation failures for raw transfer input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntentError {
    #[error("Invalid {field} address: {reason}")]
    InvalidAddress { field: &'static str, reason: String },

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

impl TransferIntent {
    /// Validate raw input and build an intent. Rules apply in order and fail
    /// fast: owner address, receiver address, amount.
    pub fn build(
        owner_raw: &str,
        receiver_raw: &str,
        amount_raw: &str,
    ) -> Result<Self, IntentError> {
        let owner = parse_address(owner_raw).map_err(|reason| IntentError::InvalidAddress {
            field: "user",
            reason,
        })?;
        let receiver =
            parse_address(receiver_raw).map_err(|reason| IntentError::InvalidAddress {
                field: "receiver",
                reason,
            })?;
        let amount = parse_amount(amount_raw)?;

        Ok(Self {
            owner,
            receiver,
            amount,
        })
    }
}

/// Structural address validation: `0x` prefix, 40 hex characters, any case.
pub fn parse_address(raw: &str) -> Result<Address, String> {
    let raw = raw.trim();
    if !raw.starts_with("0x") {
        return Err("address must start with 0x".to_string());
    }
    if raw.len() != 42 {
        return Err("address must be 42 characters (0x + 40 hex)".to_string());
    }
    if !raw[2..].chars().all(|c| c.is_ascii_hexdigit()) {
        return Err("address must contain only hex characters".to_string());
    }
    Address::from_str(raw).map_err(|e| e.to_string())
}

/// Parse a smallest-unit amount: a non-negative base-10 integer up to 256 bits.
fn parse_amount(raw: &str) -> Result<U256, IntentError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(IntentError::InvalidAmount(
            "amount must not be empty".to_string(),
        ));
    }
    if raw.starts_with('-') {
        return Err(IntentError::InvalidAmount(
            "amount must not be negative".to_string(),
        ));
    }
    if raw.contains('.') {
        return Err(IntentError::InvalidAmount(
            "amount must be an integer in the token's smallest unit".to_string(),
        ));
    }
    if !raw.chars().all(|c| c.is_ascii_digit()) {
        return Err(IntentError::InvalidAmount(
            "amount must be a base-10 integer".to_string(),
        ));
    }
    U256::from_str_radix(raw, 10)
        .map_err(|_| IntentError::InvalidAmount("amount exceeds 256 bits".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const OWNER: &str = "0xAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA1111";
    const RECEIVER: &str = "0xBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBB2222";

    #[test]
    fn valid_input_builds_an_intent() {
        let intent = TransferIntent::build(OWNER, RECEIVER, "1000000000000000000").unwrap();
        assert_eq!(intent.amount, U256::from(1_000_000_000_000_000_000u64));
        assert_ne!(intent.owner, intent.receiver);
    }

    #[test]
    fn addresses_are_case_insensitive() {
        let upper = TransferIntent::build(OWNER, RECEIVER, "1").unwrap();
        let lower =
            TransferIntent::build(&OWNER.to_lowercase(), &RECEIVER.to_lowercase(), "1").unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn missing_prefix_is_rejected() {
        let err = TransferIntent::build(&OWNER[2..], RECEIVER, "1").unwrap_err();
        assert!(matches!(
            err,
            IntentError::InvalidAddress { field: "user", .. }
        ));
    }

    #[test]
    fn wrong_length_is_rejected() {
        let err = TransferIntent::build(OWNER, "0xBBBB", "1").unwrap_err();
        assert!(matches!(
            err,
            IntentError::InvalidAddress {
                field: "receiver",
                ..
            }
        ));
    }

    #[test]
    fn non_hex_characters_are_rejected() {
        let bad = "0xZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZ1111";
        let err = TransferIntent::build(bad, RECEIVER, "1").unwrap_err();
        assert!(matches!(err, IntentError::InvalidAddress { .. }));
    }

    #[test]
    fn free_text_is_rejected() {
        let err = TransferIntent::build("not-an-address", RECEIVER, "1").unwrap_err();
        assert!(matches!(err, IntentError::InvalidAddress { .. }));
    }

    #[test]
    fn owner_validation_runs_before_receiver() {
        // Both inputs invalid: the owner error wins because rules fail fast.
        let err = TransferIntent::build("bogus", "also-bogus", "1").unwrap_err();
        assert!(matches!(
            err,
            IntentError::InvalidAddress { field: "user", .. }
        ));
    }

    #[test]
    fn negative_amount_is_rejected() {
        let err = TransferIntent::build(OWNER, RECEIVER, "-5").unwrap_err();
        assert!(matches!(err, IntentError::InvalidAmount(_)));
    }

    #[test]
    fn fractional_amount_is_rejected() {
        let err = TransferIntent::build(OWNER, RECEIVER, "1.5").unwrap_err();
        assert!(matches!(err, IntentError::InvalidAmount(_)));
    }

    #[test]
    fn non_numeric_amount_is_rejected() {
        for raw in ["", "  ", "abc", "1e18", "0x10", "+7"] {
            let err = TransferIntent::build(OWNER, RECEIVER, raw).unwrap_err();
            assert!(matches!(err, IntentError::InvalidAmount(_)), "input {raw:?}");
        }
    }

    #[test]
    fn zero_and_max_amounts_are_accepted() {
        assert_eq!(
            TransferIntent::build(OWNER, RECEIVER, "0").unwrap().amount,
            U256::ZERO
        );
        let max = U256::MAX.to_string();
        assert_eq!(
            TransferIntent::build(OWNER, RECEIVER, &max).unwrap().amount,
            U256::MAX
        );
    }

    #[test]
    fn amount_over_256_bits_is_rejected() {
        let too_big = format!("{}0", U256::MAX);
        let err = TransferIntent::build(OWNER, RECEIVER, &too_big).unwrap_err();
        assert!(matches!(err, IntentError::InvalidAmount(_)));
    }

    #[test]
    fn owner_may_equal_receiver() {
        let intent = TransferIntent::build(OWNER, OWNER, "10").unwrap();
        assert_eq!(intent.owner, intent.receiver);
    }

    #[test]
    fn building_twice_yields_equal_intents() {
        let first = TransferIntent::build(OWNER, RECEIVER, "42").unwrap();
        let second = TransferIntent::build(OWNER, RECEIVER, "42").unwrap();
        assert_eq!(first, second);
    }
}
