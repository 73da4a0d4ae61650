// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Request and response bodies for the HTTP API.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::blockchain::TokenBalance;

/// Request to execute a delegated USDT transfer.
///
/// The request body is strongly typed: missing or unknown fields are
/// rejected at the boundary rather than coerced.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct TransferRequest {
    /// Address that granted the spender contract an allowance.
    pub user_address: String,
    /// Transfer destination address.
    pub receiver_address: String,
    /// Amount in the token's smallest unit, as a string or JSON integer.
    #[schema(value_type = String, example = "1000000000000000000")]
    pub amount: Amount,
}

/// Smallest-unit amount, accepted as a JSON string or integer.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Integer(u64),
    Text(String),
}

impl Amount {
    /// Canonical string form handed to the intent validator.
    pub fn as_str(&self) -> Cow<'_, str> {
        match self {
            Amount::Integer(value) => Cow::Owned(value.to_string()),
            Amount::Text(value) => Cow::Borrowed(value),
        }
    }
}

/// Successful transfer submission.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransferResponse {
    /// Always `true` on the success path.
    pub success: bool,
    /// Hash of the broadcast transaction.
    pub tx_hash: String,
}

/// USDT balance of an address.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BalanceResponse {
    /// Queried address.
    pub address: String,
    /// Network name.
    pub network: String,
    /// Balance information.
    #[serde(flatten)]
    pub balance: TokenBalance,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transfer_request_accepts_string_amount() {
        let request: TransferRequest = serde_json::from_str(
            r#"{"userAddress":"0xaa","receiverAddress":"0xbb","amount":"1000"}"#,
        )
        .unwrap();
        assert_eq!(request.amount.as_str(), "1000");
    }

    #[test]
    fn transfer_request_accepts_integer_amount() {
        let request: TransferRequest =
            serde_json::from_str(r#"{"userAddress":"0xaa","receiverAddress":"0xbb","amount":7}"#)
                .unwrap();
        assert_eq!(request.amount.as_str(), "7");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<TransferRequest, _> = serde_json::from_str(
            r#"{"userAddress":"0xaa","receiverAddress":"0xbb","amount":"1","gas":"1"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn missing_fields_are_rejected() {
        let result: Result<TransferRequest, _> =
            serde_json::from_str(r#"{"userAddress":"0xaa","amount":"1"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn transfer_response_serializes_camel_case() {
        let response = TransferResponse {
            success: true,
            tx_hash: "0xabc".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"success":true,"txHash":"0xabc"}"#);
    }
}
