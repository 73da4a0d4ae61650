// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! USDT balance query endpoint.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{error::ApiError, models::BalanceResponse, state::AppState};

/// Get the USDT balance of an address.
///
/// Read-only display feature; uses the same contract-call encoding as the
/// transfer path but never touches the signing key.
#[utoipa::path(
    get,
    path = "/v1/balance/{address}",
    tag = "Balance",
    params(
        ("address" = String, Path, description = "Address to query (0x + 40 hex)")
    ),
    responses(
        (status = 200, description = "Balance retrieved successfully", body = BalanceResponse),
        (status = 400, description = "Invalid address"),
        (status = 503, description = "Blockchain network unavailable")
    )
)]
pub async fn get_usdt_balance(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<BalanceResponse>, ApiError> {
    // Reject malformed addresses before any RPC round-trip.
    crate::intent::parse_address(&address)
        .map_err(|reason| ApiError::bad_request(format!("Invalid address: {reason}")))?;

    let client = state
        .reader()
        .await
        .map_err(|e| ApiError::service_unavailable(e.to_string()))?;

    let balance = client
        .usdt_balance(&address)
        .await
        .map_err(|e| ApiError::service_unavailable(format!("Failed to query balance: {e}")))?;

    Ok(Json(BalanceResponse {
        address,
        network: client.network().name.to_string(),
        balance,
    }))
}
