// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Delegated-transfer endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::{
    blockchain::BscClientError,
    error::ApiError,
    intent::TransferIntent,
    models::{TransferRequest, TransferResponse},
    state::AppState,
};

/// Map a chain-layer failure onto the response contract. Configuration
/// failures deliberately collapse into a generic message so nothing about
/// the signing identity leaks to callers.
fn to_api_error(err: BscClientError) -> ApiError {
    if err.is_configuration() {
        tracing::error!("refusing transfer: signing identity unavailable");
        return ApiError::internal("Signing service is misconfigured");
    }
    match err {
        BscClientError::Timeout(secs) => {
            ApiError::gateway_timeout(format!("No broadcast acknowledgment within {secs}s"))
        }
        other => ApiError::service_unavailable(other.to_string()),
    }
}

/// Execute a delegated USDT transfer.
///
/// Validates the request, signs a `transferUSDT` call with the custodial
/// spender key, broadcasts it, and returns the transaction hash once the
/// endpoint acknowledges the broadcast. A failed submission is reported
/// as-is; the caller decides whether to retry.
#[utoipa::path(
    post,
    path = "/v1/transfer",
    tag = "Transfer",
    request_body = TransferRequest,
    responses(
        (status = 200, description = "Transfer broadcast acknowledged", body = TransferResponse),
        (status = 400, description = "Invalid address or amount"),
        (status = 500, description = "Signing service misconfigured"),
        (status = 503, description = "Chain endpoint rejected or failed the transaction"),
        (status = 504, description = "No broadcast acknowledgment within the wait window")
    )
)]
pub async fn submit_transfer(
    State(state): State<AppState>,
    payload: Result<Json<TransferRequest>, JsonRejection>,
) -> Result<Json<TransferResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

    let intent = TransferIntent::build(
        &request.user_address,
        &request.receiver_address,
        &request.amount.as_str(),
    )
    .map_err(|e| ApiError::bad_request(e.to_string()))?;

    let submitter = state.submitter().await.map_err(to_api_error)?;
    let submitted = submitter.submit(&intent).await.map_err(to_api_error)?;

    tracing::info!(
        tx_hash = %submitted.tx_hash,
        sender = %submitted.sender,
        status = ?submitted.status,
        owner = %intent.owner,
        receiver = %intent.receiver,
        amount = %intent.amount,
        "delegated transfer submitted"
    );

    Ok(Json(TransferResponse {
        success: true,
        tx_hash: submitted.tx_hash,
    }))
}
