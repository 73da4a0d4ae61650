// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::blockchain::signing::signer_from_hex;
use crate::state::AppState;

/// Health check response with individual component status.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReadyResponse {
    /// Overall health status ("ok" or "degraded").
    pub status: String,
    /// Individual health checks and their results.
    pub checks: HealthChecks,
}

/// Individual health check results.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthChecks {
    /// Whether the service process is running.
    pub service: String,
    /// Custodial signing key status: "ok", "missing", or "invalid".
    /// Never carries key material.
    pub signer: String,
}

/// Simple health check response for liveness probes.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Check whether the configured spender key parses into a signer.
fn check_signer(state: &AppState) -> String {
    match state.config().spender_private_key.as_deref() {
        None => "missing".to_string(),
        Some(raw) => match signer_from_hex(raw) {
            Ok(_) => "ok".to_string(),
            Err(_) => "invalid".to_string(),
        },
    }
}

/// Health check endpoint handler.
///
/// Returns 200 if all checks pass, 503 if any check fails.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = ReadyResponse),
        (status = 503, description = "Service is unhealthy", body = ReadyResponse)
    )
)]
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<ReadyResponse>) {
    let signer = check_signer(&state);
    let all_ok = signer == "ok";

    let response = ReadyResponse {
        status: if all_ok { "ok" } else { "degraded" }.to_string(),
        checks: HealthChecks {
            service: "ok".to_string(),
            signer,
        },
    };

    let status = if all_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}

/// Liveness probe handler.
///
/// Always returns 200 if the process is running.
/// Does not check dependencies - use readiness for that.
#[utoipa::path(
    get,
    path = "/health/live",
    tag = "Health",
    responses(
        (status = 200, description = "Service is alive", body = HealthResponse)
    )
)]
pub async fn liveness() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Readiness probe handler.
///
/// Returns 200 only if the service can actually sign transfers.
#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "Health",
    responses(
        (status = 200, description = "Service is ready", body = ReadyResponse),
        (status = 503, description = "Service is not ready", body = ReadyResponse)
    )
)]
pub async fn readiness(state: State<AppState>) -> (StatusCode, Json<ReadyResponse>) {
    health(state).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    const TEST_KEY: &str = "4c0883a69102937d6231471b5dcb26f0e81a4fca8cd4ff2b0b1e3cfd30d2d0f9";

    fn state_with_key(key: Option<&str>) -> AppState {
        let key = key.map(str::to_string);
        AppState::new(
            AppConfig::from_vars(|name| match name {
                "SPENDER_PRIVATE_KEY" => key.clone(),
                _ => None,
            })
            .unwrap(),
        )
    }

    #[tokio::test]
    async fn healthy_when_key_parses() {
        let (status, body) = health(State(state_with_key(Some(TEST_KEY)))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.0.checks.signer, "ok");
    }

    #[tokio::test]
    async fn degraded_when_key_missing() {
        let (status, body) = health(State(state_with_key(None))).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.0.checks.signer, "missing");
    }

    #[tokio::test]
    async fn degraded_when_key_invalid_without_leaking_it() {
        let (status, body) = health(State(state_with_key(Some("0xdeadbeef")))).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.0.checks.signer, "invalid");
        assert!(!serde_json::to_string(&body.0).unwrap().contains("deadbeef"));
    }
}
