// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    blockchain::TokenBalance,
    models::{BalanceResponse, TransferRequest, TransferResponse},
    state::AppState,
};

pub mod balance;
pub mod health;
pub mod transfer;

pub fn router(state: AppState) -> Router {
    let v1_routes = Router::new()
        .route("/transfer", post(transfer::submit_transfer))
        .route("/balance/{address}", get(balance::get_usdt_balance))
        .with_state(state.clone());

    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .with_state(state);

    Router::new()
        .nest("/v1", v1_routes)
        .merge(health_routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(CorsLayer::permissive())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        transfer::submit_transfer,
        balance::get_usdt_balance,
        health::health,
        health::liveness,
        health::readiness
    ),
    components(
        schemas(
            TransferRequest,
            TransferResponse,
            BalanceResponse,
            TokenBalance,
            health::ReadyResponse,
            health::HealthChecks,
            health::HealthResponse
        )
    ),
    tags(
        (name = "Transfer", description = "Delegated USDT transfer execution"),
        (name = "Balance", description = "Token balance reads"),
        (name = "Health", description = "Service health probes")
    )
)]
struct ApiDoc;
