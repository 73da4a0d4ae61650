// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::blockchain::{BscClient, BscClientError, TxSubmitter};
use crate::config::AppConfig;

/// Shared application state: read-only configuration plus lazily-initialized
/// chain handles. Initialization is exactly-once under concurrent first use;
/// a failed initialization is retried on the next request rather than cached.
#[derive(Clone)]
pub struct AppState {
    config: Arc<AppConfig>,
    reader: Arc<OnceCell<BscClient>>,
    submitter: Arc<OnceCell<TxSubmitter>>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
            reader: Arc::new(OnceCell::new()),
            submitter: Arc::new(OnceCell::new()),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Read-only chain client, initialized on first use.
    pub async fn reader(&self) -> Result<&BscClient, BscClientError> {
        self.reader
            .get_or_try_init(|| BscClient::new(&self.config))
            .await
    }

    /// Signing submitter, initialized on first use. Fails with a
    /// configuration error on every call while the spender key is missing
    /// or malformed.
    pub async fn submitter(&self) -> Result<&TxSubmitter, BscClientError> {
        self.submitter
            .get_or_try_init(|| TxSubmitter::new(&self.config))
            .await
    }
}
