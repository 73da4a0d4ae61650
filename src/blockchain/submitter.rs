// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Delegated-transfer signing and submission.
//!
//! Builds the `transferUSDT` contract call, signs it with the custodial
//! spender key, and broadcasts it to the configured endpoint. The wait for
//! broadcast acknowledgment is bounded; acknowledgment is not chain
//! finality. A failed submission is reported as-is, never retried.

use std::time::Duration;

use alloy::{
    network::EthereumWallet,
    primitives::Address,
    providers::{Provider, ProviderBuilder},
    rpc::types::TransactionRequest,
};

use super::client::BscClientError;
use super::signing::signer_from_hex;
use super::spender::encode_transfer_call;
use super::types::{NetworkConfig, SubmittedTransaction, TxStatus, BSC_MAINNET};
use crate::config::AppConfig;
use crate::intent::TransferIntent;

/// Transaction submitter holding the custodial signing identity.
pub struct TxSubmitter {
    network: NetworkConfig,
    provider: alloy::providers::fillers::FillProvider<
        alloy::providers::fillers::JoinFill<
            alloy::providers::fillers::JoinFill<
                alloy::providers::Identity,
                alloy::providers::fillers::JoinFill<
                    alloy::providers::fillers::GasFiller,
                    alloy::providers::fillers::JoinFill<
                        alloy::providers::fillers::BlobGasFiller,
                        alloy::providers::fillers::JoinFill<
                            alloy::providers::fillers::NonceFiller,
                            alloy::providers::fillers::ChainIdFiller,
                        >,
                    >,
                >,
            >,
            alloy::providers::fillers::WalletFiller<EthereumWallet>,
        >,
        alloy::providers::RootProvider<alloy::network::Ethereum>,
    >,
    /// Address derived from the custodial key; the `from` of every call.
    sender: Address,
    /// Spender contract carrying the delegated-transfer entry point.
    spender: Address,
    /// Fixed gas ceiling per call.
    gas_limit: u64,
    /// Broadcast acknowledgment wait bound.
    timeout: Duration,
}

impl TxSubmitter {
    /// Create a submitter from the process configuration.
    ///
    /// Fails with a configuration error when the spender key is absent or
    /// malformed; no network connection is attempted in that case.
    pub async fn new(config: &AppConfig) -> Result<Self, BscClientError> {
        let raw_key = config
            .spender_private_key
            .as_deref()
            .ok_or(BscClientError::MissingPrivateKey)?;
        let signer = signer_from_hex(raw_key)?;
        let sender = signer.address();
        let wallet = EthereumWallet::from(signer);

        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect_http(config.rpc_url.clone());

        Ok(Self {
            network: BSC_MAINNET,
            provider,
            sender,
            spender: config.spender_contract,
            gas_limit: config.transfer_gas_limit,
            timeout: config.submit_timeout,
        })
    }

    /// Sign and broadcast a delegated transfer, waiting (bounded) for the
    /// endpoint's acknowledgment.
    pub async fn submit(
        &self,
        intent: &TransferIntent,
    ) -> Result<SubmittedTransaction, BscClientError> {
        let data = encode_transfer_call(intent.owner, intent.receiver, intent.amount);

        let tx = TransactionRequest::default()
            .from(self.sender)
            .to(self.spender)
            .input(data.into())
            .gas_limit(self.gas_limit);

        match tokio::time::timeout(self.timeout, self.broadcast(tx)).await {
            Ok(result) => result,
            Err(_) => Err(BscClientError::Timeout(self.timeout.as_secs())),
        }
    }

    /// Price, sign, and send the transaction; returns on the endpoint's
    /// broadcast acknowledgment.
    async fn broadcast(
        &self,
        tx: TransactionRequest,
    ) -> Result<SubmittedTransaction, BscClientError> {
        // BSC prices gas the legacy way.
        let gas_price = self
            .provider
            .get_gas_price()
            .await
            .map_err(|e| BscClientError::Rpc(e.to_string()))?;
        let mut tx = tx;
        tx.gas_price = Some(gas_price);

        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| BscClientError::Submission(e.to_string()))?;

        let tx_hash = format!("{:?}", pending.tx_hash());
        let explorer_url = format!("{}/tx/{}", self.network.explorer_url, tx_hash);
        tracing::info!(
            tx_hash = %tx_hash,
            explorer = %explorer_url,
            "transfer broadcast acknowledged"
        );

        Ok(SubmittedTransaction {
            tx_hash,
            sender: format!("{:?}", self.sender),
            status: TxStatus::Confirmed,
        })
    }

    /// Custodial sender address.
    pub fn sender(&self) -> Address {
        self.sender
    }

    /// Network identity.
    pub fn network(&self) -> &NetworkConfig {
        &self.network
    }
}
