//! Browser Wallet
//!
//! Account access, network reporting and transaction signing through the
//! injected provider.

use async_trait::async_trait;
use chain_todo_core::{
    parse_chain_id, wait_for_receipt, ContractCall, DappConfig, Network, TransactionReceipt, TxHash, Wallet,
    WalletError, WriteEndpoint,
};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::info;

use super::{injected_provider, Eip1193Provider};

#[derive(Clone)]
pub struct BrowserWallet {
    provider: Eip1193Provider,
    receipt_poll_ms: u32,
}

impl BrowserWallet {
    /// None when no wallet extension injected a provider
    pub fn detect(config: &DappConfig) -> Option<Self> {
        let provider = injected_provider()?;
        Some(Self {
            provider,
            receipt_poll_ms: config.receipt_poll_ms,
        })
    }

    pub fn provider(&self) -> &Eip1193Provider {
        &self.provider
    }

    /// Ask the wallet to switch to `network`; the wallet reports the result
    /// through `chainChanged`
    pub async fn switch_chain(&self, network: &Network) -> Result<(), String> {
        info!(chain_id = network.chain_id, "requesting network switch");
        self.provider
            .call(
                "wallet_switchEthereumChain",
                json!([{ "chainId": network.chain_id_hex() }]),
            )
            .await
            .map(|_| ())
    }

    async fn call_as<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T, String> {
        let value = self.provider.call(method, params).await?;
        serde_wasm_bindgen::from_value(value).map_err(|e| format!("{}: {}", method, e))
    }
}

#[async_trait(?Send)]
impl Wallet for BrowserWallet {
    async fn request_accounts(&self) -> Result<Vec<String>, WalletError> {
        self.call_as("eth_requestAccounts", json!([]))
            .await
            .map_err(WalletError::Request)
    }

    async fn accounts(&self) -> Result<Vec<String>, WalletError> {
        self.call_as("eth_accounts", json!([]))
            .await
            .map_err(WalletError::Request)
    }

    async fn chain_id(&self) -> Result<u64, WalletError> {
        let raw: String = self
            .call_as("eth_chainId", json!([]))
            .await
            .map_err(WalletError::Request)?;
        parse_chain_id(&raw).ok_or(WalletError::Response(raw))
    }
}

#[async_trait(?Send)]
impl WriteEndpoint for BrowserWallet {
    async fn submit(&self, call: ContractCall) -> Result<TxHash, String> {
        self.call_as::<String>("eth_sendTransaction", json!([call]))
            .await
            .map(TxHash)
    }

    async fn wait_mined(&self, tx: &TxHash) -> Result<(), String> {
        wait_for_receipt(
            tx,
            || self.call_as::<Option<TransactionReceipt>>("eth_getTransactionReceipt", json!([tx.0])),
            || TimeoutFuture::new(self.receipt_poll_ms),
        )
        .await
    }
}
