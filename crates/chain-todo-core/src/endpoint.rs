//! External Collaborator Traits
//!
//! The seams between the client and the outside world: the read-only
//! contract endpoint, the wallet, and the wallet's signer. Everything runs on
//! one thread, so none of these futures are `Send`.

use std::future::Future;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::abi::Calldata;
use crate::config::Address;
use crate::domain::{ReadError, Task, WalletError};

/// `{to, data}` of a contract call or transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractCall {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    pub to: String,
    pub data: String,
}

impl ContractCall {
    pub fn new(contract: &Address, calldata: &Calldata) -> Self {
        Self {
            from: None,
            to: contract.to_string(),
            data: calldata.to_hex(),
        }
    }

    pub fn with_sender(mut self, caller: Option<&str>) -> Self {
        self.from = caller.map(str::to_string);
        self
    }
}

/// Hash of a broadcast transaction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TxHash(pub String);

/// The subset of `eth_getTransactionReceipt` the client cares about
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub transaction_hash: Option<String>,
    pub block_number: Option<String>,
    /// `0x1` success, `0x0` reverted; absent on pre-Byzantium chains
    pub status: Option<String>,
}

impl TransactionReceipt {
    pub fn outcome(&self) -> Result<(), String> {
        match self.status.as_deref() {
            Some("0x1") | None => Ok(()),
            Some(_) => Err("transaction reverted".to_string()),
        }
    }
}

/// Poll for `tx`'s receipt until one exists, sleeping between attempts
///
/// A failed poll is retried: the transaction is already broadcast, so only
/// the receipt status decides the outcome.
pub async fn wait_for_receipt<F, Fut, S, SFut>(
    tx: &TxHash,
    mut fetch: F,
    mut sleep: S,
) -> Result<(), String>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<TransactionReceipt>, String>>,
    S: FnMut() -> SFut,
    SFut: Future<Output = ()>,
{
    loop {
        match fetch().await {
            Ok(Some(receipt)) => return receipt.outcome(),
            Ok(None) => debug!(tx = %tx.0, "no receipt yet"),
            Err(reason) => warn!(tx = %tx.0, %reason, "receipt poll failed, retrying"),
        }
        sleep().await;
    }
}

/// Read-only contract interface; no signing required
///
/// `caller` becomes the `from` of the call, for contracts keyed on the sender.
#[async_trait(?Send)]
pub trait ReadEndpoint {
    /// `getTasksCount()`
    async fn count(&self, caller: Option<&str>) -> Result<u64, ReadError>;

    /// `getTask(index)`
    async fn get(&self, caller: Option<&str>, index: u64) -> Result<Task, ReadError>;
}

/// Authenticated contract interface backed by the wallet's signer
///
/// Errors are the reason string surfaced to the user verbatim.
#[async_trait(?Send)]
pub trait WriteEndpoint {
    /// Ask the signer to approve and broadcast; resolves with the hash once
    /// the wallet has accepted the transaction
    async fn submit(&self, call: ContractCall) -> Result<TxHash, String>;

    /// Resolve once the transaction is mined
    async fn wait_mined(&self, tx: &TxHash) -> Result<(), String>;
}

/// Account authorization and network reporting
#[async_trait(?Send)]
pub trait Wallet {
    /// `eth_requestAccounts`; may prompt the user
    async fn request_accounts(&self) -> Result<Vec<String>, WalletError>;

    /// `eth_accounts`; never prompts
    async fn accounts(&self) -> Result<Vec<String>, WalletError>;

    /// `eth_chainId`
    async fn chain_id(&self) -> Result<u64, WalletError>;
}
