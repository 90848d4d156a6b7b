//! Error Types
//!
//! One enum per seam. Write failures are not errors here: they end as
//! `OperationState::Failed`.

use thiserror::Error;

/// Startup configuration problems; fatal to the session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No contract address was provided
    #[error("contract address is not configured")]
    NotConfigured,

    /// The contract address is not 0x followed by 40 hex digits
    #[error("invalid contract address: {0}")]
    InvalidAddress(String),
}

/// A read pass failed; the previous list stays on screen
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadError {
    /// Request never produced a JSON-RPC response
    #[error("transport error: {0}")]
    Transport(String),

    /// Node answered with a JSON-RPC error object
    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// Return data did not match the expected ABI shape
    #[error("malformed contract response: {0}")]
    Decode(String),
}

/// A write was refused before reaching the wallet
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// No account, or wrong network
    #[error("wallet is not connected to the supported network")]
    NotReady,

    #[error("task content is empty")]
    EmptyContent,

    #[error("task {index} is out of range ({count} known)")]
    IndexOutOfRange { index: u64, count: u64 },

    /// Another operation of the same kind is still in flight
    #[error("a {0} transaction is already in progress")]
    Busy(&'static str),
}

/// Wallet request failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    #[error("wallet request failed: {0}")]
    Request(String),

    #[error("unexpected wallet response: {0}")]
    Response(String),
}
