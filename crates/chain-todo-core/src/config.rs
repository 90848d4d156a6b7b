//! Client Configuration
//!
//! The deployed contract and the one supported network, resolved once at
//! startup and handed to every component.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::ConfigError;

/// Public Sepolia JSON-RPC endpoint used when no override is given
pub const DEFAULT_READ_RPC_URL: &str = "https://ethereum-sepolia-rpc.publicnode.com";
pub const DEFAULT_RECEIPT_POLL_MS: u32 = 2_000;

/// A chain the client can talk to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    pub chain_id: u64,
    pub name: String,
    /// Read-only JSON-RPC endpoint for this chain
    pub read_rpc_url: String,
}

impl Network {
    pub fn sepolia() -> Self {
        Self {
            chain_id: 11_155_111,
            name: "Sepolia".to_string(),
            read_rpc_url: DEFAULT_READ_RPC_URL.to_string(),
        }
    }

    /// `0x`-prefixed chain id, as `wallet_switchEthereumChain` expects
    pub fn chain_id_hex(&self) -> String {
        format!("{:#x}", self.chain_id)
    }
}

/// A 20-byte account or contract address, normalized to lowercase
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Address {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        let digits = raw
            .strip_prefix("0x")
            .or_else(|| raw.strip_prefix("0X"))
            .ok_or_else(|| ConfigError::InvalidAddress(raw.to_string()))?;
        if digits.len() != 40 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ConfigError::InvalidAddress(raw.to_string()));
        }
        Ok(Self(format!("0x{}", digits.to_ascii_lowercase())))
    }
}

impl TryFrom<String> for Address {
    type Error = ConfigError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable configuration shared by every component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DappConfig {
    /// Deployed ToDo contract
    pub contract: Address,
    /// The single supported network
    pub network: Network,
    /// Interval between receipt polls while a transaction is mining
    pub receipt_poll_ms: u32,
}

impl DappConfig {
    /// Build from raw settings. Blank values count as unset.
    pub fn from_values(
        contract: Option<&str>,
        read_rpc_url: Option<&str>,
        receipt_poll_ms: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let contract = non_blank(contract).ok_or(ConfigError::NotConfigured)?;
        let mut network = Network::sepolia();
        if let Some(url) = non_blank(read_rpc_url) {
            network.read_rpc_url = url.to_string();
        }
        let receipt_poll_ms = non_blank(receipt_poll_ms)
            .and_then(|ms| ms.parse::<u32>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_RECEIPT_POLL_MS);

        Ok(Self {
            contract: contract.parse()?,
            network,
            receipt_poll_ms,
        })
    }

    pub fn supported_chain(&self) -> u64 {
        self.network.chain_id
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
