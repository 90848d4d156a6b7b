//! Wallet Connection State
//!
//! What the wallet last told us: the selected account and the active chain.

use serde::{Deserialize, Serialize};

/// Length of a full `0x`-prefixed account address
const ADDRESS_LEN: usize = 42;
/// Characters kept from each end of a shortened address
const SHORT_PREFIX: usize = 6;
const SHORT_SUFFIX: usize = 4;

/// Current wallet account and network
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionState {
    /// Selected account, lowercase hex
    pub address: Option<String>,
    /// Active chain id
    pub chain_id: Option<u64>,
}

/// Externally driven wallet notifications
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletEvent {
    /// `accountsChanged`; an empty list means the site lost authorization
    AccountsChanged(Vec<String>),
    /// `chainChanged`
    ChainChanged(u64),
    /// `disconnect`
    Disconnected,
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }

    /// Connected and on `supported_chain`
    pub fn is_ready(&self, supported_chain: u64) -> bool {
        self.is_connected() && self.chain_id == Some(supported_chain)
    }

    /// Apply a wallet event, returning true when the state changed
    pub fn apply(&mut self, event: WalletEvent) -> bool {
        let before = self.clone();
        match event {
            WalletEvent::AccountsChanged(accounts) => {
                self.address = accounts.into_iter().next().map(|a| a.to_lowercase());
                if self.address.is_none() {
                    self.chain_id = None;
                }
            }
            WalletEvent::ChainChanged(chain_id) => self.chain_id = Some(chain_id),
            WalletEvent::Disconnected => *self = Self::default(),
        }
        *self != before
    }

    /// Address for display (0x1234...abcd)
    pub fn display_address(&self) -> String {
        let Some(address) = &self.address else {
            return "not connected".to_string();
        };
        let chars: Vec<char> = address.chars().collect();
        if chars.len() < ADDRESS_LEN {
            return address.clone();
        }
        let start: String = chars[..SHORT_PREFIX].iter().collect();
        let end: String = chars[chars.len() - SHORT_SUFFIX..].iter().collect();
        format!("{}...{}", start, end)
    }
}

/// Parse a chain id as reported by a wallet: hex quantity or decimal
pub fn parse_chain_id(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(digits) => u64::from_str_radix(digits, 16).ok(),
        None => raw.parse().ok(),
    }
}
