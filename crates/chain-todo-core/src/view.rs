//! View Derivation
//!
//! Which screen to show and what the controls say, as plain functions of
//! the session state.

use crate::config::DappConfig;
use crate::domain::{ConfigError, ConnectionState, OperationState};

/// Top-level screen, first matching condition wins
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Contract address missing or malformed
    NotConfigured(String),
    /// No injected wallet provider
    NoWallet,
    Disconnected,
    WrongNetwork { network: String },
    /// Connected, no read pass has completed yet
    Loading,
    Tasks,
}

pub fn screen(
    config: Result<&DappConfig, &ConfigError>,
    wallet_available: bool,
    connection: &ConnectionState,
    count: Option<u64>,
) -> Screen {
    let config = match config {
        Ok(config) => config,
        Err(err) => return Screen::NotConfigured(err.to_string()),
    };
    if !wallet_available {
        Screen::NoWallet
    } else if !connection.is_connected() {
        Screen::Disconnected
    } else if !connection.is_ready(config.supported_chain()) {
        Screen::WrongNetwork {
            network: config.network.name.clone(),
        }
    } else if count.is_none() {
        Screen::Loading
    } else {
        Screen::Tasks
    }
}

/// Transaction status lines under the list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLines {
    pub in_progress: bool,
    pub error: Option<String>,
}

pub fn status_lines(create: &OperationState, toggle: &OperationState) -> StatusLines {
    StatusLines {
        in_progress: create.is_in_flight() || toggle.is_in_flight(),
        error: create
            .failure()
            .or_else(|| toggle.failure())
            .map(str::to_string),
    }
}

pub fn add_button_label(create: &OperationState) -> &'static str {
    if create.is_in_flight() {
        "Adding..."
    } else {
        "Add"
    }
}
