//! Build-time Configuration
//!
//! Settings are baked in when the bundle is built:
//! `TODO_CONTRACT_ADDRESS=0x... trunk build`.

use chain_todo_core::{ConfigError, DappConfig};

pub fn load() -> Result<DappConfig, ConfigError> {
    DappConfig::from_values(
        option_env!("TODO_CONTRACT_ADDRESS"),
        option_env!("TODO_READ_RPC_URL"),
        option_env!("TODO_RECEIPT_POLL_MS"),
    )
}
