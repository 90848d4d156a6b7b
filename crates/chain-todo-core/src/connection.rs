//! Connection Manager
//!
//! Owns the wallet handle and the last known account/chain. Everything else
//! is gated on `is_ready`. Wallet failures are logged and leave the state as
//! it was; a wrong network is a normal state, not an error.

use std::cell::RefCell;

use tracing::{info, warn};

use crate::config::DappConfig;
use crate::domain::{ConnectionState, WalletEvent};
use crate::endpoint::Wallet;

pub struct ConnectionManager<C> {
    wallet: C,
    supported_chain: u64,
    state: RefCell<ConnectionState>,
}

impl<C: Wallet> ConnectionManager<C> {
    pub fn new(wallet: C, config: &DappConfig) -> Self {
        Self {
            wallet,
            supported_chain: config.supported_chain(),
            state: RefCell::new(ConnectionState::default()),
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state.borrow().clone()
    }

    pub fn address(&self) -> Option<String> {
        self.state.borrow().address.clone()
    }

    pub fn is_ready(&self) -> bool {
        self.state.borrow().is_ready(self.supported_chain)
    }

    /// Ask the wallet to authorize this site. Returns true if the state changed.
    pub async fn connect(&self) -> bool {
        match self.wallet.request_accounts().await {
            Ok(accounts) => self.adopt(accounts).await,
            Err(err) => {
                warn!(error = %err, "wallet connection failed");
                false
            }
        }
    }

    /// Pick up an existing authorization without prompting
    pub async fn restore(&self) -> bool {
        match self.wallet.accounts().await {
            Ok(accounts) if !accounts.is_empty() => self.adopt(accounts).await,
            Ok(_) => false,
            Err(err) => {
                warn!(error = %err, "could not query authorized accounts");
                false
            }
        }
    }

    /// Apply a wallet notification. Returns true if the state changed.
    pub async fn handle(&self, event: WalletEvent) -> bool {
        let changed = self.state.borrow_mut().apply(event);
        let needs_chain = {
            let state = self.state.borrow();
            state.is_connected() && state.chain_id.is_none()
        };
        if needs_chain {
            return self.query_chain().await || changed;
        }
        if changed {
            self.log_state();
        }
        changed
    }

    async fn adopt(&self, accounts: Vec<String>) -> bool {
        let changed = self
            .state
            .borrow_mut()
            .apply(WalletEvent::AccountsChanged(accounts));
        let chain_changed = self.query_chain().await;
        changed || chain_changed
    }

    async fn query_chain(&self) -> bool {
        let changed = match self.wallet.chain_id().await {
            Ok(chain_id) => self.state.borrow_mut().apply(WalletEvent::ChainChanged(chain_id)),
            Err(err) => {
                warn!(error = %err, "could not read wallet chain id");
                false
            }
        };
        self.log_state();
        changed
    }

    fn log_state(&self) {
        let state = self.state.borrow();
        info!(
            address = %state.display_address(),
            chain_id = ?state.chain_id,
            ready = state.is_ready(self.supported_chain),
            "wallet state"
        );
    }
}
