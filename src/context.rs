//! Application Context
//!
//! The session handle and the store, provided via Leptos Context API. All
//! user actions go through here.

use std::rc::Rc;

use chain_todo_core::{JsonRpcReader, OperationState, TodoSession, WalletEvent};
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::{debug, warn};

use crate::ethereum::BrowserWallet;
use crate::store::{AppStore, AppStateStoreFields};

pub type BrowserSession = TodoSession<BrowserWallet, JsonRpcReader, BrowserWallet>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    session: StoredValue<Rc<BrowserSession>, LocalStorage>,
    wallet: StoredValue<BrowserWallet, LocalStorage>,
    pub store: AppStore,
}

impl AppContext {
    pub fn new(session: BrowserSession, wallet: BrowserWallet, store: AppStore) -> Self {
        let ctx = Self {
            session: StoredValue::new_local(Rc::new(session)),
            wallet: StoredValue::new_local(wallet),
            store,
        };
        ctx.session.get_value().set_listener(move || ctx.sync());
        ctx
    }

    /// Copy session state into the store
    fn sync(&self) {
        let session = self.session.get_value();
        let snapshot = session.snapshot();
        self.store.connection().set(session.connection());
        self.store.ready().set(session.is_ready());
        self.store.task_count().set(snapshot.count);
        self.store.tasks().set(snapshot.tasks);
    }

    /// Prompt the wallet for account access
    pub fn connect(&self) {
        let session = self.session.get_value();
        spawn_local(async move {
            session.connect().await;
        });
    }

    /// Reconnect silently if this site is already authorized
    pub fn restore(&self) {
        let session = self.session.get_value();
        spawn_local(async move {
            session.restore().await;
        });
    }

    pub fn handle_wallet_event(&self, event: WalletEvent) {
        debug!(?event, "wallet event");
        let session = self.session.get_value();
        spawn_local(async move {
            session.handle_wallet_event(event).await;
        });
    }

    pub fn switch_network(&self) {
        let wallet = self.wallet.get_value();
        let network = self.session.with_value(|s| s.config().network.clone());
        spawn_local(async move {
            if let Err(reason) = wallet.switch_chain(&network).await {
                warn!(%reason, "network switch failed");
            }
        });
    }

    /// Send `createTask`; `on_success` runs once the list shows the new task
    pub fn create_task(&self, content: String, on_success: impl FnOnce() + 'static) {
        let session = self.session.get_value();
        let store = self.store;
        spawn_local(async move {
            let observe = move |state: &OperationState| store.create_op().set(state.clone());
            match session.create_task(&content, &observe).await {
                Ok(OperationState::Success) => on_success(),
                Ok(_) => {}
                Err(rejection) => debug!(%rejection, "create rejected"),
            }
        });
    }

    pub fn toggle_completed(&self, index: u64) {
        let session = self.session.get_value();
        let store = self.store;
        spawn_local(async move {
            let observe = move |state: &OperationState| store.toggle_op().set(state.clone());
            if let Err(rejection) = session.toggle_completed(index, &observe).await {
                debug!(%rejection, index, "toggle rejected");
            }
        });
    }
}
