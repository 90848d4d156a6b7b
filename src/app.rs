//! On-chain ToDo App
//!
//! Picks the screen: a fixed notice when the build is not configured or no
//! wallet is installed, otherwise the live dApp.

use chain_todo_core::view::{screen, Screen};
use chain_todo_core::{ConnectionState, DappConfig, JsonRpcReader, TodoSession};
use leptos::prelude::*;
use reactive_stores::Store;
use tracing::{info, warn};

use crate::components::{
    AppFrame, ConnectWallet, NetworkNotice, NewTaskForm, NoWallet, NotConfigured, StatusBanner,
    TaskList, WalletBadge,
};
use crate::config;
use crate::context::AppContext;
use crate::ethereum::{BrowserWallet, WalletSubscription};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = config::load();
    let wallet = config.as_ref().ok().and_then(BrowserWallet::detect);

    match (config, wallet) {
        (Ok(config), Some(wallet)) => view! { <Dapp config=config wallet=wallet /> }.into_any(),
        (config, _) => {
            // nothing below this point may touch the network
            let fixed = screen(config.as_ref(), false, &ConnectionState::default(), None);
            warn!(?fixed, "starting without a live session");
            view! { <AppFrame>{render_screen(fixed)}</AppFrame> }.into_any()
        }
    }
}

/// Components for one screen; the live ones expect the session context
fn render_screen(screen: Screen) -> AnyView {
    match screen {
        Screen::NotConfigured(reason) => view! { <NotConfigured reason=reason /> }.into_any(),
        Screen::NoWallet => view! { <NoWallet /> }.into_any(),
        Screen::Disconnected => view! { <ConnectWallet /> }.into_any(),
        Screen::WrongNetwork { network } => view! { <NetworkNotice network=network /> }.into_any(),
        Screen::Loading => view! {
            <p class="notice loading">"Loading tasks from blockchain..."</p>
        }
        .into_any(),
        Screen::Tasks => view! {
            <NewTaskForm />
            <TaskList />
            <StatusBanner />
        }
        .into_any(),
    }
}

#[component]
fn Dapp(config: DappConfig, wallet: BrowserWallet) -> impl IntoView {
    info!(contract = %config.contract, network = %config.network.name, "starting session");

    let store = Store::new(AppState::default());
    provide_context(store);

    let reader = JsonRpcReader::new(&config);
    let session = TodoSession::new(config.clone(), wallet.clone(), reader, wallet.clone());
    let ctx = AppContext::new(session, wallet.clone(), store);
    provide_context(ctx);

    // Subscribe once; listeners go away with the component
    let subscription = WalletSubscription::subscribe(wallet.provider(), move |event| {
        ctx.handle_wallet_event(event)
    });
    let subscription = StoredValue::new_local(Some(subscription));
    on_cleanup(move || subscription.set_value(None));

    ctx.restore();

    let config = StoredValue::new(config);
    let current = move || {
        let connection = store.connection().get();
        let count = store.task_count().get();
        config.with_value(|config| screen(Ok(config), true, &connection, count))
    };

    view! {
        <AppFrame>
            <WalletBadge />
            {move || render_screen(current())}
        </AppFrame>
    }
}
