//! Wallet Connection Components
//!
//! The connect prompt and the account badge.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

/// Prompt shown while no account is connected
#[component]
pub fn ConnectWallet() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="notice">
            <p>"Connect your wallet to see your tasks."</p>
            <button class="connect-btn" on:click=move |_| ctx.connect()>"Connect Wallet"</button>
        </div>
    }
}

/// Shortened account address once connected
#[component]
pub fn WalletBadge() -> impl IntoView {
    let store = use_app_store();
    let connected = move || store.connection().with(|c| c.is_connected());

    view! {
        <Show when=connected>
            <p class="wallet-badge">
                "Connected: " {move || store.connection().with(|c| c.display_address())}
            </p>
        </Show>
    }
}
