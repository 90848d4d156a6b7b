use leptos::prelude::*;

use crate::context::AppContext;

/// Connected, but the wallet is on another chain
#[component]
pub fn NetworkNotice(network: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let label = format!("Switch to {}", network);

    view! {
        <div class="notice warning">
            <p>"Please switch to " {network}</p>
            <button class="switch-btn" on:click=move |_| ctx.switch_network()>{label}</button>
        </div>
    }
}
