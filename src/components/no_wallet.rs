use leptos::prelude::*;

#[component]
pub fn NoWallet() -> impl IntoView {
    view! {
        <div class="notice">
            <p>"No Ethereum wallet detected."</p>
            <p class="hint">"Install MetaMask or another browser wallet, then reload this page."</p>
        </div>
    }
}
