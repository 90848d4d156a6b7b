use leptos::prelude::*;

/// Shown when the bundle was built without a usable contract address
#[component]
pub fn NotConfigured(reason: String) -> impl IntoView {
    view! {
        <div class="notice error">
            <p>"This app is not configured: " {reason} "."</p>
            <p class="hint">"Rebuild with TODO_CONTRACT_ADDRESS set to the deployed ToDo contract."</p>
        </div>
    }
}
