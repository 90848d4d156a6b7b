use chain_todo_core::view::status_lines;
use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Pending and failed transaction messages
#[component]
pub fn StatusBanner() -> impl IntoView {
    let store = use_app_store();
    let lines = Memo::new(move |_| {
        let create = store.create_op().get();
        let toggle = store.toggle_op().get();
        status_lines(&create, &toggle)
    });

    view! {
        <div class="status-banner">
            <Show when=move || lines.with(|l| l.in_progress)>
                <p class="status pending">"Transaction in progress..."</p>
            </Show>
            {move || lines.with(|l| l.error.clone()).map(|reason| view! {
                <p class="status error">"Error: " {reason}</p>
            })}
        </div>
    }
}
