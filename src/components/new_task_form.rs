//! New Task Form Component
//!
//! Free-text input that sends `createTask` from the connected account.

use chain_todo_core::view::add_button_label;
use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::AppStateStoreFields;

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    let (new_text, set_new_text) = signal(String::new());
    let creating = move || store.create_op().with(|op| op.is_in_flight());

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get();
        if text.trim().is_empty() || creating() {
            return;
        }
        // Input keeps its text until the new task is on the list
        ctx.create_task(text, move || set_new_text.set(String::new()));
    };

    view! {
        <form class="new-task-form" on:submit=create_task>
            <input
                type="text"
                placeholder="Add new task..."
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || creating() || !store.ready().get()>
                {move || store.create_op().with(add_button_label)}
            </button>
        </form>
    }
}
