//! Task Row Component
//!
//! One task with its completion checkbox.

use chain_todo_core::Task;
use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::AppStateStoreFields;

#[component]
pub fn TaskRow(index: u64, task: Task) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    let completed = task.completed;
    let toggling = move || store.toggle_op().with(|op| op.is_in_flight());

    view! {
        <li class=if completed { "task-row completed" } else { "task-row" }>
            <input
                type="checkbox"
                prop:checked=completed
                disabled=toggling
                on:click=move |ev| {
                    // The box flips when the chain says so, not on click
                    ev.prevent_default();
                    ctx.toggle_completed(index);
                }
            />
            <span class="task-text">{task.content}</span>
        </li>
    }
}
