//! Task List Component
//!
//! Rows in contract index order.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_app_store();
    let rows = move || store.tasks().get().into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <Show
            when=move || store.tasks().with(|tasks| !tasks.is_empty())
            fallback=|| view! { <p class="empty-list">"No tasks yet."</p> }
        >
            <ul class="task-list">
                <For
                    each=rows
                    key=|(index, task)| (*index, task.content.clone(), task.completed)
                    children=move |(index, task)| {
                        let index = index as u64;
                        view! { <TaskRow index=index task=task /> }
                    }
                />
            </ul>
        </Show>
    }
}
