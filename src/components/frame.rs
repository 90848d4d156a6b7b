//! App Frame Component

use leptos::prelude::*;

/// Page chrome shared by every screen
#[component]
pub fn AppFrame(children: Children) -> impl IntoView {
    view! {
        <main class="app">
            <h1 class="app-title">"📝 Blockchain ToDo App"</h1>
            {children()}
        </main>
    }
}
