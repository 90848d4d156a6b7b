//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The session owns
//! the truth; this is the copy the view reads.

use chain_todo_core::{ConnectionState, OperationState, Task};
use leptos::prelude::*;
use reactive_stores::Store;

#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Wallet account and chain
    pub connection: ConnectionState,
    /// Connected and on the supported network
    pub ready: bool,
    /// Count of the last published pass (None until one completes)
    pub task_count: Option<u64>,
    /// Tasks of the last published pass, in index order
    pub tasks: Vec<Task>,
    pub create_op: OperationState,
    pub toggle_op: OperationState,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
