//! On-chain ToDo Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod ethereum;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();
    mount_to_body(App);
}
