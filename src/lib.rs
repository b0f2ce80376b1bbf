//! Todo Frontend
//!
//! Browser task list backed by a remote JSON collection. Rendered with
//! Leptos (CSR); every change goes to the server and the list is redrawn
//! from what the server reports.

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod context;
pub mod controller;
pub mod error;
pub mod models;
pub mod notify;
pub mod render;

#[cfg(test)]
mod testing;

use app::App;
use leptos::prelude::*;

/// Install panic hook and console logging, then mount the app to `<body>`
pub fn run() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();

    mount_to_body(App);
}
