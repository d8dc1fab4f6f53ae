//! # Order Assistant
//!
//! Chat and order entry frontend for the order assistant, built with
//! Leptos (WASM).
//!
//! ## Features
//!
//! - Chat with the assistant over `/api/query`
//! - Add new orders through a modal form posted to `/api/add`
//! - Safe message formatting: line breaks and `**bold**`, everything else
//!   shown as text
//! - Overlapping questions each keep their own loading placeholder
//!
//! ## Modules
//!
//! - [`api`]: HTTP client and wire types
//! - [`state`]: transcript, modal and order state plus the global signals
//! - [`format`]: message markup
//! - [`components`]: Leptos components

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod format;
pub mod state;

pub use app::App;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};

use leptos::*;

/// Install panic and log hooks, then mount the app to the document body
pub fn start() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    tracing::info!("Order Assistant v{}", env!("CARGO_PKG_VERSION"));

    mount_to_body(|| view! { <App /> });
}
