//! App Root Component
//!
//! Provides global state and lays out the header, chat and order modal.

use leptos::*;

use crate::components::{ChatPanel, OrderModal};
use crate::config::ClientConfig;
use crate::state::global::{provide_app_state, use_app_state};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_app_state(ClientConfig::load());
    let state = use_app_state();

    view! {
        <div class="app">
            <header class="app-header">
                <div class="brand">
                    <span class="brand-icon">"🧵"</span>
                    <span class="brand-name">"Order Assistant"</span>
                </div>
                <button type="button" class="add-order-btn" on:click=move |_| state.open_modal()>
                    "+ Add Order"
                </button>
            </header>

            <main class="app-main">
                <ChatPanel />
            </main>

            <OrderModal />
        </div>
    }
}
