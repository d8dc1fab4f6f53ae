//! Order Assistant
//!
//! Client-side rendered Leptos application compiled to WebAssembly. It
//! talks to the assistant backend over HTTP.

fn main() {
    order_assistant_ui::start();
}
