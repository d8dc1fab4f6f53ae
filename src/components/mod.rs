//! UI Components
//!
//! Leptos components for the chat transcript and the order modal.

pub mod chat;
pub mod message;
pub mod order_modal;

pub use chat::ChatPanel;
pub use message::MessageBubble;
pub use order_modal::OrderModal;
