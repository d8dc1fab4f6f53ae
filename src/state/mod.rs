//! State Management
//!
//! Pure UI state (transcript, modal, order form) and the reactive global
//! state that wires it to the API.

pub mod global;
pub mod modal;
pub mod order;
pub mod transcript;

pub use global::{provide_app_state, use_app_state, AppState};
pub use modal::{ClickTarget, ModalState};
pub use order::{OrderForm, OrderOutcome};
pub use transcript::{Message, MessageId, Sender, Transcript};
