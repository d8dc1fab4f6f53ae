//! Global Application State
//!
//! Reactive state shared by all components, plus the chat and order
//! operations that drive it.

use leptos::*;

use crate::api::{self, NewOrder};
use crate::config::ClientConfig;
use super::modal::{ClickTarget, ModalState};
use super::order::{confirmation_message, OrderOutcome};
use super::transcript::{Sender, Transcript};

/// Global application state provided to all components
#[derive(Clone)]
pub struct AppState {
    /// Where the API lives
    pub config: ClientConfig,
    /// Chat transcript
    pub transcript: RwSignal<Transcript>,
    /// Order modal visibility
    pub modal: RwSignal<ModalState>,
    /// Whether an order submission is in flight
    pub submitting_order: RwSignal<bool>,
}

/// Provide global state to the component tree
pub fn provide_app_state(config: ClientConfig) {
    provide_context(AppState::new(config));
}

/// Fetch the global state from context
pub fn use_app_state() -> AppState {
    use_context::<AppState>().expect("AppState not found")
}

impl AppState {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            transcript: create_rw_signal(Transcript::new()),
            modal: create_rw_signal(ModalState::default()),
            submitting_order: create_rw_signal(false),
        }
    }

    /// Send a chat message
    ///
    /// Empty or whitespace-only input is ignored. Otherwise the user message
    /// and a loading placeholder are shown immediately and the query is
    /// sent; the answer (or an error bubble) replaces the placeholder.
    /// Returns whether a request was issued.
    pub fn send_message(&self, raw: &str) -> bool {
        let Some(pending) = self
            .transcript
            .try_update(|t| t.begin_query(raw))
            .flatten()
        else {
            return false;
        };

        tracing::debug!(chars = pending.text.len(), "sending query");

        let transcript = self.transcript;
        let config = self.config.clone();
        spawn_local(async move {
            let result = api::query(&config, &pending.text).await;
            match &result {
                Ok(answer) => tracing::debug!(chars = answer.len(), "query answered"),
                Err(e) => tracing::error!(error = %e, "query failed"),
            }
            transcript.update(|t| {
                t.finish_query(pending.placeholder, result);
            });
        });

        true
    }

    /// Append a bot message to the transcript
    pub fn post_bot_message(&self, text: &str) {
        self.transcript.update(|t| {
            t.push(text, Sender::Bot);
        });
    }

    pub fn open_modal(&self) {
        self.modal.update(ModalState::open);
    }

    pub fn close_modal(&self) {
        self.modal.update(ModalState::close);
    }

    /// Route a click on the modal overlay
    pub fn modal_click(&self, target: ClickTarget) {
        self.modal.update(|m| {
            if m.click(target) {
                tracing::debug!("order modal dismissed by outside click");
            }
        });
    }

    /// Submit an order
    ///
    /// On success the modal closes, `on_added` runs (used to reset the
    /// form) and a confirmation appears in the chat. The outcome is always
    /// reported with a browser alert.
    pub fn submit_order<F>(&self, order: NewOrder, on_added: F)
    where
        F: FnOnce() + 'static,
    {
        self.submitting_order.set(true);
        tracing::info!(vendor = ?order.vendor_name, "submitting order");

        let state = self.clone();
        spawn_local(async move {
            let result = api::add_order(&state.config, &order).await;
            if let Err(e) = &result {
                tracing::error!(error = %e, "order submission failed");
            }

            let outcome = OrderOutcome::from_result(result);
            alert(&outcome.alert_text());
            state.apply_order_outcome(&outcome, order.vendor_name.as_deref(), on_added);
        });
    }

    /// Update the UI once the backend has answered an order submission
    fn apply_order_outcome<F>(&self, outcome: &OrderOutcome, vendor_name: Option<&str>, on_added: F)
    where
        F: FnOnce(),
    {
        match outcome {
            OrderOutcome::Added { order_id } => {
                tracing::info!(?order_id, "order added");
                self.close_modal();
                on_added();
                self.post_bot_message(&confirmation_message(vendor_name));
            }
            OrderOutcome::Rejected { reason } => {
                tracing::warn!(?reason, "order rejected");
            }
        }

        self.submitting_order.set(false);
    }
}

fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if window.alert_with_message(message).is_err() {
        tracing::warn!("failed to show alert");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_message_sends_nothing() {
        let runtime = create_runtime();
        let state = AppState::new(ClientConfig::default());

        assert!(!state.send_message(""));
        assert!(!state.send_message("   "));
        assert!(state.transcript.with(Transcript::is_empty));

        runtime.dispose();
    }

    #[test]
    fn test_modal_click_routing() {
        let runtime = create_runtime();
        let state = AppState::new(ClientConfig::default());

        state.open_modal();
        state.modal_click(ClickTarget::Content);
        assert!(state.modal.get().is_open());

        state.modal_click(ClickTarget::Backdrop);
        assert!(!state.modal.get().is_open());

        runtime.dispose();
    }

    #[test]
    fn test_added_order_closes_modal_and_confirms() {
        let runtime = create_runtime();
        let state = AppState::new(ClientConfig::default());
        state.open_modal();
        state.submitting_order.set(true);

        let mut form_reset = false;
        state.apply_order_outcome(
            &OrderOutcome::Added { order_id: Some(7) },
            Some("ABC Textiles"),
            || form_reset = true,
        );

        assert!(form_reset);
        assert!(!state.modal.get().is_open());
        assert!(!state.submitting_order.get());
        let last = state.transcript.with(|t| t.messages().last().cloned()).unwrap();
        assert_eq!(last.sender, Sender::Bot);
        assert!(last.text.contains("ABC Textiles"));

        runtime.dispose();
    }

    #[test]
    fn test_rejected_order_keeps_modal_open() {
        let runtime = create_runtime();
        let state = AppState::new(ClientConfig::default());
        state.open_modal();
        state.submitting_order.set(true);

        let mut form_reset = false;
        state.apply_order_outcome(
            &OrderOutcome::Rejected { reason: Some("Failed to add to database".into()) },
            Some("ABC Textiles"),
            || form_reset = true,
        );

        assert!(!form_reset);
        assert!(state.modal.get().is_open());
        assert!(!state.submitting_order.get());
        assert!(state.transcript.with(Transcript::is_empty));

        runtime.dispose();
    }

    #[test]
    fn test_post_bot_message() {
        let runtime = create_runtime();
        let state = AppState::new(ClientConfig::default());

        state.post_bot_message("hello");
        let messages = state.transcript.with(|t| t.messages().to_vec());
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender, Sender::Bot);

        runtime.dispose();
    }
}
