//! Chat Panel Component
//!
//! Transcript plus the input row. Enter or the send button submits.

use leptos::*;

use super::message::MessageBubble;
use crate::state::use_app_state;

/// Chat transcript and input
#[component]
pub fn ChatPanel() -> impl IntoView {
    let state = use_app_state();
    let transcript = state.transcript;

    let (input, set_input) = create_signal(String::new());
    let container_ref = create_node_ref::<html::Div>();

    // Keep the newest message in view
    create_effect(move |_| {
        transcript.with(|_| ());
        request_animation_frame(move || {
            if let Some(container) = container_ref.get_untracked() {
                container.set_scroll_top(container.scroll_height());
            }
        });
    });

    // Input is only cleared when something was actually sent
    let send = move || {
        if state.send_message(&input.get_untracked()) {
            set_input.set(String::new());
        }
    };
    let send_on_click = send.clone();

    view! {
        <section class="chat-panel">
            <div id="chatContainer" class="chat-container" node_ref=container_ref>
                <For
                    each=move || transcript.with(|t| t.messages().to_vec())
                    key=|message| message.id
                    children=|message| view! { <MessageBubble message=message /> }
                />
            </div>

            <div class="chat-input">
                <input
                    id="userInput"
                    type="text"
                    autocomplete="off"
                    placeholder="Ask about orders, payments or vendors..."
                    prop:value=move || input.get()
                    on:input=move |ev| set_input.set(event_target_value(&ev))
                    on:keypress=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            send();
                        }
                    }
                />
                <button type="button" class="send-btn" on:click=move |_| send_on_click()>
                    "Send"
                </button>
            </div>
        </section>
    }
}
