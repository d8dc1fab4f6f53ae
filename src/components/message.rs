//! Message Bubble Component
//!
//! Renders one transcript entry. Text goes into the DOM as text nodes, so
//! only the supported markup (line breaks and bold) becomes elements.

use leptos::*;

use crate::format::{self, Inline};
use crate::state::Message;

/// Single chat message bubble
#[component]
pub fn MessageBubble(message: Message) -> impl IntoView {
    let class = message.css_class();
    let id = message.dom_id();
    let content = render_inlines(format::parse(&message.text));

    view! {
        <div class=class id=id>
            {content}
        </div>
    }
}

fn render_inlines(inlines: Vec<Inline>) -> View {
    inlines
        .into_iter()
        .map(|inline| match inline {
            Inline::Text(text) => text.into_view(),
            Inline::Break => view! { <br /> }.into_view(),
            Inline::Strong(children) => view! {
                <strong>{render_inlines(children)}</strong>
            }
            .into_view(),
        })
        .collect_view()
}
