//! Chat Transcript
//!
//! The ordered list of chat messages shown to the user. Pure state; the
//! reactive wrapper lives in [`super::global::AppState`].

/// Text shown while waiting for an answer
pub const LOADING_TEXT: &str = "Searching...";

/// Text shown when a query fails for any reason
pub const CONNECTION_ERROR_TEXT: &str = "❌ Error connecting to server.";

/// Unique message identifier within a page session
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(u64);

impl MessageId {
    /// DOM id used for loading placeholders
    pub fn loading_dom_id(&self) -> String {
        format!("loading-msg-{}", self.0)
    }
}

/// Who wrote a message
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }
}

/// A single chat message
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
    pub is_loading: bool,
}

impl Message {
    /// CSS classes for the message bubble
    pub fn css_class(&self) -> String {
        if self.is_loading {
            format!("message msg-{} msg-loading", self.sender.as_str())
        } else {
            format!("message msg-{}", self.sender.as_str())
        }
    }

    /// DOM id, only set on loading placeholders
    pub fn dom_id(&self) -> Option<String> {
        self.is_loading.then(|| self.id.loading_dom_id())
    }
}

/// A query that has been recorded in the transcript and awaits a reply
#[derive(Clone, Debug, PartialEq)]
pub struct PendingQuery {
    pub text: String,
    pub placeholder: MessageId,
}

/// Ordered chat transcript
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    messages: Vec<Message>,
    next_id: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn allocate_id(&mut self) -> MessageId {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        id
    }

    fn make(&mut self, text: &str, sender: Sender, is_loading: bool) -> Message {
        Message {
            id: self.allocate_id(),
            text: text.to_string(),
            sender,
            is_loading,
        }
    }

    /// Append a finished message
    pub fn push(&mut self, text: &str, sender: Sender) -> MessageId {
        let message = self.make(text, sender, false);
        let id = message.id;
        self.messages.push(message);
        id
    }

    /// Append a loading placeholder
    pub fn push_loading(&mut self) -> MessageId {
        let message = self.make(LOADING_TEXT, Sender::Bot, true);
        let id = message.id;
        self.messages.push(message);
        id
    }

    /// Replace a placeholder with a bot message in the same position
    ///
    /// The replacement gets a fresh id so keyed views re-render it. If the
    /// placeholder is gone the reply is appended instead.
    pub fn resolve(&mut self, placeholder: MessageId, text: &str) -> MessageId {
        let reply = self.make(text, Sender::Bot, false);
        let id = reply.id;
        match self.messages.iter().position(|m| m.id == placeholder) {
            Some(index) => self.messages[index] = reply,
            None => self.messages.push(reply),
        }
        id
    }

    /// Record a user query: user message plus loading placeholder
    ///
    /// Returns `None` for empty or whitespace-only input, leaving the
    /// transcript untouched.
    pub fn begin_query(&mut self, raw: &str) -> Option<PendingQuery> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        self.push(text, Sender::User);
        let placeholder = self.push_loading();
        Some(PendingQuery {
            text: text.to_string(),
            placeholder,
        })
    }

    /// Settle a pending query with the server answer or a failure
    pub fn finish_query<E>(&mut self, placeholder: MessageId, result: Result<String, E>) -> MessageId {
        match result {
            Ok(answer) => self.resolve(placeholder, &answer),
            Err(_) => self.resolve(placeholder, CONNECTION_ERROR_TEXT),
        }
    }
}

#[cfg(test)]
impl Transcript {
    fn len(&self) -> usize {
        self.messages.len()
    }

    fn pending_count(&self) -> usize {
        self.messages.iter().filter(|m| m.is_loading).count()
    }

    fn remove(&mut self, id: MessageId) -> bool {
        let before = self.messages.len();
        self.messages.retain(|m| m.id != id);
        self.messages.len() != before
    }
}
