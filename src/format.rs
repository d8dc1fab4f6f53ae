//! Message Formatting
//!
//! Chat text supports two pieces of markup: a newline becomes a line break
//! and `**text**` becomes strong emphasis. Everything else is shown as
//! literal text, so markup characters coming from the user or the server
//! are never interpreted as HTML.

use regex::Regex;
use std::sync::OnceLock;

/// A formatted piece of a chat message
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Inline {
    /// Literal text
    Text(String),
    /// Line break
    Break,
    /// Emphasised run; only holds `Text` and `Break`
    Strong(Vec<Inline>),
}

fn bold_pattern() -> &'static Regex {
    static BOLD: OnceLock<Regex> = OnceLock::new();
    BOLD.get_or_init(|| Regex::new(r"(?s)\*\*(.*?)\*\*").expect("bold pattern is valid"))
}

/// Split message text into formatted inline pieces
///
/// Bold markers are matched non-greedily and may span a newline.
pub fn parse(text: &str) -> Vec<Inline> {
    let mut out = Vec::new();

    let mut last = 0;
    for caps in bold_pattern().captures_iter(text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        push_lines(&mut out, &text[last..whole.start()]);

        let mut strong = Vec::new();
        push_lines(&mut strong, inner.as_str());
        out.push(Inline::Strong(strong));

        last = whole.end();
    }
    push_lines(&mut out, &text[last..]);

    out
}

fn push_lines(out: &mut Vec<Inline>, text: &str) {
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push(Inline::Break);
        }
        if !line.is_empty() {
            out.push(Inline::Text(line.to_string()));
        }
    }
}
