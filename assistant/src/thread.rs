//! Conversation thread model and title derivation.

#[cfg(test)]
#[path = "thread_test.rs"]
mod thread_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::message::{Message, Role};

/// Title given to threads before their first message.
pub const UNTITLED: &str = "Untitled";
/// Thread titles keep this many characters before the ellipsis.
pub const TITLE_MAX_CHARS: usize = 40;
/// Header tabs truncate labels to this many characters.
pub const TAB_LABEL_MAX_CHARS: usize = 25;

/// Opaque thread identifier, `chat-<ms>` with an optional `-<n>` suffix.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ThreadId(String);

impl ThreadId {
    /// Build the id for a thread created at `now_ms`. `attempt` disambiguates
    /// threads created within the same millisecond.
    #[must_use]
    pub fn from_time(now_ms: u64, attempt: u32) -> Self {
        if attempt == 0 {
            Self(format!("chat-{now_ms}"))
        } else {
            Self(format!("chat-{now_ms}-{attempt}"))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ThreadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ThreadId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// One conversation: ordered messages plus title and loading flag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thread {
    pub id: ThreadId,
    pub title: String,
    pub messages: Vec<Message>,
    pub is_loading: bool,
}

impl Thread {
    #[must_use]
    pub fn new(id: ThreadId) -> Self {
        Self { id, title: UNTITLED.to_owned(), messages: Vec::new(), is_loading: false }
    }

    /// Short label for the thread switcher.
    #[must_use]
    pub fn tab_label(&self) -> String {
        let title = if self.title.is_empty() { UNTITLED } else { self.title.as_str() };
        truncate_with_ellipsis(title, TAB_LABEL_MAX_CHARS)
    }

    /// Index of the trailing message if it is an assistant reply still loading.
    #[must_use]
    pub fn pending_assistant_index(&self) -> Option<usize> {
        let last = self.messages.len().checked_sub(1)?;
        self.messages[last].is_pending_assistant().then_some(last)
    }

    #[must_use]
    pub fn first_user_message(&self) -> Option<&Message> {
        self.messages.iter().find(|m| m.role == Role::User)
    }
}

/// Title derived from the first message of a thread.
#[must_use]
pub fn derive_title(text: &str) -> String {
    truncate_with_ellipsis(text, TITLE_MAX_CHARS)
}

/// Keep the first `max_chars` characters and append `...` when cut.
#[must_use]
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_owned(),
    }
}
