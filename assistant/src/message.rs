//! Chat message model and the partial-update patch used during reveal.

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

use serde::{Deserialize, Serialize};

/// Author of a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Rendering hint for message content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    #[default]
    Text,
    Artifact,
    Files,
}

/// Precomputed "thinking" text revealed progressively before the answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThinkingContent {
    pub summary: String,
    pub bullets: Vec<String>,
}

/// How much of the thinking content is currently visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadingState {
    pub show_summary: bool,
    pub visible_bullets: usize,
}

/// A single chat message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    pub kind: Option<MessageKind>,
    pub is_loading: bool,
    pub thinking: Option<ThinkingContent>,
    pub loading_state: Option<LoadingState>,
    pub show_thinking: Option<bool>,
}

impl Message {
    /// A finished user message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            kind: Some(MessageKind::Text),
            is_loading: false,
            thinking: None,
            loading_state: None,
            show_thinking: None,
        }
    }

    /// Empty assistant message waiting for the reveal sequence.
    #[must_use]
    pub fn assistant_placeholder(thinking: ThinkingContent) -> Self {
        Self {
            role: Role::Assistant,
            content: String::new(),
            kind: Some(MessageKind::Text),
            is_loading: true,
            thinking: Some(thinking),
            loading_state: Some(LoadingState::default()),
            show_thinking: None,
        }
    }

    #[must_use]
    pub fn is_pending_assistant(&self) -> bool {
        self.role == Role::Assistant && self.is_loading
    }

    /// Bullets revealed so far, clamped to what exists.
    #[must_use]
    pub fn visible_bullets(&self) -> &[String] {
        let Some(thinking) = &self.thinking else {
            return &[];
        };
        let shown = match self.loading_state {
            Some(state) if self.is_loading => state.visible_bullets,
            _ => thinking.bullets.len(),
        };
        &thinking.bullets[..shown.min(thinking.bullets.len())]
    }

    /// Summary text if it should be rendered now.
    #[must_use]
    pub fn visible_summary(&self) -> Option<&str> {
        let thinking = self.thinking.as_ref()?;
        match self.loading_state {
            Some(state) if self.is_loading && !state.show_summary => None,
            _ => Some(thinking.summary.as_str()),
        }
    }

    /// Apply a patch in place. Bullet counts only move forward and never
    /// exceed the available bullets.
    pub fn apply(&mut self, patch: &MessagePatch) {
        if let Some(content) = &patch.content {
            self.content.clone_from(content);
        }
        if let Some(is_loading) = patch.is_loading {
            self.is_loading = is_loading;
        }
        if let Some(show_thinking) = patch.show_thinking {
            self.show_thinking = Some(show_thinking);
        }
        if patch.show_summary.is_none() && patch.visible_bullets.is_none() {
            return;
        }
        let limit = self.thinking.as_ref().map_or(0, |t| t.bullets.len());
        let state = self.loading_state.get_or_insert_with(LoadingState::default);
        if let Some(show_summary) = patch.show_summary {
            state.show_summary = show_summary;
        }
        if let Some(visible) = patch.visible_bullets {
            state.visible_bullets = state.visible_bullets.max(visible.min(limit));
        }
    }
}

/// Partial update merged into an existing message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessagePatch {
    pub content: Option<String>,
    pub is_loading: Option<bool>,
    pub show_summary: Option<bool>,
    pub visible_bullets: Option<usize>,
    pub show_thinking: Option<bool>,
}

impl MessagePatch {
    #[must_use]
    pub fn reveal_summary() -> Self {
        Self { show_summary: Some(true), ..Self::default() }
    }

    #[must_use]
    pub fn reveal_bullets(count: usize) -> Self {
        Self { visible_bullets: Some(count), ..Self::default() }
    }

    #[must_use]
    pub fn complete(content: impl Into<String>) -> Self {
        Self { content: Some(content.into()), is_loading: Some(false), ..Self::default() }
    }
}
