//! Chat surface state: conversation, composer draft and scroll flags.
//!
//! DESIGN
//! ======
//! Wraps `assistant::conversation::Conversation` so pages drive threads and
//! reply pipelines through one reactive value. The composer draft and the
//! scroll metrics live in sibling signals ([`ChatSignals`]): typing and
//! scrolling must not wake views that read the conversation. Timer and DOM
//! glue lives in `util`; this module stays browser free so it can be unit
//! tested.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use assistant::conversation::{Conversation, SendOutcome, Transition};
use assistant::message::Message;
use assistant::scroll::ChatScrollMetrics;
use assistant::thread::ThreadId;
use leptos::prelude::*;

/// One entry of the thread tab strip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThreadTab {
    pub id: ThreadId,
    pub label: String,
    pub title: String,
    pub active: bool,
}

/// Key of one rendered message row. Switching threads remounts the list.
pub type MessageKey = (ThreadId, usize);

#[derive(Clone, Debug)]
pub struct ChatState {
    pub conversation: Conversation,
    /// Generation of the timer task stepping reply pipelines. Older tasks
    /// exit once it moves on.
    pub driver_epoch: u64,
    /// Bumped whenever the message list should snap to the bottom.
    pub scroll_seq: u64,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            conversation: Conversation::new(),
            driver_epoch: 0,
            scroll_seq: 0,
        }
    }
}

impl ChatState {
    /// Tab strip entries in creation order.
    pub fn tabs(&self) -> Vec<ThreadTab> {
        let store = self.conversation.store();
        let active = store.active_id();
        store
            .threads()
            .iter()
            .map(|thread| ThreadTab {
                id: thread.id.clone(),
                label: thread.tab_label(),
                title: thread.title.clone(),
                active: active == Some(&thread.id),
            })
            .collect()
    }

    /// Messages of the active thread.
    pub fn messages(&self) -> Vec<Message> {
        self.conversation.store().active_thread().map(|t| t.messages.clone()).unwrap_or_default()
    }

    /// Row keys of the active thread, in message order.
    pub fn message_keys(&self) -> Vec<MessageKey> {
        self.conversation
            .store()
            .active_thread()
            .map(|t| (0..t.messages.len()).map(|index| (t.id.clone(), index)).collect())
            .unwrap_or_default()
    }

    pub fn message_at(&self, key: &MessageKey) -> Option<Message> {
        self.conversation.store().get(&key.0).and_then(|t| t.messages.get(key.1).cloned())
    }

    /// `Some(loading)` when the row shows a thinking block. A row keeps its
    /// block (and its open state) until this value changes.
    pub fn thinking_phase(&self, key: &MessageKey) -> Option<bool> {
        let thread = self.conversation.store().get(&key.0)?;
        let message = thread.messages.get(key.1)?;
        (message.show_thinking != Some(false) && message.thinking.is_some()).then_some(message.is_loading)
    }

    pub fn is_loading(&self) -> bool {
        self.conversation.store().is_active_loading()
    }

    pub fn is_in_chat_mode(&self) -> bool {
        self.conversation.store().is_in_chat_mode()
    }

    /// Send text from the composer, a suggestion prompt or the initial
    /// message from the route. A started reply pins the view to the bottom.
    ///
    /// # Errors
    ///
    /// Propagates store errors from [`Conversation::send`].
    pub fn send(&mut self, text: &str, now_ms: u64) -> assistant::Result<SendOutcome> {
        let outcome = self.conversation.send(text, now_ms)?;
        if matches!(outcome, SendOutcome::Started { .. }) {
            self.scroll_seq += 1;
        }
        Ok(outcome)
    }

    /// Apply due pipeline steps. The view follows only when the reader was
    /// already near the bottom.
    pub fn advance(&mut self, now_ms: u64, near_bottom: bool) -> Vec<Transition> {
        let transitions = self.conversation.advance(now_ms);
        if !transitions.is_empty() && near_bottom {
            self.scroll_seq += 1;
        }
        transitions
    }

    pub fn new_thread(&mut self, now_ms: u64) -> ThreadId {
        self.conversation.new_thread(now_ms)
    }

    /// # Errors
    ///
    /// Returns `UnknownThread` for ids not in the store.
    pub fn select_thread(&mut self, id: &ThreadId) -> assistant::Result<()> {
        self.conversation.select_thread(id)
    }

    /// Claim a new driver generation.
    pub fn next_driver_epoch(&mut self) -> u64 {
        self.driver_epoch += 1;
        self.driver_epoch
    }

    /// Stop all reply pipelines and their timer task, settling placeholders.
    pub fn shutdown(&mut self) -> usize {
        self.driver_epoch += 1;
        self.conversation.cancel_all()
    }
}

/// Reactive handles for one chat surface, provided as page context.
#[derive(Clone, Copy, Debug)]
pub struct ChatSignals {
    pub chat: RwSignal<ChatState>,
    pub draft: RwSignal<String>,
    pub metrics: RwSignal<ChatScrollMetrics>,
}

impl Default for ChatSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSignals {
    pub fn new() -> Self {
        Self {
            chat: RwSignal::new(ChatState::default()),
            draft: RwSignal::new(String::new()),
            metrics: RwSignal::new(ChatScrollMetrics { near_bottom: true, ..ChatScrollMetrics::default() }),
        }
    }

    /// Changes only when the message list should snap to the bottom.
    pub fn scroll_trigger(self) -> Memo<u64> {
        let chat = self.chat;
        Memo::new(move |_| chat.with(|c| c.scroll_seq))
    }

    pub fn near_bottom_untracked(self) -> bool {
        self.metrics.try_with_untracked(|m| m.near_bottom).unwrap_or(true)
    }
}
