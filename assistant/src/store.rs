//! Chat thread store: creation, selection and mutation of threads.
//!
//! DESIGN
//! ======
//! The store is the single source of truth for the active-thread pointer.
//! Threads sit behind `Arc` so every mutation swaps in a fresh thread value
//! while untouched threads are shared, and a revision counter lets reactive
//! layers detect change cheaply.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::Arc;

use crate::error::{AssistantError, Result};
use crate::message::{Message, MessagePatch, Role};
use crate::thread::{Thread, ThreadId, derive_title};

/// In-memory collection of conversation threads.
#[derive(Clone, Debug, Default)]
pub struct ThreadStore {
    threads: Vec<Arc<Thread>>,
    active_id: Option<ThreadId>,
    revision: u64,
}

impl ThreadStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an empty thread and make it active.
    pub fn create_thread(&mut self, now_ms: u64) -> ThreadId {
        let mut attempt = 0;
        let mut id = ThreadId::from_time(now_ms, attempt);
        while self.contains(&id) {
            attempt += 1;
            id = ThreadId::from_time(now_ms, attempt);
        }
        tracing::debug!(thread_id = %id, "thread created");
        self.threads.push(Arc::new(Thread::new(id.clone())));
        self.active_id = Some(id.clone());
        self.bump();
        id
    }

    /// Active thread id, creating a thread first when none is active.
    pub fn ensure_active_thread(&mut self, now_ms: u64) -> ThreadId {
        match &self.active_id {
            Some(id) => id.clone(),
            None => self.create_thread(now_ms),
        }
    }

    /// Point the store at an existing thread.
    ///
    /// # Errors
    ///
    /// Returns [`AssistantError::UnknownThread`] when `id` is not in the
    /// store; the active pointer is left unchanged.
    pub fn select_thread(&mut self, id: &ThreadId) -> Result<()> {
        if !self.contains(id) {
            tracing::warn!(thread_id = %id, "select of unknown thread ignored");
            return Err(AssistantError::UnknownThread(id.clone()));
        }
        if self.active_id.as_ref() == Some(id) {
            return Ok(());
        }
        self.active_id = Some(id.clone());
        self.bump();
        Ok(())
    }

    /// Append messages in order. The first message of a thread names it
    /// after the first user text.
    ///
    /// # Errors
    ///
    /// Returns [`AssistantError::UnknownThread`] for a missing thread.
    pub fn append_messages(&mut self, id: &ThreadId, messages: Vec<Message>) -> Result<()> {
        if messages.is_empty() {
            return Ok(());
        }
        self.modify(id, |thread| {
            if thread.messages.is_empty()
                && let Some(first_user) = messages.iter().find(|m| m.role == Role::User)
            {
                thread.title = derive_title(&first_user.content);
            }
            thread.messages.extend(messages);
            Ok(())
        })
    }

    /// Merge a patch into the message at `index`.
    ///
    /// # Errors
    ///
    /// Fails for unknown threads, out-of-range indexes and user messages.
    pub fn update_message_at(&mut self, id: &ThreadId, index: usize, patch: &MessagePatch) -> Result<()> {
        self.modify(id, |thread| {
            let len = thread.messages.len();
            let Some(message) = thread.messages.get_mut(index) else {
                return Err(AssistantError::MessageIndexOutOfRange { thread_id: thread.id.clone(), index, len });
            };
            if message.role == Role::User {
                return Err(AssistantError::ImmutableMessage { thread_id: thread.id.clone(), index });
            }
            message.apply(patch);
            Ok(())
        })
    }

    /// Set the thread-level loading flag.
    ///
    /// # Errors
    ///
    /// Returns [`AssistantError::UnknownThread`] for a missing thread.
    pub fn set_loading(&mut self, id: &ThreadId, loading: bool) -> Result<()> {
        if self.get(id).is_some_and(|t| t.is_loading == loading) {
            return Ok(());
        }
        self.modify(id, |thread| {
            thread.is_loading = loading;
            Ok(())
        })
    }

    #[must_use]
    pub fn threads(&self) -> &[Arc<Thread>] {
        &self.threads
    }

    #[must_use]
    pub fn get(&self, id: &ThreadId) -> Option<&Arc<Thread>> {
        self.threads.iter().find(|t| &t.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &ThreadId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn active_id(&self) -> Option<&ThreadId> {
        self.active_id.as_ref()
    }

    #[must_use]
    pub fn active_thread(&self) -> Option<&Arc<Thread>> {
        self.active_id.as_ref().and_then(|id| self.get(id))
    }

    /// True once any thread exists; the chat panel leaves its zero state.
    #[must_use]
    pub fn is_in_chat_mode(&self) -> bool {
        !self.threads.is_empty()
    }

    #[must_use]
    pub fn is_active_loading(&self) -> bool {
        self.active_thread().is_some_and(|t| t.is_loading)
    }

    /// Monotonic counter bumped on every mutation.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn modify<F>(&mut self, id: &ThreadId, f: F) -> Result<()>
    where
        F: FnOnce(&mut Thread) -> Result<()>,
    {
        let Some(slot) = self.threads.iter_mut().find(|t| &t.id == id) else {
            return Err(AssistantError::UnknownThread(id.clone()));
        };
        let mut next = Thread::clone(&**slot);
        f(&mut next)?;
        *slot = Arc::new(next);
        self.bump();
        Ok(())
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
