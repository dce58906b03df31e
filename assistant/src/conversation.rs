//! Chat conversation driver: thread store plus in-flight reply pipelines.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client owns one `Conversation` per chat surface. Sends append the user
//! message and a loading placeholder, then register a pipeline; a single
//! timer chain calls [`Conversation::advance`] at [`Conversation::next_deadline`]
//! and re-renders from the returned transitions.
//!
//! ORDERING
//! ========
//! Due steps across pipelines are applied in due-time order. Ties break by
//! pipeline start order, then by step order within a pipeline.

#[cfg(test)]
#[path = "conversation_test.rs"]
mod conversation_test;

use crate::error::Result;
use crate::message::{Message, MessagePatch};
use crate::pipeline::{PipelineId, PipelineStep, PipelineTimings, ResponsePipeline};
use crate::responses;
use crate::store::ThreadStore;
use crate::thread::ThreadId;

/// Why a send did nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    EmptyInput,
    ThreadBusy,
}

/// Result of [`Conversation::send`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    Started { thread_id: ThreadId, pipeline_id: PipelineId },
    Ignored(IgnoreReason),
}

/// A pipeline step that was applied to the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub pipeline_id: PipelineId,
    pub thread_id: ThreadId,
    pub step: PipelineStep,
    pub due_at_ms: u64,
}

#[derive(Clone, Debug, Default)]
pub struct Conversation {
    store: ThreadStore,
    pipelines: Vec<ResponsePipeline>,
    timings: PipelineTimings,
    next_pipeline: u64,
}

impl Conversation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timings(timings: PipelineTimings) -> Self {
        Self { timings, ..Self::default() }
    }

    #[must_use]
    pub fn store(&self) -> &ThreadStore {
        &self.store
    }

    /// Start a fresh thread and make it active.
    pub fn new_thread(&mut self, now_ms: u64) -> ThreadId {
        self.store.create_thread(now_ms)
    }

    /// # Errors
    ///
    /// Propagates [`crate::AssistantError::UnknownThread`].
    pub fn select_thread(&mut self, id: &ThreadId) -> Result<()> {
        self.store.select_thread(id)
    }

    /// Submit user text to the active thread, creating one if needed.
    ///
    /// # Errors
    ///
    /// Only fails if the store rejects a mutation on the thread it just
    /// resolved, which indicates a broken store invariant.
    pub fn send(&mut self, text: &str, now_ms: u64) -> Result<SendOutcome> {
        if text.trim().is_empty() {
            return Ok(SendOutcome::Ignored(IgnoreReason::EmptyInput));
        }
        if self.store.is_active_loading() {
            tracing::debug!("send ignored while active thread is loading");
            return Ok(SendOutcome::Ignored(IgnoreReason::ThreadBusy));
        }

        let thread_id = self.store.ensure_active_thread(now_ms);
        let thinking = responses::thinking_content();
        let bullet_count = thinking.bullets.len();
        self.store
            .append_messages(&thread_id, vec![Message::user(text), Message::assistant_placeholder(thinking)])?;
        self.store.set_loading(&thread_id, true)?;

        self.next_pipeline += 1;
        let pipeline_id = PipelineId(self.next_pipeline);
        self.pipelines.push(ResponsePipeline::new(
            pipeline_id,
            thread_id.clone(),
            now_ms,
            &self.timings,
            bullet_count,
            responses::review_response(text),
        ));
        tracing::debug!(thread_id = %thread_id, pipeline = pipeline_id.0, "response pipeline started");
        Ok(SendOutcome::Started { thread_id, pipeline_id })
    }

    /// Apply every step due at or before `now_ms`.
    pub fn advance(&mut self, now_ms: u64) -> Vec<Transition> {
        let mut applied = Vec::new();
        loop {
            let next = self
                .pipelines
                .iter()
                .enumerate()
                .filter_map(|(i, p)| p.next_due_at().filter(|due| *due <= now_ms).map(|due| (due, i)))
                .min();
            let Some((_, index)) = next else {
                break;
            };
            let pipeline = &mut self.pipelines[index];
            let Some((due_at_ms, step)) = pipeline.pop_due(now_ms) else {
                break;
            };
            let pipeline_id = pipeline.id();
            let thread_id = pipeline.thread_id().clone();
            let patch = step.patch(pipeline.response());
            if self.apply_step(&thread_id, step, &patch) {
                applied.push(Transition { pipeline_id, thread_id, step, due_at_ms });
            }
        }
        self.pipelines.retain(|p| !p.is_finished());
        applied
    }

    /// Earliest pending due time across live pipelines.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.pipelines.iter().filter_map(ResponsePipeline::next_due_at).min()
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.next_deadline().is_some()
    }

    /// Stop the pipelines of one thread and settle its placeholder.
    pub fn cancel_thread(&mut self, id: &ThreadId) -> usize {
        let mut cancelled = 0;
        for pipeline in self.pipelines.iter().filter(|p| p.thread_id() == id) {
            pipeline.token().cancel();
            cancelled += 1;
        }
        self.pipelines.retain(|p| !p.is_finished());
        if cancelled > 0 {
            self.settle(id);
            tracing::debug!(thread_id = %id, cancelled, "response pipelines cancelled");
        }
        cancelled
    }

    /// Stop every pipeline, typically on unmount.
    pub fn cancel_all(&mut self) -> usize {
        let ids: Vec<ThreadId> = self.pipelines.iter().map(|p| p.thread_id().clone()).collect();
        let mut cancelled = 0;
        for id in &ids {
            cancelled += self.cancel_thread(id);
        }
        cancelled
    }

    fn apply_step(&mut self, thread_id: &ThreadId, step: PipelineStep, patch: &MessagePatch) -> bool {
        let Some(index) = self.store.get(thread_id).and_then(|t| t.pending_assistant_index()) else {
            if step == PipelineStep::Complete {
                self.clear_loading(thread_id);
            }
            return false;
        };
        if let Err(err) = self.store.update_message_at(thread_id, index, patch) {
            tracing::warn!(thread_id = %thread_id, error = %err, "pipeline step rejected");
            return false;
        }
        if step == PipelineStep::Complete {
            self.clear_loading(thread_id);
        }
        true
    }

    fn settle(&mut self, thread_id: &ThreadId) {
        if let Some(index) = self.store.get(thread_id).and_then(|t| t.pending_assistant_index()) {
            let patch = MessagePatch { is_loading: Some(false), ..MessagePatch::default() };
            if let Err(err) = self.store.update_message_at(thread_id, index, &patch) {
                tracing::warn!(thread_id = %thread_id, error = %err, "placeholder settle rejected");
            }
        }
        self.clear_loading(thread_id);
    }

    fn clear_loading(&mut self, thread_id: &ThreadId) {
        if let Err(err) = self.store.set_loading(thread_id, false) {
            tracing::warn!(thread_id = %thread_id, error = %err, "loading flag not cleared");
        }
    }
}
