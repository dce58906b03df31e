//! Simulated response pipeline as a time-driven state machine.
//!
//! DESIGN
//! ======
//! A reply is a fixed schedule of steps keyed to the send time T0: reveal
//! the summary, reveal each bullet, then complete with the canned text.
//! Steps fire when the caller advances the clock past their due time, so the
//! same sequence runs identically under browser timers and in tests.

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::message::MessagePatch;
use crate::thread::ThreadId;

/// Delays, relative to the send, for each reveal step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PipelineTimings {
    pub summary_ms: u64,
    pub first_bullet_ms: u64,
    pub bullet_interval_ms: u64,
    pub complete_ms: u64,
}

impl Default for PipelineTimings {
    fn default() -> Self {
        Self { summary_ms: 600, first_bullet_ms: 1_000, bullet_interval_ms: 400, complete_ms: 2_500 }
    }
}

/// One state transition of the reveal sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStep {
    RevealSummary,
    /// Zero-based bullet index; reveals `index + 1` bullets.
    RevealBullet(usize),
    Complete,
}

impl PipelineStep {
    /// Patch applied to the pending assistant message for this step.
    #[must_use]
    pub fn patch(self, response: &str) -> MessagePatch {
        match self {
            Self::RevealSummary => MessagePatch::reveal_summary(),
            Self::RevealBullet(index) => MessagePatch::reveal_bullets(index + 1),
            Self::Complete => MessagePatch::complete(response),
        }
    }
}

/// A step with its offset from the pipeline start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledStep {
    pub offset_ms: u64,
    pub step: PipelineStep,
}

/// Full step schedule for a reply with `bullet_count` bullets, ordered by
/// offset. Equal offsets keep declaration order (summary, bullets, complete).
#[must_use]
pub fn schedule(timings: &PipelineTimings, bullet_count: usize) -> Vec<ScheduledStep> {
    let mut steps = Vec::with_capacity(bullet_count + 2);
    steps.push(ScheduledStep { offset_ms: timings.summary_ms, step: PipelineStep::RevealSummary });
    let mut offset = timings.first_bullet_ms;
    for index in 0..bullet_count {
        steps.push(ScheduledStep { offset_ms: offset, step: PipelineStep::RevealBullet(index) });
        offset = offset.saturating_add(timings.bullet_interval_ms);
    }
    steps.push(ScheduledStep { offset_ms: timings.complete_ms, step: PipelineStep::Complete });
    steps.sort_by_key(|s| s.offset_ms);
    steps
}

/// Shared cancellation flag for one pipeline run.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Identifier of a pipeline run, unique within a conversation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PipelineId(pub u64);

/// A reply being revealed for one thread.
#[derive(Clone, Debug)]
pub struct ResponsePipeline {
    id: PipelineId,
    thread_id: ThreadId,
    started_at_ms: u64,
    steps: Vec<ScheduledStep>,
    next: usize,
    response: String,
    token: CancelToken,
}

impl ResponsePipeline {
    #[must_use]
    pub fn new(
        id: PipelineId,
        thread_id: ThreadId,
        started_at_ms: u64,
        timings: &PipelineTimings,
        bullet_count: usize,
        response: String,
    ) -> Self {
        Self {
            id,
            thread_id,
            started_at_ms,
            steps: schedule(timings, bullet_count),
            next: 0,
            response,
            token: CancelToken::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PipelineId {
        self.id
    }

    #[must_use]
    pub fn thread_id(&self) -> &ThreadId {
        &self.thread_id
    }

    #[must_use]
    pub fn response(&self) -> &str {
        &self.response
    }

    #[must_use]
    pub fn token(&self) -> &CancelToken {
        &self.token
    }

    /// Absolute due time of the next step, or `None` once finished or
    /// cancelled.
    #[must_use]
    pub fn next_due_at(&self) -> Option<u64> {
        if self.token.is_cancelled() {
            return None;
        }
        self.steps
            .get(self.next)
            .map(|s| self.started_at_ms.saturating_add(s.offset_ms))
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.next_due_at().is_none()
    }

    /// Take the next step if it is due at `now_ms`.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<(u64, PipelineStep)> {
        let due_at = self.next_due_at().filter(|due| *due <= now_ms)?;
        let step = self.steps[self.next].step;
        self.next += 1;
        Some((due_at, step))
    }
}
