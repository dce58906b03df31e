//! Error type shared by the store, record validation and dataset parsing.

use crate::thread::ThreadId;

/// Errors surfaced by core operations.
///
/// Nothing here performs I/O; these cover caller mistakes (unknown ids,
/// bad indexes) and malformed reference data.
#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    /// No thread with this id exists in the store.
    #[error("unknown thread: {0}")]
    UnknownThread(ThreadId),
    /// A message index past the end of the thread.
    #[error("message index {index} out of range for thread {thread_id} ({len} messages)")]
    MessageIndexOutOfRange { thread_id: ThreadId, index: usize, len: usize },
    /// Patches may only target assistant messages.
    #[error("message {index} in thread {thread_id} is a user message and cannot be patched")]
    ImmutableMessage { thread_id: ThreadId, index: usize },
    /// A reference record failed validation.
    #[error("invalid {record} record: {reason}")]
    InvalidRecord { record: &'static str, reason: String },
    /// A dataset asset is not valid JSON for the expected shape.
    #[error("failed to parse dataset: {0}")]
    Dataset(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AssistantError>;

impl AssistantError {
    pub(crate) fn invalid(record: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidRecord { record, reason: reason.into() }
    }
}
