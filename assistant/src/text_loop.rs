//! Rotating placeholder text.

#[cfg(test)]
#[path = "text_loop_test.rs"]
mod text_loop_test;

pub const DEFAULT_INTERVAL_MS: u64 = 3_000;

/// Placeholder prompts cycled in the homepage composer.
pub const HOMEPAGE_PLACEHOLDERS: [&str; 5] = [
    "Research IP infringement cases…",
    "Draft deposition questions for fraud case…",
    "Draft an S-1 shell…",
    "Extract key clauses from contract…",
    "Draft a memo on new SEC rules…",
];

/// Cycles through `len` items, one step per interval, wrapping at the end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextLoop {
    len: usize,
    index: usize,
    interval_ms: u64,
}

impl TextLoop {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self::with_interval(len, DEFAULT_INTERVAL_MS)
    }

    #[must_use]
    pub fn with_interval(len: usize, interval_ms: u64) -> Self {
        Self { len, index: 0, interval_ms: interval_ms.max(1) }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Step to the next item. Loops of zero or one item never move.
    pub fn tick(&mut self) -> usize {
        if self.len > 1 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    /// Index shown `elapsed_ms` after the loop started.
    #[must_use]
    pub fn index_at(&self, elapsed_ms: u64) -> usize {
        if self.len == 0 {
            return 0;
        }
        let steps = elapsed_ms / self.interval_ms;
        usize::try_from(steps % self.len as u64).unwrap_or(0)
    }
}
