//! Monotonic millisecond clock abstraction.
//!
//! The response pipeline and text loop are driven by explicit `now_ms`
//! inputs. Callers that prefer an injected source use [`Clock`]; the browser
//! client implements it over `Date.now()`, tests use [`ManualClock`].

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use std::cell::Cell;

/// Source of the current time in milliseconds.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Hand-advanced clock for deterministic tests and previews.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    #[must_use]
    pub fn starting_at(ms: u64) -> Self {
        Self { now: Cell::new(ms) }
    }

    /// Move time forward by `ms`.
    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get().saturating_add(ms));
    }

    /// Jump to an absolute time. Earlier values are ignored to stay monotonic.
    pub fn set(&self, ms: u64) {
        if ms > self.now.get() {
            self.now.set(ms);
        }
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}
