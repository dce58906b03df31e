//! Timer tasks for simulated replies, dialog delays and rotating text.
//!
//! SYSTEM CONTEXT
//! ==============
//! Core models take `now_ms` explicitly and report their next deadline. The
//! tasks here sleep until that deadline with `gloo_timers`, apply the due
//! work and repeat. Each task checks a page-scoped `alive` flag after every
//! sleep so nothing touches state after the owning view unmounts.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::state::chat::{ChatSignals, ChatState};

/// Page-scoped liveness flag shared with timer tasks.
#[derive(Clone, Debug)]
pub struct Alive(Arc<AtomicBool>);

impl Default for Alive {
    fn default() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }
}

impl Alive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn kill(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

/// (Re)start the task that steps reply pipelines. Starting a new task
/// retires the previous one, so a send on another thread is picked up
/// without waiting for an earlier deadline.
pub fn drive_conversation(signals: ChatSignals, alive: Alive) {
    let chat = signals.chat;
    let Some(epoch) = chat.try_update_untracked(ChatState::next_driver_epoch) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    {
        let current = move || alive.is_alive() && chat.try_with_untracked(|c| c.driver_epoch == epoch).unwrap_or(false);
        leptos::task::spawn_local(async move {
            loop {
                if !current() {
                    return;
                }
                let Some(deadline) = chat.try_with_untracked(|c| c.conversation.next_deadline()).flatten() else {
                    return;
                };
                sleep_until(deadline).await;
                if !current() {
                    return;
                }
                let near_bottom = signals.near_bottom_untracked();
                chat.try_update(|c| {
                    let applied = c.advance(super::clock::now_ms(), near_bottom);
                    log::debug!("applied {} pipeline steps", applied.len());
                });
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (alive, epoch);
    }
}

/// Run `f` once after `delay_ms`, unless the page is gone by then.
pub fn after(delay_ms: u64, alive: Alive, f: impl FnOnce() + 'static) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(delay_ms)).await;
            if alive.is_alive() {
                f();
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (delay_ms, alive, f);
    }
}

/// Run `f` every `interval_ms` until the page is gone.
pub fn every(interval_ms: u64, alive: Alive, mut f: impl FnMut() + 'static) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(interval_ms)).await;
                if !alive.is_alive() {
                    return;
                }
                f();
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (interval_ms, alive, &mut f);
    }
}

#[cfg(feature = "hydrate")]
async fn sleep_until(deadline_ms: u64) {
    let wait = deadline_ms.saturating_sub(super::clock::now_ms());
    if wait > 0 {
        gloo_timers::future::sleep(std::time::Duration::from_millis(wait)).await;
    }
}
