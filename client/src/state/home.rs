//! Assistant homepage state: composer, workflow filters and scroll reveal.
//!
//! SYSTEM CONTEXT
//! ==============
//! The homepage never runs a conversation itself. Sending, or clicking a
//! workflow card, navigates to `/assistant/<slug>` and leaves handoff flags
//! in session storage for the thread page to pick up.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use assistant::catalog::Workflow;
use assistant::filter::{WorkflowTab, filter_workflows, matching_workflows};
use assistant::scroll::{CardReveal, DEFAULT_MAX_SCROLL, RevealConfig, card_reveal, scroll_hint_visible, scroll_progress};

#[derive(Clone, Debug, Default)]
pub struct HomeState {
    pub composer: String,
    pub tab: WorkflowTab,
    pub query: String,
    pub top_min_height: f64,
    /// Set once a navigation is under way; further sends are ignored.
    pub navigating: bool,
}

/// Scroll-driven card reveal. Held in its own signal so scroll frames only
/// restyle cards and never re-filter the catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollReveal {
    pub progress: f64,
    pub reveal: RevealConfig,
}

impl ScrollReveal {
    pub fn card_style(&self, index: usize) -> CardReveal {
        card_reveal(index, self.progress, &self.reveal)
    }

    /// `total` is the number of workflows matching the current filters.
    pub fn show_scroll_hint(&self, total: usize) -> bool {
        scroll_hint_visible(total, self.progress, &self.reveal)
    }

    /// Returns whether the progress moved.
    pub fn set_scroll_top(&mut self, scroll_top: f64) -> bool {
        let progress = scroll_progress(scroll_top, DEFAULT_MAX_SCROLL);
        if (progress - self.progress).abs() < f64::EPSILON {
            return false;
        }
        self.progress = progress;
        true
    }
}

impl HomeState {
    /// Cards to render, capped for the grid.
    pub fn visible<'a>(&self, catalog: &'a [Workflow]) -> Vec<&'a Workflow> {
        filter_workflows(catalog, self.tab, &self.query)
    }

    pub fn matching_count(&self, catalog: &[Workflow]) -> usize {
        matching_workflows(catalog, self.tab, &self.query).len()
    }

    /// Switch tabs by key. Unknown keys are ignored.
    pub fn select_tab(&mut self, key: &str) -> bool {
        match WorkflowTab::from_key(key) {
            Some(tab) => {
                self.tab = tab;
                true
            }
            None => false,
        }
    }

    /// Text to send, or `None` when the composer is blank or a navigation
    /// already started.
    pub fn begin_send(&mut self) -> Option<String> {
        if self.navigating || self.composer.trim().is_empty() {
            return None;
        }
        self.navigating = true;
        Some(self.composer.clone())
    }

    /// Claim the navigation for a workflow launch.
    pub fn begin_workflow(&mut self) -> bool {
        if self.navigating {
            return false;
        }
        self.navigating = true;
        true
    }
}

/// CSS for a card's reveal transform.
pub fn card_style_css(reveal: CardReveal) -> String {
    format!(
        "opacity: {:.3}; transform: translateY({:.1}px); transition-delay: {}ms;",
        reveal.opacity, reveal.translate_y_px, reveal.transition_delay_ms
    )
}
