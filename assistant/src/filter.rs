//! Tab and free-text filtering for list views.
//!
//! DESIGN
//! ======
//! A query is first tried as a case-insensitive regular expression. Patterns
//! that do not compile (an unmatched `(` typed mid-search) degrade to plain
//! substring matching, so filtering never fails.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use regex::{Regex, RegexBuilder};

use crate::catalog::{Workflow, WorkflowKind};

/// Maximum cards in the workflow grid.
pub const WORKFLOW_DISPLAY_LIMIT: usize = 16;

/// Compiled free-text query.
#[derive(Clone, Debug)]
pub enum QueryMatcher {
    Any,
    Pattern(Regex),
    Substring(String),
}

impl QueryMatcher {
    #[must_use]
    pub fn new(query: &str) -> Self {
        if query.trim().is_empty() {
            return Self::Any;
        }
        match RegexBuilder::new(query).case_insensitive(true).build() {
            Ok(regex) => Self::Pattern(regex),
            Err(err) => {
                tracing::debug!(query, error = %err, "query is not a valid pattern; using substring match");
                Self::Substring(query.to_lowercase())
            }
        }
    }

    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Pattern(regex) => regex.is_match(text),
            Self::Substring(needle) => text.to_lowercase().contains(needle.as_str()),
        }
    }

    /// True when any of `fields` matches.
    #[must_use]
    pub fn matches_any(&self, fields: &[&str]) -> bool {
        fields.iter().any(|f| self.is_match(f))
    }
}

/// Homepage workflow tab.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WorkflowTab {
    #[default]
    Recommended,
    Kind(WorkflowKind),
}

impl WorkflowTab {
    pub const ALL: [Self; 4] = [
        Self::Recommended,
        Self::Kind(WorkflowKind::Draft),
        Self::Kind(WorkflowKind::Output),
        Self::Kind(WorkflowKind::Review),
    ];

    /// Parse a tab key case-insensitively; unknown keys yield `None`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        if key.eq_ignore_ascii_case("recommended") {
            return Some(Self::Recommended);
        }
        WorkflowKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(key))
            .map(Self::Kind)
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Recommended => "recommended",
            Self::Kind(WorkflowKind::Draft) => "draft",
            Self::Kind(WorkflowKind::Output) => "output",
            Self::Kind(WorkflowKind::Review) => "review",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Recommended => "Recommended",
            Self::Kind(kind) => kind.as_str(),
        }
    }

    #[must_use]
    pub fn includes(self, workflow: &Workflow) -> bool {
        match self {
            Self::Recommended => true,
            Self::Kind(kind) => workflow.kind == kind,
        }
    }
}

/// Workflows passing the tab and query, uncapped.
#[must_use]
pub fn matching_workflows<'a>(items: &'a [Workflow], tab: WorkflowTab, query: &str) -> Vec<&'a Workflow> {
    let matcher = QueryMatcher::new(query);
    items
        .iter()
        .filter(|w| tab.includes(w) && matcher.matches_any(&[&w.title, &w.description]))
        .collect()
}

/// Workflows shown in the grid: [`matching_workflows`] capped at
/// [`WORKFLOW_DISPLAY_LIMIT`].
#[must_use]
pub fn filter_workflows<'a>(items: &'a [Workflow], tab: WorkflowTab, query: &str) -> Vec<&'a Workflow> {
    let mut shown = matching_workflows(items, tab, query);
    shown.truncate(WORKFLOW_DISPLAY_LIMIT);
    shown
}
