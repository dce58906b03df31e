//! Route contract between the homepage and chat pages, plus the session
//! flags handed across that navigation.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use std::collections::HashMap;

/// Maximum slug length in characters.
pub const SLUG_MAX_CHARS: usize = 50;
pub const FROM_HOMEPAGE_KEY: &str = "fromAssistantHomepage";
pub const WORKFLOW_INITIATED_KEY: &str = "isWorkflowInitiated";
pub const INITIAL_MESSAGE_PARAM: &str = "initialMessage";
pub const IS_WORKFLOW_PARAM: &str = "isWorkflow";

/// URL path segment for a chat started from `text`: lowercase, characters
/// outside `[a-z0-9]`, whitespace and `-` removed, whitespace runs turned
/// into one hyphen, cut to [`SLUG_MAX_CHARS`].
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut in_space = false;
    for c in text.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('-');
                in_space = true;
            }
            continue;
        }
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
            slug.push(c);
            in_space = false;
        }
    }
    // ASCII only from here, so byte length is char length.
    slug.truncate(SLUG_MAX_CHARS);
    slug
}

/// Path and query for the chat page seeded with `text`.
#[must_use]
pub fn chat_route(text: &str, is_workflow: bool) -> String {
    let mut route = format!(
        "/assistant/{}?{INITIAL_MESSAGE_PARAM}={}",
        slugify(text),
        urlencoding::encode(text)
    );
    if is_workflow {
        route.push('&');
        route.push_str(IS_WORKFLOW_PARAM);
        route.push_str("=true");
    }
    route
}

/// Path of a vault project page.
#[must_use]
pub fn vault_project_route(id: &str, name: &str) -> String {
    format!("/vault/project/{}?name={}", urlencoding::encode(id), urlencoding::encode(name))
}

/// Session-scoped string store, such as `window.sessionStorage`.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// In-memory [`SessionStore`] for tests and server rendering.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    entries: HashMap<String, String>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Flags passed from the homepage to the chat page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Handoff {
    pub from_homepage: bool,
    pub workflow_initiated: bool,
}

/// Record that a chat is being opened from the homepage.
pub fn write_handoff(store: &mut impl SessionStore, is_workflow: bool) {
    store.set(FROM_HOMEPAGE_KEY, "true");
    if is_workflow {
        store.set(WORKFLOW_INITIATED_KEY, "true");
    }
}

/// Read the handoff flags and clear them so they apply once.
pub fn take_handoff(store: &mut impl SessionStore) -> Handoff {
    Handoff {
        from_homepage: take_flag(store, FROM_HOMEPAGE_KEY),
        workflow_initiated: take_flag(store, WORKFLOW_INITIATED_KEY),
    }
}

fn take_flag(store: &mut impl SessionStore, key: &str) -> bool {
    let value = store.get(key).is_some_and(|v| v == "true");
    store.remove(key);
    value
}

/// Query parameters understood by the chat page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatParams {
    pub initial_message: Option<String>,
    pub is_workflow: bool,
}

impl ChatParams {
    /// Build from raw, already-decoded query values.
    #[must_use]
    pub fn from_query(initial_message: Option<String>, is_workflow: Option<&str>) -> Self {
        Self {
            initial_message: initial_message.filter(|m| !m.trim().is_empty()),
            is_workflow: is_workflow == Some("true"),
        }
    }
}
