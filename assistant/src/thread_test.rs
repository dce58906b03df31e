use super::*;
use crate::message::ThinkingContent;

#[test]
fn short_titles_are_unchanged() {
    assert_eq!(derive_title("Add columns for dates"), "Add columns for dates");
    let exactly_forty = "a".repeat(40);
    assert_eq!(derive_title(&exactly_forty), exactly_forty);
}

#[test]
fn long_titles_keep_forty_chars_plus_ellipsis() {
    let text = "Compare terms across all documents and highlight differences";
    let title = derive_title(text);
    assert_eq!(title, format!("{}...", &text[..40]));
    assert_eq!(title.chars().count(), 43);
}

#[test]
fn truncation_respects_char_boundaries() {
    let text = "é".repeat(41);
    let title = derive_title(&text);
    assert_eq!(title, format!("{}...", "é".repeat(40)));
}

#[test]
fn tab_label_truncates_to_twenty_five() {
    let mut thread = Thread::new(ThreadId::from("chat-1"));
    assert_eq!(thread.tab_label(), "Untitled");
    thread.title = "Extract key clauses from all uploaded".to_owned();
    assert_eq!(thread.tab_label(), "Extract key clauses from ...");
    thread.title.clear();
    assert_eq!(thread.tab_label(), "Untitled");
}

#[test]
fn thread_id_formats_with_attempt_suffix() {
    assert_eq!(ThreadId::from_time(42, 0).as_str(), "chat-42");
    assert_eq!(ThreadId::from_time(42, 2).to_string(), "chat-42-2");
}

#[test]
fn pending_assistant_index_only_for_trailing_loading_reply() {
    let mut thread = Thread::new(ThreadId::from("chat-1"));
    assert_eq!(thread.pending_assistant_index(), None);
    thread.messages.push(Message::user("hi"));
    assert_eq!(thread.pending_assistant_index(), None);
    thread.messages.push(Message::assistant_placeholder(ThinkingContent {
        summary: String::new(),
        bullets: Vec::new(),
    }));
    assert_eq!(thread.pending_assistant_index(), Some(1));
}
