use super::*;

fn thinking() -> ThinkingContent {
    ThinkingContent {
        summary: "Summary".to_owned(),
        bullets: vec!["one".to_owned(), "two".to_owned(), "three".to_owned()],
    }
}

#[test]
fn placeholder_starts_hidden_and_loading() {
    let msg = Message::assistant_placeholder(thinking());
    assert!(msg.is_pending_assistant());
    assert!(msg.content.is_empty());
    assert_eq!(msg.visible_summary(), None);
    assert!(msg.visible_bullets().is_empty());
}

#[test]
fn user_message_is_not_pending() {
    let msg = Message::user("hello");
    assert_eq!(msg.role, Role::User);
    assert!(!msg.is_pending_assistant());
    assert_eq!(msg.kind, Some(MessageKind::Text));
}

#[test]
fn patch_reveals_summary_and_bullets() {
    let mut msg = Message::assistant_placeholder(thinking());
    msg.apply(&MessagePatch::reveal_summary());
    msg.apply(&MessagePatch::reveal_bullets(2));
    assert_eq!(msg.visible_summary(), Some("Summary"));
    assert_eq!(msg.visible_bullets(), ["one".to_owned(), "two".to_owned()]);
}

#[test]
fn bullet_count_is_clamped_and_monotonic() {
    let mut msg = Message::assistant_placeholder(thinking());
    msg.apply(&MessagePatch::reveal_bullets(10));
    assert_eq!(msg.loading_state.map(|s| s.visible_bullets), Some(3));
    msg.apply(&MessagePatch::reveal_bullets(1));
    assert_eq!(msg.loading_state.map(|s| s.visible_bullets), Some(3));
}

#[test]
fn complete_patch_sets_content_and_clears_loading() {
    let mut msg = Message::assistant_placeholder(thinking());
    msg.apply(&MessagePatch::complete("done"));
    assert_eq!(msg.content, "done");
    assert!(!msg.is_loading);
    // Finished messages show the full thinking trace.
    assert_eq!(msg.visible_summary(), Some("Summary"));
    assert_eq!(msg.visible_bullets().len(), 3);
}
