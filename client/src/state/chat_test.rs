use super::*;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use assistant::message::Role;

#[test]
fn send_pins_view() {
    let mut chat = ChatState::default();
    let outcome = chat.send("Compare the indemnities", 1_000).expect("send");
    assert!(matches!(outcome, SendOutcome::Started { .. }));
    assert_eq!(chat.scroll_seq, 1);
    assert!(chat.is_loading());
    assert_eq!(chat.messages().len(), 2);
}

#[test]
fn blank_send_is_ignored() {
    let mut chat = ChatState::default();
    let outcome = chat.send("   ", 1_000).expect("send");
    assert!(matches!(outcome, SendOutcome::Ignored(_)));
    assert_eq!(chat.scroll_seq, 0);
    assert!(!chat.is_in_chat_mode());
}

#[test]
fn advance_follows_only_near_bottom() {
    let mut chat = ChatState::default();
    chat.send("Extract the parties", 0).expect("send");
    let seq = chat.scroll_seq;

    let scrolled_up = ChatScrollMetrics::from_element(0.0, 2_000.0, 400.0);
    assert!(!chat.advance(600, scrolled_up.near_bottom).is_empty());
    assert_eq!(chat.scroll_seq, seq);

    let at_bottom = ChatScrollMetrics::from_element(1_550.0, 2_000.0, 400.0);
    assert!(!chat.advance(1_000, at_bottom.near_bottom).is_empty());
    assert_eq!(chat.scroll_seq, seq + 1);
}

#[test]
fn scroll_trigger_ignores_typing_and_scrolling() {
    let owner = Owner::new();
    owner.with(|| {
        let signals = ChatSignals::new();
        let runs = Arc::new(AtomicUsize::new(0));
        let trigger = {
            let runs = Arc::clone(&runs);
            let chat = signals.chat;
            Memo::new(move |_| {
                runs.fetch_add(1, Ordering::SeqCst);
                chat.with(|c| c.scroll_seq)
            })
        };
        assert_eq!(trigger.get_untracked(), 0);

        signals.draft.set("Compare the indemnities".to_owned());
        signals.metrics.set(ChatScrollMetrics::from_element(0.0, 2_000.0, 400.0));
        assert_eq!(trigger.get_untracked(), 0);
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        signals.chat.update(|c| {
            c.send("Compare the indemnities", 0).expect("send");
        });
        assert_eq!(signals.scroll_trigger().get_untracked(), 1);
        assert_eq!(trigger.get_untracked(), 1);
    });
}

#[test]
fn settled_thinking_row_survives_later_updates() {
    let owner = Owner::new();
    owner.with(|| {
        let signals = ChatSignals::new();
        let chat = signals.chat;
        chat.update(|c| {
            c.send("Extract the parties", 0).expect("send");
            c.advance(2_500, true);
        });
        let key = chat.with_untracked(|c| c.message_keys()[1].clone());
        let runs = Arc::new(AtomicUsize::new(0));
        let phase = Memo::new(move |_| chat.with(|c| c.thinking_phase(&key)));
        let mounts = {
            let runs = Arc::clone(&runs);
            Memo::new(move |_| {
                runs.fetch_add(1, Ordering::SeqCst);
                phase.get()
            })
        };
        assert_eq!(mounts.get_untracked(), Some(false));

        signals.draft.set("Compare".to_owned());
        chat.update(|c| {
            c.send("Compare the terms", 3_000).expect("send");
            c.advance(3_600, true);
        });
        assert_eq!(mounts.get_untracked(), Some(false));
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    });
}

#[test]
fn message_keys_follow_the_active_thread() {
    let mut chat = ChatState::default();
    chat.send("Review the lease", 0).expect("send");
    let keys = chat.message_keys();
    assert_eq!(keys.len(), 2);
    assert_eq!(chat.message_at(&keys[0]).map(|m| m.role), Some(Role::User));
    assert_eq!(chat.thinking_phase(&keys[0]), None);
    assert_eq!(chat.thinking_phase(&keys[1]), Some(true));

    chat.new_thread(10);
    assert!(chat.message_keys().is_empty());
    assert!(chat.message_at(&keys[1]).is_some());
}

#[test]
fn tabs_mark_the_active_thread() {
    let mut chat = ChatState::default();
    chat.send("Add columns for key terms, effective date, and parties", 0).expect("send");
    let second = chat.new_thread(10);
    let tabs = chat.tabs();
    assert_eq!(tabs.len(), 2);
    assert_eq!(tabs[0].label, "Add columns for key terms...");
    assert!(!tabs[0].active);
    assert!(tabs[1].active);
    assert_eq!(tabs[1].id, second);
    assert_eq!(tabs[1].label, "Untitled");
}

#[test]
fn shutdown_settles_pending_reply() {
    let mut chat = ChatState::default();
    chat.send("Review the lease", 0).expect("send");
    let epoch = chat.next_driver_epoch();
    assert_eq!(chat.shutdown(), 1);
    assert!(chat.driver_epoch > epoch);
    assert!(!chat.is_loading());
    assert!(chat.messages().iter().all(|m| !m.is_loading));
}
