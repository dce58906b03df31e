use super::*;
use crate::clock::{Clock, ManualClock};
use crate::message::Role;
use crate::responses::{COLUMN_SUGGESTION, FALLBACK};

const T0: u64 = 1_700_000_000_000;

fn started(outcome: SendOutcome) -> (ThreadId, PipelineId) {
    match outcome {
        SendOutcome::Started { thread_id, pipeline_id } => (thread_id, pipeline_id),
        SendOutcome::Ignored(reason) => panic!("send ignored: {reason:?}"),
    }
}

fn visible_bullets(conv: &Conversation, id: &ThreadId) -> usize {
    let thread = conv.store().get(id).expect("thread");
    let message = thread.messages.last().expect("message");
    message.visible_bullets().len()
}

#[test]
fn send_on_empty_store_creates_titled_thread_and_reveals_column_reply() {
    let clock = ManualClock::starting_at(T0);
    let mut conv = Conversation::new();

    let (id, _) = started(conv.send("Add columns for dates", clock.now_ms()).expect("send"));

    let thread = conv.store().get(&id).expect("thread");
    assert_eq!(thread.title, "Add columns for dates");
    assert_eq!(thread.messages.len(), 2);
    assert_eq!(thread.messages[0].role, Role::User);
    assert!(thread.messages[1].is_pending_assistant());
    assert!(thread.is_loading);
    assert_eq!(conv.store().active_id(), Some(&id));

    clock.set(T0 + 2_499);
    conv.advance(clock.now_ms());
    assert!(conv.store().get(&id).expect("thread").is_loading);

    clock.set(T0 + 2_500);
    conv.advance(clock.now_ms());
    let thread = conv.store().get(&id).expect("thread");
    assert_eq!(thread.messages[1].content, COLUMN_SUGGESTION);
    assert!(!thread.messages[1].is_loading);
    assert!(!thread.is_loading);
    assert_eq!(conv.next_deadline(), None);
}

#[test]
fn bullets_reveal_on_schedule() {
    let mut conv = Conversation::new();
    let (id, _) = started(conv.send("hello", T0).expect("send"));
    let total = responses::thinking_content().bullets.len();

    conv.advance(T0 + 999);
    assert_eq!(visible_bullets(&conv, &id), 0);

    for k in 0..total {
        let at = T0 + 1_000 + k as u64 * 400 + 1;
        conv.advance(at);
        assert_eq!(visible_bullets(&conv, &id), (k + 1).min(total), "bullet {k}");
    }
}

#[test]
fn summary_is_hidden_until_its_step() {
    let mut conv = Conversation::new();
    let (id, _) = started(conv.send("hello", T0).expect("send"));
    let summary = |conv: &Conversation| {
        conv.store().get(&id).expect("thread").messages[1].visible_summary().map(str::to_owned)
    };
    assert_eq!(summary(&conv), None);
    conv.advance(T0 + 600);
    assert!(summary(&conv).is_some());
}

#[test]
fn advance_reports_transitions_in_due_order() {
    let mut conv = Conversation::new();
    started(conv.send("hello", T0).expect("send"));
    let steps: Vec<_> = conv.advance(T0 + 10_000).into_iter().map(|t| (t.due_at_ms - T0, t.step)).collect();
    assert_eq!(
        steps,
        vec![
            (600, PipelineStep::RevealSummary),
            (1_000, PipelineStep::RevealBullet(0)),
            (1_400, PipelineStep::RevealBullet(1)),
            (1_800, PipelineStep::RevealBullet(2)),
            (2_500, PipelineStep::Complete),
        ]
    );
}

#[test]
fn empty_and_busy_sends_are_ignored() {
    let mut conv = Conversation::new();
    assert_eq!(conv.send("   ", T0).expect("send"), SendOutcome::Ignored(IgnoreReason::EmptyInput));
    assert!(!conv.store().is_in_chat_mode());

    let (id, _) = started(conv.send("first", T0).expect("send"));
    assert_eq!(conv.send("second", T0 + 10).expect("send"), SendOutcome::Ignored(IgnoreReason::ThreadBusy));
    assert_eq!(conv.store().get(&id).expect("thread").messages.len(), 2);

    conv.advance(T0 + 2_500);
    started(conv.send("second", T0 + 3_000).expect("send"));
    assert_eq!(conv.store().get(&id).expect("thread").messages.len(), 4);
}

#[test]
fn pipelines_on_distinct_threads_interleave() {
    let mut conv = Conversation::new();
    let (first, p1) = started(conv.send("compare these", T0).expect("send"));
    let second = conv.new_thread(T0 + 100);
    let (other, p2) = started(conv.send("hello", T0 + 100).expect("send"));
    assert_eq!(second, other);
    assert_ne!(first, second);

    let transitions = conv.advance(T0 + 700);
    let fired: Vec<_> = transitions.iter().map(|t| t.pipeline_id).collect();
    assert_eq!(fired, vec![p1, p2]);

    conv.advance(T0 + 2_600);
    let thread = conv.store().get(&second).expect("thread");
    assert_eq!(thread.messages[1].content, FALLBACK);
    assert!(!conv.store().get(&first).expect("thread").is_loading);
}

#[test]
fn cancel_stops_pending_steps_and_settles_placeholder() {
    let mut conv = Conversation::new();
    let (id, _) = started(conv.send("hello", T0).expect("send"));
    conv.advance(T0 + 1_000);

    assert_eq!(conv.cancel_all(), 1);
    assert_eq!(conv.next_deadline(), None);
    let before = conv.store().revision();
    assert!(conv.advance(T0 + 5_000).is_empty());
    assert_eq!(conv.store().revision(), before);

    let thread = conv.store().get(&id).expect("thread");
    assert!(!thread.is_loading);
    assert!(thread.pending_assistant_index().is_none());
    assert!(thread.messages[1].content.is_empty());
}

#[test]
fn cancel_thread_leaves_other_threads_running() {
    let mut conv = Conversation::new();
    let (first, _) = started(conv.send("hello", T0).expect("send"));
    conv.new_thread(T0 + 1);
    let (second, _) = started(conv.send("hello", T0 + 1).expect("send"));

    assert_eq!(conv.cancel_thread(&first), 1);
    assert_eq!(conv.cancel_thread(&first), 0);
    assert!(conv.store().get(&second).expect("thread").is_loading);
    conv.advance(T0 + 3_000);
    assert!(!conv.store().get(&second).expect("thread").is_loading);
}

#[test]
fn long_first_message_truncates_title() {
    let mut conv = Conversation::new();
    let text = "Summarize the indemnification provisions across all vendor agreements";
    let (id, _) = started(conv.send(text, T0).expect("send"));
    let title = &conv.store().get(&id).expect("thread").title;
    assert_eq!(title, &format!("{}...", &text[..40]));
}

#[test]
fn custom_timings_shift_schedule() {
    let timings = PipelineTimings { summary_ms: 10, first_bullet_ms: 20, bullet_interval_ms: 5, complete_ms: 50 };
    let mut conv = Conversation::with_timings(timings);
    started(conv.send("hello", T0).expect("send"));
    assert_eq!(conv.next_deadline(), Some(T0 + 10));
    assert_eq!(conv.advance(T0 + 50).len(), 5);
    assert!(!conv.has_pending());
}
