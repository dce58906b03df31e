use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn progress_is_half_at_midpoint() {
    assert!(close(scroll_progress(200.0, DEFAULT_MAX_SCROLL), 0.5));
}

#[test]
fn progress_clamps_and_tolerates_bad_input() {
    assert!(close(scroll_progress(-50.0, 400.0), 0.0));
    assert!(close(scroll_progress(900.0, 400.0), 1.0));
    assert!(close(scroll_progress(f64::NAN, 400.0), 0.0));
    assert!(close(scroll_progress(10.0, 0.0), 1.0));
    assert!(close(scroll_progress(0.0, 0.0), 0.0));
}

#[test]
fn frame_gate_drops_events_while_pending() {
    let mut gate = FrameGate::new();
    assert!(gate.try_schedule());
    assert!(!gate.try_schedule());
    assert!(gate.is_pending());
    gate.complete();
    assert!(gate.try_schedule());
}

#[test]
fn first_row_always_visible() {
    let config = RevealConfig::default();
    for index in 0..4 {
        assert_eq!(card_reveal(index, 0.0, &config), CardReveal::VISIBLE);
    }
}

#[test]
fn second_row_hidden_at_top_and_revealed_later() {
    let config = RevealConfig::default();
    let hidden = card_reveal(4, 0.0, &config);
    assert!(close(hidden.opacity, 0.0));
    assert!(close(hidden.translate_y_px, 36.0));
    assert_eq!(hidden.transition_delay_ms, 0);

    let shown = card_reveal(4, 0.22, &config);
    assert!(close(shown.opacity, 1.0));
    assert!(close(shown.translate_y_px, 0.0));
}

#[test]
fn later_columns_lag_and_delay() {
    let config = RevealConfig::default();
    let first = card_reveal(4, 0.1, &config);
    let last = card_reveal(7, 0.1, &config);
    assert!(last.opacity < first.opacity);
    assert!(last.translate_y_px > first.translate_y_px);
    assert_eq!(last.transition_delay_ms, 180);
}

#[test]
fn third_row_starts_after_second() {
    let config = RevealConfig::default();
    assert!(close(card_reveal(8, 0.22, &config).opacity, 0.0));
    assert!(card_reveal(8, 0.3, &config).opacity > 0.0);
}

#[test]
fn hint_needs_more_than_one_row_and_little_progress() {
    let config = RevealConfig::default();
    assert!(!scroll_hint_visible(4, 0.0, &config));
    assert!(scroll_hint_visible(5, 0.0, &config));
    assert!(scroll_hint_visible(16, 0.006, &config));
    assert!(!scroll_hint_visible(16, 0.05, &config));
}

#[test]
fn chat_metrics_flags() {
    let top = ChatScrollMetrics::from_element(0.0, 1_000.0, 400.0);
    assert!(!top.is_scrolled);
    assert!(!top.near_bottom);
    assert!(top.show_bottom_gradient);

    let bottom = ChatScrollMetrics::from_element(550.0, 1_000.0, 400.0);
    assert!(bottom.is_scrolled);
    assert!(bottom.near_bottom);
    assert!(bottom.show_bottom_gradient);

    let pinned = ChatScrollMetrics::from_element(600.0, 1_000.0, 400.0);
    assert!(pinned.near_bottom);
    assert!(!pinned.show_bottom_gradient);
}

#[test]
fn top_min_height_treats_missing_measurements_as_zero() {
    assert!(close(top_min_height(900.0, None, None), 828.0));
    assert!(close(top_min_height(900.0, Some(40.0), Some(160.0)), 628.0));
    assert!(close(top_min_height(100.0, Some(400.0), None), 0.0));
}
