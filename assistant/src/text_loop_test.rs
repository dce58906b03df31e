use super::*;

#[test]
fn tick_wraps_around() {
    let mut text_loop = TextLoop::new(HOMEPAGE_PLACEHOLDERS.len());
    let seen: Vec<usize> = (0..6).map(|_| text_loop.tick()).collect();
    assert_eq!(seen, vec![1, 2, 3, 4, 0, 1]);
}

#[test]
fn index_at_follows_interval() {
    let text_loop = TextLoop::new(3);
    assert_eq!(text_loop.interval_ms(), 3_000);
    assert_eq!(text_loop.index_at(0), 0);
    assert_eq!(text_loop.index_at(2_999), 0);
    assert_eq!(text_loop.index_at(3_000), 1);
    assert_eq!(text_loop.index_at(9_000), 0);
}

#[test]
fn degenerate_loops_stay_put() {
    let mut empty = TextLoop::new(0);
    assert_eq!(empty.tick(), 0);
    assert_eq!(empty.index_at(50_000), 0);
    let mut single = TextLoop::with_interval(1, 0);
    assert_eq!(single.tick(), 0);
    assert_eq!(single.interval_ms(), 1);
}
