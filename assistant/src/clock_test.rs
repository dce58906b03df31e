use super::*;

#[test]
fn manual_clock_advances() {
    let clock = ManualClock::starting_at(1_000);
    clock.advance(250);
    assert_eq!(clock.now_ms(), 1_250);
}

#[test]
fn manual_clock_set_never_goes_backwards() {
    let clock = ManualClock::starting_at(500);
    clock.set(400);
    assert_eq!(clock.now_ms(), 500);
    clock.set(900);
    assert_eq!(clock.now_ms(), 900);
}
