use super::*;

#[test]
fn first_call_always_fires() {
    let mut t = Throttle::new(100.0);
    assert!(t.try_fire(5_000.0));
}

#[test]
fn calls_inside_window_are_dropped() {
    let mut t = Throttle::new(100.0);
    assert!(t.try_fire(0.0));
    assert!(!t.try_fire(10.0));
    assert!(!t.try_fire(99.9));
    assert!(t.try_fire(100.0));
    assert!(!t.try_fire(150.0));
    assert!(t.try_fire(250.0));
}

#[test]
fn dropped_calls_do_not_extend_window() {
    let mut t = Throttle::new(100.0);
    assert!(t.try_fire(0.0));
    for now in [20.0, 40.0, 60.0, 80.0] {
        assert!(!t.try_fire(now));
    }
    assert!(t.try_fire(100.0));
}
