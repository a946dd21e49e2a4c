use super::*;

#[test]
fn before_section_top_is_exactly_zero() {
    let p = scroll_progress(ScrollMetrics::new(100.0, 720.0, 720.0));
    assert_eq!(p.get(), 0.0);
}

#[test]
fn one_viewport_past_top_is_exactly_one() {
    assert_eq!(
        scroll_progress(ScrollMetrics::new(1440.0, 720.0, 720.0)).get(),
        1.0
    );
    assert_eq!(
        scroll_progress(ScrollMetrics::new(9000.0, 720.0, 720.0)).get(),
        1.0
    );
}

#[test]
fn midway_is_linear() {
    let p = scroll_progress(ScrollMetrics::new(900.0, 720.0, 720.0));
    assert_eq!(p.get(), 0.25);
}

#[test]
fn degenerate_viewport_is_zero() {
    for h in [0.0, -10.0, f64::NAN, f64::INFINITY] {
        assert_eq!(scroll_progress(ScrollMetrics::new(500.0, 0.0, h)).get(), 0.0);
    }
}

#[test]
fn inactive_tracker_ignores_events() {
    let mut t = ScrollTracker::new(2);
    assert!(!t.is_active());
    assert_eq!(t.on_scroll(ScrollMetrics::new(500.0, 0.0, 1000.0)), None);
    assert_eq!(t.progress(), ScrollProgress::ZERO);
}

#[test]
fn activation_computes_initial_progress_then_follows_scroll() {
    let mut t = ScrollTracker::new(1);
    let p = t.activate(ScrollMetrics::new(1080.0, 720.0, 720.0));
    assert_eq!(p.get(), 0.5);
    assert!(t.is_active());

    let p = t.on_scroll(ScrollMetrics::new(1260.0, 720.0, 720.0)).unwrap();
    assert_eq!(p.get(), 0.75);

    let p = t.on_resize(ScrollMetrics::new(1260.0, 600.0, 1320.0)).unwrap();
    assert_eq!(p.get(), 0.5);
}

#[test]
fn deactivation_resets_progress() {
    let mut t = ScrollTracker::new(0);
    t.activate(ScrollMetrics::new(700.0, 0.0, 700.0));
    assert_eq!(t.progress(), ScrollProgress::ONE);
    t.deactivate();
    assert!(!t.is_active());
    assert_eq!(t.progress(), ScrollProgress::ZERO);
    assert_eq!(t.section_index(), 0);
}
