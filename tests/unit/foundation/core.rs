use super::*;

#[test]
fn progress_clamps_and_rejects_nan() {
    assert_eq!(ScrollProgress::new(-0.5), ScrollProgress::ZERO);
    assert_eq!(ScrollProgress::new(1.5), ScrollProgress::ONE);
    assert_eq!(ScrollProgress::new(f64::NAN), ScrollProgress::ZERO);
    assert_eq!(ScrollProgress::new(f64::INFINITY), ScrollProgress::ZERO);
    assert_eq!(ScrollProgress::new(0.25).get(), 0.25);
}

#[test]
fn progress_deserialize_clamps() {
    let p: ScrollProgress = serde_json::from_str("3.0").unwrap();
    assert_eq!(p, ScrollProgress::ONE);
}

#[test]
fn viewport_rejects_degenerate_sizes() {
    assert!(Viewport::new(0.0, 100.0).is_err());
    assert!(Viewport::new(100.0, -1.0).is_err());
    assert!(Viewport::new(100.0, f64::NAN).is_err());
    let v = Viewport::new(200.0, 100.0).unwrap();
    assert_eq!(v.pct_x(50.0), 100.0);
    assert_eq!(v.pct_y(10.0), 10.0);
}
