use super::*;

const ALL: [Ease; 7] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
];

#[test]
fn endpoints_are_fixed() {
    for e in ALL {
        assert_eq!(e.apply(0.0), 0.0, "{e:?}");
        assert!((e.apply(1.0) - 1.0).abs() < 1e-12, "{e:?}");
    }
}

#[test]
fn input_is_clamped() {
    for e in ALL {
        assert_eq!(e.apply(-3.0), 0.0);
        assert!((e.apply(7.0) - 1.0).abs() < 1e-12);
        assert_eq!(e.apply(f64::NAN), 0.0);
    }
}

#[test]
fn curves_are_monotonic() {
    for e in ALL {
        let mut prev = 0.0;
        for i in 0..=100 {
            let v = e.apply(f64::from(i) / 100.0);
            assert!(v + 1e-12 >= prev, "{e:?} dipped at {i}");
            prev = v;
        }
    }
}

#[test]
fn in_out_cubic_is_symmetric_at_midpoint() {
    assert!((Ease::InOutCubic.apply(0.5) - 0.5).abs() < 1e-12);
}
