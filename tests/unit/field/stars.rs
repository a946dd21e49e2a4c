use super::*;

#[test]
fn generate_is_deterministic() {
    for cat in FieldCategory::ALL {
        assert_eq!(generate(cat, 64), generate(cat, 64), "{cat}");
    }
}

#[test]
fn zero_count_is_empty() {
    for cat in FieldCategory::ALL {
        assert!(generate(cat, 0).is_empty());
    }
}

#[test]
fn static_ids_are_unique_and_ordered() {
    let stars = generate(FieldCategory::Static, 150);
    assert_eq!(stars.len(), 150);
    for (i, s) in stars.iter().enumerate() {
        assert_eq!(s.id, format!("static-{i}"));
        assert_eq!(s.category, FieldCategory::Static);
    }
}

#[test]
fn positions_and_opacity_are_bounded() {
    for cat in FieldCategory::ALL {
        for e in generate(cat, 200) {
            assert!((0.0..=100.0).contains(&e.top), "{} top {}", e.id, e.top);
            assert!((0.0..=100.0).contains(&e.left), "{} left {}", e.id, e.left);
            assert!((0.0..=1.0).contains(&e.opacity), "{} op {}", e.id, e.opacity);
        }
    }
}

#[test]
fn values_are_rounded_to_two_places() {
    for e in generate(FieldCategory::Twinkle, 40) {
        for v in [e.top, e.left, e.animation_delay_s.unwrap()] {
            assert_eq!(round2(v), v);
        }
    }
}

#[test]
fn static_size_table() {
    let stars = generate(FieldCategory::Static, 11);
    let sizes: Vec<f64> = stars.iter().map(|s| s.size).collect();
    assert_eq!(
        sizes,
        vec![3.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 3.0]
    );
    assert!(stars.iter().all(|s| s.animation_delay_s.is_none()));
}

#[test]
fn first_static_star_sits_mid_top_right_edge() {
    let s = &generate(FieldCategory::Static, 1)[0];
    assert_eq!(s.top, 50.0);
    assert_eq!(s.left, 100.0);
    assert_eq!(s.opacity, 0.5);
}

#[test]
fn twinkle_timing_follows_index_tables() {
    let stars = generate(FieldCategory::Twinkle, 10);
    assert!(stars.iter().all(|s| s.opacity == 0.9));
    assert_eq!(stars[0].size, 2.0);
    assert_eq!(stars[1].size, 1.0);
    assert_eq!(stars[0].animation_delay_s, Some(0.0));
    assert_eq!(stars[0].animation_duration_s, Some(2.0));
    assert_eq!(stars[2].animation_delay_s, Some(0.42));
    assert_eq!(stars[2].animation_duration_s, Some(2.34));
}

#[test]
fn twinkle_and_static_share_placement() {
    let a = generate(FieldCategory::Static, 30);
    let b = generate(FieldCategory::Twinkle, 30);
    for (s, t) in a.iter().zip(&b) {
        assert_eq!((s.top, s.left), (t.top, t.left));
    }
}

#[test]
fn twinkle_cycles_between_point_eight_and_one() {
    let star = &generate(FieldCategory::Twinkle, 3)[2];
    let delay = star.animation_delay_s.unwrap();
    let duration = star.animation_duration_s.unwrap();
    assert_eq!(twinkle_opacity_at(star, 0.0), star.opacity);
    assert!((twinkle_opacity_at(star, delay) - 0.8).abs() < 1e-9);
    assert!((twinkle_opacity_at(star, delay + duration / 2.0) - 1.0).abs() < 1e-9);
    for k in 0..100 {
        let v = twinkle_opacity_at(star, delay + f64::from(k) * 0.13);
        assert!((0.8..=1.0).contains(&v));
    }
}

#[test]
fn static_stars_do_not_twinkle() {
    let star = &generate(FieldCategory::Static, 2)[1];
    assert_eq!(twinkle_opacity_at(star, 12.5), star.opacity);
}

#[test]
fn twinkle_swells_with_its_brightness() {
    let star = &generate(FieldCategory::Twinkle, 5)[4];
    let delay = star.animation_delay_s.unwrap();
    let duration = star.animation_duration_s.unwrap();
    assert_eq!(twinkle_scale_at(star, 0.0), 1.0);
    assert!((twinkle_scale_at(star, delay) - 1.0).abs() < 1e-9);
    assert!((twinkle_scale_at(star, delay + duration / 2.0) - 1.2).abs() < 1e-9);
    for k in 0..50 {
        let t = delay + f64::from(k) * 0.29;
        let grown = (twinkle_scale_at(star, t) - 1.0) / 0.2;
        let bright = (twinkle_opacity_at(star, t) - 0.8) / 0.2;
        assert!((grown - bright).abs() < 1e-9);
    }
    let fixed = &generate(FieldCategory::Static, 1)[0];
    assert_eq!(twinkle_scale_at(fixed, 3.0), 1.0);
}
