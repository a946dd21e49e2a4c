use super::*;

fn p(v: f64) -> ScrollProgress {
    ScrollProgress::new(v)
}

#[test]
fn sun_boundary_poses() {
    let start = map_visual_state(p(0.0), CelestialType::Sun, LayoutPosition::Left, true);
    assert_eq!(start.body.translate_y_pct, 0.0);
    assert_eq!(start.body.scale, 1.0);
    assert_eq!(start.body.anchor, BodyAnchor::Bottom);
    assert_eq!(start.nebula.opacity, 0.7);

    let end = map_visual_state(p(1.0), CelestialType::Sun, LayoutPosition::Left, true);
    assert_eq!(end.body.translate_y_pct, BODY_DRIFT_PCT);
    assert!((end.body.scale - 0.8).abs() < 1e-12);
    assert_eq!(end.body.rotation_deg, 20.0);
    assert_eq!(end.nebula.opacity, 0.0);
    match end.detail {
        CelestialDetail::Sun { cloud_bank } => {
            assert_eq!(cloud_bank.top_pct, 70.0);
            assert!((cloud_bank.scale - 1.7).abs() < 1e-12);
            assert_eq!(cloud_bank.left_pct, 10.0);
        }
        CelestialDetail::Moon { .. } => panic!("sun section produced moon detail"),
    }
}

#[test]
fn moon_boundary_poses() {
    let start = map_visual_state(p(0.0), CelestialType::Moon, LayoutPosition::Right, true);
    assert_eq!(start.body.translate_y_pct, 0.0);
    assert_eq!(start.body.scale, 0.8);
    assert_eq!(start.body.anchor, BodyAnchor::Top);
    assert_eq!(start.nebula.left_pct, 10.0);

    let end = map_visual_state(p(1.0), CelestialType::Moon, LayoutPosition::Right, true);
    assert_eq!(end.body.translate_y_pct, -BODY_DRIFT_PCT);
    assert!((end.body.scale - 1.1).abs() < 1e-12);
    assert_eq!(end.nebula.opacity, 1.0);
    match end.detail {
        CelestialDetail::Moon {
            phase,
            crater_opacity,
        } => {
            assert_eq!(phase.clip_center_x_pct, 0.0);
            assert_eq!(crater_opacity, 0.8);
        }
        CelestialDetail::Sun { .. } => panic!("moon section produced sun detail"),
    }
}

#[test]
fn inactive_section_uses_exit_pose_and_zero_progress() {
    let left = map_visual_state(p(0.9), CelestialType::Sun, LayoutPosition::Left, false);
    assert_eq!(left.progress, 0.0);
    assert_eq!(left.entrance.translate_x_pct, -100.0);
    assert_eq!(left.entrance.opacity, 0.0);
    assert_eq!(left.headline, HeadlinePose::HIDDEN);
    assert_eq!(left.body.translate_y_pct, 0.0);

    let right = map_visual_state(p(0.9), CelestialType::Moon, LayoutPosition::Right, false);
    assert_eq!(right.entrance.translate_x_pct, 100.0);
    match right.detail {
        CelestialDetail::Moon { crater_opacity, .. } => assert_eq!(crater_opacity, 0.0),
        CelestialDetail::Sun { .. } => panic!("wrong detail"),
    }
}

#[test]
fn active_section_is_fully_shown() {
    let v = map_visual_state(p(0.3), CelestialType::Moon, LayoutPosition::Right, true);
    assert_eq!(v.entrance, EntrancePose::SHOWN);
    assert_eq!(v.headline, HeadlinePose::SHOWN);
}

#[test]
fn curves_are_monotonic_and_bounded() {
    for celestial in [CelestialType::Sun, CelestialType::Moon] {
        let mut prev: Option<VisualParams> = None;
        for i in 0..=50 {
            let v = map_visual_state(
                p(f64::from(i) / 50.0),
                celestial,
                LayoutPosition::Left,
                true,
            );
            assert!((0.0..=1.0).contains(&v.nebula.opacity));
            assert!(v.body.scale > 0.0);
            assert!(v.body.translate_y_pct.abs() <= BODY_DRIFT_PCT);
            if let Some(prev) = prev {
                assert!(v.body.rotation_deg >= prev.body.rotation_deg);
                assert!(v.nebula.scale >= prev.nebula.scale);
                match celestial {
                    CelestialType::Sun => {
                        assert!(v.body.translate_y_pct >= prev.body.translate_y_pct);
                        assert!(v.body.scale <= prev.body.scale);
                        assert!(v.nebula.opacity <= prev.nebula.opacity);
                    }
                    CelestialType::Moon => {
                        assert!(v.body.translate_y_pct <= prev.body.translate_y_pct);
                        assert!(v.body.scale >= prev.body.scale);
                        assert!(v.nebula.opacity >= prev.nebula.opacity);
                    }
                }
            }
            prev = Some(v);
        }
    }
}

#[test]
fn moon_phase_sweeps_left() {
    let clip = |v: f64| match map_visual_state(
        p(v),
        CelestialType::Moon,
        LayoutPosition::Left,
        true,
    )
    .detail
    {
        CelestialDetail::Moon { phase, .. } => phase.clip_center_x_pct,
        CelestialDetail::Sun { .. } => unreachable!(),
    };
    assert_eq!(clip(0.0), 50.0);
    assert_eq!(clip(0.5), 25.0);
    assert_eq!(clip(1.0), 0.0);
}

#[test]
fn detail_serializes_with_type_tag() {
    let v = map_visual_state(p(0.5), CelestialType::Sun, LayoutPosition::Right, true);
    let json = serde_json::to_value(v).unwrap();
    assert_eq!(json["detail"]["type"], "sun");
    assert_eq!(json["detail"]["cloud_bank"]["left_pct"], -50.0);
}
