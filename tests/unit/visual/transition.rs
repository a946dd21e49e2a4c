use super::*;
use crate::visual::mapper::HEADLINE_OFFSET_PX;

#[test]
fn entrance_slides_in_from_layout_side() {
    let t = EntranceTransition::toward(
        EntrancePose::hidden(LayoutPosition::Left),
        LayoutPosition::Left,
        true,
        ENTRANCE_DURATION_S,
        ENTRANCE_EASE,
    );
    assert_eq!(t.sample(0.0), EntrancePose::hidden(LayoutPosition::Left));
    let mid = t.sample(0.5);
    assert_eq!(mid.translate_x_pct, -50.0);
    assert_eq!(mid.opacity, 0.5);
    assert_eq!(t.sample(1.0), EntrancePose::SHOWN);
    assert_eq!(t.sample(3.0), EntrancePose::SHOWN);
    assert!(t.is_finished(1.0));
    assert_eq!(t.target(), EntrancePose::SHOWN);
}

#[test]
fn exit_retargets_from_current_pose() {
    let entering = EntranceTransition::toward(
        EntrancePose::hidden(LayoutPosition::Right),
        LayoutPosition::Right,
        true,
        ENTRANCE_DURATION_S,
        ENTRANCE_EASE,
    );
    let halfway = entering.sample(0.5);
    let leaving = EntranceTransition::toward(
        halfway,
        LayoutPosition::Right,
        false,
        ENTRANCE_DURATION_S,
        ENTRANCE_EASE,
    );
    assert_eq!(leaving.sample(0.0), halfway);
    assert_eq!(leaving.sample(1.0), EntrancePose::hidden(LayoutPosition::Right));
}

#[test]
fn eased_progress_is_slow_at_the_edges() {
    let t = EntranceTransition::toward(
        EntrancePose::hidden(LayoutPosition::Left),
        LayoutPosition::Left,
        true,
        ENTRANCE_DURATION_S,
        ENTRANCE_EASE,
    );
    let early = t.sample(0.1).opacity;
    assert!(early < 0.1);
}

#[test]
fn settled_transitions_do_not_move() {
    let t = EntranceTransition::settled(LayoutPosition::Left, false);
    assert_eq!(t.sample(0.0), EntrancePose::hidden(LayoutPosition::Left));
    let h = HeadlineTransition::settled(true);
    assert_eq!(h.sample(0.0), HeadlinePose::SHOWN);
}

#[test]
fn headline_rises_into_place() {
    let h = HeadlineTransition::toward(
        HeadlinePose::HIDDEN,
        true,
        HEADLINE_DURATION_S,
        HEADLINE_EASE,
    );
    assert_eq!(h.sample(0.0), HeadlinePose::HIDDEN);
    assert_eq!(h.sample(HEADLINE_DURATION_S), HeadlinePose::SHOWN);
    let mid = h.sample(0.35);
    assert!(mid.translate_y_px > 0.0 && mid.translate_y_px < HEADLINE_OFFSET_PX);
}

#[test]
fn curve_choice_shapes_the_slide() {
    let hidden = EntrancePose::hidden(LayoutPosition::Left);
    let sample = |ease| {
        EntranceTransition::toward(hidden, LayoutPosition::Left, true, 1.0, ease)
            .sample(0.25)
            .opacity
    };
    assert_eq!(sample(Ease::Linear), 0.25);
    // Ease-out front-loads the motion, ease-in holds it back.
    assert!(sample(Ease::OutCubic) > sample(Ease::Linear));
    assert!(sample(Ease::InQuad) < sample(Ease::Linear));
    assert_eq!(sample(ENTRANCE_EASE), sample(Ease::InOutCubic));
}
