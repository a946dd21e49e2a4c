use crate::{
    animation::ease::Ease,
    animation::tween::Tween,
    content::model::LayoutPosition,
    visual::mapper::{EntrancePose, HeadlinePose, entrance_pose, headline_pose},
};

/// Duration of the body layer slide in/out.
pub const ENTRANCE_DURATION_S: f64 = 1.0;
/// Duration of the headline fade/rise.
pub const HEADLINE_DURATION_S: f64 = 0.7;
/// Curve of the body layer slide (CSS `ease-in-out`).
pub const ENTRANCE_EASE: Ease = Ease::InOutCubic;
/// Curve of the headline fade/rise.
pub const HEADLINE_EASE: Ease = Ease::InOutCubic;

/// In-flight slide between two entrance poses.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EntranceTransition {
    translate: Tween,
    opacity: Tween,
}

impl EntranceTransition {
    pub fn new(from: EntrancePose, to: EntrancePose, duration_s: f64, ease: Ease) -> Self {
        Self {
            translate: Tween::new(from.translate_x_pct, to.translate_x_pct, duration_s, ease),
            opacity: Tween::new(from.opacity, to.opacity, duration_s, ease),
        }
    }

    /// A finished transition resting at the pose for `is_active`.
    pub fn settled(position: LayoutPosition, is_active: bool) -> Self {
        let pose = entrance_pose(position, is_active);
        Self::new(pose, pose, 0.0, Ease::Linear)
    }

    /// Retarget from wherever `current` is toward the pose for `is_active`.
    pub fn toward(
        current: EntrancePose,
        position: LayoutPosition,
        is_active: bool,
        duration_s: f64,
        ease: Ease,
    ) -> Self {
        Self::new(current, entrance_pose(position, is_active), duration_s, ease)
    }

    pub fn sample(&self, elapsed_s: f64) -> EntrancePose {
        EntrancePose {
            translate_x_pct: self.translate.sample(elapsed_s),
            opacity: self.opacity.sample(elapsed_s).clamp(0.0, 1.0),
        }
    }

    pub fn target(&self) -> EntrancePose {
        EntrancePose {
            translate_x_pct: self.translate.to,
            opacity: self.opacity.to,
        }
    }

    pub fn is_finished(&self, elapsed_s: f64) -> bool {
        self.translate.is_finished(elapsed_s)
    }
}

/// In-flight headline rise/fade.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HeadlineTransition {
    translate: Tween,
    opacity: Tween,
}

impl HeadlineTransition {
    pub fn toward(current: HeadlinePose, is_active: bool, duration_s: f64, ease: Ease) -> Self {
        let to = headline_pose(is_active);
        Self {
            translate: Tween::new(current.translate_y_px, to.translate_y_px, duration_s, ease),
            opacity: Tween::new(current.opacity, to.opacity, duration_s, ease),
        }
    }

    pub fn settled(is_active: bool) -> Self {
        Self::toward(headline_pose(is_active), is_active, 0.0, Ease::Linear)
    }

    pub fn sample(&self, elapsed_s: f64) -> HeadlinePose {
        HeadlinePose {
            translate_y_px: self.translate.sample(elapsed_s),
            opacity: self.opacity.sample(elapsed_s).clamp(0.0, 1.0),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/visual/transition.rs"]
mod tests;
