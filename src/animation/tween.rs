use crate::animation::ease::Ease;

/// A fixed-duration eased transition from one value to another.
///
/// Mirrors a CSS `transition` on a single property: the caller tracks elapsed time since
/// the target changed and samples the tween with it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub duration_s: f64,
    pub ease: Ease,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration_s: f64, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration_s,
            ease,
        }
    }

    /// Normalized, eased completion in `[0, 1]` after `elapsed_s` seconds.
    pub fn eased_t(&self, elapsed_s: f64) -> f64 {
        if self.duration_s.is_nan() || self.duration_s <= 0.0 {
            return 1.0;
        }
        self.ease.apply(elapsed_s / self.duration_s)
    }

    pub fn sample(&self, elapsed_s: f64) -> f64 {
        crate::foundation::math::lerp(self.from, self.to, self.eased_t(elapsed_s))
    }

    pub fn is_finished(&self, elapsed_s: f64) -> bool {
        elapsed_s >= self.duration_s
    }
}
