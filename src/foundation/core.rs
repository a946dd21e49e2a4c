use crate::foundation::error::{SkyError, SkyResult};

pub use kurbo::{Affine, Point, Vec2};

/// Normalized scroll progress through one section, always in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize)]
#[serde(transparent)]
pub struct ScrollProgress(f64);

impl ScrollProgress {
    /// Section top aligned with the viewport top.
    pub const ZERO: Self = Self(0.0);
    /// Scrolled one full viewport height past the section top.
    pub const ONE: Self = Self(1.0);

    /// Clamp `v` into `[0, 1]`; non-finite input maps to zero.
    pub fn new(v: f64) -> Self {
        if !v.is_finite() {
            return Self::ZERO;
        }
        Self(v.clamp(0.0, 1.0))
    }

    /// Raw value in `[0, 1]`.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl<'de> serde::Deserialize<'de> for ScrollProgress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

/// Viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> SkyResult<Self> {
        if !(width.is_finite() && width > 0.0) {
            return Err(SkyError::validation("viewport width must be > 0"));
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(SkyError::validation("viewport height must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Convert a percentage of the width into pixels.
    pub fn pct_x(self, pct: f64) -> f64 {
        self.width * pct / 100.0
    }

    /// Convert a percentage of the height into pixels.
    pub fn pct_y(self, pct: f64) -> f64 {
        self.height * pct / 100.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
