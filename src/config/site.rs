use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::{
    animation::ease::Ease,
    field::starfield::FieldCounts,
    foundation::core::Viewport,
    foundation::error::{SkyError, SkyResult},
    visual::transition::{ENTRANCE_DURATION_S, ENTRANCE_EASE, HEADLINE_DURATION_S, HEADLINE_EASE},
};

/// Visible fraction at which a section counts as on screen.
pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 0.6;

/// Page-wide tunables. Every field has a default, so `{}` is a valid config file.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub viewport: Viewport,
    pub field: FieldCounts,
    pub visibility_threshold: f64,
    pub entrance_duration_s: f64,
    pub headline_duration_s: f64,
    /// Curve of the section slide in/out.
    pub entrance_ease: Ease,
    pub headline_ease: Ease,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            field: FieldCounts::default(),
            visibility_threshold: DEFAULT_VISIBILITY_THRESHOLD,
            entrance_duration_s: ENTRANCE_DURATION_S,
            headline_duration_s: HEADLINE_DURATION_S,
            entrance_ease: ENTRANCE_EASE,
            headline_ease: HEADLINE_EASE,
        }
    }
}

impl SiteConfig {
    pub fn from_reader<R: std::io::Read>(r: R) -> SkyResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| SkyError::config(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> SkyResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .map_err(|e| SkyError::config(format!("open config '{}': {e}", path.display())))?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> SkyResult<()> {
        Viewport::new(self.viewport.width, self.viewport.height)
            .map_err(|e| SkyError::config(e.to_string()))?;
        let t = self.visibility_threshold;
        if !(t.is_finite() && t > 0.0 && t <= 1.0) {
            return Err(SkyError::config(format!(
                "visibility_threshold must be in (0, 1], got {t}"
            )));
        }
        for (name, v) in [
            ("entrance_duration_s", self.entrance_duration_s),
            ("headline_duration_s", self.headline_duration_s),
        ] {
            if !(v.is_finite() && v > 0.0) {
                return Err(SkyError::config(format!("{name} must be > 0, got {v}")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/site.rs"]
mod tests;
