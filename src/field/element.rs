use std::str::FromStr;

use crate::foundation::error::{SkyError, SkyResult};

/// Kind of decorative record produced by the field generator.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FieldCategory {
    /// Steady background star.
    Static,
    /// Star with a looping twinkle animation.
    Twinkle,
    /// Streak with a particle trail.
    Shooting,
    /// Drifting cloud puff.
    Cloud,
    /// Moon surface crater.
    Crater,
}

impl FieldCategory {
    pub const ALL: [Self; 5] = [
        Self::Static,
        Self::Twinkle,
        Self::Shooting,
        Self::Cloud,
        Self::Crater,
    ];

    /// Id prefix, also the canonical textual name.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Twinkle => "twinkle",
            Self::Shooting => "shooting",
            Self::Cloud => "cloud",
            Self::Crater => "crater",
        }
    }

    pub(crate) fn element_id(self, index: usize) -> String {
        format!("{}-{index}", self.prefix())
    }
}

impl std::fmt::Display for FieldCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.prefix())
    }
}

impl FromStr for FieldCategory {
    type Err = SkyError;

    fn from_str(s: &str) -> SkyResult<Self> {
        let s = s.trim().to_ascii_lowercase();
        match s.as_str() {
            "static" => Ok(Self::Static),
            "twinkle" | "twinkling" => Ok(Self::Twinkle),
            "shooting" | "shooting_star" => Ok(Self::Shooting),
            "cloud" => Ok(Self::Cloud),
            "crater" => Ok(Self::Crater),
            other => Err(SkyError::validation(format!(
                "unknown field category '{other}'"
            ))),
        }
    }
}

/// One formula-positioned decorative record.
///
/// `top`/`left` are percentages of the containing box, `size` is in CSS pixels.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DecorativeElement {
    pub id: String,
    pub category: FieldCategory,
    pub size: f64,
    pub top: f64,
    pub left: f64,
    pub opacity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_delay_s: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_duration_s: Option<f64>,
}

impl DecorativeElement {
    pub(crate) fn write_fingerprint(&self, h: &mut crate::foundation::math::Fnv1a64) {
        h.write_str(&self.id);
        for v in [self.size, self.top, self.left, self.opacity] {
            h.write_f64(v);
        }
        for v in [self.animation_delay_s, self.animation_duration_s] {
            match v {
                Some(v) => {
                    h.write_u8(1);
                    h.write_f64(v);
                }
                None => h.write_u8(0),
            }
        }
    }
}
