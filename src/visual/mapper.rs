//! Scroll progress to visual parameters.
//!
//! Everything here is a pure function of `(progress, celestial, position, is_active)`.
//! Each curve is linear in progress, so continuity, monotonicity and bounds follow from
//! the endpoint values documented on the constants.

use crate::{
    content::model::{CelestialType, LayoutPosition},
    foundation::core::ScrollProgress,
};

/// Vertical drift of the body at full progress, percent of its own height.
pub const BODY_DRIFT_PCT: f64 = 30.0;
/// Horizontal inset of the body from its layout side, percent of the viewport.
pub const BODY_INSET_PCT: f64 = 10.0;
pub const SUN_SIZE_PX: f64 = 200.0;
pub const MOON_SIZE_PX: f64 = 180.0;
/// Headline offset below its resting place while the section is inactive.
pub const HEADLINE_OFFSET_PX: f64 = 40.0;

/// Whole-layer slide in/out pose.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EntrancePose {
    /// Horizontal translation, percent of the layer width.
    pub translate_x_pct: f64,
    pub opacity: f64,
}

impl EntrancePose {
    pub const SHOWN: Self = Self {
        translate_x_pct: 0.0,
        opacity: 1.0,
    };

    /// Off-screen on the layout side, fully transparent.
    pub fn hidden(position: LayoutPosition) -> Self {
        Self {
            translate_x_pct: position.sign() * 100.0,
            opacity: 0.0,
        }
    }
}

/// Title/description block pose.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HeadlinePose {
    pub translate_y_px: f64,
    pub opacity: f64,
}

impl HeadlinePose {
    pub const SHOWN: Self = Self {
        translate_y_px: 0.0,
        opacity: 1.0,
    };
    pub const HIDDEN: Self = Self {
        translate_y_px: HEADLINE_OFFSET_PX,
        opacity: 0.0,
    };
}

/// Edge of the viewport the body is pinned to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyAnchor {
    Top,
    Bottom,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BodyParams {
    pub size_px: f64,
    pub inset_x_pct: f64,
    pub anchor: BodyAnchor,
    /// Vertical drift, percent of the body size; positive moves down.
    pub translate_y_pct: f64,
    pub scale: f64,
    pub rotation_deg: f64,
}

/// Blurred glow behind the body.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NebulaParams {
    pub left_pct: f64,
    pub top_pct: f64,
    pub width_pct: f64,
    pub height_pct: f64,
    pub rotation_deg: f64,
    pub scale: f64,
    pub opacity: f64,
}

/// Cloud bank rolling over the sun as the section scrolls.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CloudBankParams {
    pub top_pct: f64,
    pub left_pct: f64,
    pub width_pct: f64,
    pub height_pct: f64,
    pub scale: f64,
    pub rotation_deg: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MoonPhaseParams {
    /// Horizontal center of the shadow clip circle, percent of the moon box.
    pub clip_center_x_pct: f64,
}

/// Parameters only one celestial type has.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CelestialDetail {
    Sun {
        cloud_bank: CloudBankParams,
    },
    Moon {
        phase: MoonPhaseParams,
        crater_opacity: f64,
    },
}

/// Everything the render layer needs to draw one section's sky.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VisualParams {
    /// Progress actually used by the curves (zero while inactive).
    pub progress: f64,
    pub celestial: CelestialType,
    pub position: LayoutPosition,
    pub is_active: bool,
    pub entrance: EntrancePose,
    pub headline: HeadlinePose,
    pub body: BodyParams,
    pub nebula: NebulaParams,
    pub detail: CelestialDetail,
}

/// Target entrance pose for an activation state.
pub fn entrance_pose(position: LayoutPosition, is_active: bool) -> EntrancePose {
    if is_active {
        EntrancePose::SHOWN
    } else {
        EntrancePose::hidden(position)
    }
}

/// Target headline pose for an activation state.
pub fn headline_pose(is_active: bool) -> HeadlinePose {
    if is_active {
        HeadlinePose::SHOWN
    } else {
        HeadlinePose::HIDDEN
    }
}

fn body(p: f64, celestial: CelestialType) -> BodyParams {
    match celestial {
        // Sets: sinks and shrinks.
        CelestialType::Sun => BodyParams {
            size_px: SUN_SIZE_PX,
            inset_x_pct: BODY_INSET_PCT,
            anchor: BodyAnchor::Bottom,
            translate_y_pct: p * BODY_DRIFT_PCT,
            scale: 1.0 - p * 0.2,
            rotation_deg: p * 20.0,
        },
        // Rises and grows.
        CelestialType::Moon => BodyParams {
            size_px: MOON_SIZE_PX,
            inset_x_pct: BODY_INSET_PCT,
            anchor: BodyAnchor::Top,
            translate_y_pct: -p * BODY_DRIFT_PCT,
            scale: 0.8 + p * 0.3,
            rotation_deg: p * 10.0,
        },
    }
}

fn nebula(p: f64, celestial: CelestialType, position: LayoutPosition) -> NebulaParams {
    let opacity = match celestial {
        CelestialType::Sun => 0.7 - p * 0.7,
        CelestialType::Moon => 0.7 + p * 0.3,
    };
    NebulaParams {
        left_pct: match position {
            LayoutPosition::Left => 70.0,
            LayoutPosition::Right => 10.0,
        },
        top_pct: 10.0,
        width_pct: 40.0,
        height_pct: 50.0,
        rotation_deg: p * 20.0,
        scale: 1.0 + p * 0.3,
        opacity: opacity.clamp(0.0, 1.0),
    }
}

fn detail(p: f64, celestial: CelestialType, position: LayoutPosition) -> CelestialDetail {
    match celestial {
        CelestialType::Sun => CelestialDetail::Sun {
            cloud_bank: CloudBankParams {
                top_pct: 30.0 + p * 40.0,
                left_pct: match position {
                    LayoutPosition::Left => 10.0,
                    LayoutPosition::Right => -50.0,
                },
                width_pct: 140.0,
                height_pct: 70.0,
                scale: 1.0 + p * 0.7,
                rotation_deg: p * 10.0,
            },
        },
        CelestialType::Moon => CelestialDetail::Moon {
            phase: MoonPhaseParams {
                clip_center_x_pct: (50.0 - p * 50.0).max(0.0),
            },
            crater_opacity: (p * 0.8).clamp(0.0, 1.0),
        },
    }
}

/// Map scroll progress and activation to the section's visual parameters.
///
/// An inactive section is drawn at progress zero in its exited pose.
pub fn map_visual_state(
    progress: ScrollProgress,
    celestial: CelestialType,
    position: LayoutPosition,
    is_active: bool,
) -> VisualParams {
    let p = if is_active { progress.get() } else { 0.0 };
    VisualParams {
        progress: p,
        celestial,
        position,
        is_active,
        entrance: entrance_pose(position, is_active),
        headline: headline_pose(is_active),
        body: body(p, celestial),
        nebula: nebula(p, celestial, position),
        detail: detail(p, celestial, position),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/visual/mapper.rs"]
mod tests;
