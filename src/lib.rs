//! Skyscroll renders a day/night celestial scene driven by scroll position.
//!
//! A page is a stack of full-viewport sections, each showing a sun or a moon over a field
//! of decorative stars, clouds and craters. Scrolling through a section moves its body;
//! crossing into the next section swaps the scene and the page theme.
//!
//! # Pipeline overview
//!
//! 1. **Generate**: `FieldCounts -> StarField` (formula-based, identical on every run)
//! 2. **Track**: `scroll offset -> ScrollProgress` for the active section
//! 3. **Map**: `ScrollProgress + section -> VisualParams` (pure)
//! 4. **Build**: `VisualParams + StarField -> SectionScene` (declarative tree)
//! 5. **Output**: `SectionScene -> SVG`, optionally rasterized to PNG
//!
//! [`PageController`] owns the mutable state (active section, trackers, theme) and drives
//! steps 2 and 3 from visibility reports and scroll events.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No entropy**: decorative values are functions of their index only.
//! - **Deterministic output**: a given page state serializes to byte-identical SVG.
#![forbid(unsafe_code)]

mod animation;
mod config;
mod content;
mod field;
mod foundation;
mod page;
mod render;
mod scroll;
mod theme;
mod visual;

pub use animation::ease::Ease;
pub use animation::tween::Tween;
pub use config::site::{DEFAULT_VISIBILITY_THRESHOLD, SiteConfig};
pub use content::model::{
    Background, CelestialType, LayoutPosition, SectionDescriptor, SiteContent, ThemeMode,
};
pub use field::clouds::{Cloud, generate_clouds};
pub use field::craters::{Crater, generate_craters};
pub use field::element::{DecorativeElement, FieldCategory};
pub use field::shooting::{ShootingStar, TrailParticle, generate_shooting_stars};
pub use field::starfield::{FieldCounts, StarField, elements_or_empty};
pub use field::stars::{generate, twinkle_opacity_at, twinkle_scale_at};
pub use foundation::color::Rgba8;
pub use foundation::core::{Affine, Point, ScrollProgress, Vec2, Viewport};
pub use foundation::error::{SkyError, SkyResult};
pub use foundation::math::round2;
pub use page::controller::{PageController, VisibilityReport};
pub use render::build::build_section_scene;
pub use render::pipeline::{
    render_section_frame, render_section_scene, render_section_svg, svg_digest,
};
pub use render::raster::{FrameRgba, rasterize_svg, write_png};
pub use render::scene::{Paint, SceneNode, SectionScene, Shape, Stop, TextRun};
pub use render::svg::{fmt_num, to_svg};
pub use scroll::tracker::{ScrollMetrics, ScrollTracker, scroll_progress};
pub use theme::selector::ThemeSelector;
pub use visual::mapper::{
    BODY_DRIFT_PCT, BODY_INSET_PCT, BodyAnchor, BodyParams, CelestialDetail, CloudBankParams,
    EntrancePose, HEADLINE_OFFSET_PX, HeadlinePose, MOON_SIZE_PX, MoonPhaseParams, NebulaParams,
    SUN_SIZE_PX, VisualParams, entrance_pose, headline_pose, map_visual_state,
};
pub use visual::transition::{
    ENTRANCE_DURATION_S, ENTRANCE_EASE, EntranceTransition, HEADLINE_DURATION_S, HEADLINE_EASE,
    HeadlineTransition,
};
