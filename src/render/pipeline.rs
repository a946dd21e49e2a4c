use crate::{
    foundation::error::{SkyError, SkyResult},
    foundation::math::Fnv1a64,
    page::controller::PageController,
    render::{
        build::build_section_scene,
        raster::{FrameRgba, rasterize_svg},
        scene::SectionScene,
        svg::to_svg,
    },
};

/// Scene for section `index` of a page at time `now_s`.
///
/// Pipeline:
/// 1. [`PageController::visual_state`]
/// 2. [`build_section_scene`] with the page's field and viewport
#[tracing::instrument(level = "debug", skip(page))]
pub fn render_section_scene(
    page: &PageController,
    index: usize,
    now_s: f64,
) -> SkyResult<SectionScene> {
    let desc = page
        .content()
        .get(index)
        .ok_or_else(|| SkyError::validation(format!("no section at index {index}")))?;
    let params = page.visual_state(index, now_s)?;
    Ok(build_section_scene(
        desc,
        &params,
        Some(page.field()),
        page.config().viewport,
        now_s,
    ))
}

/// [`render_section_scene`] serialized as SVG.
pub fn render_section_svg(page: &PageController, index: usize, now_s: f64) -> SkyResult<String> {
    render_section_scene(page, index, now_s).map(|scene| to_svg(&scene))
}

/// [`render_section_svg`] rasterized at the page viewport size.
///
/// Returns a [`FrameRgba`] containing **premultiplied** RGBA8 pixels.
pub fn render_section_frame(
    page: &PageController,
    index: usize,
    now_s: f64,
) -> SkyResult<FrameRgba> {
    let svg = render_section_svg(page, index, now_s)?;
    rasterize_svg(&svg)
}

/// Stable digest of a serialized scene, for snapshot comparisons.
pub fn svg_digest(svg: &str) -> u64 {
    let mut h = Fnv1a64::new_default();
    h.write_str(svg);
    h.finish()
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
