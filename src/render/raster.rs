use std::path::Path;

use anyhow::Context;

use crate::foundation::error::{SkyError, SkyResult};

/// Rendered RGBA8 pixels, row-major, tightly packed.
#[derive(Clone, Debug)]
pub struct FrameRgba {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

impl FrameRgba {
    /// Straight-alpha RGBA at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + x as usize) * 4;
        let mut px = [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]];
        if self.premultiplied {
            unpremultiply_in_place(&mut px);
        }
        Some(px)
    }

    /// Convert to straight alpha in place; a no-op for frames that already are.
    pub fn into_straight(mut self) -> Self {
        if self.premultiplied {
            unpremultiply_in_place(&mut self.data);
            self.premultiplied = false;
        }
        self
    }
}

pub(crate) fn unpremultiply_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[1] = ((px[1] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[2] = ((px[2] as u16 * 255 + a / 2) / a).min(255) as u8;
    }
}

fn to_px(v: f32) -> SkyResult<u32> {
    if !v.is_finite() || v <= 0.0 {
        return Err(SkyError::render("svg has invalid width/height"));
    }
    Ok((v.ceil() as u32).max(1))
}

/// Largest raster edge accepted, in pixels.
const MAX_DIM: u32 = 16_384;

/// Rasterize an SVG document at its intrinsic size.
///
/// Text is shaped with the system fonts; on a machine without any, text nodes are dropped
/// and the rest of the scene still renders.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = svg.len()))]
pub fn rasterize_svg(svg: &str) -> SkyResult<FrameRgba> {
    let mut opts = usvg::Options::default();
    opts.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &opts)
        .context("parse svg tree")
        .map_err(SkyError::from)?;

    let size = tree.size();
    let width = to_px(size.width())?;
    let height = to_px(size.height())?;
    if width > MAX_DIM || height > MAX_DIM {
        return Err(SkyError::render(format!(
            "svg raster size too large: {width}x{height} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| SkyError::render("failed to allocate svg pixmap"))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::identity(),
        &mut pixmap.as_mut(),
    );
    tracing::debug!(width, height, "rasterized section");

    Ok(FrameRgba {
        width,
        height,
        data: pixmap.take(),
        premultiplied: true,
    })
}

/// Write a frame as PNG, creating the parent directory when needed.
pub fn write_png(frame: &FrameRgba, path: &Path) -> SkyResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let mut straight = frame.data.clone();
    if frame.premultiplied {
        unpremultiply_in_place(&mut straight);
    }

    image::save_buffer_with_format(
        path,
        &straight,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
