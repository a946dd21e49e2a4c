//! SVG serialization of a [`SectionScene`].
//!
//! Output is a pure function of the scene: definitions get sequential ids in traversal order
//! and every number goes through [`fmt_num`], so equal scenes give byte-identical documents.

use std::fmt::Write as _;

use crate::{
    foundation::core::{Affine, Point},
    render::scene::{Paint, SceneNode, SectionScene, Shape, Stop, TextRun},
};

/// Format a coordinate with at most three decimals and no trailing zeros.
///
/// Non-finite values and negative zero both print as `0`.
pub fn fmt_num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_owned();
    }
    let mut s = format!("{v:.3}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s = "0".to_owned();
    }
    s
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Write the opening tag and geometry attributes of `shape`, leaving the element open.
fn write_geometry(out: &mut String, shape: &Shape) {
    let _ = match *shape {
        Shape::Rect { x, y, w, h } => write!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}""#,
            fmt_num(x),
            fmt_num(y),
            fmt_num(w.max(0.0)),
            fmt_num(h.max(0.0))
        ),
        Shape::Circle { center, r } => write!(
            out,
            r#"<circle cx="{}" cy="{}" r="{}""#,
            fmt_num(center.x),
            fmt_num(center.y),
            fmt_num(r.max(0.0))
        ),
        Shape::Wedge { center, r, sweep_deg, .. } if sweep_deg.abs() >= 360.0 => {
            return write_geometry(out, &Shape::Circle { center, r });
        }
        Shape::Wedge {
            center,
            r,
            start_deg,
            sweep_deg,
        } => {
            let rim = |deg: f64| {
                let (sin, cos) = deg.to_radians().sin_cos();
                Point::new(center.x + r * sin, center.y - r * cos)
            };
            let (a, b) = (rim(start_deg), rim(start_deg + sweep_deg));
            write!(
                out,
                r#"<path d="M{} {} L{} {} A{} {} 0 {} {} {} {} Z""#,
                fmt_num(center.x),
                fmt_num(center.y),
                fmt_num(a.x),
                fmt_num(a.y),
                fmt_num(r),
                fmt_num(r),
                u8::from(sweep_deg.abs() > 180.0),
                u8::from(sweep_deg >= 0.0),
                fmt_num(b.x),
                fmt_num(b.y)
            )
        }
        Shape::Ellipse { center, rx, ry } => write!(
            out,
            r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}""#,
            fmt_num(center.x),
            fmt_num(center.y),
            fmt_num(rx.max(0.0)),
            fmt_num(ry.max(0.0))
        ),
        Shape::Line { from, to, .. } => write!(
            out,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
            fmt_num(from.x),
            fmt_num(from.y),
            fmt_num(to.x),
            fmt_num(to.y)
        ),
    };
}

#[derive(Default)]
struct SvgWriter {
    defs: String,
    body: String,
    next_id: usize,
}

impl SvgWriter {
    fn fresh(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}{}", self.next_id)
    }

    fn stops(&mut self, stops: &[Stop]) {
        for (offset, c) in stops {
            let _ = write!(
                self.defs,
                r#"<stop offset="{}" stop-color="{}""#,
                fmt_num(offset.clamp(0.0, 1.0)),
                c.to_hex_rgb()
            );
            if c.a != 255 {
                let _ = write!(self.defs, r#" stop-opacity="{}""#, fmt_num(c.opacity()));
            }
            self.defs.push_str("/>");
        }
    }

    /// Emit the paint server (if any) and return the attribute value referencing it.
    ///
    /// `along` pins a horizontal gradient to a segment in user space; lines have a degenerate
    /// bounding box in one axis and cannot use bounding-box units.
    fn paint(&mut self, paint: &Paint, along: Option<(Point, Point)>) -> String {
        let (tag, geometry, stops) = match paint {
            Paint::Solid(c) => return c.to_hex_rgb(),
            Paint::Vertical(s) => ("linearGradient", r#"x1="0" y1="0" x2="0" y2="1""#.to_owned(), s),
            Paint::Horizontal(s) => {
                let geometry = match along {
                    Some((a, b)) => format!(
                        r#"gradientUnits="userSpaceOnUse" x1="{}" y1="{}" x2="{}" y2="{}""#,
                        fmt_num(a.x),
                        fmt_num(a.y),
                        fmt_num(b.x),
                        fmt_num(b.y)
                    ),
                    None => r#"x1="0" y1="0" x2="1" y2="0""#.to_owned(),
                };
                ("linearGradient", geometry, s)
            }
            Paint::Radial(s) => ("radialGradient", r#"cx="0.5" cy="0.5" r="0.5""#.to_owned(), s),
            Paint::Noise { .. } => return "#000000".to_owned(),
        };
        let id = self.fresh("g");
        let _ = write!(self.defs, r#"<{tag} id="{id}" {geometry}>"#);
        self.stops(stops);
        let _ = write!(self.defs, "</{tag}>");
        format!("url(#{id})")
    }

    fn solid_opacity(paint: &Paint) -> Option<f64> {
        match paint {
            Paint::Solid(c) if c.a != 255 => Some(c.opacity()),
            _ => None,
        }
    }

    fn blur_filter(&mut self, sigma: f64) -> String {
        let id = self.fresh("f");
        let _ = write!(
            self.defs,
            r#"<filter id="{id}" x="-50%" y="-50%" width="200%" height="200%"><feGaussianBlur stdDeviation="{}"/></filter>"#,
            fmt_num(sigma)
        );
        format!("url(#{id})")
    }

    fn clip_path(&mut self, outline: &Shape) -> String {
        let id = self.fresh("c");
        let _ = write!(self.defs, r#"<clipPath id="{id}">"#);
        write_geometry(&mut self.defs, outline);
        self.defs.push_str("/></clipPath>");
        format!("url(#{id})")
    }

    fn noise_filter(&mut self, base_frequency: f64, octaves: u32) -> String {
        let id = self.fresh("f");
        let _ = write!(
            self.defs,
            r#"<filter id="{id}" x="0%" y="0%" width="100%" height="100%"><feTurbulence type="fractalNoise" baseFrequency="{}" numOctaves="{octaves}" stitchTiles="stitch"/></filter>"#,
            fmt_num(base_frequency)
        );
        format!("url(#{id})")
    }

    fn common_attrs(&mut self, id: Option<&str>, opacity: f64, blur: Option<f64>) -> String {
        let mut attrs = String::new();
        if let Some(id) = id {
            let _ = write!(attrs, r#" id="{}""#, escape_xml(id));
        }
        if opacity < 1.0 {
            let _ = write!(attrs, r#" opacity="{}""#, fmt_num(opacity));
        }
        if let Some(sigma) = blur.filter(|s| *s > 0.0) {
            let filter = self.blur_filter(sigma);
            let _ = write!(attrs, r#" filter="{filter}""#);
        }
        attrs
    }

    fn shape(&mut self, id: Option<&str>, shape: &Shape, paint: &Paint, opacity: f64, blur: Option<f64>) {
        // A noise fill owns the element's filter slot.
        let blur = blur.filter(|_| !matches!(paint, Paint::Noise { .. }));
        let mut attrs = self.common_attrs(id, opacity, blur);
        if let Shape::Line { from, to, width } = *shape {
            let stroke = self.paint(paint, Some((from, to)));
            write_geometry(&mut self.body, shape);
            let _ = write!(
                self.body,
                r#" stroke="{stroke}" stroke-width="{}" stroke-linecap="round""#,
                fmt_num(width)
            );
            if let Some(a) = Self::solid_opacity(paint) {
                let _ = write!(self.body, r#" stroke-opacity="{}""#, fmt_num(a));
            }
            let _ = write!(self.body, "{attrs}/>");
            return;
        }

        let fill = match *paint {
            Paint::Noise {
                base_frequency,
                octaves,
            } => {
                let filter = self.noise_filter(base_frequency, octaves);
                let _ = write!(attrs, r#" filter="{filter}""#);
                "#000000".to_owned()
            }
            _ => self.paint(paint, None),
        };
        write_geometry(&mut self.body, shape);
        let _ = write!(self.body, r#" fill="{fill}""#);
        if let Some(a) = Self::solid_opacity(paint) {
            let _ = write!(self.body, r#" fill-opacity="{}""#, fmt_num(a));
        }
        let _ = write!(self.body, "{attrs}/>");
    }

    fn text(&mut self, run: &TextRun, opacity: f64, blur: Option<f64>) {
        if run.lines.is_empty() {
            return;
        }
        let attrs = self.common_attrs(None, opacity, blur);
        let _ = write!(
            self.body,
            r#"<text x="{}" y="{}" font-family="sans-serif" font-size="{}" text-anchor="middle" fill="{}""#,
            fmt_num(run.center_x),
            fmt_num(run.baseline_y),
            fmt_num(run.size_px),
            run.color.to_hex_rgb()
        );
        if run.color.a != 255 {
            let _ = write!(self.body, r#" fill-opacity="{}""#, fmt_num(run.color.opacity()));
        }
        if run.bold {
            self.body.push_str(r#" font-weight="bold""#);
        }
        let _ = write!(self.body, "{attrs}>");
        for (i, line) in run.lines.iter().enumerate() {
            let dy = if i == 0 { 0.0 } else { run.line_height };
            let _ = write!(
                self.body,
                r#"<tspan x="{}" dy="{}">{}</tspan>"#,
                fmt_num(run.center_x),
                fmt_num(dy),
                escape_xml(line)
            );
        }
        self.body.push_str("</text>");
    }

    fn node(&mut self, node: &SceneNode) {
        match node {
            SceneNode::Shape {
                id,
                shape,
                paint,
                opacity,
                blur,
            } => self.shape(id.as_deref(), shape, paint, *opacity, *blur),
            SceneNode::Text { run, opacity, blur } => self.text(run, *opacity, *blur),
            SceneNode::Group {
                id,
                transform,
                opacity,
                clip,
                children,
            } => {
                let mut attrs = self.common_attrs(id.as_deref(), *opacity, None);
                if *transform != Affine::IDENTITY {
                    let c = transform.as_coeffs();
                    let _ = write!(
                        attrs,
                        r#" transform="matrix({} {} {} {} {} {})""#,
                        fmt_num(c[0]),
                        fmt_num(c[1]),
                        fmt_num(c[2]),
                        fmt_num(c[3]),
                        fmt_num(c[4]),
                        fmt_num(c[5])
                    );
                }
                if let Some(outline) = clip {
                    let clip = self.clip_path(outline);
                    let _ = write!(attrs, r#" clip-path="{clip}""#);
                }
                let _ = write!(self.body, "<g{attrs}>");
                for child in children {
                    self.node(child);
                }
                self.body.push_str("</g>");
            }
        }
    }
}

/// Serialize a scene as a standalone SVG document.
pub fn to_svg(scene: &SectionScene) -> String {
    let mut w = SvgWriter::default();
    for node in &scene.nodes {
        w.node(node);
    }
    let width = fmt_num(scene.width);
    let height = fmt_num(scene.height);
    let mut out = String::with_capacity(w.defs.len() + w.body.len() + 256);
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    if !w.defs.is_empty() {
        let _ = write!(out, "<defs>{}</defs>", w.defs);
    }
    out.push_str(&w.body);
    out.push_str("</svg>\n");
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
