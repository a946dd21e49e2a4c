//! Declarative scene tree produced for one section.
//!
//! The tree is backend-agnostic: [`crate::render::svg`] serializes it, and everything
//! downstream (rasterizing, PNG encoding) works from that serialization.

use crate::foundation::color::Rgba8;
use crate::foundation::core::{Affine, Point};

/// Gradient stop: offset in `[0, 1]` and color.
pub type Stop = (f64, Rgba8);

#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Rgba8),
    /// Top-to-bottom gradient across the shape's bounding box.
    Vertical(Vec<Stop>),
    /// Left-to-right gradient across the shape's bounding box.
    Horizontal(Vec<Stop>),
    /// Circular gradient centered in the shape's bounding box.
    Radial(Vec<Stop>),
    /// Fractal noise filling the shape's bounding box.
    Noise { base_frequency: f64, octaves: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Rect { x: f64, y: f64, w: f64, h: f64 },
    Circle { center: Point, r: f64 },
    Ellipse { center: Point, rx: f64, ry: f64 },
    Line { from: Point, to: Point, width: f64 },
    /// Circular sector. Angles are in degrees, clockwise from twelve o'clock.
    Wedge {
        center: Point,
        r: f64,
        start_deg: f64,
        sweep_deg: f64,
    },
}

/// Text anchored at its horizontal center.
#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    pub lines: Vec<String>,
    pub center_x: f64,
    pub baseline_y: f64,
    pub size_px: f64,
    pub line_height: f64,
    pub bold: bool,
    pub color: Rgba8,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneNode {
    Shape {
        id: Option<String>,
        shape: Shape,
        paint: Paint,
        opacity: f64,
        /// Gaussian blur standard deviation in pixels.
        blur: Option<f64>,
    },
    Text {
        run: TextRun,
        opacity: f64,
        blur: Option<f64>,
    },
    Group {
        id: Option<String>,
        transform: Affine,
        opacity: f64,
        /// Children are clipped to this outline, in the group's local space.
        clip: Option<Shape>,
        children: Vec<SceneNode>,
    },
}

impl SceneNode {
    pub fn shape(shape: Shape, paint: Paint) -> Self {
        Self::Shape {
            id: None,
            shape,
            paint,
            opacity: 1.0,
            blur: None,
        }
    }

    pub fn group(transform: Affine, children: Vec<SceneNode>) -> Self {
        Self::Group {
            id: None,
            transform,
            opacity: 1.0,
            clip: None,
            children,
        }
    }

    pub fn with_id(mut self, new_id: impl Into<String>) -> Self {
        match &mut self {
            Self::Shape { id, .. } | Self::Group { id, .. } => *id = Some(new_id.into()),
            Self::Text { .. } => {}
        }
        self
    }

    pub fn with_opacity(mut self, value: f64) -> Self {
        match &mut self {
            Self::Shape { opacity, .. }
            | Self::Group { opacity, .. }
            | Self::Text { opacity, .. } => *opacity = value.clamp(0.0, 1.0),
        }
        self
    }

    pub fn with_blur(mut self, sigma: f64) -> Self {
        match &mut self {
            Self::Shape { blur, .. } | Self::Text { blur, .. } => *blur = Some(sigma),
            Self::Group { .. } => {}
        }
        self
    }

    pub fn with_clip(mut self, outline: Shape) -> Self {
        if let Self::Group { clip, .. } = &mut self {
            *clip = Some(outline);
        }
        self
    }

    /// Number of nodes in this subtree, itself included.
    pub fn node_count(&self) -> usize {
        match self {
            Self::Group { children, .. } => 1 + children.iter().map(Self::node_count).sum::<usize>(),
            _ => 1,
        }
    }

    /// Depth-first search for a node by id.
    pub fn find(&self, needle: &str) -> Option<&SceneNode> {
        match self {
            Self::Shape { id, .. } if id.as_deref() == Some(needle) => Some(self),
            Self::Group { id, children, .. } => {
                if id.as_deref() == Some(needle) {
                    return Some(self);
                }
                children.iter().find_map(|c| c.find(needle))
            }
            _ => None,
        }
    }
}

/// The full drawable content of one section.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionScene {
    pub width: f64,
    pub height: f64,
    pub nodes: Vec<SceneNode>,
}

impl SectionScene {
    pub fn node_count(&self) -> usize {
        self.nodes.iter().map(SceneNode::node_count).sum()
    }

    pub fn find(&self, id: &str) -> Option<&SceneNode> {
        self.nodes.iter().find_map(|n| n.find(id))
    }
}
