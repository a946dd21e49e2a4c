use crate::{
    animation::ease::Ease,
    content::model::{CelestialType, LayoutPosition, SectionDescriptor},
    field::element::FieldCategory,
    field::starfield::{StarField, elements_or_empty},
    field::stars::{twinkle_opacity_at, twinkle_scale_at},
    foundation::color::Rgba8,
    foundation::core::{Affine, Point, Vec2, Viewport},
    render::scene::{Paint, SceneNode, SectionScene, Shape, TextRun},
    visual::mapper::{BodyAnchor, BodyParams, CelestialDetail, VisualParams},
};

const SUN_STOPS: [(f64, Rgba8); 4] = [
    (0.0, Rgba8::rgb(255, 245, 224)),
    (0.2, Rgba8::rgb(255, 215, 0)),
    (0.7, Rgba8::rgb(255, 165, 0)),
    (1.0, Rgba8::rgb(255, 140, 0)),
];

const MOON_STOPS: [(f64, Rgba8); 4] = [
    (0.0, Rgba8::rgb(248, 248, 248)),
    (0.3, Rgba8::rgb(230, 230, 230)),
    (0.6, Rgba8::rgb(210, 210, 210)),
    (0.9, Rgba8::rgb(180, 180, 180)),
];

/// Distance a shooting star's head covers over one streak, in pixels.
const STREAK_TRAVEL_PX: f64 = 300.0;

/// Period of one full turn of the sun's halo, in seconds.
const HALO_SPIN_S: f64 = 60.0;

/// Period of the sun flare's pulse, in seconds.
const FLARE_PULSE_S: f64 = 4.0;

/// Halo rotation in degrees at `time_s`, one linear turn per [`HALO_SPIN_S`].
fn halo_spin_deg(time_s: f64) -> f64 {
    let turn = (time_s.max(0.0) / HALO_SPIN_S).fract();
    360.0 * Ease::Linear.apply(turn)
}

/// Flare opacity at `time_s`: 1 at the ends of each pulse, 0.7 halfway.
fn flare_opacity(time_s: f64) -> f64 {
    let phase = (time_s.max(0.0) / FLARE_PULSE_S).fract();
    let tri = 1.0 - (2.0 * phase - 1.0).abs();
    1.0 - 0.3 * Ease::InOutQuad.apply(tri)
}

fn deg(v: f64) -> f64 {
    v.to_radians()
}

fn background(desc: &SectionDescriptor, vp: Viewport) -> Vec<SceneNode> {
    let bg = desc.background;
    let paint = if bg.is_solid() {
        Paint::Solid(bg.from)
    } else {
        Paint::Vertical(bg.stops())
    };
    let overlay = desc.theme.overlay_color();
    vec![
        SceneNode::shape(
            Shape::Rect {
                x: 0.0,
                y: 0.0,
                w: vp.width,
                h: vp.height,
            },
            paint,
        )
        .with_id("background"),
        SceneNode::shape(
            Shape::Rect {
                x: 0.0,
                y: 0.0,
                w: vp.width,
                h: vp.height,
            },
            Paint::Vertical(vec![
                (0.0, Rgba8::rgba(overlay.r, overlay.g, overlay.b, 0)),
                (1.0, overlay),
            ]),
        )
        .with_id("theme-overlay"),
    ]
}

fn stars(field: Option<&StarField>, vp: Viewport, time_s: f64) -> SceneNode {
    let mut children = Vec::new();
    for s in elements_or_empty(field, FieldCategory::Static) {
        let center = Point::new(vp.pct_x(s.left), vp.pct_y(s.top));
        if s.size > 1.0 {
            children.push(
                SceneNode::shape(
                    Shape::Circle {
                        center,
                        r: s.size + 1.0,
                    },
                    Paint::Solid(Rgba8::WHITE),
                )
                .with_opacity(s.opacity * 0.35),
            );
        }
        children.push(
            SceneNode::shape(
                Shape::Circle {
                    center,
                    r: s.size / 2.0,
                },
                Paint::Solid(Rgba8::WHITE),
            )
            .with_id(s.id.clone())
            .with_opacity(s.opacity),
        );
    }
    for s in elements_or_empty(field, FieldCategory::Twinkle) {
        let center = Point::new(vp.pct_x(s.left), vp.pct_y(s.top));
        children.push(
            SceneNode::shape(
                Shape::Circle {
                    center,
                    r: s.size / 2.0 * twinkle_scale_at(s, time_s),
                },
                Paint::Solid(Rgba8::WHITE),
            )
            .with_id(s.id.clone())
            .with_opacity(twinkle_opacity_at(s, time_s)),
        );
    }
    SceneNode::group(Affine::IDENTITY, children).with_id("starfield")
}

fn shooting_stars(field: Option<&StarField>, vp: Viewport, time_s: f64) -> SceneNode {
    let mut children = Vec::new();
    for s in field.map(|f| f.shooting_stars.as_slice()).unwrap_or_default() {
        let e = &s.element;
        let (Some(delay), Some(duration)) = (e.animation_delay_s, e.animation_duration_s) else {
            continue;
        };
        if time_s < delay || duration <= 0.0 {
            continue;
        }
        let phase = ((time_s - delay) / duration).fract();
        let dir = Vec2::from_angle(deg(s.angle_deg));
        let head = Point::new(vp.pct_x(e.left), vp.pct_y(e.top)) + dir * (phase * STREAK_TRAVEL_PX);
        let fade = e.opacity * (1.0 - phase);

        let mut streak = vec![
            SceneNode::shape(
                Shape::Line {
                    from: head - dir * s.tail_length,
                    to: head,
                    width: e.size / 2.0,
                },
                Paint::Horizontal(vec![
                    (0.0, Rgba8::rgba(255, 255, 255, 0)),
                    (1.0, Rgba8::WHITE),
                ]),
            ),
            SceneNode::shape(
                Shape::Circle {
                    center: head,
                    r: e.size / 2.0,
                },
                Paint::Solid(Rgba8::WHITE),
            ),
        ];
        for p in &s.trail {
            let d = Vec2::from_angle(deg(s.angle_deg + p.angle_offset_deg));
            streak.push(
                SceneNode::shape(
                    Shape::Circle {
                        center: head - d * p.distance_from_head,
                        r: p.size / 2.0,
                    },
                    Paint::Solid(Rgba8::WHITE),
                )
                .with_opacity(p.opacity),
            );
        }
        children.push(
            SceneNode::group(Affine::IDENTITY, streak)
                .with_id(e.id.clone())
                .with_opacity(fade),
        );
    }
    SceneNode::group(Affine::IDENTITY, children).with_id("shooting-stars")
}

fn drifting_clouds(field: Option<&StarField>, vp: Viewport, time_s: f64) -> SceneNode {
    let mut children = Vec::new();
    for c in field.map(|f| f.clouds.as_slice()).unwrap_or_default() {
        let w = c.size * c.scale;
        children.push(
            SceneNode::shape(
                Shape::Ellipse {
                    center: Point::new(vp.pct_x(c.left_at(time_s)), vp.pct_y(c.top)),
                    rx: w / 2.0,
                    ry: w / 4.0,
                },
                Paint::Solid(Rgba8::WHITE),
            )
            .with_id(c.id.clone())
            .with_opacity(c.opacity)
            .with_blur(6.0),
        );
    }
    SceneNode::group(Affine::IDENTITY, children).with_id("clouds")
}

fn nebula(params: &VisualParams, vp: Viewport) -> SceneNode {
    let n = params.nebula;
    let center = Point::new(
        vp.pct_x(n.left_pct + n.width_pct / 2.0),
        vp.pct_y(n.top_pct + n.height_pct / 2.0),
    );
    let xf = Affine::translate(center.to_vec2())
        * Affine::rotate(deg(n.rotation_deg))
        * Affine::scale(n.scale);
    SceneNode::group(
        xf,
        vec![
            SceneNode::shape(
                Shape::Ellipse {
                    center: Point::ORIGIN,
                    rx: vp.pct_x(n.width_pct) / 2.0,
                    ry: vp.pct_y(n.height_pct) / 2.0,
                },
                Paint::Radial(vec![
                    (0.0, Rgba8::rgba(100, 50, 200, 77)),
                    (0.7, Rgba8::rgba(100, 50, 200, 0)),
                ]),
            )
            .with_blur(30.0),
        ],
    )
    .with_id("nebula")
    .with_opacity(n.opacity)
}

/// Center of the body box before drift, in viewport pixels.
fn body_home(body: &BodyParams, position: LayoutPosition, vp: Viewport) -> Point {
    let half = body.size_px / 2.0;
    let x = match position {
        LayoutPosition::Left => vp.pct_x(body.inset_x_pct) + half,
        LayoutPosition::Right => vp.width - vp.pct_x(body.inset_x_pct) - half,
    };
    let y = match body.anchor {
        BodyAnchor::Top => vp.pct_y(10.0) + half,
        BodyAnchor::Bottom => vp.height - vp.pct_y(10.0) - half,
    };
    Point::new(x, y)
}

fn body(params: &VisualParams, field: Option<&StarField>, vp: Viewport, time_s: f64) -> SceneNode {
    let b = params.body;
    let r = b.size_px / 2.0;
    let home = body_home(&b, params.position, vp);
    let drift = Vec2::new(0.0, b.translate_y_pct / 100.0 * b.size_px);
    let placement = Affine::translate((home + drift).to_vec2()) * Affine::scale(b.scale);

    let disc = Shape::Circle {
        center: Point::ORIGIN,
        r,
    };
    let mut face = Vec::new();
    match (params.celestial, params.detail) {
        (CelestialType::Sun, _) => {
            for (radius, alpha) in [(r + 60.0, 51), (r + 35.0, 77), (r + 15.0, 128)] {
                face.push(
                    SceneNode::shape(
                        Shape::Circle {
                            center: Point::ORIGIN,
                            r: radius,
                        },
                        Paint::Solid(Rgba8::rgba(255, 190, 0, alpha)),
                    )
                    .with_blur(20.0),
                );
            }
            face.push(SceneNode::shape(disc, Paint::Radial(SUN_STOPS.to_vec())).with_id("sun"));
            let halo = SceneNode::shape(
                Shape::Circle {
                    center: Point::ORIGIN,
                    r: r * 1.5,
                },
                Paint::Radial(vec![
                    (0.4, Rgba8::rgba(255, 255, 255, 0)),
                    (0.5, Rgba8::rgba(255, 255, 255, 26)),
                    (0.6, Rgba8::rgba(255, 255, 255, 0)),
                ]),
            )
            .with_blur(5.0)
            .with_opacity(0.8);
            face.push(
                SceneNode::group(Affine::rotate(deg(halo_spin_deg(time_s))), vec![halo])
                    .with_id("sun-halo"),
            );
            let flare = SceneNode::shape(
                Shape::Wedge {
                    center: Point::ORIGIN,
                    r: r * 1.5,
                    start_deg: 345.0,
                    sweep_deg: 10.0,
                },
                Paint::Solid(Rgba8::rgba(255, 200, 50, 204)),
            )
            .with_blur(2.0);
            face.push(
                SceneNode::group(Affine::IDENTITY, vec![flare])
                    .with_id("sun-flare")
                    .with_opacity(flare_opacity(time_s))
                    .with_clip(disc),
            );
        }
        (
            CelestialType::Moon,
            CelestialDetail::Moon {
                phase,
                crater_opacity,
            },
        ) => {
            face.push(
                SceneNode::shape(
                    Shape::Circle {
                        center: Point::ORIGIN,
                        r: r + 20.0,
                    },
                    Paint::Solid(Rgba8::rgba(230, 230, 230, 77)),
                )
                .with_blur(15.0),
            );
            face.push(SceneNode::shape(disc, Paint::Radial(MOON_STOPS.to_vec())).with_id("moon"));
            face.push(
                SceneNode::group(
                    Affine::IDENTITY,
                    vec![
                        SceneNode::shape(
                            Shape::Rect {
                                x: -r,
                                y: -r,
                                w: b.size_px,
                                h: b.size_px,
                            },
                            Paint::Noise {
                                base_frequency: 0.1,
                                octaves: 5,
                            },
                        )
                        .with_opacity(0.3),
                    ],
                )
                .with_id("moon-surface")
                .with_opacity(0.4)
                .with_clip(disc),
            );

            let craters: Vec<SceneNode> = field
                .map(|f| f.craters.as_slice())
                .unwrap_or_default()
                .iter()
                .map(|c| {
                    let size = c.size_px;
                    let center = Point::new(
                        -r + c.left / 100.0 * b.size_px + size / 2.0,
                        -r + c.top / 100.0 * b.size_px + size / 2.0,
                    );
                    SceneNode::shape(
                        Shape::Circle {
                            center,
                            r: size / 2.0,
                        },
                        Paint::Radial(vec![
                            (0.0, Rgba8::rgb(0xd8, 0xd8, 0xd8)),
                            (0.8, Rgba8::rgb(0xa8, 0xa8, 0xa8)),
                            (1.0, Rgba8::rgba(0, 0, 0, 40 * c.depth)),
                        ]),
                    )
                    .with_id(c.id.clone())
                })
                .collect();
            face.push(
                SceneNode::group(Affine::IDENTITY, craters)
                    .with_id("craters")
                    .with_opacity(crater_opacity)
                    .with_clip(disc),
            );

            let clip_x = -r + phase.clip_center_x_pct / 100.0 * b.size_px;
            let shadow = SceneNode::group(
                Affine::IDENTITY,
                vec![SceneNode::shape(
                    Shape::Rect {
                        x: -r,
                        y: -r,
                        w: b.size_px,
                        h: b.size_px,
                    },
                    Paint::Horizontal(vec![
                        (0.0, Rgba8::rgba(20, 20, 40, 230)),
                        (1.0, Rgba8::rgba(20, 20, 40, 0)),
                    ]),
                )],
            )
            .with_id("moon-phase")
            .with_clip(Shape::Circle {
                center: Point::new(clip_x, 0.0),
                r,
            });
            face.push(SceneNode::group(Affine::IDENTITY, vec![shadow]).with_clip(disc));
        }
        (CelestialType::Moon, CelestialDetail::Sun { .. }) => {
            face.push(SceneNode::shape(disc, Paint::Radial(MOON_STOPS.to_vec())).with_id("moon"));
        }
    }

    SceneNode::group(
        placement,
        vec![SceneNode::group(Affine::rotate(deg(b.rotation_deg)), face)],
    )
    .with_id("body")
}

fn cloud_bank(params: &VisualParams, vp: Viewport) -> Option<SceneNode> {
    let CelestialDetail::Sun { cloud_bank: c } = params.detail else {
        return None;
    };
    let center = Point::new(
        vp.pct_x(c.left_pct + c.width_pct / 2.0),
        vp.pct_y(c.top_pct + c.height_pct / 2.0),
    );
    let xf = Affine::translate(center.to_vec2())
        * Affine::rotate(deg(c.rotation_deg))
        * Affine::scale(c.scale);
    Some(
        SceneNode::group(
            xf,
            vec![
                SceneNode::shape(
                    Shape::Ellipse {
                        center: Point::ORIGIN,
                        rx: vp.pct_x(c.width_pct) / 2.0,
                        ry: vp.pct_y(c.height_pct) / 2.0,
                    },
                    Paint::Radial(vec![
                        (0.2, Rgba8::rgba(255, 255, 255, 242)),
                        (0.5, Rgba8::rgba(255, 255, 255, 178)),
                        (1.0, Rgba8::rgba(255, 255, 255, 0)),
                    ]),
                )
                .with_blur(20.0),
            ],
        )
        .with_id("cloud-bank"),
    )
}

/// Greedy word wrap to at most `max_chars` per line.
pub(crate) fn wrap_words(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > max_chars {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

fn headline(desc: &SectionDescriptor, params: &VisualParams, vp: Viewport) -> SceneNode {
    let title_px = (vp.width * 0.05).clamp(40.0, 64.0);
    let subtitle_px = (vp.width * 0.03).clamp(19.2, 32.0);
    let color = desc.theme.text_color();
    let (shadow_blur, shadow_opacity) = desc.theme.text_shadow();
    let max_chars = ((vp.width.min(896.0) - 80.0) / (subtitle_px * 0.5)).max(10.0) as usize;

    let title = TextRun {
        lines: wrap_words(&desc.title, max_chars / 2),
        center_x: vp.width / 2.0,
        baseline_y: vp.height / 2.0 - subtitle_px,
        size_px: title_px,
        line_height: title_px * 1.2,
        bold: true,
        color,
    };
    let subtitle = TextRun {
        lines: wrap_words(&desc.description, max_chars),
        center_x: vp.width / 2.0,
        baseline_y: vp.height / 2.0 + title_px * 0.5 + subtitle_px,
        size_px: subtitle_px,
        line_height: subtitle_px * 1.5,
        bold: false,
        color,
    };

    let mut children = Vec::new();
    for run in [title, subtitle] {
        let shadow = TextRun {
            color: Rgba8::BLACK,
            baseline_y: run.baseline_y + 2.0,
            ..run.clone()
        };
        children.push(SceneNode::Text {
            run: shadow,
            opacity: shadow_opacity,
            blur: Some(shadow_blur / 2.0),
        });
        children.push(SceneNode::Text {
            run,
            opacity: 1.0,
            blur: None,
        });
    }
    SceneNode::group(
        Affine::translate(Vec2::new(0.0, params.headline.translate_y_px)),
        children,
    )
    .with_id("headline")
    .with_opacity(params.headline.opacity)
}

/// Build the scene for one section.
///
/// `field` may be `None` before the decorative field exists; the sky is then drawn without
/// stars, clouds or craters. `time_s` drives the looping decorations (twinkles, streaks,
/// cloud drift, the sun's halo and flare).
#[tracing::instrument(level = "debug", skip_all, fields(celestial = ?params.celestial, progress = params.progress))]
pub fn build_section_scene(
    desc: &SectionDescriptor,
    params: &VisualParams,
    field: Option<&StarField>,
    viewport: Viewport,
    time_s: f64,
) -> SectionScene {
    let vp = viewport;
    let mut sky = vec![stars(field, vp, time_s), nebula(params, vp)];
    match params.celestial {
        CelestialType::Sun => sky.push(drifting_clouds(field, vp, time_s)),
        CelestialType::Moon => sky.push(shooting_stars(field, vp, time_s)),
    }
    sky.push(body(params, field, vp, time_s));
    sky.extend(cloud_bank(params, vp));

    let entrance = Affine::translate(Vec2::new(
        params.entrance.translate_x_pct / 100.0 * vp.width,
        0.0,
    ));
    let layer = SceneNode::group(entrance, sky)
        .with_id("celestial-layer")
        .with_opacity(params.entrance.opacity)
        .with_clip(Shape::Rect {
            x: 0.0,
            y: 0.0,
            w: vp.width,
            h: vp.height,
        });

    let mut nodes = background(desc, vp);
    nodes.push(layer);
    nodes.push(headline(desc, params, vp));
    SectionScene {
        width: vp.width,
        height: vp.height,
        nodes,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/build.rs"]
mod tests;
