use super::*;
use crate::foundation::color::Rgba8;

#[test]
fn numbers_are_trimmed() {
    assert_eq!(fmt_num(1.0), "1");
    assert_eq!(fmt_num(1.5), "1.5");
    assert_eq!(fmt_num(0.12345), "0.123");
    assert_eq!(fmt_num(-0.0001), "0");
    assert_eq!(fmt_num(-2.25), "-2.25");
    assert_eq!(fmt_num(f64::NAN), "0");
    assert_eq!(fmt_num(100.0), "100");
}

#[test]
fn text_is_escaped() {
    assert_eq!(escape_xml(r#"Sun & "sea" <3"#), "Sun &amp; &quot;sea&quot; &lt;3");
}

fn tiny_scene() -> SectionScene {
    SectionScene {
        width: 100.0,
        height: 50.0,
        nodes: vec![
            SceneNode::shape(
                Shape::Rect {
                    x: 0.0,
                    y: 0.0,
                    w: 100.0,
                    h: 50.0,
                },
                Paint::Vertical(vec![(0.0, Rgba8::WHITE), (1.0, Rgba8::rgba(0, 0, 0, 0))]),
            )
            .with_id("bg"),
            SceneNode::group(
                Affine::translate((10.0, 5.0)),
                vec![
                    SceneNode::shape(
                        Shape::Circle {
                            center: Point::ORIGIN,
                            r: 4.0,
                        },
                        Paint::Solid(Rgba8::rgba(255, 0, 0, 128)),
                    )
                    .with_blur(2.0),
                ],
            )
            .with_opacity(0.5)
            .with_clip(Shape::Circle {
                center: Point::ORIGIN,
                r: 3.0,
            }),
        ],
    }
}

#[test]
fn document_structure() {
    let svg = to_svg(&tiny_scene());
    assert!(svg.starts_with(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="50" viewBox="0 0 100 50">"#
    ));
    assert!(svg.ends_with("</svg>\n"));
    assert!(svg.contains(r#"<linearGradient id="g1" x1="0" y1="0" x2="0" y2="1">"#));
    assert!(svg.contains(r#"stop-opacity="0""#));
    assert!(svg.contains(r#"<rect x="0" y="0" width="100" height="50" fill="url(#g1)" id="bg"/>"#));
    assert!(svg.contains(r#"transform="matrix(1 0 0 1 10 5)""#));
    assert!(svg.contains(r#"clip-path="url(#c2)""#));
    assert!(svg.contains(r#"<feGaussianBlur stdDeviation="2"/>"#));
    assert!(svg.contains(r##"fill="#ff0000" fill-opacity="0.502""##));
}

#[test]
fn output_is_stable() {
    assert_eq!(to_svg(&tiny_scene()), to_svg(&tiny_scene()));
}

#[test]
fn text_lines_become_tspans() {
    let scene = SectionScene {
        width: 10.0,
        height: 10.0,
        nodes: vec![SceneNode::Text {
            run: TextRun {
                lines: vec!["one".to_owned(), "two".to_owned()],
                center_x: 5.0,
                baseline_y: 4.0,
                size_px: 2.0,
                line_height: 3.0,
                bold: true,
                color: Rgba8::BLACK,
            },
            opacity: 1.0,
            blur: None,
        }],
    };
    let svg = to_svg(&scene);
    assert!(svg.contains(r#"font-weight="bold""#));
    assert!(svg.contains(r#"<tspan x="5" dy="0">one</tspan><tspan x="5" dy="3">two</tspan>"#));
    assert!(!svg.contains("<defs>"));
}

#[test]
fn clip_outlines_and_wedges() {
    let scene = SectionScene {
        width: 20.0,
        height: 20.0,
        nodes: vec![
            SceneNode::group(
                Affine::IDENTITY,
                vec![SceneNode::shape(
                    Shape::Wedge {
                        center: Point::new(10.0, 10.0),
                        r: 10.0,
                        start_deg: 0.0,
                        sweep_deg: 90.0,
                    },
                    Paint::Solid(Rgba8::WHITE),
                )],
            )
            .with_clip(Shape::Rect {
                x: 0.0,
                y: 0.0,
                w: 20.0,
                h: 20.0,
            }),
        ],
    };
    let svg = to_svg(&scene);
    assert!(svg.contains(r#"<clipPath id="c1"><rect x="0" y="0" width="20" height="20"/></clipPath>"#));
    assert!(svg.contains(r##"<path d="M10 10 L10 0 A10 10 0 0 1 20 10 Z" fill="#ffffff"/>"##));
}

#[test]
fn noise_fill_becomes_turbulence() {
    let scene = SectionScene {
        width: 10.0,
        height: 10.0,
        nodes: vec![
            SceneNode::shape(
                Shape::Rect {
                    x: 0.0,
                    y: 0.0,
                    w: 10.0,
                    h: 10.0,
                },
                Paint::Noise {
                    base_frequency: 0.1,
                    octaves: 5,
                },
            )
            .with_blur(3.0)
            .with_opacity(0.3),
        ],
    };
    let svg = to_svg(&scene);
    assert!(svg.contains(
        r#"<feTurbulence type="fractalNoise" baseFrequency="0.1" numOctaves="5" stitchTiles="stitch"/>"#
    ));
    assert!(svg.contains(r#"opacity="0.3" filter="url(#f1)"/>"#));
    assert!(!svg.contains("feGaussianBlur"));
}
