use super::*;
use crate::config::site::SiteConfig;
use crate::content::model::SiteContent;
use crate::foundation::core::ScrollProgress;

fn page() -> PageController {
    PageController::new(SiteContent::default(), SiteConfig::default()).unwrap()
}

#[test]
fn same_page_state_gives_identical_svg() {
    let mut a = page();
    let mut b = page();
    a.scroll_to(1, ScrollProgress::new(0.4), 2.0).unwrap();
    b.scroll_to(1, ScrollProgress::new(0.4), 2.0).unwrap();

    let svg_a = render_section_svg(&a, 1, 3.5).unwrap();
    let svg_b = render_section_svg(&b, 1, 3.5).unwrap();
    assert_eq!(svg_a, svg_b);
    assert_eq!(svg_digest(&svg_a), svg_digest(&svg_b));
}

#[test]
fn time_moves_the_decorations() {
    let p = page();
    let early = render_section_svg(&p, 0, 1.0).unwrap();
    let late = render_section_svg(&p, 0, 9.0).unwrap();
    assert_ne!(svg_digest(&early), svg_digest(&late));
}

#[test]
fn unknown_section_is_an_error() {
    let p = page();
    assert!(matches!(
        render_section_scene(&p, 9, 0.0),
        Err(SkyError::Validation(_))
    ));
}

#[test]
fn frame_matches_viewport() {
    let p = page();
    let frame = render_section_frame(&p, 0, 2.0).unwrap();
    let vp = p.config().viewport;
    assert_eq!(frame.width, vp.width as u32);
    assert_eq!(frame.height, vp.height as u32);
    assert!(frame.premultiplied);
}
