use super::*;

#[test]
fn crater_tables() {
    let craters = generate_craters(15);
    assert_eq!(craters.len(), 15);
    assert_eq!(craters[0].size_px, 6.0);
    assert_eq!(craters[1].size_px, 14.0);
    assert_eq!(craters[0].depth, 1);
    assert_eq!(craters[2].depth, 3);
    assert_eq!(craters[0].top, 5.0);
    assert_eq!(craters[1].top, 12.3);
    assert_eq!(craters[1].left, 16.7);
}

#[test]
fn craters_stay_on_the_disc_box() {
    for c in generate_craters(200) {
        assert!((5.0..90.0).contains(&c.top));
        assert!((5.0..90.0).contains(&c.left));
        assert!((1..=3).contains(&c.depth));
    }
}
