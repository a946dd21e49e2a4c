use super::*;

#[test]
fn unpremultiply_restores_straight_alpha() {
    let mut px = [64u8, 32, 0, 128, 10, 10, 10, 0];
    unpremultiply_in_place(&mut px);
    assert_eq!(px, [128, 64, 0, 128, 0, 0, 0, 0]);
}

#[test]
fn rasterizes_solid_rect() {
    let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="3"><rect width="4" height="3" fill="#ff0000"/></svg>"##;
    let frame = rasterize_svg(svg).unwrap();
    assert_eq!((frame.width, frame.height), (4, 3));
    assert_eq!(frame.data.len(), 4 * 3 * 4);
    assert_eq!(frame.pixel(1, 1), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(4, 0), None);
}

#[test]
fn rejects_malformed_svg() {
    assert!(rasterize_svg("<svg").is_err());
}

#[test]
fn writes_png_into_new_directory() {
    let dir = std::env::temp_dir().join(format!("skyscroll-raster-{}", std::process::id()));
    let path = dir.join("nested").join("frame.png");
    let frame = FrameRgba {
        width: 2,
        height: 1,
        data: vec![128, 0, 0, 128, 0, 0, 0, 0],
        premultiplied: true,
    };
    write_png(&frame, &path).unwrap();

    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 128]);
    let _ = std::fs::remove_dir_all(&dir);
}
