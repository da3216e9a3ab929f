use super::*;

#[test]
fn from_rgb_is_opaque() {
    let img = RgbImage::from_pixel(2, 2, image::Rgb([1, 2, 3]));
    let s = Surface::from_rgb(&img);
    assert_eq!(s.pixel(1, 1), [1, 2, 3, 255]);
    assert_eq!(s.to_rgb().unwrap(), img);
}

#[test]
fn draw_over_clips_negative_and_overflowing_offsets() {
    let mut dst = Surface::from_rgb(&RgbImage::from_pixel(4, 4, image::Rgb([0, 0, 0])));
    let src = Surface::from_rgb(&RgbImage::from_pixel(3, 3, image::Rgb([255, 255, 255])));

    dst.draw_over(&src, -2, -2);
    assert_eq!(dst.pixel(0, 0), [255, 255, 255, 255]);
    assert_eq!(dst.pixel(1, 0), [0, 0, 0, 255]);

    dst.draw_over(&src, 3, 3);
    assert_eq!(dst.pixel(3, 3), [255, 255, 255, 255]);
    assert_eq!(dst.pixel(2, 3), [0, 0, 0, 255]);

    // Entirely outside: no-op.
    let before = dst.clone();
    dst.draw_over(&src, 10, 0);
    dst.draw_over(&src, 0, -3);
    assert_eq!(dst, before);
}

#[test]
fn from_rgba_premultiplies() {
    let img = RgbaImage::from_pixel(1, 1, image::Rgba([200, 100, 0, 0]));
    assert_eq!(Surface::from_rgba(&img).pixel(0, 0), [0, 0, 0, 0]);
}

#[test]
fn fill_coverage_paints_only_covered_pixels() {
    let mut s = Surface::from_rgb(&RgbImage::from_pixel(3, 1, image::Rgb([0, 0, 0])));
    s.fill_coverage(&[255, 0, 128], 3, 1, 0, 0, Rgb8::WHITE);
    assert_eq!(s.pixel(0, 0), [255, 255, 255, 255]);
    assert_eq!(s.pixel(1, 0), [0, 0, 0, 255]);
    let mid = s.pixel(2, 0);
    assert_eq!(mid[3], 255);
    assert!(mid[0] > 100 && mid[0] < 160);
}

#[test]
fn from_coverage_tints_color() {
    let mask = GrayImage::from_raw(2, 1, vec![0, 255]).unwrap();
    let s = Surface::from_coverage(&mask, Rgb8::new(0, 0, 0));
    assert_eq!(s.pixel(0, 0), [0, 0, 0, 0]);
    assert_eq!(s.pixel(1, 0), [0, 0, 0, 255]);
}

#[test]
fn to_rgb_rejects_mismatched_buffer() {
    let s = Surface {
        width: 2,
        height: 2,
        data: vec![0; 4],
    };
    assert!(matches!(s.to_rgb(), Err(ShotError::Validation(_))));
}
