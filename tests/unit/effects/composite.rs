use super::*;

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 40];
    let src = [0, 0, 0, 0];
    assert_eq!(over(dst, src), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src), src);
}

#[test]
fn over_dst_transparent_returns_src() {
    let dst = [0, 0, 0, 0];
    let src = [100, 110, 120, 200];
    assert_eq!(over(dst, src), src);
}

#[test]
fn translucent_black_darkens_opaque_dst() {
    // 80/255 black over an opaque purple keeps alpha at 255 and scales the color.
    let dst = [107, 22, 237, 255];
    let out = over(dst, [0, 0, 0, 80]);
    assert_eq!(out[3], 255);
    assert_eq!(out[0], mul_div255_u8(107, 175));
    assert_eq!(out[2], mul_div255_u8(237, 175));
}

#[test]
fn over_row_blends_each_pixel() {
    let mut dst = vec![0, 0, 0, 255, 0, 0, 0, 255];
    let src = vec![255, 255, 255, 255, 0, 0, 0, 0];
    over_row(&mut dst, &src);
    assert_eq!(dst, vec![255, 255, 255, 255, 0, 0, 0, 255]);
}

#[test]
fn premultiply_then_unpremultiply_is_close() {
    for a in [1u8, 17, 80, 128, 254] {
        let px = [200, 100, 50, a];
        let back = unpremultiply(premultiply(px));
        assert_eq!(back[3], a);
        if a >= 80 {
            for c in 0..3 {
                assert!((i32::from(back[c]) - i32::from(px[c])).abs() <= 2);
            }
        }
    }
    assert_eq!(premultiply([9, 9, 9, 0]), [0, 0, 0, 0]);
    assert_eq!(unpremultiply([1, 2, 3, 255]), [1, 2, 3, 255]);
}
