use super::*;

#[test]
fn over_opaque_src_replaces_dst() {
    let mut dst = vec![10u8, 20, 30, 255];
    premul_over_in_place(&mut dst, &[200, 100, 50, 255]).unwrap();
    assert_eq!(dst, vec![200, 100, 50, 255]);
}

#[test]
fn over_transparent_src_keeps_dst() {
    let mut dst = vec![10u8, 20, 30, 255];
    premul_over_in_place(&mut dst, &[0, 0, 0, 0]).unwrap();
    assert_eq!(dst, vec![10, 20, 30, 255]);
}

#[test]
fn over_half_white_on_black() {
    let mut dst = vec![0u8, 0, 0, 255];
    premul_over_in_place(&mut dst, &[128, 128, 128, 128]).unwrap();
    assert_eq!(dst, vec![128, 128, 128, 255]);
}

#[test]
fn over_rejects_length_mismatch() {
    let mut dst = vec![0u8; 8];
    assert!(premul_over_in_place(&mut dst, &[0u8; 4]).is_err());
}

#[test]
fn region_around_pads_and_clamps() {
    let r = PixelRegion::around(Some(Rect::new(5.5, 10.0, 20.0, 30.2)), 4, 22, 100);
    assert_eq!(
        r,
        PixelRegion {
            x: 1,
            y: 6,
            width: 21,
            height: 29
        }
    );
    assert_eq!(PixelRegion::around(None, 4, 8, 9), PixelRegion::full(8, 9));
}

#[test]
fn region_extract_and_over_hit_same_pixels() {
    let (w, h) = (4u32, 3u32);
    let mut dst = vec![0u8; (w * h * 4) as usize];
    let region = PixelRegion {
        x: 1,
        y: 1,
        width: 2,
        height: 2,
    };
    let src = [9u8, 9, 9, 255].repeat(4);
    premul_over_region(&mut dst, w, region, &src).unwrap();
    let back = region.extract(&dst, w);
    assert_eq!(back, src);
    assert_eq!(&dst[0..4], &[0, 0, 0, 0]);
    let painted = dst.chunks_exact(4).filter(|px| px[3] == 255).count();
    assert_eq!(painted, 4);
}

#[test]
fn premultiply_then_unpremultiply_is_close() {
    let mut px = vec![200u8, 100, 50, 128, 1, 2, 3, 0];
    premultiply_rgba8_in_place(&mut px);
    assert_eq!(&px[4..], &[0, 0, 0, 0]);
    unpremultiply_rgba8_in_place(&mut px);
    for (a, b) in px[..3].iter().zip([200u8, 100, 50]) {
        assert!((i16::from(*a) - i16::from(b)).abs() <= 2);
    }
}
