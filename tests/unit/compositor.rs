use super::*;
use crate::layout::cells::PanelGeometry;

fn quiet() -> Compositor {
    Compositor::new(CompositorOpts {
        seed: Some(11),
        captions: false,
        ..CompositorOpts::default()
    })
}

fn solid(order: u64, rgb: [u8; 3]) -> PhotoCapture {
    let img = image::RgbaImage::from_pixel(16, 12, image::Rgba([rgb[0], rgb[1], rgb[2], 255]));
    PhotoCapture::from_rgba_image(order, img)
}

#[test]
fn count_mismatch_is_checked_before_decoding() {
    let photos = vec![PhotoCapture::encoded(0, b"not an image".to_vec())];
    let err = quiet()
        .compose(&photos, GridSelection::Two, FrameStyle::Plain)
        .unwrap_err();
    assert!(matches!(
        err,
        CompositionError::PhotoCountMismatch {
            expected: 2,
            actual: 1
        }
    ));
}

#[test]
fn decode_failure_reports_capture_position() {
    let photos = vec![
        PhotoCapture::encoded(9, b"garbage".to_vec()),
        solid(1, [10, 20, 30]),
    ];
    let err = quiet()
        .compose(&photos, GridSelection::Two, FrameStyle::Plain)
        .unwrap_err();
    assert!(matches!(err, CompositionError::DecodeFailure { index: 1, .. }));
}

#[test]
fn photos_are_placed_by_capture_order() {
    let photos = vec![solid(5, [0, 0, 255]), solid(2, [255, 0, 0])];
    let out = quiet()
        .compose(&photos, GridSelection::Two, FrameStyle::Plain)
        .unwrap();
    assert_eq!(out.dimensions(), (1800, 1100));

    let decoded = image::load_from_memory(out.png_bytes()).unwrap().to_rgba8();
    let g = PanelGeometry::new(GridSelection::Two.layout());
    let first = g.cell(0).unwrap().center();
    let second = g.cell(1).unwrap().center();
    assert_eq!(decoded.get_pixel(first.x as u32, first.y as u32).0, [255, 0, 0, 255]);
    assert_eq!(decoded.get_pixel(second.x as u32, second.y as u32).0, [0, 0, 255, 255]);
}

#[test]
fn meta_serializes_to_wire_shape() {
    let photos: Vec<PhotoCapture> = (0..4).map(|i| solid(i, [40, 40, 40])).collect();
    let out = quiet()
        .compose(&photos, GridSelection::Four, FrameStyle::Checker)
        .unwrap();
    let json = serde_json::to_string(&out.meta()).unwrap();
    assert_eq!(json, r#"{"grid":4,"frame":"checker"}"#);
    assert_eq!(out.grid(), GridSelection::Four);
    assert_eq!(out.style(), FrameStyle::Checker);
}

#[test]
fn fingerprint_tracks_png_bytes() {
    let photos = vec![solid(0, [1, 2, 3])];
    let c = quiet();
    let a = c.compose(&photos, GridSelection::One, FrameStyle::Sunburst).unwrap();
    let b = c.compose(&photos, GridSelection::One, FrameStyle::Sunburst).unwrap();
    assert_eq!(a.fingerprint(), b.fingerprint());

    let mut h = Fnv1a64::new_default();
    h.write_bytes(a.png_bytes());
    assert_eq!(a.fingerprint(), h.finish());
}
