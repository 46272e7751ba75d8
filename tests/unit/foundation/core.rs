use super::*;

#[test]
fn hex_splits_channels() {
    let c = Rgba8::hex(0x06E2FF);
    assert_eq!((c.r, c.g, c.b, c.a), (0x06, 0xE2, 0xFF, 255));
}

#[test]
fn css_alpha_rounds_to_nearest() {
    assert_eq!(Rgba8::rgba(255, 255, 255, 0.98).a, 250);
    assert_eq!(Rgba8::rgba(12, 16, 28, 0.8).a, 204);
    assert_eq!(Rgba8::rgba(0, 0, 0, 2.0).a, 255);
}

#[test]
fn opacity_multiplies_alpha() {
    let c = Rgba8::hex(0x111827).with_opacity(0.08);
    assert_eq!(c.a, 20);
    assert_eq!((c.r, c.g, c.b), (0x11, 0x18, 0x27));
}

#[test]
fn premul_scales_color_channels() {
    assert_eq!(Rgba8::hex(0xFF8000).to_premul(), [255, 128, 0, 255]);
    assert_eq!(
        Rgba8::rgba(255, 255, 255, 0.5).to_premul(),
        [128, 128, 128, 128]
    );
}

#[test]
fn canvas_rect_spans_dimensions() {
    let r = Canvas {
        width: 1800,
        height: 1100,
    }
    .rect();
    assert_eq!((r.width(), r.height()), (1800.0, 1100.0));
}
