use super::*;

#[test]
fn rejects_non_positive_size() {
    let mut engine = TextLayoutEngine::new();
    for size in [0.0, -4.0, f32::NAN] {
        assert!(
            engine
                .layout_line("Acid Check", &[], size, 700, Rgba8::hex(0x111827))
                .is_err()
        );
    }
}

#[test]
fn rejects_bytes_that_are_not_a_font() {
    let mut engine = TextLayoutEngine::default();
    let err = engine
        .layout_line("Wavy Safari", b"definitely not a font", 50.0, 700, Rgba8::hex(0x1D3557))
        .err()
        .unwrap();
    assert!(matches!(err, CompositionError::Other(_)));
}
