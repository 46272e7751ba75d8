use super::*;

#[test]
fn codes_round_trip_and_unknown_falls_back() {
    for style in FrameStyle::ALL {
        assert_eq!(FrameStyle::from_code(style.code()), style);
    }
    assert_eq!(FrameStyle::from_code("neon"), FrameStyle::Neon);
    assert_eq!(FrameStyle::from_code("NEON"), FrameStyle::Plain);
    assert_eq!(FrameStyle::from_code(" neon "), FrameStyle::Plain);
    assert_eq!(FrameStyle::from_code("vaporwave"), FrameStyle::Plain);
    assert_eq!("".parse::<FrameStyle>().unwrap(), FrameStyle::Plain);
}

#[test]
fn serde_uses_codes() {
    assert_eq!(
        serde_json::to_string(&FrameStyle::Sunburst).unwrap(),
        "\"sunburst\""
    );
    let s: FrameStyle = serde_json::from_str("\"legacy-frame\"").unwrap();
    assert_eq!(s, FrameStyle::Plain);
}

#[test]
fn display_labels_for_mail() {
    assert_eq!(
        FrameStyle::GenZ.display_label(),
        "Gen-Z Vibes ✨ (Colorful & Playful)"
    );
    assert_eq!(FrameStyle::Wavy.display_label(), "wavy");
    assert_eq!(FrameStyle::Plain.display_label(), "-");
}

#[test]
fn only_plain_has_no_caption() {
    for style in FrameStyle::ALL {
        assert_eq!(style.theme().caption.is_none(), style == FrameStyle::Plain);
    }
    assert_eq!(FrameStyle::Neon.theme().caption.unwrap().text, "Night City Pulse");
    assert_eq!(FrameStyle::Wavy.theme().caption.unwrap().text, "Wavy Safari");
}

#[test]
fn accents_follow_style() {
    let neon = FrameStyle::Neon.theme();
    assert!(neon.panel_accent.unwrap().glow.is_some());
    assert!(neon.cell_border.glow.is_some());
    assert_eq!(neon.cell_border.color, Rgba8::rgba(6, 226, 255, 0.9));

    let memphis = FrameStyle::Memphis.theme();
    assert_eq!(memphis.panel_accent.unwrap().dash, Some([10.0, 6.0]));

    assert!(FrameStyle::Wavy.theme().panel_accent.unwrap().dash.is_none());
    for style in [
        FrameStyle::Plain,
        FrameStyle::GenZ,
        FrameStyle::Aesthetic,
        FrameStyle::Sunburst,
        FrameStyle::Checker,
    ] {
        assert!(style.theme().panel_accent.is_none(), "{style}");
    }
}

#[test]
fn panel_fill_is_translucent_dark_only_for_neon() {
    assert_eq!(FrameStyle::Neon.theme().panel_fill, Rgba8::rgba(12, 16, 28, 0.8));
    assert_eq!(FrameStyle::Checker.theme().panel_fill.a, 235);
    assert_eq!(FrameStyle::Wavy.theme().panel_fill.a, 250);
}
