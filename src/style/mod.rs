//! Frame styles: the decorative themes a session can choose.
//!
//! Each [`FrameStyle`] resolves to a [`theme::Theme`], a plain-data bundle of the background
//! painter, panel fill and accent, cell border and caption. Painters read only the theme, so
//! adding a style means adding a variant and its theme.

pub(crate) mod theme;

use std::str::FromStr;

use crate::foundation::core::Rgba8;
use theme::{Backdrop, CaptionRule, Glow, StrokeRule, Theme};

/// Decorative theme applied to a composite.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FrameStyle {
    /// Neutral fallback, also used for unknown style codes.
    #[default]
    Plain,
    /// Colorful and playful.
    GenZ,
    /// Pastel, light caption.
    Aesthetic,
    /// Cream backdrop with scattered geometric confetti.
    Memphis,
    /// Dark backdrop with a glowing grid.
    Neon,
    /// Golden rays from the bottom center.
    Sunburst,
    /// Warped acid checkerboard.
    Checker,
    /// Sinusoidal ribbons.
    Wavy,
}

impl FrameStyle {
    /// Every style, fallback first.
    pub const ALL: [FrameStyle; 8] = [
        FrameStyle::Plain,
        FrameStyle::GenZ,
        FrameStyle::Aesthetic,
        FrameStyle::Memphis,
        FrameStyle::Neon,
        FrameStyle::Sunburst,
        FrameStyle::Checker,
        FrameStyle::Wavy,
    ];

    /// Wire identifier, as sent with the transmission metadata.
    pub fn code(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::GenZ => "genz",
            Self::Aesthetic => "aesthetic",
            Self::Memphis => "memphis",
            Self::Neon => "neon",
            Self::Sunburst => "sunburst",
            Self::Checker => "checker",
            Self::Wavy => "wavy",
        }
    }

    /// Parse a style code; matching is exact, and unmatched or legacy codes fall back to
    /// [`FrameStyle::Plain`].
    pub fn from_code(code: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.code() == code)
            .unwrap_or_default()
    }

    /// Human-facing label used in outbound messages.
    pub fn display_label(self) -> &'static str {
        match self {
            Self::Plain => "-",
            Self::GenZ => "Gen-Z Vibes ✨ (Colorful & Playful)",
            Self::Aesthetic => "Aesthetic 🌸 (Pastel Kawaii)",
            other => other.code(),
        }
    }

    pub(crate) fn theme(self) -> Theme {
        let default_border = StrokeRule::solid(Rgba8::hex(0xD1D5DB), 6.0);
        let white_panel = Rgba8::rgba(255, 255, 255, 0.98);
        match self {
            Self::Plain => Theme {
                backdrop: Backdrop::Flat(Rgba8::hex(0xF5F5F7)),
                panel_fill: white_panel,
                panel_accent: None,
                cell_border: default_border,
                caption: None,
            },
            Self::GenZ => Theme {
                backdrop: Backdrop::Flat(Rgba8::hex(0xF5F5F7)),
                panel_fill: white_panel,
                panel_accent: None,
                cell_border: default_border,
                caption: Some(CaptionRule {
                    text: "Good Vibes Only",
                    weight: 700,
                    size_px: 56.0,
                    color: Rgba8::hex(0x111827),
                    glow: None,
                }),
            },
            Self::Aesthetic => Theme {
                backdrop: Backdrop::Flat(Rgba8::hex(0xF5F5F7)),
                panel_fill: white_panel,
                panel_accent: None,
                cell_border: default_border,
                caption: Some(CaptionRule {
                    text: "memories captured",
                    weight: 300,
                    size_px: 48.0,
                    color: Rgba8::hex(0x111827),
                    glow: None,
                }),
            },
            Self::Memphis => Theme {
                backdrop: Backdrop::Memphis,
                panel_fill: white_panel,
                panel_accent: Some(StrokeRule {
                    dash: Some([10.0, 6.0]),
                    ..StrokeRule::solid(Rgba8::hex(0x111827), 2.0)
                }),
                cell_border: StrokeRule::solid(Rgba8::hex(0xFF6BA5), 6.0),
                caption: Some(CaptionRule {
                    text: "Memphis Pop Mood",
                    weight: 800,
                    size_px: 52.0,
                    color: Rgba8::hex(0x111827),
                    glow: None,
                }),
            },
            Self::Neon => Theme {
                backdrop: Backdrop::Neon,
                panel_fill: Rgba8::rgba(12, 16, 28, 0.8),
                panel_accent: Some(StrokeRule {
                    glow: Some(Glow::new(20.0)),
                    ..StrokeRule::solid(Rgba8::rgba(6, 226, 255, 0.7), 3.0)
                }),
                cell_border: StrokeRule {
                    glow: Some(Glow::new(10.0)),
                    ..StrokeRule::solid(Rgba8::rgba(6, 226, 255, 0.9), 6.0)
                },
                caption: Some(CaptionRule {
                    text: "Night City Pulse",
                    weight: 800,
                    size_px: 54.0,
                    color: Rgba8::hex(0x06E2FF),
                    glow: Some(Glow::new(14.0)),
                }),
            },
            Self::Sunburst => Theme {
                backdrop: Backdrop::Sunburst,
                panel_fill: white_panel,
                panel_accent: None,
                cell_border: StrokeRule::solid(Rgba8::hex(0xE76F51), 6.0),
                caption: Some(CaptionRule {
                    text: "Golden Hour Burst",
                    weight: 700,
                    size_px: 50.0,
                    color: Rgba8::hex(0x8A5A00),
                    glow: None,
                }),
            },
            Self::Checker => Theme {
                backdrop: Backdrop::Checker,
                panel_fill: Rgba8::rgba(255, 255, 255, 0.92),
                panel_accent: None,
                cell_border: StrokeRule::solid(Rgba8::hex(0x0F172A), 6.0),
                caption: Some(CaptionRule {
                    text: "Acid Check",
                    weight: 900,
                    size_px: 50.0,
                    color: Rgba8::hex(0x111827),
                    glow: None,
                }),
            },
            Self::Wavy => Theme {
                backdrop: Backdrop::Wavy,
                panel_fill: white_panel,
                panel_accent: Some(StrokeRule::solid(Rgba8::hex(0x2B2D42), 2.0)),
                cell_border: StrokeRule::solid(Rgba8::hex(0x264653), 6.0),
                caption: Some(CaptionRule {
                    text: "Wavy Safari",
                    weight: 700,
                    size_px: 50.0,
                    color: Rgba8::hex(0x1D3557),
                    glow: None,
                }),
            },
        }
    }
}

impl FromStr for FrameStyle {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_code(s))
    }
}

impl From<String> for FrameStyle {
    fn from(value: String) -> Self {
        Self::from_code(&value)
    }
}

impl From<FrameStyle> for String {
    fn from(value: FrameStyle) -> Self {
        value.code().to_owned()
    }
}

impl std::fmt::Display for FrameStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/mod.rs"]
mod tests;
