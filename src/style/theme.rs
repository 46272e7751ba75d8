use crate::foundation::core::Rgba8;

/// Background painter selected by a style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Backdrop {
    Flat(Rgba8),
    Memphis,
    Neon,
    Sunburst,
    Checker,
    Wavy,
}

/// Blurred halo drawn beneath a shape in the shape's own paint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Glow {
    /// Canvas-style `shadowBlur` in pixels.
    pub(crate) shadow_blur: f32,
}

impl Glow {
    pub(crate) const fn new(shadow_blur: f32) -> Self {
        Self { shadow_blur }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct StrokeRule {
    pub(crate) color: Rgba8,
    pub(crate) width: f64,
    /// `[on, off]` dash lengths.
    pub(crate) dash: Option<[f64; 2]>,
    pub(crate) glow: Option<Glow>,
}

impl StrokeRule {
    pub(crate) const fn solid(color: Rgba8, width: f64) -> Self {
        Self {
            color,
            width,
            dash: None,
            glow: None,
        }
    }

    pub(crate) fn to_cpu_stroke(self) -> vello_cpu::kurbo::Stroke {
        // Canvas 2D defaults: butt caps, miter joins, miter limit 10.
        let stroke = vello_cpu::kurbo::Stroke::new(self.width)
            .with_caps(vello_cpu::kurbo::Cap::Butt)
            .with_join(vello_cpu::kurbo::Join::Miter)
            .with_miter_limit(10.0);
        match self.dash {
            Some(pattern) => stroke.with_dashes(0.0, pattern),
            None => stroke,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct CaptionRule {
    pub(crate) text: &'static str,
    /// CSS font weight.
    pub(crate) weight: u16,
    pub(crate) size_px: f32,
    pub(crate) color: Rgba8,
    pub(crate) glow: Option<Glow>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Theme {
    pub(crate) backdrop: Backdrop,
    pub(crate) panel_fill: Rgba8,
    pub(crate) panel_accent: Option<StrokeRule>,
    pub(crate) cell_border: StrokeRule,
    pub(crate) caption: Option<CaptionRule>,
}
