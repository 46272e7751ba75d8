//! Style caption: one centered line in the band under the panel.

use crate::foundation::core::Rect;
use crate::foundation::error::CompositionResult;
use crate::render::surface::Surface;
use crate::style::theme::CaptionRule;
use crate::text::fonts::FontBook;
use crate::text::layout::{TextLayoutEngine, first_baseline};

/// Distance from the bottom edge to the caption baseline.
pub(crate) const BASELINE_FROM_BOTTOM_PX: f64 = 60.0;

/// Draw `rule`'s text centered at `x = W/2` with its baseline at `H - 60`.
///
/// Returns `Ok(false)` when no font could be resolved; the caption is then skipped.
pub(crate) fn paint_caption(
    surface: &mut Surface,
    rule: &CaptionRule,
    fonts: &FontBook,
    engine: &mut TextLayoutEngine,
) -> CompositionResult<bool> {
    let Some(face) = fonts.resolve(rule.weight) else {
        tracing::warn!(text = rule.text, "no caption font available, skipping caption");
        return Ok(false);
    };

    let layout = engine.layout_line(rule.text, &face.bytes, rule.size_px, rule.weight, rule.color)?;
    let canvas = surface.canvas();
    let width = f64::from(layout.width());
    let origin = (
        f64::from(canvas.width) / 2.0 - width / 2.0,
        f64::from(canvas.height) - BASELINE_FROM_BOTTOM_PX - f64::from(first_baseline(&layout)),
    );
    let bounds = Rect::new(
        origin.0,
        origin.1,
        origin.0 + width,
        origin.1 + f64::from(layout.height()),
    );

    surface.glowing_layer(rule.glow, Some(bounds), |p| {
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                // Draw with the face the run was shaped with.
                let font = run.run().font();
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                p.glyphs(origin, font, run.run().font_size(), rule.color, glyphs);
            }
        }
    })?;
    tracing::debug!(text = rule.text, width, "caption painted");
    Ok(true)
}

#[cfg(test)]
#[path = "../tests/unit/caption.rs"]
mod tests;
