//! Procedural background painters, one per [`Backdrop`].
//!
//! Every painter fully covers the canvas before anything else is drawn.

pub(crate) mod checker;
pub(crate) mod memphis;
pub(crate) mod neon;
pub(crate) mod sunburst;
pub(crate) mod wavy;

use rand::Rng;

use crate::foundation::core::Rgba8;
use crate::foundation::error::CompositionResult;
use crate::render::surface::Surface;
use crate::style::theme::Backdrop;

/// Fill the whole surface with the backdrop's pattern.
///
/// Only [`Backdrop::Memphis`] draws from `rng`.
pub(crate) fn paint_background<R: Rng + ?Sized>(
    surface: &mut Surface,
    backdrop: Backdrop,
    rng: &mut R,
) -> CompositionResult<()> {
    match backdrop {
        Backdrop::Flat(color) => paint_flat(surface, color),
        Backdrop::Memphis => memphis::paint(surface, rng),
        Backdrop::Neon => neon::paint(surface),
        Backdrop::Sunburst => sunburst::paint(surface),
        Backdrop::Checker => checker::paint(surface),
        Backdrop::Wavy => wavy::paint(surface),
    }
}

pub(crate) fn paint_flat(surface: &mut Surface, color: Rgba8) -> CompositionResult<()> {
    let bounds = surface.canvas().rect();
    surface.layer(|p| p.fill(&bounds, color))
}

#[cfg(test)]
#[path = "../../tests/unit/background/mod.rs"]
mod tests;
