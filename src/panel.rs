//! Rounded content panel and the photo cells inside it.

use crate::foundation::error::{CompositionError, CompositionResult};
use crate::layout::cells::PanelGeometry;
use crate::layout::grid::GridSelection;
use crate::render::paint::{ImagePaint, Painter};
use crate::render::surface::Surface;
use crate::style::theme::{StrokeRule, Theme};

/// Draw the panel, then each photo clipped into its cell with the style's border.
///
/// Cells past the last photo stay empty (five photos on a 3x2 grid).
pub(crate) fn paint_panel_and_photos(
    surface: &mut Surface,
    grid: GridSelection,
    photos: &[ImagePaint],
    theme: &Theme,
) -> CompositionResult<()> {
    let expected = grid.photo_count();
    if photos.len() != expected {
        return Err(CompositionError::PhotoCountMismatch {
            expected,
            actual: photos.len(),
        });
    }

    let geometry = PanelGeometry::new(grid.layout());
    let panel = geometry.panel_shape();
    surface.layer(|p| p.fill(&panel, theme.panel_fill))?;
    if let Some(accent) = theme.panel_accent {
        let bounds = geometry.panel.inflate(accent.width, accent.width);
        surface.glowing_layer(accent.glow, Some(bounds), |p| p.stroke(&panel, accent))?;
    }

    let border = theme.cell_border;
    let cells = geometry.slot_count().min(photos.len());
    if border.glow.is_none() {
        return surface.layer(|p| {
            for (i, photo) in photos.iter().enumerate().take(cells) {
                draw_cell(p, &geometry, i, photo, border);
            }
        });
    }

    // A glowing border halos over neighbouring cells, so each cell is its own pair of layers
    // and later photos cover earlier halos.
    for (i, photo) in photos.iter().enumerate().take(cells) {
        let Some(cell) = geometry.cell_shape(i) else {
            continue;
        };
        surface.layer(|p| p.clipped(&cell, |p| p.image(cell.rect(), photo)))?;
        let bounds = cell.rect().inflate(border.width, border.width);
        surface.glowing_layer(border.glow, Some(bounds), |p| p.stroke(&cell, border))?;
    }
    Ok(())
}

fn draw_cell(
    p: &mut Painter<'_>,
    geometry: &PanelGeometry,
    index: usize,
    photo: &ImagePaint,
    border: StrokeRule,
) {
    let Some(cell) = geometry.cell_shape(index) else {
        return;
    };
    p.clipped(&cell, |p| p.image(cell.rect(), photo));
    p.stroke(&cell, border);
}

#[cfg(test)]
#[path = "../tests/unit/panel.rs"]
mod tests;
