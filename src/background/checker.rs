use crate::foundation::core::{Point, Rect, Rgba8};
use crate::foundation::error::CompositionResult;
use crate::render::surface::Surface;
use crate::style::theme::StrokeRule;
use kurbo::Line;

pub(crate) const TILE_PX: f64 = 54.0;
const ROW_WARP_FREQ: f64 = 0.04;
const ROW_WARP_AMP_PX: f64 = 12.0;
const SCANLINE_STEP_PX: usize = 6;

pub(crate) const ODD: Rgba8 = Rgba8::hex(0xB6FF00);
pub(crate) const EVEN: Rgba8 = Rgba8::hex(0xFF3CAC);

/// Horizontal shift of the tile row starting at `row_y`.
pub(crate) fn row_offset(row_y: f64) -> f64 {
    (row_y * ROW_WARP_FREQ).sin() * ROW_WARP_AMP_PX
}

/// Parity of the tile whose left edge is at `x + offset` in the row starting at `row_y`.
pub(crate) fn tile_is_odd(x: f64, offset: f64, row_y: f64) -> bool {
    let col = ((x + offset) / TILE_PX).floor() as i64;
    let row = (row_y / TILE_PX).floor() as i64;
    (col + row).rem_euclid(2) == 1
}

pub(crate) fn paint(surface: &mut Surface) -> CompositionResult<()> {
    let canvas = surface.canvas();
    let (w, h) = (f64::from(canvas.width), f64::from(canvas.height));

    let bounds = canvas.rect();
    surface.layer(|p| {
        // Tiles start at fractional x, so their shared edges are only partly covered.
        p.fill(&bounds, EVEN);
        let mut y = 0.0;
        while y < h {
            let offset = row_offset(y);
            let mut x = -TILE_PX;
            while x < w + TILE_PX {
                let color = if tile_is_odd(x, offset, y) { ODD } else { EVEN };
                p.fill(&Rect::new(x + offset, y, x + offset + TILE_PX, y + TILE_PX), color);
                x += TILE_PX;
            }
            y += TILE_PX;
        }
    })?;

    let scan = StrokeRule::solid(Rgba8::hex(0x111111).with_opacity(0.08), 1.0);
    surface.layer(|p| {
        for y in (0..canvas.height as usize).step_by(SCANLINE_STEP_PX) {
            let y = y as f64;
            p.stroke(&Line::new(Point::new(0.0, y), Point::new(w, y)), scan);
        }
    })
}
