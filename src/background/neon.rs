use kurbo::Line;

use crate::foundation::core::{Point, Rgba8};
use crate::foundation::error::CompositionResult;
use crate::render::surface::Surface;
use crate::style::theme::{Glow, StrokeRule};

const BASE: Rgba8 = Rgba8::hex(0x0B0F19);
pub(crate) const GRID_STEP_PX: usize = 48;
const LINE_WIDTH_PX: f64 = 1.25;

pub(crate) fn paint(surface: &mut Surface) -> CompositionResult<()> {
    let canvas = surface.canvas();
    let (w, h) = (f64::from(canvas.width), f64::from(canvas.height));
    let bounds = canvas.rect();
    surface.layer(|p| p.fill(&bounds, BASE))?;

    let cyan = StrokeRule::solid(Rgba8::hex(0x06E2FF).with_opacity(0.55), LINE_WIDTH_PX);
    surface.glowing_layer(Some(Glow::new(12.0)), None, |p| {
        for x in (0..=canvas.width as usize).step_by(GRID_STEP_PX) {
            let x = x as f64;
            p.stroke(&Line::new(Point::new(x, 0.0), Point::new(x, h)), cyan);
        }
        for y in (0..=canvas.height as usize).step_by(GRID_STEP_PX) {
            let y = y as f64;
            p.stroke(&Line::new(Point::new(0.0, y), Point::new(w, y)), cyan);
        }
    })?;

    let magenta = StrokeRule::solid(Rgba8::hex(0xFF3CAC).with_opacity(0.35), LINE_WIDTH_PX);
    let diagonal_step = (GRID_STEP_PX * 4) as f64;
    surface.glowing_layer(Some(Glow::new(8.0)), None, |p| {
        let mut d = -h;
        while d < w {
            p.stroke(&Line::new(Point::new(d, 0.0), Point::new(d + h, h)), magenta);
            d += diagonal_step;
        }
    })
}
