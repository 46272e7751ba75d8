use std::f64::consts::PI;

use kurbo::{Circle, Line};
use rand::Rng;

use crate::foundation::core::{Affine, BezPath, Point, Rect, Rgba8};
use crate::foundation::error::CompositionResult;
use crate::render::paint::Painter;
use crate::render::surface::Surface;
use crate::style::theme::StrokeRule;

const BASE: Rgba8 = Rgba8::hex(0xFFF4E8);
const DOT: Rgba8 = Rgba8::hex(0x111827);
const DOT_OPACITY: f32 = 0.08;
const DOT_STEP_PX: usize = 10;
const PALETTE: [Rgba8; 4] = [
    Rgba8::hex(0xFF6BA5),
    Rgba8::hex(0x5AE6B1),
    Rgba8::hex(0x5B8CFF),
    Rgba8::hex(0xFFC857),
];
const AREA_PER_BATCH_PX: u64 = 140_000;
const SHAPES_PER_BATCH: u64 = 28;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ShapeKind {
    Bar,
    Dot,
    Triangle,
    Squiggle,
    Dash,
}

impl ShapeKind {
    pub(crate) fn for_index(i: usize) -> Self {
        match i % 5 {
            0 => Self::Bar,
            1 => Self::Dot,
            2 => Self::Triangle,
            3 => Self::Squiggle,
            _ => Self::Dash,
        }
    }
}

/// `ceil(area / 140000) * 28`.
pub(crate) fn shape_count(width: u32, height: u32) -> usize {
    let area = u64::from(width) * u64::from(height);
    (area.div_ceil(AREA_PER_BATCH_PX) * SHAPES_PER_BATCH) as usize
}

/// Dot radius at a lattice point: `(sin(0.03x + 0.02y) + 1.5) * 0.6`.
pub(crate) fn dot_radius(x: f64, y: f64) -> f64 {
    ((x * 0.03 + y * 0.02).sin() + 1.5) * 0.6
}

pub(crate) fn paint<R: Rng + ?Sized>(surface: &mut Surface, rng: &mut R) -> CompositionResult<()> {
    let canvas = surface.canvas();
    let (w, h) = (f64::from(canvas.width), f64::from(canvas.height));
    let bounds = canvas.rect();
    surface.layer(|p| p.fill(&bounds, BASE))?;

    let dot = DOT.with_opacity(DOT_OPACITY);
    surface.layer(|p| {
        for y in (0..canvas.height as usize).step_by(DOT_STEP_PX) {
            for x in (0..canvas.width as usize).step_by(DOT_STEP_PX) {
                let (x, y) = (x as f64, y as f64);
                p.fill(&Circle::new((x, y), dot_radius(x, y)), dot);
            }
        }
    })?;

    let count = shape_count(canvas.width, canvas.height);
    surface.layer(|p| {
        for i in 0..count {
            let x = rng.random::<f64>() * w;
            let y = rng.random::<f64>() * h;
            let size = 10.0 + rng.random::<f64>() * 50.0;
            let angle = rng.random::<f64>() * PI;
            let transform = Affine::translate((x, y)) * Affine::rotate(angle);
            draw_shape(p, ShapeKind::for_index(i), transform, size, PALETTE[i % PALETTE.len()]);
        }
    })
}

fn draw_shape(p: &mut Painter<'_>, kind: ShapeKind, transform: Affine, s: f64, color: Rgba8) {
    match kind {
        ShapeKind::Bar => {
            p.fill_transformed(transform, &Rect::new(-s * 0.5, -s * 0.2, s * 0.5, s * 0.2), color);
        }
        ShapeKind::Dot => {
            p.fill_transformed(transform, &Circle::new((0.0, 0.0), s * 0.35), color);
        }
        ShapeKind::Triangle => {
            let mut path = BezPath::new();
            path.move_to((-s * 0.5, s * 0.5));
            path.line_to((0.0, -s * 0.5));
            path.line_to((s * 0.5, s * 0.5));
            path.close_path();
            p.fill_transformed(transform, &path, color);
        }
        ShapeKind::Squiggle => {
            p.stroke_transformed(transform, &squiggle_path(s), StrokeRule::solid(color, 3.0));
        }
        ShapeKind::Dash => {
            let line = Line::new(Point::new(-s * 0.3, 0.0), Point::new(s * 0.3, 0.0));
            p.stroke_transformed(transform, &line, StrokeRule::solid(color, 4.0));
        }
    }
}

/// Sine polyline sampled every 6px from `-s` to `s`.
fn squiggle_path(s: f64) -> BezPath {
    let mut path = BezPath::new();
    let mut k = -s;
    while k <= s {
        let y = (k / 6.0).sin() * (s / 5.5);
        if path.elements().is_empty() {
            path.move_to((k, y));
        } else {
            path.line_to((k, y));
        }
        k += 6.0;
    }
    path
}
