use std::f64::consts::TAU;

use rayon::prelude::*;

use crate::foundation::core::{BezPath, Point, Rgba8};
use crate::foundation::error::CompositionResult;
use crate::render::surface::Surface;

const BASE: Rgba8 = Rgba8::hex(0xFDFCF8);
pub(crate) const RAY_COUNT: usize = 72;
pub(crate) const RAY_EVEN: Rgba8 = Rgba8::hex(0xF9D873);
pub(crate) const RAY_ODD: Rgba8 = Rgba8::hex(0xFFE7A3);
const RAY_LENGTH_OF_HEIGHT: f64 = 1.2;
const HALO_INNER_OF_HEIGHT: f64 = 0.1;
const HALO_ALPHA: f32 = 0.5;

/// Rays fan out from horizontal center, 90% of the way down.
pub(crate) fn center(width: f64, height: f64) -> Point {
    Point::new(width / 2.0, height * 0.9)
}

pub(crate) fn ray_color(i: usize) -> Rgba8 {
    if i.is_multiple_of(2) { RAY_EVEN } else { RAY_ODD }
}

pub(crate) fn ray_path(i: usize, c: Point, height: f64) -> BezPath {
    let len = height * RAY_LENGTH_OF_HEIGHT;
    let a1 = i as f64 / RAY_COUNT as f64 * TAU;
    let a2 = (i + 1) as f64 / RAY_COUNT as f64 * TAU;

    let mut path = BezPath::new();
    path.move_to(c);
    path.line_to((c.x + a1.cos() * len, c.y + a1.sin() * len));
    path.line_to((c.x + a2.cos() * len, c.y + a2.sin() * len));
    path.close_path();
    path
}

/// White halo fading from `0.1 * h` to `h` around the ray center, premultiplied.
pub(crate) fn halo_premul(width: u32, height: u32) -> Vec<u8> {
    let (w, h) = (f64::from(width), f64::from(height));
    let c = center(w, h);
    let r0 = h * HALO_INNER_OF_HEIGHT;
    let r1 = h;
    let stride = width as usize * 4;
    let mut bytes = vec![0u8; stride * height as usize];
    if stride == 0 {
        return bytes;
    }

    bytes.par_chunks_mut(stride).enumerate().for_each(|(y, row)| {
        let py = y as f64 + 0.5;
        for (x, px) in row.chunks_exact_mut(4).enumerate() {
            let px_x = x as f64 + 0.5;
            let d = ((px_x - c.x).powi(2) + (py - c.y).powi(2)).sqrt();
            let t = ((d - r0) / (r1 - r0)).clamp(0.0, 1.0) as f32;
            let color = Rgba8::rgba(255, 255, 255, HALO_ALPHA * (1.0 - t));
            px.copy_from_slice(&color.to_premul());
        }
    });
    bytes
}

pub(crate) fn paint(surface: &mut Surface) -> CompositionResult<()> {
    let canvas = surface.canvas();
    let (w, h) = (f64::from(canvas.width), f64::from(canvas.height));
    let c = center(w, h);
    let bounds = canvas.rect();

    surface.layer(|p| {
        p.fill(&bounds, BASE);
        for i in 0..RAY_COUNT {
            p.fill(&ray_path(i, c, h), ray_color(i));
        }
    })?;
    surface.composite_premul(&halo_premul(canvas.width, canvas.height))
}
