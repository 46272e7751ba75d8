use std::sync::Arc;

use kurbo::{PathEl, Shape};

use crate::foundation::core::{Affine, Rect, Rgba8};
use crate::foundation::error::{CompositionError, CompositionResult};
use crate::style::theme::StrokeRule;

const PATH_TOLERANCE: f64 = 0.1;

/// A decoded raster ready to be used as an image paint.
#[derive(Clone, Debug)]
pub(crate) struct ImagePaint {
    pub(crate) paint: vello_cpu::Image,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

impl ImagePaint {
    pub(crate) fn from_premul_bytes(bytes: &[u8], width: u32, height: u32) -> CompositionResult<Self> {
        let pixmap = pixmap_from_premul_bytes(bytes, width, height)?;
        Ok(Self {
            paint: vello_cpu::Image {
                image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
                sampler: vello_cpu::peniko::ImageSampler::default(),
            },
            width,
            height,
        })
    }
}

/// Draw operations against one layer's render context.
///
/// Every call takes its full style explicitly and sets transform and paint itself, so no state
/// carries over from one operation to the next.
pub(crate) struct Painter<'a> {
    ctx: &'a mut vello_cpu::RenderContext,
}

impl<'a> Painter<'a> {
    pub(crate) fn new(ctx: &'a mut vello_cpu::RenderContext) -> Self {
        Self { ctx }
    }

    pub(crate) fn fill(&mut self, shape: &impl Shape, color: Rgba8) {
        self.fill_transformed(Affine::IDENTITY, shape, color);
    }

    pub(crate) fn fill_transformed(&mut self, transform: Affine, shape: &impl Shape, color: Rgba8) {
        self.ctx.set_transform(affine_to_cpu(transform));
        self.ctx.set_paint(color.to_cpu());
        self.ctx.fill_path(&shape_to_cpu(shape));
    }

    pub(crate) fn stroke(&mut self, shape: &impl Shape, rule: StrokeRule) {
        self.stroke_transformed(Affine::IDENTITY, shape, rule);
    }

    pub(crate) fn stroke_transformed(&mut self, transform: Affine, shape: &impl Shape, rule: StrokeRule) {
        self.ctx.set_transform(affine_to_cpu(transform));
        self.ctx.set_paint(rule.color.to_cpu());
        self.ctx.set_stroke(rule.to_cpu_stroke());
        self.ctx.stroke_path(&shape_to_cpu(shape));
    }

    /// Run `f` with drawing restricted to `clip`; the clip is released before returning.
    pub(crate) fn clipped<R>(&mut self, clip: &impl Shape, f: impl FnOnce(&mut Self) -> R) -> R {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.push_clip_layer(&shape_to_cpu(clip));
        let out = f(self);
        self.ctx.pop_layer();
        out
    }

    /// Stretch `image` to exactly cover `dst`.
    pub(crate) fn image(&mut self, dst: Rect, image: &ImagePaint) {
        let sx = dst.width() / f64::from(image.width.max(1));
        let sy = dst.height() / f64::from(image.height.max(1));
        let transform = Affine::translate((dst.x0, dst.y0)) * Affine::scale_non_uniform(sx, sy);
        self.ctx.set_transform(affine_to_cpu(transform));
        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(image.paint.clone());
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(image.width),
            f64::from(image.height),
        ));
    }

    pub(crate) fn glyphs(
        &mut self,
        origin: (f64, f64),
        font: &vello_cpu::peniko::FontData,
        size_px: f32,
        color: Rgba8,
        glyphs: impl Iterator<Item = vello_cpu::Glyph>,
    ) {
        self.ctx
            .set_transform(affine_to_cpu(Affine::translate(origin)));
        self.ctx.set_paint(color.to_cpu());
        self.ctx.glyph_run(font).font_size(size_px).fill_glyphs(glyphs);
    }
}

pub(crate) fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

pub(crate) fn shape_to_cpu(shape: &impl Shape) -> vello_cpu::kurbo::BezPath {
    let p = |pt: kurbo::Point| vello_cpu::kurbo::Point::new(pt.x, pt.y);
    let mut out = vello_cpu::kurbo::BezPath::new();
    for el in shape.path_elements(PATH_TOLERANCE) {
        match el {
            PathEl::MoveTo(p0) => out.move_to(p(p0)),
            PathEl::LineTo(p0) => out.line_to(p(p0)),
            PathEl::QuadTo(p1, p2) => out.quad_to(p(p1), p(p2)),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(p(p1), p(p2), p(p3)),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

pub(crate) fn pixmap_from_premul_bytes(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> CompositionResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| CompositionError::raster("pixmap width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| CompositionError::raster("pixmap height exceeds u16"))?;
    if bytes.len()
        != (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4)
    {
        return Err(CompositionError::raster("pixmap byte len mismatch"));
    }

    let mut may_have_opacities = false;
    let mut pixels = Vec::<vello_cpu::peniko::color::PremulRgba8>::with_capacity(
        (width as usize) * (height as usize),
    );
    for px in bytes.chunks_exact(4) {
        may_have_opacities |= px[3] != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8::from_u8_array([
            px[0], px[1], px[2], px[3],
        ]));
    }
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}
