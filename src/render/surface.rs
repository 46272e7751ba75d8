use crate::foundation::core::{Canvas, Rect};
use crate::foundation::error::{CompositionError, CompositionResult};
use crate::foundation::math::{kernel_radius, shadow_blur_sigma};
use crate::render::blur::blur_rgba8_premul;
use crate::render::composite::{
    PixelRegion, premul_over_in_place, premul_over_region, unpremultiply_rgba8_in_place,
};
use crate::render::paint::Painter;
use crate::style::theme::Glow;

/// The composite's single raster, built up layer by layer.
///
/// `vello_cpu` renders each scene into a fresh buffer, so every layer is rendered into a
/// transparent scratch pixmap and then premul-over'd onto the surface.
pub(crate) struct Surface {
    canvas: Canvas,
    width: u16,
    height: u16,
    pixmap: vello_cpu::Pixmap,
    ctx: Option<vello_cpu::RenderContext>,
    scratch: Option<vello_cpu::Pixmap>,
    glow_enabled: bool,
}

impl Surface {
    pub(crate) fn new(canvas: Canvas, glow_enabled: bool) -> CompositionResult<Self> {
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| CompositionError::raster("surface width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| CompositionError::raster("surface height exceeds u16"))?;
        Ok(Self {
            canvas,
            width,
            height,
            pixmap: vello_cpu::Pixmap::new(width, height),
            ctx: None,
            scratch: None,
            glow_enabled,
        })
    }

    pub(crate) fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub(crate) fn layer(&mut self, draw: impl FnOnce(&mut Painter<'_>)) -> CompositionResult<()> {
        self.glowing_layer(None, None, draw)
    }

    /// Draw one layer; with `glow`, a blurred copy is composited underneath it first.
    ///
    /// `bounds` limits the blur to the area the layer can touch.
    pub(crate) fn glowing_layer(
        &mut self,
        glow: Option<Glow>,
        bounds: Option<Rect>,
        draw: impl FnOnce(&mut Painter<'_>),
    ) -> CompositionResult<()> {
        let layer = self.render_layer(draw);
        if let Some(glow) = glow.filter(|_| self.glow_enabled) {
            self.composite_glow(layer.data_as_u8_slice(), glow, bounds)?;
        }
        let out = premul_over_in_place(self.pixmap.data_as_u8_slice_mut(), layer.data_as_u8_slice());
        self.scratch = Some(layer);
        out
    }

    /// Composite a full-surface premultiplied RGBA8 buffer.
    pub(crate) fn composite_premul(&mut self, bytes: &[u8]) -> CompositionResult<()> {
        premul_over_in_place(self.pixmap.data_as_u8_slice_mut(), bytes)
    }

    pub(crate) fn premul_data(&self) -> &[u8] {
        self.pixmap.data_as_u8_slice()
    }

    #[cfg(test)]
    pub(crate) fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = (y as usize * self.canvas.width as usize + x as usize) * 4;
        let d = self.premul_data();
        [d[idx], d[idx + 1], d[idx + 2], d[idx + 3]]
    }

    /// Straight-alpha RGBA8 copy of the surface, ready for encoding.
    pub(crate) fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = self.premul_data().to_vec();
        unpremultiply_rgba8_in_place(&mut out);
        out
    }

    fn render_layer(&mut self, draw: impl FnOnce(&mut Painter<'_>)) -> vello_cpu::Pixmap {
        let (w, h) = (self.width, self.height);
        let mut ctx = match self.ctx.take() {
            Some(ctx) => ctx,
            None => vello_cpu::RenderContext::new(w, h),
        };
        ctx.reset();
        draw(&mut Painter::new(&mut ctx));
        ctx.flush();

        let mut layer = self
            .scratch
            .take()
            .unwrap_or_else(|| vello_cpu::Pixmap::new(w, h));
        layer.data_as_u8_slice_mut().fill(0);
        ctx.render_to_pixmap(&mut layer);
        self.ctx = Some(ctx);
        layer
    }

    fn composite_glow(
        &mut self,
        layer: &[u8],
        glow: Glow,
        bounds: Option<Rect>,
    ) -> CompositionResult<()> {
        let sigma = shadow_blur_sigma(glow.shadow_blur);
        let radius = kernel_radius(sigma);
        if radius == 0 {
            return Ok(());
        }
        let (w, h) = (self.canvas.width, self.canvas.height);
        let region = PixelRegion::around(bounds, radius, w, h);
        if region.is_empty() {
            return Ok(());
        }
        let src = region.extract(layer, w);
        let blurred = blur_rgba8_premul(&src, region.width, region.height, radius, sigma)?;
        premul_over_region(self.pixmap.data_as_u8_slice_mut(), w, region, &blurred)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
