//! The composite pipeline: layout, background, panel and photos, caption, PNG.

use std::sync::OnceLock;

use image::ImageEncoder as _;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::assets::decode::decode_photos;
use crate::assets::photo::PhotoCapture;
use crate::background::paint_background;
use crate::caption::paint_caption;
use crate::config::CompositorOpts;
use crate::foundation::error::{CompositionError, CompositionResult};
use crate::foundation::math::Fnv1a64;
use crate::layout::grid::{GridSelection, resolve};
use crate::panel::paint_panel_and_photos;
use crate::render::surface::Surface;
use crate::style::FrameStyle;
use crate::text::fonts::FontBook;
use crate::text::layout::TextLayoutEngine;

/// Renders composites. Holds options and the lazily loaded caption fonts.
///
/// One `Compositor` can serve any number of sessions; `compose` borrows it immutably.
pub struct Compositor {
    opts: CompositorOpts,
    fonts: OnceLock<FontBook>,
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new(CompositorOpts::default())
    }
}

impl std::fmt::Debug for Compositor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Compositor")
            .field("opts", &self.opts)
            .field("fonts_loaded", &self.fonts.get().is_some())
            .finish()
    }
}

impl Compositor {
    pub fn new(opts: CompositorOpts) -> Self {
        Self {
            opts,
            fonts: OnceLock::new(),
        }
    }

    pub fn opts(&self) -> &CompositorOpts {
        &self.opts
    }

    /// Render `photos` onto a `grid` collage decorated with `style`.
    ///
    /// Photos are placed in ascending [`PhotoCapture::order`]. The photo count must equal
    /// [`GridSelection::photo_count`]. Output is byte-identical across calls unless the style
    /// is memphis and no seed is configured.
    #[tracing::instrument(skip_all, fields(photos = photos.len(), %grid, %style))]
    pub fn compose(
        &self,
        photos: &[PhotoCapture],
        grid: GridSelection,
        style: FrameStyle,
    ) -> CompositionResult<CompositeImage> {
        let expected = grid.photo_count();
        if photos.len() != expected {
            return Err(CompositionError::PhotoCountMismatch {
                expected,
                actual: photos.len(),
            });
        }

        let plan = resolve(grid);
        tracing::debug!(
            columns = plan.columns,
            rows = plan.rows,
            width = plan.canvas_width,
            height = plan.canvas_height,
            "layout resolved"
        );

        let mut ordered: Vec<&PhotoCapture> = photos.iter().collect();
        ordered.sort_by_key(|p| p.order);
        let images = decode_photos(&ordered)?;
        tracing::debug!(count = images.len(), "photos decoded");

        let theme = style.theme();
        let mut surface = Surface::new(plan.canvas(), self.opts.glow)?;

        let mut rng = match self.opts.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        paint_background(&mut surface, theme.backdrop, &mut rng)?;
        tracing::debug!(backdrop = ?theme.backdrop, "background painted");

        paint_panel_and_photos(&mut surface, grid, &images, &theme)?;
        tracing::debug!("panel and photos painted");

        if let Some(rule) = theme.caption.filter(|_| self.opts.captions) {
            let mut engine = TextLayoutEngine::new();
            paint_caption(&mut surface, &rule, self.fonts(), &mut engine)?;
        }

        let png = encode_png(&surface.to_straight_rgba8(), plan.canvas_width, plan.canvas_height)?;
        tracing::debug!(bytes = png.len(), "composite encoded");

        Ok(CompositeImage {
            grid,
            style,
            width: plan.canvas_width,
            height: plan.canvas_height,
            png,
        })
    }

    fn fonts(&self) -> &FontBook {
        self.fonts.get_or_init(|| match &self.opts.caption_font {
            Some(path) => FontBook::from_file(path).unwrap_or_else(|err| {
                tracing::warn!(error = %format!("{err:#}"), "falling back to system fonts");
                FontBook::system()
            }),
            None => FontBook::system(),
        })
    }
}

/// Compose with default options.
pub fn compose(
    photos: &[PhotoCapture],
    grid: GridSelection,
    style: FrameStyle,
) -> CompositionResult<CompositeImage> {
    Compositor::default().compose(photos, grid, style)
}

fn encode_png(rgba: &[u8], width: u32, height: u32) -> CompositionResult<Vec<u8>> {
    let mut out = Vec::new();
    image::codecs::png::PngEncoder::new(&mut out)
        .write_image(rgba, width, height, image::ExtendedColorType::Rgba8)
        .map_err(|e| CompositionError::encode(e.to_string()))?;
    Ok(out)
}

/// A finished composite: PNG bytes plus the selection that produced them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompositeImage {
    grid: GridSelection,
    style: FrameStyle,
    width: u32,
    height: u32,
    png: Vec<u8>,
}

impl CompositeImage {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn grid(&self) -> GridSelection {
        self.grid
    }

    pub fn style(&self) -> FrameStyle {
        self.style
    }

    /// Encoded PNG stream.
    pub fn png_bytes(&self) -> &[u8] {
        &self.png
    }

    pub fn into_png(self) -> Vec<u8> {
        self.png
    }

    /// Metadata sent alongside the image.
    pub fn meta(&self) -> TransmissionMeta {
        TransmissionMeta {
            grid: self.grid,
            frame: self.style,
        }
    }

    /// FNV-1a 64 over the encoded bytes.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        h.write_bytes(&self.png);
        h.finish()
    }
}

/// Selection metadata transmitted with a composite, e.g. `{"grid":4,"frame":"neon"}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TransmissionMeta {
    pub grid: GridSelection,
    pub frame: FrameStyle,
}

#[cfg(test)]
#[path = "../tests/unit/compositor.rs"]
mod tests;
