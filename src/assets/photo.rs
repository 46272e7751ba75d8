use std::sync::Arc;

/// Pixel data for one captured frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PhotoSource {
    /// An encoded image file (PNG, JPEG, ...) as written by the capture subsystem.
    Encoded(Arc<[u8]>),
    /// Straight-alpha RGBA8, row-major, tightly packed.
    Rgba {
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
        /// `width * height * 4` bytes.
        pixels: Arc<[u8]>,
    },
}

/// One captured frame, already mirrored for self-view and ready to blit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhotoCapture {
    /// Monotonic capture index within the session.
    pub order: u64,
    /// Frame pixels.
    pub source: PhotoSource,
}

impl PhotoCapture {
    /// Wrap encoded image bytes.
    pub fn encoded(order: u64, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            order,
            source: PhotoSource::Encoded(bytes.into()),
        }
    }

    /// Wrap an in-memory RGBA image.
    pub fn from_rgba_image(order: u64, img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            order,
            source: PhotoSource::Rgba {
                width,
                height,
                pixels: img.into_raw().into(),
            },
        }
    }

    /// Wrap a raw camera frame, flipping it horizontally to match the self-view.
    pub fn mirrored(order: u64, img: image::RgbaImage) -> Self {
        Self::from_rgba_image(order, image::imageops::flip_horizontal(&img))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/photo.rs"]
mod tests;
