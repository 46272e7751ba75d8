use rayon::prelude::*;

use crate::assets::photo::{PhotoCapture, PhotoSource};
use crate::foundation::error::{CompositionError, CompositionResult};
use crate::render::composite::premultiply_rgba8_in_place;
use crate::render::paint::ImagePaint;

/// Decode every photo into a drawable image, in parallel.
///
/// All decodes finish before this returns; the lowest failing index is reported.
#[tracing::instrument(skip(photos), fields(count = photos.len()))]
pub(crate) fn decode_photos(photos: &[&PhotoCapture]) -> CompositionResult<Vec<ImagePaint>> {
    let results: Vec<CompositionResult<ImagePaint>> = photos
        .par_iter()
        .enumerate()
        .map(|(index, photo)| decode_photo(index, photo))
        .collect();
    results.into_iter().collect()
}

pub(crate) fn decode_photo(index: usize, photo: &PhotoCapture) -> CompositionResult<ImagePaint> {
    let (width, height, mut rgba) = match &photo.source {
        PhotoSource::Encoded(bytes) => {
            let img = image::load_from_memory(bytes)
                .map_err(|e| CompositionError::decode(index, e.to_string()))?
                .to_rgba8();
            let (w, h) = img.dimensions();
            (w, h, img.into_raw())
        }
        PhotoSource::Rgba {
            width,
            height,
            pixels,
        } => {
            let expected = (*width as usize)
                .checked_mul(*height as usize)
                .and_then(|v| v.checked_mul(4));
            if expected != Some(pixels.len()) {
                return Err(CompositionError::decode(
                    index,
                    format!(
                        "rgba buffer is {} bytes, expected {width}x{height}x4",
                        pixels.len()
                    ),
                ));
            }
            (*width, *height, pixels.to_vec())
        }
    };
    if width == 0 || height == 0 {
        return Err(CompositionError::decode(index, "photo has zero size"));
    }
    if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
        return Err(CompositionError::decode(
            index,
            format!("photo {width}x{height} exceeds the raster limit"),
        ));
    }

    premultiply_rgba8_in_place(&mut rgba);
    ImagePaint::from_premul_bytes(&rgba, width, height)
        .map_err(|e| CompositionError::decode(index, e.to_string()))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
