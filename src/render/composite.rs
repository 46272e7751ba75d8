use crate::foundation::core::Rect;
use crate::foundation::error::{CompositionError, CompositionResult};
use crate::foundation::math::mul_div255_u8;

/// Integer pixel rectangle inside a surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PixelRegion {
    pub(crate) x: u32,
    pub(crate) y: u32,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

impl PixelRegion {
    pub(crate) fn full(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    /// `bounds` grown by `pad` pixels, snapped outward and clamped to the surface.
    pub(crate) fn around(bounds: Option<Rect>, pad: u32, width: u32, height: u32) -> Self {
        let Some(b) = bounds else {
            return Self::full(width, height);
        };
        let pad = f64::from(pad);
        let x0 = (b.x0 - pad).floor().clamp(0.0, f64::from(width)) as u32;
        let y0 = (b.y0 - pad).floor().clamp(0.0, f64::from(height)) as u32;
        let x1 = (b.x1 + pad).ceil().clamp(0.0, f64::from(width)) as u32;
        let y1 = (b.y1 + pad).ceil().clamp(0.0, f64::from(height)) as u32;
        Self {
            x: x0,
            y: y0,
            width: x1.saturating_sub(x0),
            height: y1.saturating_sub(y0),
        }
    }

    pub(crate) fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Copy this region out of a tightly packed RGBA8 buffer `stride_px` pixels wide.
    pub(crate) fn extract(self, src: &[u8], stride_px: u32) -> Vec<u8> {
        let row_len = self.width as usize * 4;
        let mut out = Vec::with_capacity(row_len * self.height as usize);
        for row in 0..self.height {
            let start = ((self.y + row) as usize * stride_px as usize + self.x as usize) * 4;
            out.extend_from_slice(&src[start..start + row_len]);
        }
        out
    }
}

/// Premultiplied source-over of `src` onto `dst`, both full-surface buffers.
pub(crate) fn premul_over_in_place(dst: &mut [u8], src: &[u8]) -> CompositionResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(CompositionError::raster(
            "premul_over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        over_px(d, s);
    }
    Ok(())
}

/// Premultiplied source-over of a region-sized `src` onto the matching area of `dst`.
pub(crate) fn premul_over_region(
    dst: &mut [u8],
    dst_width: u32,
    region: PixelRegion,
    src: &[u8],
) -> CompositionResult<()> {
    let row_len = region.width as usize * 4;
    if src.len() != row_len * region.height as usize {
        return Err(CompositionError::raster(
            "premul_over_region expects src matching region size",
        ));
    }
    if region.is_empty() {
        return Ok(());
    }
    for (row, src_row) in src.chunks_exact(row_len).enumerate() {
        let start = ((region.y as usize + row) * dst_width as usize + region.x as usize) * 4;
        let dst_row = dst
            .get_mut(start..start + row_len)
            .ok_or_else(|| CompositionError::raster("region exceeds destination surface"))?;
        for (d, s) in dst_row.chunks_exact_mut(4).zip(src_row.chunks_exact(4)) {
            over_px(d, s);
        }
    }
    Ok(())
}

fn over_px(d: &mut [u8], s: &[u8]) {
    let sa = u16::from(s[3]);
    if sa == 0 {
        return;
    }
    let inv = 255u16 - sa;
    d[3] = s[3].saturating_add(mul_div255_u8(u16::from(d[3]), inv));
    for c in 0..3 {
        let dc = mul_div255_u8(u16::from(d[c]), inv);
        d[c] = s[c].saturating_add(dc);
    }
}

/// Convert premultiplied RGBA8 to straight alpha in place.
pub(crate) fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u32::from(px[3]);
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        if a == 255 {
            continue;
        }
        for c in 0..3 {
            px[c] = ((u32::from(px[c]) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = mul_div255_u8(u16::from(px[0]), a);
        px[1] = mul_div255_u8(u16::from(px[1]), a);
        px[2] = mul_div255_u8(u16::from(px[2]), a);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
