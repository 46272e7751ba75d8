use crate::assets::photo::{PhotoCapture, PhotoSource};
use crate::compositor::{CompositeImage, Compositor};
use crate::foundation::error::{CompositionError, CompositionResult};
use crate::layout::grid::GridSelection;
use crate::style::FrameStyle;

/// How far a session is through its captures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaptureProgress {
    /// Photos captured so far.
    pub taken: usize,
    /// Photos the grid needs.
    pub total: usize,
}

impl CaptureProgress {
    pub fn is_complete(self) -> bool {
        self.taken >= self.total
    }
}

/// One booth visit: a fixed grid and style, the captured photos and the latest composite.
///
/// Captures get strictly increasing order indices, including across retakes.
#[derive(Debug)]
pub struct PhotoSession {
    grid: GridSelection,
    style: FrameStyle,
    photos: Vec<PhotoCapture>,
    next_order: u64,
    composite: Option<CompositeImage>,
}

impl PhotoSession {
    pub fn new(grid: GridSelection, style: FrameStyle) -> Self {
        Self {
            grid,
            style,
            photos: Vec::with_capacity(grid.photo_count()),
            next_order: 0,
            composite: None,
        }
    }

    pub fn grid(&self) -> GridSelection {
        self.grid
    }

    pub fn style(&self) -> FrameStyle {
        self.style
    }

    /// Captured photos in capture order.
    pub fn photos(&self) -> &[PhotoCapture] {
        &self.photos
    }

    pub fn progress(&self) -> CaptureProgress {
        CaptureProgress {
            taken: self.photos.len(),
            total: self.grid.photo_count(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.progress().is_complete()
    }

    pub fn remaining(&self) -> usize {
        self.grid.photo_count().saturating_sub(self.photos.len())
    }

    /// Append a frame. Fails once the grid is full.
    pub fn capture(&mut self, source: PhotoSource) -> CompositionResult<CaptureProgress> {
        let total = self.grid.photo_count();
        if self.photos.len() >= total {
            return Err(CompositionError::PhotoCountMismatch {
                expected: total,
                actual: self.photos.len() + 1,
            });
        }
        self.photos.push(PhotoCapture {
            order: self.next_order,
            source,
        });
        self.next_order += 1;
        tracing::debug!(taken = self.photos.len(), total, "photo captured");
        Ok(self.progress())
    }

    /// Drop every capture and the composite built from them.
    pub fn retake(&mut self) {
        self.photos.clear();
        self.composite = None;
    }

    /// Build the composite for the current captures, replacing any earlier one.
    pub fn compose(&mut self, compositor: &Compositor) -> CompositionResult<&CompositeImage> {
        self.composite = None;
        let image = compositor.compose(&self.photos, self.grid, self.style)?;
        Ok(&*self.composite.insert(image))
    }

    /// Latest composite, if one was built since the last retake.
    pub fn composite(&self) -> Option<&CompositeImage> {
        self.composite.as_ref()
    }
}

#[cfg(test)]
#[path = "../tests/unit/session.rs"]
mod tests;
