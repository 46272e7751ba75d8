/// Result alias used across the compositor.
pub type CompositionResult<T> = Result<T, CompositionError>;

/// Failure kinds surfaced by [`crate::Compositor::compose`].
///
/// None of these are retried internally and composition never produces a partial image.
#[derive(thiserror::Error, Debug)]
pub enum CompositionError {
    /// The grid selection is outside `1..=6`.
    #[error("invalid grid selection: {0} (expected 1..=6)")]
    InvalidGridSelection(u8),

    /// The number of supplied photos does not match the grid selection.
    #[error("photo count mismatch: grid expects {expected} photos, got {actual}")]
    PhotoCountMismatch {
        /// Photos required by the grid selection.
        expected: usize,
        /// Photos actually supplied.
        actual: usize,
    },

    /// A supplied photo could not be turned into a drawable surface.
    #[error("decode failure for photo #{index}: {reason}")]
    DecodeFailure {
        /// Position of the photo in capture order.
        index: usize,
        /// Human-readable cause.
        reason: String,
    },

    /// The finished surface could not be serialized.
    #[error("encode failure: {0}")]
    EncodeFailure(String),

    /// Internal raster failure (surface sizing, buffer mismatch).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CompositionError {
    /// Build a [`CompositionError::DecodeFailure`].
    pub fn decode(index: usize, reason: impl Into<String>) -> Self {
        Self::DecodeFailure {
            index,
            reason: reason.into(),
        }
    }

    /// Build a [`CompositionError::EncodeFailure`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::EncodeFailure(msg.into())
    }

    /// Build an internal raster error.
    pub fn raster(msg: impl Into<String>) -> Self {
        Self::Other(anyhow::anyhow!(msg.into()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
