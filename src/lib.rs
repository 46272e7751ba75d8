//! Procedural photo-booth collages.
//!
//! [`Compositor::compose`] takes the captured frames, a [`GridSelection`] and a [`FrameStyle`]
//! and returns a [`CompositeImage`]: a themed background, a rounded panel holding the photos in
//! a grid, and a style caption, encoded as PNG.

#![forbid(unsafe_code)]

mod assets;
mod background;
mod caption;
mod compositor;
mod config;
mod foundation;
mod layout;
mod panel;
mod render;
mod session;
mod style;
mod text;

pub use assets::photo::{PhotoCapture, PhotoSource};
pub use compositor::{CompositeImage, Compositor, TransmissionMeta, compose};
pub use config::{CompositorOpts, ENV_CAPTION_FONT, ENV_SEED};
pub use foundation::core::{Canvas, Rgba8};
pub use foundation::error::{CompositionError, CompositionResult};
pub use layout::grid::{GridSelection, LayoutPlan, resolve};
pub use session::{CaptureProgress, PhotoSession};
pub use style::FrameStyle;
