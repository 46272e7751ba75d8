use std::path::{Path, PathBuf};

use anyhow::Context as _;

/// Environment variable overriding [`CompositorOpts::seed`].
pub const ENV_SEED: &str = "PHOTOBOOTH_SEED";
/// Environment variable overriding [`CompositorOpts::caption_font`].
pub const ENV_CAPTION_FONT: &str = "PHOTOBOOTH_CAPTION_FONT";

/// Knobs for a [`crate::Compositor`].
///
/// Missing JSON fields take their defaults, so `{}` is a valid config.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompositorOpts {
    /// Seed for the memphis scatter. `None` draws a fresh seed from the OS per composite.
    pub seed: Option<u64>,
    /// Font file used for every caption weight instead of system font discovery.
    pub caption_font: Option<PathBuf>,
    /// Draw style captions.
    pub captions: bool,
    /// Render glow halos. Turning this off trades fidelity for speed in previews.
    pub glow: bool,
}

impl Default for CompositorOpts {
    fn default() -> Self {
        Self {
            seed: None,
            caption_font: None,
            captions: true,
            glow: true,
        }
    }
}

impl CompositorOpts {
    /// Load options from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read compositor config '{}'", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parse compositor config '{}'", path.display()))
    }

    /// Apply `PHOTOBOOTH_SEED` and `PHOTOBOOTH_CAPTION_FONT` from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    pub(crate) fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(raw) = lookup(ENV_SEED) {
            match raw.trim().parse::<u64>() {
                Ok(seed) => self.seed = Some(seed),
                Err(_) => tracing::warn!(value = %raw, "ignoring unparseable {ENV_SEED}"),
            }
        }
        if let Some(path) = lookup(ENV_CAPTION_FONT).filter(|p| !p.trim().is_empty()) {
            self.caption_font = Some(PathBuf::from(path));
        }
        self
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
