use std::path::Path;
use std::sync::Arc;

use anyhow::Context as _;
use usvg::fontdb;

/// Families tried in order, mirroring `system-ui, "Segoe UI", Roboto, Arial` plus the usual
/// Linux sans faces.
const CAPTION_FAMILIES: [fontdb::Family<'static>; 8] = [
    fontdb::Family::Name("Segoe UI"),
    fontdb::Family::Name("Roboto"),
    fontdb::Family::Name("Arial"),
    fontdb::Family::Name("Helvetica"),
    fontdb::Family::Name("Noto Sans"),
    fontdb::Family::Name("DejaVu Sans"),
    fontdb::Family::Name("Liberation Sans"),
    fontdb::Family::SansSerif,
];

/// Raw bytes of the font file holding the matched face.
///
/// Collections are handed over whole; the shaper picks the face by weight.
#[derive(Clone, Debug)]
pub(crate) struct FontFace {
    pub(crate) bytes: Arc<Vec<u8>>,
}

/// Source of caption fonts.
pub(crate) enum FontBook {
    /// One configured file used for every weight.
    Fixed(FontFace),
    /// Installed system fonts, matched by weight.
    System(fontdb::Database),
}

impl FontBook {
    pub(crate) fn from_file(path: &Path) -> anyhow::Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("read caption font '{}'", path.display()))?;
        Ok(Self::Fixed(FontFace {
            bytes: Arc::new(bytes),
        }))
    }

    pub(crate) fn system() -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!(faces = db.len(), "loaded system fonts");
        Self::System(db)
    }

    /// Best face for a CSS weight, or `None` when no font is available at all.
    pub(crate) fn resolve(&self, weight: u16) -> Option<FontFace> {
        match self {
            Self::Fixed(face) => Some(face.clone()),
            Self::System(db) => {
                let query = fontdb::Query {
                    families: &CAPTION_FAMILIES,
                    weight: fontdb::Weight(weight),
                    ..fontdb::Query::default()
                };
                let id = db
                    .query(&query)
                    .or_else(|| db.faces().next().map(|face| face.id))?;
                db.with_face_data(id, |data, _index| FontFace {
                    bytes: Arc::new(data.to_vec()),
                })
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/fonts.rs"]
mod tests;
