//! Export error taxonomy.
//!
//! Extraction-internal failures (embedded SVG that will not parse) are
//! recovered with a defined fallback and never reach this type.
//! Boundary failures — an unresolvable glyph, a destination write, a
//! broken canvas — propagate as [`ExportError`] with no partial writes.

use std::fmt;

use glyphport_raster::RasterError;

/// Errors surfaced to export callers.
#[derive(Debug)]
pub enum ExportError {
    /// The font engine cannot resolve a glyph index. Fatal for the
    /// whole export: silently omitting a layer would corrupt a layered
    /// color composition.
    GlyphResolution {
        /// The glyph index that failed to resolve.
        glyph_id: u16,
    },
    /// Raster canvas or encoding failure.
    Raster(RasterError),
    /// Destination write failure. Never retried.
    Io(std::io::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GlyphResolution { glyph_id } => {
                write!(f, "cannot resolve glyph {glyph_id} from font data")
            }
            Self::Raster(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "destination write failed: {e}"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::GlyphResolution { .. } => None,
            Self::Raster(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<RasterError> for ExportError {
    fn from(e: RasterError) -> Self {
        Self::Raster(e)
    }
}

impl From<std::io::Error> for ExportError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_resolution_names_the_glyph() {
        let err = ExportError::GlyphResolution { glyph_id: 42 };
        let s = format!("{err}");
        assert!(s.contains("42"), "missing glyph id: {s}");
    }

    #[test]
    fn io_errors_carry_a_source() {
        use std::error::Error;
        let err = ExportError::from(std::io::Error::other("denied"));
        assert!(err.source().is_some());
        assert!(format!("{err}").contains("denied"));
    }
}
