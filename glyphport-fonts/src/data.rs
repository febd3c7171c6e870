//! Font data wrapper around `ttf-parser`.

use std::sync::Arc;

use glyphport_graphics::{Color, PathDescription};
use ttf_parser::GlyphId;

use crate::error::FontError;
use crate::formats::GlyphFormatSet;
use crate::layers::LayerCollector;
use crate::pen::OutlinePen;

/// Parsed font data.
///
/// Stores owned font bytes and cached global properties. Creates a
/// `ttf_parser::Face` on demand for individual queries — parsing is
/// sub-microsecond (no allocation, just header validation and offset
/// table construction). The byte buffer is retained unmodified so the
/// whole font file can be exported as-is.
#[derive(Clone)]
pub struct FontData {
    bytes: Arc<[u8]>,
    /// Font units per em (design coordinate space).
    units_per_em: u16,
    /// Family name from the name table, typographic name preferred.
    family_name: Option<String>,
    /// Style/subfamily name from the name table.
    style_name: Option<String>,
}

impl FontData {
    /// Parse font data from an owned byte buffer.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::Parse`] if the data is not a valid
    /// OpenType/TrueType font.
    pub fn from_bytes(bytes: Arc<[u8]>) -> Result<Self, FontError> {
        let face =
            ttf_parser::Face::parse(&bytes, 0).map_err(|e| FontError::Parse(e.to_string()))?;
        let units_per_em = face.units_per_em();
        let family_name = read_name(
            &face,
            &[
                ttf_parser::name_id::TYPOGRAPHIC_FAMILY,
                ttf_parser::name_id::FAMILY,
            ],
        );
        let style_name = read_name(
            &face,
            &[
                ttf_parser::name_id::TYPOGRAPHIC_SUBFAMILY,
                ttf_parser::name_id::SUBFAMILY,
            ],
        );
        Ok(Self {
            bytes,
            units_per_em,
            family_name,
            style_name,
        })
    }

    /// Create a temporary `Face` reference for queries.
    fn face(&self) -> ttf_parser::Face<'_> {
        #[expect(clippy::expect_used, reason = "bytes were validated at construction")]
        ttf_parser::Face::parse(&self.bytes, 0).expect("font bytes validated at construction")
    }

    /// The unmodified font file bytes, for whole-file export.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Font units per em (design coordinate space).
    #[must_use]
    pub const fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    /// Scale factor from design units to the given pixel size.
    #[must_use]
    pub fn scale(&self, font_size: f64) -> f64 {
        font_size / f64::from(self.units_per_em)
    }

    /// Family name, if the name table carries one.
    #[must_use]
    pub fn family_name(&self) -> Option<&str> {
        self.family_name.as_deref()
    }

    /// Style (subfamily) name, if the name table carries one.
    #[must_use]
    pub fn style_name(&self) -> Option<&str> {
        self.style_name.as_deref()
    }

    /// Map a character to its glyph ID. Returns `None` if not in the cmap.
    #[must_use]
    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face().glyph_index(ch).map(|g| g.0)
    }

    /// Which glyph encodings the font reports for this glyph.
    #[must_use]
    pub fn glyph_formats(&self, glyph_id: u16) -> GlyphFormatSet {
        let face = self.face();
        let gid = GlyphId(glyph_id);
        GlyphFormatSet {
            color_layers: face.is_color_glyph(gid),
            svg: face.glyph_svg_image(gid).is_some(),
            raster: face.glyph_raster_image(gid, u16::MAX).is_some(),
        }
    }

    /// Extract the monochrome outline of a glyph, scaled to `font_size`.
    ///
    /// Returns `None` when the glyph has no outline (space and control
    /// characters, or bitmap-only fonts).
    #[must_use]
    pub fn outline(&self, glyph_id: u16, font_size: f64) -> Option<PathDescription> {
        let face = self.face();
        let mut pen = OutlinePen::new(self.scale(font_size));
        face.outline_glyph(GlyphId(glyph_id), &mut pen)?;
        Some(pen.into_description())
    }

    /// COLR layers for a glyph as (glyph id, color) pairs in painter's
    /// order. `foreground` substitutes for palette entries that defer to
    /// the text color.
    ///
    /// Returns `None` when the glyph has no color layers.
    #[must_use]
    pub fn color_glyph_layers(&self, glyph_id: u16, foreground: Color) -> Option<Vec<(u16, Color)>> {
        let face = self.face();
        let fg = ttf_parser::RgbaColor::new(foreground.r, foreground.g, foreground.b, foreground.a);
        let mut collector = LayerCollector::new(foreground);
        face.paint_color_glyph(GlyphId(glyph_id), 0, fg, &mut collector)?;
        Some(collector.into_layers())
    }

    /// Raw embedded OT-SVG payload covering this glyph, possibly
    /// gzip-framed. The bytes are returned exactly as stored.
    #[must_use]
    pub fn svg_payload(&self, glyph_id: u16) -> Option<&[u8]> {
        self.face()
            .glyph_svg_image(GlyphId(glyph_id))
            .map(|doc| doc.data)
    }

    /// Raw embedded PNG strike for this glyph at the given pixel size.
    ///
    /// Non-PNG strikes (legacy packed bitmaps) are not usable as
    /// standalone artifacts and yield `None`.
    #[must_use]
    pub fn raster_payload(&self, glyph_id: u16, pixels_per_em: u16) -> Option<&[u8]> {
        let face = self.face();
        let image = face.glyph_raster_image(GlyphId(glyph_id), pixels_per_em)?;
        match image.format {
            ttf_parser::RasterImageFormat::PNG => {
                // `image.data` borrows the temporary `Face`, but it points
                // directly into `self.bytes` (the raster strike is a raw
                // subslice of the font file). Recover the identical slice
                // tied to `&self` so it can be returned.
                let bytes = self.bytes();
                let start = (image.data.as_ptr() as usize) - (bytes.as_ptr() as usize);
                Some(&bytes[start..start + image.data.len()])
            }
            _ => None,
        }
    }
}

/// Read the first non-empty unicode name record matching the given ids,
/// in preference order.
fn read_name(face: &ttf_parser::Face<'_>, ids: &[u16]) -> Option<String> {
    let names = face.names();
    for &id in ids {
        for index in 0..names.len() {
            let Some(name) = names.get(index) else {
                continue;
            };
            if name.name_id == id && name.is_unicode() {
                match name.to_string() {
                    Some(s) if !s.is_empty() => return Some(s),
                    _ => {}
                }
            }
        }
    }
    None
}

impl std::fmt::Debug for FontData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontData")
            .field("units_per_em", &self.units_per_em)
            .field("family_name", &self.family_name)
            .field("style_name", &self.style_name)
            .field("bytes_len", &self.bytes.len())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_font_bytes() {
        let bytes: Arc<[u8]> = Arc::from(b"definitely not a font".as_slice());
        let err = FontData::from_bytes(bytes);
        assert!(err.is_err(), "junk bytes should not parse as a font");
    }

    #[test]
    fn rejects_empty_bytes() {
        let bytes: Arc<[u8]> = Arc::from(Vec::new().into_boxed_slice());
        assert!(FontData::from_bytes(bytes).is_err());
    }
}
