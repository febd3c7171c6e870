//! Glyph encoding capability probing.

/// The set of encoding strategies a (face, glyph) pair supports, as
/// reported by the font tables.
///
/// Probed once per export and consumed by the strategy classifier; never
/// mutated. A glyph with none of the flags set still has the
/// monochrome-outline path available as the universal fallback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlyphFormatSet {
    /// The glyph has COLR color layers.
    pub color_layers: bool,
    /// The glyph is covered by an embedded OT-SVG document.
    pub svg: bool,
    /// The glyph has an embedded bitmap strike.
    pub raster: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_outline_only() {
        let formats = GlyphFormatSet::default();
        assert!(!formats.color_layers);
        assert!(!formats.svg);
        assert!(!formats.raster);
    }
}
