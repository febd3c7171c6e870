//! Glyph extraction strategy selection.

use glyphport_fonts::GlyphFormatSet;

use crate::options::OutputFormat;

/// The four incompatible glyph encodings the pipeline branches over.
///
/// Exactly one strategy is selected per export; the compositors are
/// total over this enum so a new encoding cannot be silently dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphStrategy {
    /// COLR multi-layer color composition.
    ColorLayers,
    /// Embedded OT-SVG document, normalized and passed through.
    EmbeddedSvg,
    /// Embedded bitmap strike, returned as-is.
    EmbeddedRaster,
    /// Monochrome outline extraction, the universal fallback.
    Outline,
}

/// Select the extraction strategy for a glyph.
///
/// Precedence for vector output: color layers only when color was
/// requested and no SVG document covers the glyph — an embedded SVG is
/// natively vector and wins because exporting it avoids flattening the
/// layer composition. For raster output an embedded strike wins
/// outright; fonts without one render from vector content rather than
/// failing.
#[must_use]
pub const fn classify(
    formats: GlyphFormatSet,
    output: OutputFormat,
    color_intent: bool,
) -> GlyphStrategy {
    match output {
        OutputFormat::Svg => {
            if color_intent && formats.color_layers && !formats.svg {
                GlyphStrategy::ColorLayers
            } else if formats.svg {
                GlyphStrategy::EmbeddedSvg
            } else {
                GlyphStrategy::Outline
            }
        }
        OutputFormat::Png => {
            if formats.raster {
                GlyphStrategy::EmbeddedRaster
            } else if color_intent && formats.color_layers {
                GlyphStrategy::ColorLayers
            } else {
                GlyphStrategy::Outline
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
