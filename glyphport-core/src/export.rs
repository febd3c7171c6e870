//! Export orchestration.
//!
//! One entry point per artifact kind: [`glyph_svg`] for vector text,
//! [`glyph_png`] for raster bytes. Both resolve the glyph, probe its
//! encoding capabilities, classify, and dispatch to the matching
//! compositor. The embedded-SVG route recovers from malformed payloads
//! by re-entering the monochrome path; that recovery never surfaces as
//! an error.

use glyphport_fonts::FontData;
use glyphport_graphics::{Color, ColorLayer, PathDescription};
use glyphport_svg::{layered_document, monochrome_document, normalize_embedded_svg};

use crate::classify::{classify, GlyphStrategy};
use crate::error::ExportError;
use crate::options::{ExportOptions, OutputFormat};

/// Produce the vector document for a glyph as UTF-8 SVG text.
///
/// # Errors
///
/// Returns [`ExportError::GlyphResolution`] when the font cannot
/// resolve a glyph needed for the export (including any single layer of
/// a color composition).
pub fn glyph_svg(font: &FontData, ch: char, options: &ExportOptions) -> Result<String, ExportError> {
    let glyph_id = resolve_glyph(font, ch);
    let formats = font.glyph_formats(glyph_id);
    let strategy = classify(formats, OutputFormat::Svg, options.style.wants_color());
    log::debug!(
        "svg export U+{:04X}: glyph {glyph_id}, strategy {strategy:?}",
        u32::from(ch)
    );

    match strategy {
        GlyphStrategy::ColorLayers => {
            let layers = color_layers(font, glyph_id, options.style.foreground(), options.font_size)?;
            Ok(layered_document(&layers).to_string())
        }
        GlyphStrategy::EmbeddedSvg => {
            // Monochrome geometry is extracted up front: the normalizer
            // needs the whole-glyph bounds, and it doubles as the
            // fallback when the payload will not parse.
            let outline = outline_or_empty(font, glyph_id, options.font_size);
            if let Some(payload) = font.svg_payload(glyph_id) {
                match normalize_embedded_svg(payload, &outline.bounds) {
                    Ok(xml) => return Ok(xml),
                    Err(e) => log::warn!(
                        "embedded SVG for U+{:04X} failed to normalize, \
                         falling back to outline: {e}",
                        u32::from(ch)
                    ),
                }
            }
            Ok(monochrome_document(&outline, options.style.monochrome_fill()).to_string())
        }
        GlyphStrategy::EmbeddedRaster | GlyphStrategy::Outline => {
            let outline = outline_or_empty(font, glyph_id, options.font_size);
            Ok(monochrome_document(&outline, options.style.monochrome_fill()).to_string())
        }
    }
}

/// Produce the raster artifact for a glyph as encoded PNG bytes.
///
/// Embedded PNG strikes are returned unmodified; everything else is
/// rendered from vector content on a transparent canvas.
///
/// # Errors
///
/// Returns [`ExportError::GlyphResolution`] for unresolvable glyphs and
/// [`ExportError::Raster`] for canvas or encoder failures.
pub fn glyph_png(
    font: &FontData,
    ch: char,
    options: &ExportOptions,
) -> Result<Vec<u8>, ExportError> {
    let glyph_id = resolve_glyph(font, ch);
    let formats = font.glyph_formats(glyph_id);
    let strategy = classify(formats, OutputFormat::Png, options.style.wants_color());
    log::debug!(
        "png export U+{:04X}: glyph {glyph_id}, strategy {strategy:?}",
        u32::from(ch)
    );

    match strategy {
        GlyphStrategy::EmbeddedRaster => {
            let ppem = u16::try_from(options.canvas_size).unwrap_or(u16::MAX);
            if let Some(data) = font.raster_payload(glyph_id, ppem) {
                return Ok(data.to_vec());
            }
            // A strike exists but is not standalone PNG data; render
            // from vector content instead of failing.
            render_outline_png(font, glyph_id, options)
        }
        GlyphStrategy::ColorLayers => {
            let layers = color_layers(
                font,
                glyph_id,
                options.style.foreground(),
                f64::from(options.canvas_size),
            )?;
            Ok(glyphport_raster::render_layers(&layers, options.canvas_size)?)
        }
        GlyphStrategy::EmbeddedSvg | GlyphStrategy::Outline => {
            render_outline_png(font, glyph_id, options)
        }
    }
}

/// One [`PathDescription`] per glyph index, in the order given.
///
/// An unresolvable glyph aborts the whole export: skipping it would
/// silently corrupt a layered composition.
///
/// # Errors
///
/// Returns [`ExportError::GlyphResolution`] naming the first index the
/// font engine could not resolve.
pub fn layer_paths(
    font: &FontData,
    glyph_ids: &[u16],
    font_size: f64,
) -> Result<Vec<PathDescription>, ExportError> {
    glyph_ids
        .iter()
        .map(|&glyph_id| {
            font.outline(glyph_id, font_size)
                .ok_or(ExportError::GlyphResolution { glyph_id })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Shared extraction helpers
// ---------------------------------------------------------------------------

/// Extract the full color-layer composition for a glyph, in painter's
/// order, pairing each layer path with its palette color.
fn color_layers(
    font: &FontData,
    glyph_id: u16,
    foreground: Color,
    font_size: f64,
) -> Result<Vec<ColorLayer>, ExportError> {
    let entries = font
        .color_glyph_layers(glyph_id, foreground)
        .ok_or(ExportError::GlyphResolution { glyph_id })?;
    let ids: Vec<u16> = entries.iter().map(|&(id, _)| id).collect();
    let paths = layer_paths(font, &ids, font_size)?;
    Ok(paths
        .into_iter()
        .zip(entries)
        .map(|(path, (_, color))| ColorLayer { path, color })
        .collect())
}

/// Resolve a character to a glyph index, falling back to `.notdef` for
/// unmapped characters — the same tofu a text engine would draw.
fn resolve_glyph(font: &FontData, ch: char) -> u16 {
    font.glyph_id(ch).unwrap_or(0)
}

/// Monochrome outline, or an empty description for glyphs with no
/// contours (space and control characters).
fn outline_or_empty(font: &FontData, glyph_id: u16, font_size: f64) -> PathDescription {
    font.outline(glyph_id, font_size)
        .unwrap_or_else(PathDescription::empty)
}

fn render_outline_png(
    font: &FontData,
    glyph_id: u16,
    options: &ExportOptions,
) -> Result<Vec<u8>, ExportError> {
    let path = outline_or_empty(font, glyph_id, f64::from(options.canvas_size));
    Ok(glyphport_raster::render_monochrome(
        &path,
        options.style.monochrome_fill(),
        options.canvas_size,
    )?)
}
