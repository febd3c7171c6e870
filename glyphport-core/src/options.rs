//! Export request options.

use glyphport_graphics::Color;

/// Fill intent for the exported glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportStyle {
    /// Flat black fill.
    #[default]
    Black,
    /// Flat white fill.
    White,
    /// Native color rendering (COLR layers or embedded formats).
    ColorGlyph,
}

impl ExportStyle {
    /// Fill color for monochrome output. Color-glyph exports that fall
    /// back to monochrome render white, matching the white-on-dark
    /// presentation color glyphs are usually previewed against.
    #[must_use]
    pub const fn monochrome_fill(self) -> Color {
        match self {
            Self::Black => Color::BLACK,
            Self::White | Self::ColorGlyph => Color::WHITE,
        }
    }

    /// Foreground color substituted for palette entries that defer to
    /// the text color.
    #[must_use]
    pub const fn foreground(self) -> Color {
        match self {
            Self::Black | Self::ColorGlyph => Color::BLACK,
            Self::White => Color::WHITE,
        }
    }

    /// Whether the caller asked for native color rendering.
    #[must_use]
    pub const fn wants_color(self) -> bool {
        matches!(self, Self::ColorGlyph)
    }
}

/// The artifact kind a caller requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// UTF-8 vector document.
    Svg,
    /// Encoded PNG bytes.
    Png,
}

/// Options for a single export operation. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportOptions {
    /// Pixel size geometry is prepared at. Vector output lives in an
    /// auto-scaling viewport, so this mostly fixes coordinate
    /// magnitudes.
    pub font_size: f64,
    /// Square canvas dimension for raster output.
    pub canvas_size: u32,
    /// Fill intent.
    pub style: ExportStyle,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            font_size: 1024.0,
            canvas_size: 1024,
            style: ExportStyle::Black,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monochrome_fill_follows_style() {
        assert_eq!(ExportStyle::Black.monochrome_fill(), Color::BLACK);
        assert_eq!(ExportStyle::White.monochrome_fill(), Color::WHITE);
        assert_eq!(ExportStyle::ColorGlyph.monochrome_fill(), Color::WHITE);
    }

    #[test]
    fn only_color_glyph_wants_color() {
        assert!(ExportStyle::ColorGlyph.wants_color());
        assert!(!ExportStyle::Black.wants_color());
        assert!(!ExportStyle::White.wants_color());
    }

    #[test]
    fn default_prepares_geometry_at_1024() {
        let opts = ExportOptions::default();
        assert!((opts.font_size - 1024.0).abs() < f64::EPSILON);
        assert_eq!(opts.canvas_size, 1024);
    }
}
