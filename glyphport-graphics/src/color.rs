//! RGBA color and SVG color serialization.

/// RGBA color with 8-bit components, as reported by font color palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to an SVG color string.
    ///
    /// Fully opaque black and white use the keyword forms; other opaque
    /// colors use 6-digit hex, and translucent colors 8-digit hex.
    #[must_use]
    pub fn to_svg(self) -> String {
        match self {
            Self::BLACK => "black".to_owned(),
            Self::WHITE => "white".to_owned(),
            Self { r, g, b, a: 255 } => format!("#{r:02x}{g:02x}{b:02x}"),
            Self { r, g, b, a } => format!("#{r:02x}{g:02x}{b:02x}{a:02x}"),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_and_white_use_keywords() {
        assert_eq!(Color::BLACK.to_svg(), "black");
        assert_eq!(Color::WHITE.to_svg(), "white");
    }

    #[test]
    fn opaque_color_uses_six_digit_hex() {
        assert_eq!(Color::new(255, 0, 0, 255).to_svg(), "#ff0000");
        assert_eq!(Color::new(0x12, 0x34, 0x56, 255).to_svg(), "#123456");
    }

    #[test]
    fn translucent_color_keeps_alpha() {
        assert_eq!(Color::new(255, 0, 0, 128).to_svg(), "#ff000080");
    }
}
