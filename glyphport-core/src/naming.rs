//! Deterministic artifact file names.

use std::ffi::OsStr;
use std::path::Path;

use glyphport_fonts::FontData;

/// Fallbacks for fonts whose name table is missing or empty.
const FALLBACK_FAMILY: &str = "Unknown Family";
const FALLBACK_STYLE: &str = "Regular";

/// How exported font files are named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileNaming {
    /// `"{family} {style}{ext}"` from the font's name table.
    #[default]
    FamilyStyle,
    /// The source file's own name, when known.
    Source,
}

/// File name for a per-glyph artifact:
/// `"{family} {style} - {char}.{ext}"`.
#[must_use]
pub fn glyph_file_name(font: &FontData, ch: char, ext: &str) -> String {
    let family = font.family_name().unwrap_or(FALLBACK_FAMILY);
    let style = font.style_name().unwrap_or(FALLBACK_STYLE);
    format!(
        "{} {} - {}.{ext}",
        collapse_whitespace(family),
        collapse_whitespace(style),
        char_label(ch),
    )
}

/// File name for a whole-font-file export.
///
/// The extension always follows the source file when one is known
/// (lower-cased), defaulting to `.ttf`.
#[must_use]
pub fn font_file_name(font: &FontData, source: Option<&Path>, naming: FileNaming) -> String {
    let ext = extension_of(source);

    if naming == FileNaming::Source {
        if let Some(stem) = source.and_then(Path::file_stem).and_then(OsStr::to_str) {
            return format!("{}{ext}", collapse_whitespace(stem));
        }
    }

    let family = font.family_name().unwrap_or(FALLBACK_FAMILY);
    let style = font.style_name().unwrap_or(FALLBACK_STYLE);
    format!(
        "{} {}{ext}",
        collapse_whitespace(family),
        collapse_whitespace(style),
    )
}

/// Label for a character inside a file name. Characters that would be
/// invisible or hostile in a path are spelled as their codepoint.
fn char_label(ch: char) -> String {
    match ch {
        '/' | '\\' | ':' => codepoint_label(ch),
        c if c.is_control() || c.is_whitespace() => codepoint_label(ch),
        c => c.to_string(),
    }
}

fn codepoint_label(ch: char) -> String {
    format!("U+{:04X}", u32::from(ch))
}

fn extension_of(source: Option<&Path>) -> String {
    source
        .and_then(Path::extension)
        .and_then(OsStr::to_str)
        .map_or_else(|| ".ttf".to_owned(), |e| format!(".{}", e.to_lowercase()))
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_characters_name_themselves() {
        assert_eq!(char_label('A'), "A");
        assert_eq!(char_label('ß'), "ß");
        assert_eq!(char_label('😀'), "😀");
    }

    #[test]
    fn invisible_characters_use_codepoints() {
        assert_eq!(char_label(' '), "U+0020");
        assert_eq!(char_label('\u{7}'), "U+0007");
        assert_eq!(char_label('\u{200B}'), "U+200B");
    }

    #[test]
    fn path_separators_use_codepoints() {
        assert_eq!(char_label('/'), "U+002F");
        assert_eq!(char_label('\\'), "U+005C");
        assert_eq!(char_label(':'), "U+003A");
    }

    #[test]
    fn extension_defaults_to_ttf() {
        assert_eq!(extension_of(None), ".ttf");
        assert_eq!(extension_of(Some(Path::new("fonts/NoExtension"))), ".ttf");
    }

    #[test]
    fn extension_follows_source_lowercased() {
        assert_eq!(extension_of(Some(Path::new("A.OTF"))), ".otf");
        assert_eq!(extension_of(Some(Path::new("dir/b.woff2"))), ".woff2");
    }

    #[test]
    fn whitespace_is_collapsed() {
        assert_eq!(collapse_whitespace("  Noto   Sans\tDisplay "), "Noto Sans Display");
    }
}
