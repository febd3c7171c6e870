//! Destination sink abstraction and export outcomes.
//!
//! The core produces artifacts; it never opens files. Callers provide
//! an [`ExportSink`] — the CLI writes to a directory, tests write to
//! memory, an embedding application can stream wherever it likes.

use std::io;
use std::path::Path;

use glyphport_fonts::FontData;

use crate::error::ExportError;
use crate::export::{glyph_png, glyph_svg};
use crate::naming::{font_file_name, glyph_file_name, FileNaming};
use crate::options::{ExportOptions, OutputFormat};

/// A destination capable of accepting a text document or a byte stream.
pub trait ExportSink {
    /// Write a finished text artifact under the given file name.
    ///
    /// # Errors
    ///
    /// Propagates the destination's own I/O failure.
    fn write_text(&mut self, name: &str, contents: &str) -> io::Result<()>;

    /// Write a finished binary artifact under the given file name.
    ///
    /// # Errors
    ///
    /// Propagates the destination's own I/O failure.
    fn write_bytes(&mut self, name: &str, contents: &[u8]) -> io::Result<()>;
}

/// The produced artifact of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Artifact {
    /// UTF-8 vector document.
    Text(String),
    /// Encoded binary image or font file.
    Bytes(Vec<u8>),
}

/// A successful export: what was produced and the name it was written
/// under. Failures never reach this type — a partial artifact is never
/// reported as success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    /// Destination file name the artifact was written under.
    pub file_name: String,
    /// The produced artifact.
    pub artifact: Artifact,
}

/// Export one glyph and write the artifact to the sink.
///
/// # Errors
///
/// Extraction failures and sink write failures propagate as
/// [`ExportError`]; nothing is written on extraction failure.
pub fn export_glyph_to(
    sink: &mut dyn ExportSink,
    font: &FontData,
    ch: char,
    options: &ExportOptions,
    format: OutputFormat,
) -> Result<ExportOutcome, ExportError> {
    let (artifact, ext) = match format {
        OutputFormat::Svg => (Artifact::Text(glyph_svg(font, ch, options)?), "svg"),
        OutputFormat::Png => (Artifact::Bytes(glyph_png(font, ch, options)?), "png"),
    };
    let file_name = glyph_file_name(font, ch, ext);

    match &artifact {
        Artifact::Text(text) => sink.write_text(&file_name, text)?,
        Artifact::Bytes(bytes) => sink.write_bytes(&file_name, bytes)?,
    }

    Ok(ExportOutcome {
        file_name,
        artifact,
    })
}

/// Export the unmodified font file bytes to the sink.
///
/// # Errors
///
/// Sink write failures propagate as [`ExportError::Io`].
pub fn export_font_file_to(
    sink: &mut dyn ExportSink,
    font: &FontData,
    source: Option<&Path>,
    naming: FileNaming,
) -> Result<ExportOutcome, ExportError> {
    let file_name = font_file_name(font, source, naming);
    sink.write_bytes(&file_name, font.bytes())?;
    Ok(ExportOutcome {
        file_name,
        artifact: Artifact::Bytes(font.bytes().to_vec()),
    })
}
