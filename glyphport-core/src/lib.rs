//! Glyph export orchestration.
//!
//! Ties the pipeline together: classify the glyph's encoding, extract
//! geometry or embedded payloads through `glyphport-fonts`, composite
//! through `glyphport-svg` / `glyphport-raster`, and hand the finished
//! artifact to a destination sink. Every export is a pure function of
//! its inputs; the core never touches the filesystem.

pub mod classify;
pub mod error;
pub mod export;
pub mod naming;
pub mod options;
pub mod sink;

pub use classify::{classify, GlyphStrategy};
pub use error::ExportError;
pub use export::{glyph_png, glyph_svg, layer_paths};
pub use naming::{font_file_name, glyph_file_name, FileNaming};
pub use options::{ExportOptions, ExportStyle, OutputFormat};
pub use sink::{export_font_file_to, export_glyph_to, Artifact, ExportOutcome, ExportSink};
