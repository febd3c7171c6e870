//! Font loading and glyph extraction for `glyphport`.
//!
//! This crate wraps `ttf-parser` to expose the four glyph encodings the
//! export pipeline branches over: monochrome outlines, COLR color layers,
//! embedded OT-SVG documents, and embedded bitmap strikes. It is
//! intentionally independent of the compositor crates — everything it
//! produces is plain data (`PathDescription`, raw payload bytes,
//! capability flags).

pub mod data;
pub mod error;
pub mod formats;

mod layers;
mod pen;

pub use data::FontData;
pub use error::FontError;
pub use formats::GlyphFormatSet;
