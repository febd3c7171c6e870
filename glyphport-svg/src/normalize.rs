//! Embedded OT-SVG glyph normalization.
//!
//! Fonts with an SVG table store complete SVG documents per glyph,
//! authored in a coordinate space where (0, 0) is the text baseline.
//! Embedding such a document unchanged renders the glyph outside the
//! visible viewport in most viewers, so the viewport must be rewritten
//! to the content's true top-left before the document is usable on its
//! own. Everything inside the root element passes through
//! byte-for-byte; only the root tag is rebuilt.
//!
//! Any failure along the way (bad gzip framing, non-UTF-8 text, invalid
//! markup, unparsable path data) is reported as [`SvgNormalizeError`];
//! the caller recovers by emitting the monochrome outline instead.

use std::fmt;
use std::fmt::Write as _;
use std::io::Read;

use flate2::read::GzDecoder;
use kurbo::{BezPath, Shape};

use glyphport_graphics::BoundingBox;

use crate::fmt_scalar;

/// Upper bound on a decompressed embedded payload.
///
/// Keeps a malformed or hostile gzip stream from expanding without
/// limit; real OT-SVG documents are a few kilobytes.
pub const MAX_SVG_PAYLOAD: usize = 8 * 1024 * 1024;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Reasons an embedded SVG payload could not be normalized.
///
/// Every variant is recoverable: the export pipeline falls back to the
/// monochrome outline and never surfaces these to the caller.
#[derive(Debug)]
pub enum SvgNormalizeError {
    /// Decompressed payload exceeds [`MAX_SVG_PAYLOAD`].
    TooLarge,
    /// Gzip or UTF-8 decoding failed.
    Decode(String),
    /// The payload is not a well-formed SVG document.
    Parse(String),
    /// A path element carries unparsable path data.
    PathData(String),
}

impl fmt::Display for SvgNormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLarge => write!(f, "embedded payload exceeds the size ceiling"),
            Self::Decode(msg) => write!(f, "payload decode error: {msg}"),
            Self::Parse(msg) => write!(f, "svg parse error: {msg}"),
            Self::PathData(msg) => write!(f, "path data error: {msg}"),
        }
    }
}

impl std::error::Error for SvgNormalizeError {}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Normalize an embedded OT-SVG payload into a standalone document.
///
/// `glyph_bounds` is the whole-glyph extent from the monochrome
/// geometry; it supplies the viewport dimensions while the content walk
/// supplies the viewport origin.
///
/// # Errors
///
/// Returns [`SvgNormalizeError`] on any decode or parse failure; the
/// caller is expected to fall back to monochrome extraction.
pub fn normalize_embedded_svg(
    payload: &[u8],
    glyph_bounds: &BoundingBox,
) -> Result<String, SvgNormalizeError> {
    let text = decode_payload(payload)?;
    let text = strip_prolog(&text);

    let doc = roxmltree::Document::parse(text)
        .map_err(|e| SvgNormalizeError::Parse(e.to_string()))?;
    let root = doc.root_element();
    if root.tag_name().name() != "svg" {
        return Err(SvgNormalizeError::Parse(format!(
            "root element is <{}>, expected <svg>",
            root.tag_name().name()
        )));
    }

    let mut content = ContentBounds::new();
    accumulate_bounds(root, &mut content)?;

    Ok(rewrite_root(text, root, &content, glyph_bounds))
}

// ---------------------------------------------------------------------------
// Payload decoding
// ---------------------------------------------------------------------------

/// Decode the raw payload into text, transparently inflating
/// gzip-framed data.
fn decode_payload(payload: &[u8]) -> Result<String, SvgNormalizeError> {
    if payload.len() > 2 && payload[..2] == GZIP_MAGIC {
        let mut text = String::new();
        let limit = MAX_SVG_PAYLOAD as u64 + 1;
        GzDecoder::new(payload)
            .take(limit)
            .read_to_string(&mut text)
            .map_err(|e| SvgNormalizeError::Decode(e.to_string()))?;
        if text.len() > MAX_SVG_PAYLOAD {
            return Err(SvgNormalizeError::TooLarge);
        }
        Ok(text)
    } else {
        std::str::from_utf8(payload)
            .map(str::to_owned)
            .map_err(|e| SvgNormalizeError::Decode(e.to_string()))
    }
}

/// Strip a leading XML declaration, then leading whitespace.
fn strip_prolog(text: &str) -> &str {
    let rest = if text.starts_with("<?xml") {
        match text.find('>') {
            Some(i) => &text[i + 1..],
            None => text,
        }
    } else {
        text
    };
    rest.trim_start()
}

// ---------------------------------------------------------------------------
// Content bounds walk
// ---------------------------------------------------------------------------

/// Accumulated content extents across all `path` elements.
struct ContentBounds {
    /// Topmost content edge. Starts at 0 so it is never forced
    /// positive: glyphs legitimately extend above the baseline into
    /// negative Y, but content living entirely below it keeps the
    /// origin at the baseline.
    min_top: f64,
    min_left: f64,
    max_width: f64,
    max_height: f64,
    has_paths: bool,
}

impl ContentBounds {
    const fn new() -> Self {
        Self {
            min_top: 0.0,
            min_left: f64::INFINITY,
            max_width: f64::NEG_INFINITY,
            max_height: f64::NEG_INFINITY,
            has_paths: false,
        }
    }
}

/// Recursive bounds visitor: `g` nodes recurse, `path` nodes fold their
/// geometric bounds into the accumulators, everything else passes.
fn accumulate_bounds(
    node: roxmltree::Node<'_, '_>,
    content: &mut ContentBounds,
) -> Result<(), SvgNormalizeError> {
    for child in node.children().filter(roxmltree::Node::is_element) {
        match child.tag_name().name() {
            "g" => accumulate_bounds(child, content)?,
            "path" => {
                let d = child.attribute("d").ok_or_else(|| {
                    SvgNormalizeError::PathData("path element without d attribute".to_owned())
                })?;
                let path = BezPath::from_svg(d)
                    .map_err(|e| SvgNormalizeError::PathData(e.to_string()))?;
                if path.elements().is_empty() {
                    continue;
                }
                let bounds = path.bounding_box();
                content.min_top = content.min_top.min(bounds.y0);
                content.min_left = content.min_left.min(bounds.x0);
                content.max_width = content.max_width.max(bounds.width());
                content.max_height = content.max_height.max(bounds.height());
                content.has_paths = true;
            }
            _ => {}
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Root rewrite
// ---------------------------------------------------------------------------

/// Rebuild the root tag with a corrected `viewBox`, splicing the
/// original inner content back in unchanged.
fn rewrite_root(
    text: &str,
    root: roxmltree::Node<'_, '_>,
    content: &ContentBounds,
    glyph_bounds: &BoundingBox,
) -> String {
    let left = if content.has_paths {
        content.min_left
    } else {
        0.0
    };
    let top = if content.min_top < 0.0 {
        content.min_top
    } else {
        0.0
    };
    // Viewport dimensions come from the whole-glyph bounds; the content
    // walk only corrects the origin. Fonts whose SVG glyphs carry no
    // fallback outline have no glyph bounds, so the content extents
    // stand in.
    let (width, height) = if glyph_bounds.is_valid() {
        (glyph_bounds.width(), glyph_bounds.height())
    } else if content.has_paths {
        (content.max_width, content.max_height)
    } else {
        (0.0, 0.0)
    };

    let mut out = String::with_capacity(text.len() + 64);
    out.push_str("<svg");
    for ns in root.namespaces() {
        match ns.name() {
            Some(prefix) => {
                let _ = write!(out, " xmlns:{prefix}=\"{}\"", escape_attr(ns.uri()));
            }
            None => {
                let _ = write!(out, " xmlns=\"{}\"", escape_attr(ns.uri()));
            }
        }
    }
    for attr in root.attributes() {
        if attr.name() == "viewBox" {
            continue;
        }
        let _ = write!(out, " {}=\"{}\"", attr.name(), escape_attr(attr.value()));
    }
    let _ = write!(
        out,
        " viewBox=\"{} {} {} {}\">",
        fmt_scalar(left),
        fmt_scalar(top),
        fmt_scalar(width),
        fmt_scalar(height),
    );
    out.push_str(inner_content(text, root));
    out.push_str("</svg>");
    out
}

/// The raw text between the root's start and end tags.
fn inner_content<'a>(text: &'a str, root: roxmltree::Node<'_, '_>) -> &'a str {
    match (root.first_child(), root.last_child()) {
        (Some(first), Some(last)) => &text[first.range().start..last.range().end],
        _ => "",
    }
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
