//! Vector document assembly for extracted glyphs.
//!
//! Builds the final SVG output for the monochrome and multi-layer color
//! cases using the `svg` crate's node tree:
//! - Path data is written as raw `d` strings to keep `f64` precision
//!   under control (fixed decimal places, trailing zeros preserved so
//!   output is byte-stable across runs).
//! - The document `viewBox` always equals the union of the content
//!   bounds, with width/height re-derived from the combined edges.
//! - Glyph coordinates arrive already Y-flipped from the font layer, so
//!   no transform attribute is needed anywhere in the output.
//!
//! Embedded OT-SVG payloads take a different route through
//! [`normalize::normalize_embedded_svg`], which preserves the font's own
//! document and only rewrites its viewport.

pub mod normalize;

pub use normalize::{normalize_embedded_svg, SvgNormalizeError, MAX_SVG_PAYLOAD};

use kurbo::{BezPath, PathEl, Point};
use svg::node::element::Path as SvgPath;
use svg::Document;

use glyphport_graphics::{BoundingBox, Color, ColorLayer, PathDescription};

/// Decimal places for all emitted coordinates.
///
/// Three places keeps round-tripping within the 1e-3 tolerance the
/// pipeline promises while avoiding float noise in the output.
const PRECISION: usize = 3;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Build a vector document for a single monochrome glyph path.
///
/// An empty path (space and control characters) yields an empty but
/// well-formed document rather than an error.
#[must_use]
pub fn monochrome_document(path: &PathDescription, color: Color) -> Document {
    if path.is_empty() {
        return Document::new();
    }
    document_with_bounds(&path.bounds).add(path_element(path, color))
}

/// Build a vector document for a multi-layer color glyph.
///
/// Layers are appended in the order given (painter's order) and the
/// `viewBox` is the union of every layer's bounds.
#[must_use]
pub fn layered_document(layers: &[ColorLayer]) -> Document {
    let mut bounds = BoundingBox::EMPTY;
    for layer in layers {
        bounds.union(&layer.path.bounds);
    }

    let mut doc = document_with_bounds(&bounds);
    for layer in layers {
        doc = doc.add(path_element(&layer.path, layer.color));
    }
    doc
}

// ---------------------------------------------------------------------------
// Element construction
// ---------------------------------------------------------------------------

fn document_with_bounds(bounds: &BoundingBox) -> Document {
    Document::new().set("viewBox", view_box_value(bounds))
}

fn path_element(path: &PathDescription, color: Color) -> SvgPath {
    SvgPath::new()
        .set("d", path_to_d(&path.path))
        .set("fill", color.to_svg())
}

pub(crate) fn view_box_value(bounds: &BoundingBox) -> String {
    if bounds.is_valid() {
        format!(
            "{} {} {} {}",
            fmt_scalar(bounds.min_x),
            fmt_scalar(bounds.min_y),
            fmt_scalar(bounds.width()),
            fmt_scalar(bounds.height()),
        )
    } else {
        "0 0 0 0".to_owned()
    }
}

// ---------------------------------------------------------------------------
// Path → SVG "d" attribute
// ---------------------------------------------------------------------------

/// Convert a resolved path to an SVG path data string.
///
/// Coordinates are written with fixed precision so identical inputs
/// always serialize to identical bytes.
#[must_use]
pub fn path_to_d(path: &BezPath) -> String {
    let mut d = String::with_capacity(path.elements().len() * 24);
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => {
                d.push('M');
                write_point(&mut d, p);
            }
            PathEl::LineTo(p) => {
                d.push('L');
                write_point(&mut d, p);
            }
            PathEl::QuadTo(p1, p) => {
                d.push('Q');
                write_point(&mut d, p1);
                d.push(' ');
                write_point(&mut d, p);
            }
            PathEl::CurveTo(p1, p2, p) => {
                d.push('C');
                write_point(&mut d, p1);
                d.push(' ');
                write_point(&mut d, p2);
                d.push(' ');
                write_point(&mut d, p);
            }
            PathEl::ClosePath => d.push('Z'),
        }
    }
    d
}

/// Write "x,y" with fixed precision.
///
/// Normalizes negative zero to positive zero for cleaner output.
fn write_point(d: &mut String, p: Point) {
    use std::fmt::Write;
    let x = if p.x == 0.0 { 0.0 } else { p.x };
    let y = if p.y == 0.0 { 0.0 } else { p.y };
    let _ = write!(d, "{x:.PRECISION$},{y:.PRECISION$}");
}

/// Format a scalar with fixed precision, stripping trailing zeros.
pub(crate) fn fmt_scalar(v: f64) -> String {
    let s = format!("{v:.PRECISION$}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_owned()
    } else {
        s
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests may panic")]
mod tests {
    use super::*;

    fn square(x: f64, y: f64, size: f64) -> PathDescription {
        let mut p = BezPath::new();
        p.move_to((x, y));
        p.line_to((x + size, y));
        p.line_to((x + size, y + size));
        p.line_to((x, y + size));
        p.close_path();
        PathDescription::from_path(p)
    }

    fn parse_view_box(doc: &str) -> Vec<f64> {
        let start = doc.find("viewBox=\"").expect("missing viewBox") + "viewBox=\"".len();
        let end = doc[start..].find('"').expect("unterminated viewBox") + start;
        doc[start..end]
            .split_whitespace()
            .map(|v| v.parse().expect("viewBox number"))
            .collect()
    }

    // -- path_to_d --

    #[test]
    fn path_to_d_empty() {
        assert_eq!(path_to_d(&BezPath::new()), "");
    }

    #[test]
    fn path_to_d_commands() {
        let d = path_to_d(&square(0.0, 0.0, 10.0).path);
        assert!(d.starts_with("M0.000,0.000"), "unexpected start: {d}");
        assert!(d.contains('L'), "missing line commands: {d}");
        assert!(d.ends_with('Z'), "missing close: {d}");
    }

    #[test]
    fn path_to_d_negative_zero_normalized() {
        let mut p = BezPath::new();
        p.move_to((-0.0, -0.0));
        p.line_to((1.0, 1.0));
        let d = path_to_d(&p);
        assert!(d.starts_with("M0.000,0.000"), "negative zero leaked: {d}");
    }

    // -- fmt_scalar --

    #[test]
    fn fmt_scalar_strips_trailing_zeros() {
        assert_eq!(fmt_scalar(1.0), "1");
        assert_eq!(fmt_scalar(1.5), "1.5");
        assert_eq!(fmt_scalar(-80.25), "-80.25");
    }

    // -- monochrome documents --

    #[test]
    fn monochrome_empty_path_yields_empty_document() {
        let doc = monochrome_document(&PathDescription::empty(), Color::BLACK);
        let s = doc.to_string();
        assert!(s.contains("<svg"), "not a document: {s}");
        assert!(!s.contains("<path"), "empty glyph must have no path: {s}");
    }

    #[test]
    fn monochrome_view_box_matches_path_bounds() {
        let path = square(2.0, -8.0, 4.0);
        let doc = monochrome_document(&path, Color::BLACK).to_string();
        assert_eq!(parse_view_box(&doc), vec![2.0, -8.0, 4.0, 4.0]);
        assert!(doc.contains("fill=\"black\""), "missing fill: {doc}");
    }

    #[test]
    fn monochrome_white_fill() {
        let doc = monochrome_document(&square(0.0, 0.0, 1.0), Color::WHITE).to_string();
        assert!(doc.contains("fill=\"white\""), "missing white fill: {doc}");
    }

    // -- layered documents --

    #[test]
    fn layers_preserve_painter_order() {
        let layers = vec![
            ColorLayer {
                path: square(0.0, 0.0, 10.0),
                color: Color::new(255, 0, 0, 255),
            },
            ColorLayer {
                path: square(2.0, 2.0, 10.0),
                color: Color::new(0, 255, 0, 255),
            },
            ColorLayer {
                path: square(4.0, 4.0, 10.0),
                color: Color::new(0, 0, 255, 255),
            },
        ];
        let doc = layered_document(&layers).to_string();

        let red = doc.find("#ff0000").expect("missing red layer");
        let green = doc.find("#00ff00").expect("missing green layer");
        let blue = doc.find("#0000ff").expect("missing blue layer");
        assert!(red < green && green < blue, "layer order lost: {doc}");
        assert_eq!(doc.matches("<path").count(), 3, "expected 3 paths: {doc}");
    }

    #[test]
    fn layered_view_box_is_union_of_bounds() {
        let layers = vec![
            ColorLayer {
                path: square(0.0, -10.0, 5.0),
                color: Color::new(255, 0, 0, 255),
            },
            ColorLayer {
                path: square(3.0, 2.0, 6.0),
                color: Color::new(0, 0, 255, 255),
            },
        ];
        let doc = layered_document(&layers).to_string();
        // Union: x in [0, 9], y in [-10, 8].
        assert_eq!(parse_view_box(&doc), vec![0.0, -10.0, 9.0, 18.0]);
    }

    #[test]
    fn no_layers_yields_zero_view_box() {
        let doc = layered_document(&[]).to_string();
        assert_eq!(parse_view_box(&doc), vec![0.0, 0.0, 0.0, 0.0]);
    }

    // -- pipeline properties --

    #[test]
    fn identical_input_serializes_identically() {
        let path = square(1.25, -3.75, 7.5);
        let a = monochrome_document(&path, Color::BLACK).to_string();
        let b = monochrome_document(&path, Color::BLACK).to_string();
        assert_eq!(a, b);
    }

    #[test]
    fn view_box_round_trips_within_tolerance() {
        let mut p = BezPath::new();
        p.move_to((0.1234, -80.5678));
        p.line_to((10.9876, -80.5678));
        p.line_to((10.9876, 20.4321));
        p.close_path();
        let path = PathDescription::from_path(p);
        let doc = monochrome_document(&path, Color::BLACK).to_string();

        let vb = parse_view_box(&doc);
        assert!((vb[0] - path.bounds.min_x).abs() <= 1e-3, "x: {vb:?}");
        assert!((vb[1] - path.bounds.min_y).abs() <= 1e-3, "y: {vb:?}");
        assert!((vb[2] - path.bounds.width()).abs() <= 1e-3, "w: {vb:?}");
        assert!((vb[3] - path.bounds.height()).abs() <= 1e-3, "h: {vb:?}");
    }
}
