//! Raster glyph rendering.
//!
//! Draws extracted glyph layers onto a square `tiny-skia` pixmap and
//! encodes the result as PNG with an alpha channel. The canvas is
//! cleared to transparent, content is uniformly scaled down (never up)
//! to fit, and centered on both axes. Embedded bitmap glyphs never pass
//! through here — their PNG bytes are complete artifacts already and
//! are returned unmodified by the export layer.

use std::fmt;

use kurbo::{BezPath, PathEl};
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Transform};

use glyphport_graphics::{BoundingBox, Color, ColorLayer, PathDescription};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors from raster rendering.
#[derive(Debug)]
pub enum RasterError {
    /// The canvas could not be allocated (zero or absurd dimensions).
    Canvas(String),
    /// PNG encoding failed.
    Encode(String),
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Canvas(msg) => write!(f, "raster canvas error: {msg}"),
            Self::Encode(msg) => write!(f, "png encode error: {msg}"),
        }
    }
}

impl std::error::Error for RasterError {}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Render color layers onto a transparent square canvas and encode as
/// PNG.
///
/// Layers are painted in the order given. The union of the layer bounds
/// is scaled by `min(1, canvas/width, canvas/height)` and centered.
///
/// # Errors
///
/// Returns [`RasterError`] if the canvas cannot be allocated or the
/// encoder fails; never for empty content, which produces a fully
/// transparent image.
pub fn render_layers(layers: &[ColorLayer], canvas_size: u32) -> Result<Vec<u8>, RasterError> {
    let mut pixmap = Pixmap::new(canvas_size, canvas_size).ok_or_else(|| {
        RasterError::Canvas(format!("cannot allocate {canvas_size}x{canvas_size} canvas"))
    })?;
    pixmap.fill(tiny_skia::Color::TRANSPARENT);

    let mut bounds = BoundingBox::EMPTY;
    for layer in layers {
        bounds.union(&layer.path.bounds);
    }

    if bounds.is_valid() && bounds.width() > 0.0 && bounds.height() > 0.0 {
        let transform = fit_transform(&bounds, canvas_size);
        for layer in layers {
            draw_layer(&mut pixmap, layer, transform);
        }
    }

    pixmap
        .encode_png()
        .map_err(|e| RasterError::Encode(e.to_string()))
}

/// Render a single monochrome path with a flat fill color.
///
/// # Errors
///
/// Same failure modes as [`render_layers`].
pub fn render_monochrome(
    path: &PathDescription,
    color: Color,
    canvas_size: u32,
) -> Result<Vec<u8>, RasterError> {
    let layer = ColorLayer {
        path: path.clone(),
        color,
    };
    render_layers(std::slice::from_ref(&layer), canvas_size)
}

// ---------------------------------------------------------------------------
// Layout and drawing
// ---------------------------------------------------------------------------

/// Scale-to-fit-and-center transform for content bounds on a square
/// canvas. Content is never scaled up, only down.
#[expect(
    clippy::cast_possible_truncation,
    reason = "canvas coordinates fit comfortably in f32"
)]
fn fit_transform(bounds: &BoundingBox, canvas_size: u32) -> Transform {
    let canvas = f64::from(canvas_size);
    let scale = (canvas / bounds.width())
        .min(canvas / bounds.height())
        .min(1.0);
    let tx = -bounds.min_x * scale + (canvas - bounds.width() * scale) / 2.0;
    let ty = -bounds.min_y * scale + (canvas - bounds.height() * scale) / 2.0;
    Transform::from_row(scale as f32, 0.0, 0.0, scale as f32, tx as f32, ty as f32)
}

fn draw_layer(pixmap: &mut Pixmap, layer: &ColorLayer, transform: Transform) {
    let Some(path) = to_skia_path(&layer.path.path) else {
        return;
    };
    let mut paint = Paint::default();
    paint.set_color_rgba8(layer.color.r, layer.color.g, layer.color.b, layer.color.a);
    paint.anti_alias = true;
    pixmap.fill_path(&path, &paint, FillRule::Winding, transform, None);
}

/// Convert a kurbo path to a `tiny-skia` path. Returns `None` for
/// degenerate paths (no drawable area).
#[expect(
    clippy::cast_possible_truncation,
    reason = "glyph coordinates fit comfortably in f32"
)]
fn to_skia_path(path: &BezPath) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => pb.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => pb.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(p1, p) => {
                pb.quad_to(p1.x as f32, p1.y as f32, p.x as f32, p.y as f32);
            }
            PathEl::CurveTo(p1, p2, p) => pb.cubic_to(
                p1.x as f32,
                p1.y as f32,
                p2.x as f32,
                p2.y as f32,
                p.x as f32,
                p.y as f32,
            ),
            PathEl::ClosePath => pb.close(),
        }
    }
    pb.finish()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
