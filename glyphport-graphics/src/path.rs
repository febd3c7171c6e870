//! Normalized glyph path form.

use kurbo::{BezPath, Shape, Vec2};

use crate::bbox::BoundingBox;
use crate::color::Color;

/// A glyph path in viewport coordinates, with its bounds and the
/// translation that moves the bounds' top-left corner to (0, 0).
///
/// Produced once per glyph layer and consumed immediately; the caller
/// owns its copy and nothing is cached.
#[derive(Debug, Clone, PartialEq)]
pub struct PathDescription {
    /// Resolved cubic/quadratic path in viewport space (Y down).
    pub path: BezPath,
    /// Tight bounds of `path`. Content above the baseline has a
    /// negative `min_y`.
    pub bounds: BoundingBox,
    /// Translation aligning the bounds origin with (0, 0).
    pub origin: Vec2,
}

impl PathDescription {
    /// Wrap a resolved path, computing its bounds and origin transform.
    #[must_use]
    pub fn from_path(path: BezPath) -> Self {
        if path.elements().is_empty() {
            return Self::empty();
        }
        let bounds = BoundingBox::from(path.bounding_box());
        let origin = Vec2::new(-bounds.min_x, -bounds.min_y);
        Self {
            path,
            bounds,
            origin,
        }
    }

    /// A description with no geometry (space and control characters).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            path: BezPath::new(),
            bounds: BoundingBox::EMPTY,
            origin: Vec2::ZERO,
        }
    }

    /// Whether the path carries no drawable geometry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path.elements().is_empty()
    }
}

/// One layer of a multi-layer color glyph.
///
/// Layers are kept in painter's order: earlier layers are painted first,
/// later layers on top. The order reported by the font is preserved
/// exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorLayer {
    pub path: PathDescription,
    pub color: Color,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[expect(
    clippy::float_cmp,
    reason = "exact float comparisons are intentional in tests"
)]
mod tests {
    use super::*;

    fn unit_square() -> BezPath {
        let mut p = BezPath::new();
        p.move_to((0.0, 0.0));
        p.line_to((10.0, 0.0));
        p.line_to((10.0, 10.0));
        p.line_to((0.0, 10.0));
        p.close_path();
        p
    }

    #[test]
    fn from_path_computes_bounds() {
        let desc = PathDescription::from_path(unit_square());
        assert!(desc.bounds.is_valid());
        assert_eq!(desc.bounds.width(), 10.0);
        assert_eq!(desc.bounds.height(), 10.0);
        assert!(!desc.is_empty());
    }

    #[test]
    fn origin_moves_bounds_to_zero() {
        let mut p = BezPath::new();
        p.move_to((3.0, -7.0));
        p.line_to((5.0, -2.0));
        let desc = PathDescription::from_path(p);
        assert_eq!(desc.origin, Vec2::new(-3.0, 7.0));
    }

    #[test]
    fn empty_path_has_no_bounds() {
        let desc = PathDescription::from_path(BezPath::new());
        assert!(desc.is_empty());
        assert!(!desc.bounds.is_valid());
        assert_eq!(desc.origin, Vec2::ZERO);
    }
}
