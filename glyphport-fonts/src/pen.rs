//! Outline extraction pen.

use kurbo::{BezPath, Point};

use glyphport_graphics::PathDescription;

/// Adapter from `ttf_parser::OutlineBuilder` to a kurbo path.
///
/// Coordinates are scaled from font design units to the requested size,
/// and the Y axis is flipped per coordinate: fonts are Y-up while the
/// viewport is Y-down, so content above the baseline lands at negative Y.
pub(crate) struct OutlinePen {
    path: BezPath,
    scale: f64,
}

impl OutlinePen {
    pub(crate) fn new(scale: f64) -> Self {
        Self {
            path: BezPath::new(),
            scale,
        }
    }

    pub(crate) fn into_description(self) -> PathDescription {
        PathDescription::from_path(self.path)
    }

    fn point(&self, x: f32, y: f32) -> Point {
        Point::new(f64::from(x) * self.scale, -f64::from(y) * self.scale)
    }
}

impl ttf_parser::OutlineBuilder for OutlinePen {
    fn move_to(&mut self, x: f32, y: f32) {
        let p = self.point(x, y);
        self.path.move_to(p);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p = self.point(x, y);
        self.path.line_to(p);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let p1 = self.point(x1, y1);
        let p = self.point(x, y);
        self.path.quad_to(p1, p);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let p1 = self.point(x1, y1);
        let p2 = self.point(x2, y2);
        let p = self.point(x, y);
        self.path.curve_to(p1, p2, p);
    }

    fn close(&mut self) {
        self.path.close_path();
    }
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
    use ttf_parser::OutlineBuilder;

    #[test]
    fn flips_y_and_scales() {
        // A triangle in design units with upem-style coordinates,
        // scaled by 0.5.
        let mut pen = OutlinePen::new(0.5);
        pen.move_to(0.0, 0.0);
        pen.line_to(100.0, 0.0);
        pen.line_to(100.0, 200.0);
        pen.close();

        let desc = pen.into_description();
        assert!(!desc.is_empty());
        // X scaled down, Y scaled and negated: the ascender at design
        // y=200 becomes viewport y=-100.
        assert_eq!(desc.bounds.min_x, 0.0);
        assert_eq!(desc.bounds.max_x, 50.0);
        assert_eq!(desc.bounds.min_y, -100.0);
        assert_eq!(desc.bounds.max_y, 0.0);
    }

    #[test]
    fn empty_pen_yields_empty_description() {
        let pen = OutlinePen::new(1.0);
        let desc = pen.into_description();
        assert!(desc.is_empty());
        assert!(!desc.bounds.is_valid());
    }

    #[test]
    fn curves_are_carried_through() {
        let mut pen = OutlinePen::new(1.0);
        pen.move_to(0.0, 0.0);
        pen.quad_to(5.0, 10.0, 10.0, 0.0);
        pen.curve_to(12.0, -3.0, 18.0, -3.0, 20.0, 0.0);
        pen.close();

        let desc = pen.into_description();
        // Quad control at design y=10 pulls the bounds above the
        // baseline (negative viewport Y).
        assert!(desc.bounds.min_y < 0.0, "bounds: {:?}", desc.bounds);
        assert!(desc.bounds.max_y > 0.0, "bounds: {:?}", desc.bounds);
        assert_eq!(desc.bounds.min_x, 0.0);
        assert_eq!(desc.bounds.max_x, 20.0);
    }
}
