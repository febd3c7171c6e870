//! COLR layer collection.

use glyphport_graphics::Color;
use ttf_parser::colr::{ClipBox, CompositeMode, Paint, Painter};
use ttf_parser::{GlyphId, Transform};

/// Painter that records COLR layers as (glyph id, fill color) pairs in
/// painter's order.
///
/// COLRv0 reports each layer as an outline followed by a solid paint,
/// which is exactly what the export pipeline composites. COLRv1 paint
/// graphs degrade: gradient paints flatten to the foreground color, and
/// clip/composite structure is ignored.
pub(crate) struct LayerCollector {
    foreground: Color,
    layers: Vec<(u16, Color)>,
    pending: Option<u16>,
}

impl LayerCollector {
    pub(crate) const fn new(foreground: Color) -> Self {
        Self {
            foreground,
            layers: Vec::new(),
            pending: None,
        }
    }

    pub(crate) fn into_layers(self) -> Vec<(u16, Color)> {
        self.layers
    }
}

impl<'a> Painter<'a> for LayerCollector {
    fn outline_glyph(&mut self, glyph_id: GlyphId) {
        self.pending = Some(glyph_id.0);
    }

    fn paint(&mut self, paint: Paint<'a>) {
        let color = match paint {
            Paint::Solid(c) => Color::new(c.red, c.green, c.blue, c.alpha),
            _ => self.foreground,
        };
        if let Some(glyph_id) = self.pending.take() {
            self.layers.push((glyph_id, color));
        }
    }

    fn push_clip(&mut self) {}

    fn push_clip_box(&mut self, _clipbox: ClipBox) {}

    fn pop_clip(&mut self) {}

    fn push_layer(&mut self, _mode: CompositeMode) {}

    fn pop_layer(&mut self) {}

    fn push_transform(&mut self, _transform: Transform) {}

    fn pop_transform(&mut self) {}
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
