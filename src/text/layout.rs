use crate::{
    dom::document::{Document, ElementId},
    foundation::core::{Point, Rect},
};

/// Horizontal advance source for glyph layout.
pub trait GlyphMetrics {
    /// Pen advance after `ch`, in px.
    fn advance(&self, ch: char) -> f64;

    /// Height of one line box, in px.
    fn line_height(&self) -> f64;
}

/// Every glyph gets the same advance.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Monospace {
    /// Advance of every glyph, in px.
    pub advance: f64,
    /// Line box height, in px.
    pub line_height: f64,
}

impl GlyphMetrics for Monospace {
    fn advance(&self, _ch: char) -> f64 {
        self.advance
    }

    fn line_height(&self) -> f64 {
        self.line_height
    }
}

/// Lay `glyphs` out left to right on one line starting at `origin`, and
/// size `container` to the line box. Returns the container box.
///
/// An empty line still gets a zero-width box so the container stays
/// hit-testable at its origin.
pub fn flow_line(
    doc: &mut Document,
    container: ElementId,
    glyphs: &[ElementId],
    origin: Point,
    metrics: &dyn GlyphMetrics,
) -> Rect {
    let height = metrics.line_height();
    let mut x = origin.x;
    for &g in glyphs {
        let ch = doc.text(g).and_then(|t| t.chars().next()).unwrap_or(' ');
        let w = metrics.advance(ch).max(0.0);
        doc.set_rect(g, Rect::new(x, origin.y, x + w, origin.y + height));
        x += w;
    }
    let line = Rect::new(origin.x, origin.y, x, origin.y + height);
    doc.set_rect(container, line);
    line
}

#[cfg(test)]
#[path = "../../tests/unit/text/layout.rs"]
mod tests;
