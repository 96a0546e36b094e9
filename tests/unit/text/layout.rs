use super::*;
use crate::text::split::{mount_glyphs, split_text};

struct Narrow;

impl GlyphMetrics for Narrow {
    fn advance(&self, ch: char) -> f64 {
        if ch == 'i' { 4.0 } else { 10.0 }
    }

    fn line_height(&self) -> f64 {
        20.0
    }
}

#[test]
fn monospace_line_is_contiguous() {
    let mut doc = Document::new();
    let p = doc.append_new(doc.body(), "p");
    let ids = mount_glyphs(&mut doc, p, &split_text("abc", None, 100.0));
    let metrics = Monospace {
        advance: 12.0,
        line_height: 30.0,
    };
    let line = flow_line(&mut doc, p, &ids, Point::new(5.0, 40.0), &metrics);

    assert_eq!(line, Rect::new(5.0, 40.0, 41.0, 70.0));
    assert_eq!(doc.rect(p), Some(line));
    assert_eq!(doc.rect(ids[0]), Some(Rect::new(5.0, 40.0, 17.0, 70.0)));
    assert_eq!(doc.rect(ids[2]), Some(Rect::new(29.0, 40.0, 41.0, 70.0)));
}

#[test]
fn per_char_metrics_are_respected() {
    let mut doc = Document::new();
    let p = doc.append_new(doc.body(), "p");
    let ids = mount_glyphs(&mut doc, p, &split_text("hi!", None, 100.0));
    flow_line(&mut doc, p, &ids, Point::ZERO, &Narrow);
    assert_eq!(doc.rect(ids[1]).unwrap().width(), 4.0);
    assert_eq!(doc.rect(ids[2]).unwrap().x0, 14.0);
}

#[test]
fn empty_line_has_zero_width_box() {
    let mut doc = Document::new();
    let p = doc.append_new(doc.body(), "p");
    let line = flow_line(&mut doc, p, &[], Point::new(3.0, 3.0), &Narrow);
    assert_eq!(line.width(), 0.0);
    assert_eq!(line.height(), 20.0);
}
