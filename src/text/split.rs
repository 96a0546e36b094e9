use crate::dom::document::{Document, ElementId};

/// Non-breaking space; keeps word gaps measurable once split into spans.
pub const NBSP: char = '\u{00A0}';

/// One glyph placeholder produced by [`split_text`].
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphSpan {
    /// The character, with spaces already replaced by [`NBSP`].
    pub ch: char,
    /// Class shared by every span of the line.
    pub class: Option<String>,
    /// Starting `'wght'` value.
    pub weight: f64,
}

/// Split `text` into one [`GlyphSpan`] per Unicode scalar, in order.
///
/// Every ASCII space becomes [`NBSP`]; each span starts at `base_weight`.
pub fn split_text(text: &str, class: Option<&str>, base_weight: f64) -> Vec<GlyphSpan> {
    text.chars()
        .map(|ch| GlyphSpan {
            ch: if ch == ' ' { NBSP } else { ch },
            class: class.map(str::to_string),
            weight: base_weight,
        })
        .collect()
}

/// Append a `<span>` per glyph to `parent` and hand back their ids.
///
/// The returned ids are the hover session's glyph collection; nothing
/// re-queries the container for spans later.
pub fn mount_glyphs(
    doc: &mut Document,
    parent: ElementId,
    glyphs: &[GlyphSpan],
) -> Vec<ElementId> {
    glyphs
        .iter()
        .enumerate()
        .map(|(i, g)| {
            let span = doc.append_new(parent, "span");
            doc.set_key(span, i.to_string());
            doc.set_class(span, g.class.as_deref());
            doc.set_weight(span, g.weight);
            doc.set_text(span, g.ch.to_string());
            span
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/text/split.rs"]
mod tests;
