//! Pointer-proximity weighting for hover text.
//!
//! `intensity = exp(-distance² / SMOOTHING)` where `distance` is the
//! horizontal gap between the pointer and a glyph's center, both measured
//! from the container's left edge. The curve is a smooth falloff with no
//! hard cutoff; at `distance = 50` it is already down to `exp(-2.5)`.

use crate::foundation::core::{Rect, WeightRange};

/// Falloff width of the proximity curve, in px².
pub const SMOOTHING: f64 = 1000.0;

/// Proximity score in `[0, 1]`; exactly `1.0` when the pointer sits on the
/// glyph center, underflowing to `0.0` far away.
pub fn intensity(pointer_x: f64, glyph_center_x: f64) -> f64 {
    let distance = (pointer_x - glyph_center_x).abs();
    (-(distance * distance) / SMOOTHING).exp()
}

/// Hover target for a glyph: `min + (max - min) * intensity`.
pub fn target_weight(range: &WeightRange, pointer_x: f64, glyph_center_x: f64) -> f64 {
    range.at(intensity(pointer_x, glyph_center_x))
}

/// Horizontal center of `glyph` relative to `container`'s left edge.
pub fn glyph_center(container: Rect, glyph: Rect) -> f64 {
    glyph.x0 - container.x0 + glyph.width() / 2.0
}

#[cfg(test)]
#[path = "../../tests/unit/hover/intensity.rs"]
mod tests;
