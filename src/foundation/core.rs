use crate::foundation::error::{FolioError, FolioResult};

pub use kurbo::{Point, Rect};

/// Virtual host time in whole milliseconds.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Millis(pub u64);

impl Millis {
    /// Zero elapsed time.
    pub const ZERO: Self = Self(0);

    /// Duration in fractional seconds.
    pub fn as_secs_f64(self) -> f64 {
        (self.0 as f64) / 1000.0
    }

    /// Sum, clamped at `u64::MAX`.
    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Difference, clamped at zero.
    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

/// Font-weight axis limits for one text block.
///
/// `default` is the resting weight; hover targets are interpolated between
/// `min` and `max`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WeightRange {
    /// Weight at zero intensity.
    pub min: f64,
    /// Weight at full intensity.
    pub max: f64,
    /// Resting weight, restored on pointer leave.
    pub default: f64,
}

impl WeightRange {
    /// Subtitle range: 100 to 400, resting at 100.
    pub const SUBTITLE: Self = Self {
        min: 100.0,
        max: 400.0,
        default: 100.0,
    };

    /// Title range: 400 to 900, resting at 400.
    pub const TITLE: Self = Self {
        min: 400.0,
        max: 900.0,
        default: 400.0,
    };

    /// Build a range, rejecting non-finite values and `default` outside `[min, max]`.
    pub fn new(min: f64, max: f64, default: f64) -> FolioResult<Self> {
        let range = Self { min, max, default };
        range.validate()?;
        Ok(range)
    }

    /// Check the invariants enforced by [`WeightRange::new`].
    pub fn validate(&self) -> FolioResult<()> {
        if !(self.min.is_finite() && self.max.is_finite() && self.default.is_finite()) {
            return Err(FolioError::validation("WeightRange values must be finite"));
        }
        if self.min > self.max {
            return Err(FolioError::validation("WeightRange min must be <= max"));
        }
        if self.default < self.min || self.default > self.max {
            return Err(FolioError::validation(
                "WeightRange default must lie within [min, max]",
            ));
        }
        Ok(())
    }

    /// Weight at `intensity` in `[0, 1]`: `min + (max - min) * intensity`.
    pub fn at(&self, intensity: f64) -> f64 {
        self.min + (self.max - self.min) * intensity
    }

    /// Whether `weight` lies inside `[min, max]`.
    pub fn contains(&self, weight: f64) -> bool {
        self.min <= weight && weight <= self.max
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
