use crate::foundation::error::{FolioError, FolioResult};

/// Easing curves available to tweens.
///
/// Identifiers follow the `powerN.{in,out,inOut}` naming used by web tween
/// libraries: `power1` is quadratic, `power2` is cubic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Constant speed (`none`, `linear`).
    #[default]
    Linear,
    /// `power1.in`.
    InQuad,
    /// `power1.out`.
    OutQuad,
    /// `power1.inOut`.
    InOutQuad,
    /// `power2.in`.
    InCubic,
    /// `power2.out`.
    OutCubic,
    /// `power2.inOut`.
    InOutCubic,
}

impl Ease {
    /// Decelerating curve used by the hover animator (`power2.out`).
    pub const DECELERATE: Self = Self::OutCubic;

    /// Map linear progress `t` (clamped to `[0, 1]`) through the curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
        }
    }

    /// Parse an identifier such as `power2.out`.
    pub fn from_name(name: &str) -> FolioResult<Self> {
        let ease = match name.trim() {
            "none" | "linear" => Self::Linear,
            "power1.in" => Self::InQuad,
            "power1" | "power1.out" => Self::OutQuad,
            "power1.inOut" => Self::InOutQuad,
            "power2.in" => Self::InCubic,
            "power2" | "power2.out" => Self::OutCubic,
            "power2.inOut" => Self::InOutCubic,
            other => {
                return Err(FolioError::animation(format!(
                    "unknown ease identifier '{other}'"
                )));
            }
        };
        Ok(ease)
    }

    /// Canonical identifier, accepted back by [`Ease::from_name`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "none",
            Self::InQuad => "power1.in",
            Self::OutQuad => "power1.out",
            Self::InOutQuad => "power1.inOut",
            Self::InCubic => "power2.in",
            Self::OutCubic => "power2.out",
            Self::InOutCubic => "power2.inOut",
        }
    }
}

impl std::str::FromStr for Ease {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
