/// Convenience result type used across glyphfolio.
pub type FolioResult<T> = Result<T, FolioError>;

/// Error taxonomy for the fallible edges of the crate.
///
/// Rendering, hover math and component lifecycles are total; errors only
/// surface when parsing or validating externally supplied data.
#[derive(thiserror::Error, Debug)]
pub enum FolioError {
    /// A value is outside its documented domain.
    #[error("validation error: {0}")]
    Validation(String),

    /// Unknown easing identifier or malformed tween parameters.
    #[error("animation error: {0}")]
    Animation(String),

    /// Site configuration could not be read or is inconsistent.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FolioError {
    /// Build a [`FolioError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FolioError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`FolioError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`FolioError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for FolioError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
