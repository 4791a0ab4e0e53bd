/// Convenience result type used across heroreel.
pub type HeroResult<T> = Result<T, HeroError>;

/// Top-level error taxonomy.
///
/// Only construction and configuration can fail. Runtime signals (hover, click, load reports,
/// scroll updates, frame ticks) never produce errors.
#[derive(thiserror::Error, Debug)]
pub enum HeroError {
    /// Invalid user-provided values (durations, geometry, progress inputs).
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed playlist definitions.
    #[error("playlist error: {0}")]
    Playlist(String),

    /// Invalid tween or easing setup.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors while loading configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HeroError {
    /// Build a [`HeroError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`HeroError::Playlist`] value.
    pub fn playlist(msg: impl Into<String>) -> Self {
        Self::Playlist(msg.into())
    }

    /// Build a [`HeroError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`HeroError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`HeroError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
