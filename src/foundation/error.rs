/// Convenience result type used across skyscroll.
pub type SkyResult<T> = Result<T, SkyError>;

/// Top-level error taxonomy used by the loaders, the render layer and the CLI.
///
/// Field generation, scroll math and visual mapping are total functions and never
/// produce one of these.
#[derive(thiserror::Error, Debug)]
pub enum SkyError {
    /// Invalid user-provided content (section lists, colors).
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid or unreadable site configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Errors while rasterizing or writing a rendered scene.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SkyError {
    /// Build a [`SkyError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SkyError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`SkyError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`SkyError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
