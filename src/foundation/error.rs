use std::path::PathBuf;

/// Convenience result type used across storeshot.
pub type ShotResult<T> = Result<T, ShotError>;

/// Top-level error taxonomy used by the pipeline.
///
/// Only [`ShotError::MissingSource`] and [`ShotError::Font`] are recovered internally (by the
/// batch driver and the font resolver respectively). Everything else ends the batch.
#[derive(thiserror::Error, Debug)]
pub enum ShotError {
    /// Invalid configuration or arguments.
    #[error("validation error: {0}")]
    Validation(String),

    /// A job's source screenshot does not exist.
    #[error("missing source: {}", .0.display())]
    MissingSource(PathBuf),

    /// A font provider could not produce a usable font.
    #[error("font error: {0}")]
    Font(String),

    /// The source image exists but could not be decoded.
    #[error("decode error: '{}': {source}", path.display())]
    Decode {
        /// Offending input path.
        path: PathBuf,
        /// Underlying codec error.
        #[source]
        source: image::ImageError,
    },

    /// The rendered asset could not be encoded or written.
    #[error("encode error: '{}': {source}", path.display())]
    Encode {
        /// Output path that failed.
        path: PathBuf,
        /// Underlying codec error.
        #[source]
        source: image::ImageError,
    },

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ShotError {
    /// Build a [`ShotError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ShotError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`ShotError::MissingSource`] value.
    pub fn missing_source(path: impl Into<PathBuf>) -> Self {
        Self::MissingSource(path.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
