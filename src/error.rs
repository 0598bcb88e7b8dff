use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading, saving or configuring a doodle
#[derive(Debug, Error)]
pub enum DoodleError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{} is not an image.", .0.display())]
    UnsupportedExtension(PathBuf),

    #[error("Failed to read image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write image {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// The drawing worker has stopped and can no longer accept frames
    #[error("Drawing worker is not running")]
    WorkerGone,
}

/// Result type for doodle operations
pub type DoodleResult<T> = Result<T, DoodleError>;
