use thiserror::Error;

/// Library error type for picture-viewer operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The selected folder is missing, unreadable, or not a directory.
    #[error("invalid picture folder: {0}")]
    BadDir(String),

    /// Underlying IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The picture header could not be read.
    #[error(transparent)]
    Image(#[from] image::ImageError),
}
