use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The source image does not exist
    #[error("Source image {} not found", .path.display())]
    InputNotFound { path: PathBuf },
    #[error("Source image {} could not be read", .path.display())]
    InputUnreadable { path: PathBuf, source: io::Error },
    /// Error decoding image
    #[error("Image {} could not be decoded", .path.display())]
    DecodeError {
        path: PathBuf,
        source: image::error::ImageError,
    },
    /// The output directory could not be created
    #[error("Output directory {} could not be created", .path.display())]
    OutputDirError { path: PathBuf, source: io::Error },
    /// Error writing a single card
    #[error("Card {} could not be written", .path.display())]
    WriteError {
        path: PathBuf,
        source: image::error::ImageError,
    },
}
