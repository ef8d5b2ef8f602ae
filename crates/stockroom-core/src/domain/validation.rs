//! The validation error taxonomy.
//!
//! Every constraint the system checks before touching the store lives here,
//! so adapters can map the whole family to a single HTTP status (400).

use thiserror::Error;

/// Malformed or constraint-violating input.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{0} is required")]
    Required(&'static str),

    /// A numeric field is negative (or not a finite number).
    #[error("{0} must be a non-negative number")]
    Negative(&'static str),

    /// The id in the request path is not a valid store identifier.
    #[error("Invalid product id: {0}")]
    InvalidId(String),

    /// An upload request arrived with no files.
    #[error("No file(s) uploaded")]
    NoFiles,

    /// An uploaded file's content type is not in the image allow-list.
    #[error("Only image files are allowed (got {0})")]
    UnsupportedImageType(String),

    /// An uploaded file exceeds the per-file size limit.
    #[error("File {0} exceeds the 5 MiB image size limit")]
    FileTooLarge(String),

    /// More files than the per-request cap.
    #[error("At most {0} images may be uploaded per request")]
    TooManyFiles(usize),

    /// Image removal requested without a URL.
    #[error("Image URL is required")]
    MissingImageUrl,
}
