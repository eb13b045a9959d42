//! Error types for receipt-render.

use thiserror::Error;

/// Result type alias for receipt-render operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while editing or exporting a receipt.
///
/// Upload failures are deliberately absent: a failed upload is reported
/// through [`UploadOutcome`](crate::UploadOutcome) and never aborts an export.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The requested pipeline stage is not enabled.
    #[error("'{0}' support is not enabled; enable the '{0}' feature in Cargo.toml")]
    FormatNotEnabled(&'static str),

    /// No field with the given id exists in the form.
    #[error("unknown field '{0}'")]
    UnknownField(String),

    /// The field exists but does not accept this kind of input.
    #[error("field '{id}' is a {actual} field, expected {expected}")]
    FieldKindMismatch {
        id: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// An export was triggered while the export controls are disabled.
    #[error("export controls are disabled while a previous export settles")]
    ControlsDisabled,

    /// Failed to rasterize the receipt.
    #[error("PNG rendering failed: {0}")]
    PngRender(String),

    /// Failed to encode PNG image.
    #[error("PNG encoding failed: {0}")]
    PngEncode(String),

    /// Failed to create PDF document.
    #[error("PDF creation failed: {0}")]
    PdfCreate(String),

    /// The raster could not be embedded as an image.
    #[error("image error: {0}")]
    Image(String),

    /// The upload request could not be built or sent.
    #[error("upload failed: {0}")]
    Upload(String),

    /// I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
