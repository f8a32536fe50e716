use std::path::PathBuf;

use crate::errors::ReflectError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThrowError {
    #[error("No photo selected")]
    NoFileSelected,

    #[error("No upload is running")]
    NoUploadPending,

    #[error("Not an image file: {}", path.display())]
    UnsupportedFile { path: PathBuf },

    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Upload failed: {message}")]
    UploadFailed { message: String },
}

impl ReflectError for ThrowError {
    fn error_code(&self) -> &'static str {
        match self {
            ThrowError::NoFileSelected => "NO_FILE_SELECTED",
            ThrowError::NoUploadPending => "NO_UPLOAD_PENDING",
            ThrowError::UnsupportedFile { .. } => "UNSUPPORTED_FILE",
            ThrowError::FileNotFound { .. } => "FILE_NOT_FOUND",
            ThrowError::UploadFailed { .. } => "UPLOAD_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        !matches!(self, ThrowError::UploadFailed { .. })
    }
}
