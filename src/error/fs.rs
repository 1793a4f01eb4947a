//! File system errors

use std::path::Path;

use super::CbundlError;

pub fn read_failed(path: impl AsRef<Path>, reason: impl ToString) -> CbundlError {
    CbundlError::FileReadFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

pub fn write_failed(path: impl AsRef<Path>, reason: impl ToString) -> CbundlError {
    CbundlError::FileWriteFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> CbundlError {
    CbundlError::IoError {
        message: message.into(),
    }
}
