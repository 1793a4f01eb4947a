//! Configuration errors

use std::path::Path;

use super::CbundlError;

pub fn not_found(path: impl AsRef<Path>) -> CbundlError {
    CbundlError::ConfigNotFound {
        path: path.as_ref().display().to_string(),
    }
}

pub fn read_failed(path: impl AsRef<Path>, reason: impl ToString) -> CbundlError {
    CbundlError::ConfigReadFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

pub fn parse_failed(path: impl AsRef<Path>, reason: impl ToString) -> CbundlError {
    CbundlError::ConfigParseFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

pub fn invalid(message: impl Into<String>) -> CbundlError {
    CbundlError::ConfigInvalid {
        message: message.into(),
    }
}
