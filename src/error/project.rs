//! Project scanning errors

use std::path::Path;

use super::CbundlError;

/// Creates a root scan failure
pub fn scan_failed(path: impl AsRef<Path>, reason: impl ToString) -> CbundlError {
    CbundlError::ProjectScan {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates an entry-not-found error
pub fn entry_not_found(path: impl AsRef<Path>) -> CbundlError {
    CbundlError::EntryNotFound {
        path: path.as_ref().display().to_string(),
    }
}

/// Creates an error for an entry file that no root covers
pub fn entry_outside(path: impl AsRef<Path>) -> CbundlError {
    CbundlError::EntryOutsideProject {
        path: path.as_ref().display().to_string(),
    }
}
