//! Merge planning errors

use std::path::PathBuf;

use super::CbundlError;

/// Creates a circular include error from the re-entered chain.
///
/// `files` runs from the first re-entered file back to itself.
pub fn circular(files: &[PathBuf]) -> CbundlError {
    let chain = files
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(" -> ");

    CbundlError::CircularInclude {
        chain,
        files: files.to_vec(),
    }
}
