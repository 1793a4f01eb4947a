//! Test fixtures for building throwaway C projects on disk.
//!
//! ```ignore
//! use crate::test_fixtures::create_project;
//!
//! let (_temp, root) = create_project(&[
//!     ("frob.h", "void frobinate(void);\n"),
//!     ("main.c", "#include \"frob.h\"\n"),
//! ]);
//! ```

use std::env;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::project::{ProjectIndex, ScanOptions};

/// Base directory for temp dirs; never relative to the working directory.
fn temp_dir_base() -> PathBuf {
    let t = env::temp_dir();
    if t.is_absolute() {
        t
    } else {
        PathBuf::from("/tmp")
    }
}

/// Create an empty temp directory.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new_in(temp_dir_base()).expect("Failed to create temp directory")
}

/// Create a temp directory holding `files`, given as (relative path, content).
///
/// Returns the `TempDir` (which cleans up on drop) and its canonical path.
///
/// # Panics
///
/// Panics if any file cannot be created.
#[must_use]
pub fn create_project(files: &[(&str, &str)]) -> (TempDir, PathBuf) {
    let temp = create_temp_dir();
    for (path, content) in files {
        let full_path = temp.path().join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&full_path, content).expect("Failed to write test file");
    }
    let root = dunce::canonicalize(temp.path()).expect("Failed to canonicalize temp dir");
    (temp, root)
}

/// Create a project and index it with default options.
///
/// # Panics
///
/// Panics if the project cannot be created or scanned.
#[must_use]
pub fn index_project(files: &[(&str, &str)]) -> (TempDir, ProjectIndex) {
    let (temp, root) = create_project(files);
    let index = ProjectIndex::scan(&[root], &ScanOptions::default()).expect("Failed to scan");
    (temp, index)
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_create_project_writes_nested_files() {
        let (temp, root) = create_project(&[("inc/a.h", "a"), ("main.c", "m")]);
        assert!(temp.path().exists());
        assert_eq!(
            std::fs::read_to_string(root.join("inc/a.h")).expect("read"),
            "a"
        );
    }

    #[test]
    fn test_index_project() {
        let (_temp, index) = index_project(&[("main.c", "")]);
        assert_eq!(index.len(), 1);
    }
}
