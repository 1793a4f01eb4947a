//! Project model: the files a bundle is assembled from
//!
//! Files live in a flat arena owned by [`ProjectIndex`] and are referred to
//! everywhere else by [`FileId`]. Nothing holds a reference from one file to
//! another, so include cycles are representable without ownership tangles.

pub mod index;

use std::fmt;
use std::path::{Path, PathBuf};

pub use index::{ProjectIndex, ScanOptions};

/// Index of a file inside a [`ProjectIndex`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(usize);

impl FileId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Classification of a project file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Header,
    TranslationUnit,
}

impl FileKind {
    /// Classify `path` by its extension, or `None` when it is neither kind
    pub fn classify(path: &Path, extensions: &Extensions) -> Option<Self> {
        let ext = path.extension()?.to_str()?;

        if extensions.headers.iter().any(|h| h.eq_ignore_ascii_case(ext)) {
            Some(FileKind::Header)
        } else if extensions.sources.iter().any(|s| s.eq_ignore_ascii_case(ext)) {
            Some(FileKind::TranslationUnit)
        } else {
            None
        }
    }
}

/// Extension conventions used to classify files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extensions {
    pub headers: Vec<String>,
    pub sources: Vec<String>,
}

impl Default for Extensions {
    fn default() -> Self {
        Self {
            headers: ["h", "hh", "hpp", "hxx"].map(String::from).to_vec(),
            sources: ["c", "cc", "cpp", "cxx"].map(String::from).to_vec(),
        }
    }
}

/// A single file of the project, immutable after scanning
#[derive(Debug, Clone)]
pub struct ProjectFile {
    /// Canonical absolute path, used as the file's identity
    pub path: PathBuf,
    /// Path relative to the root it was discovered under
    pub relative: PathBuf,
    /// Position of that root in the scan order
    pub root: usize,
    pub kind: FileKind,
    /// Raw contents, never decoded; fragments are copied from these bytes
    pub text: Vec<u8>,
}

impl ProjectFile {
    /// File name without directory or extension
    pub fn basename(&self) -> Option<&str> {
        self.path.file_stem().and_then(|s| s.to_str())
    }

    /// File name with extension
    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|s| s.to_str())
    }

    /// Relative path rendered with forward slashes on every platform
    pub fn display_path(&self) -> String {
        self.relative.to_string_lossy().replace('\\', "/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_by_extension() {
        let ext = Extensions::default();
        assert_eq!(
            FileKind::classify(Path::new("src/frob.h"), &ext),
            Some(FileKind::Header)
        );
        assert_eq!(
            FileKind::classify(Path::new("src/frob.c"), &ext),
            Some(FileKind::TranslationUnit)
        );
        assert_eq!(
            FileKind::classify(Path::new("lib/Widget.HPP"), &ext),
            Some(FileKind::Header)
        );
        assert_eq!(FileKind::classify(Path::new("README.md"), &ext), None);
        assert_eq!(FileKind::classify(Path::new("Makefile"), &ext), None);
    }

    #[test]
    fn test_custom_extensions() {
        let ext = Extensions {
            headers: vec!["inc".to_string()],
            sources: vec!["c".to_string()],
        };
        assert_eq!(
            FileKind::classify(Path::new("tables.inc"), &ext),
            Some(FileKind::Header)
        );
        assert_eq!(FileKind::classify(Path::new("frob.h"), &ext), None);
    }

    #[test]
    fn test_display_path_uses_forward_slashes() {
        let file = ProjectFile {
            path: PathBuf::from("/p/include/frob.h"),
            relative: PathBuf::from("include").join("frob.h"),
            root: 0,
            kind: FileKind::Header,
            text: Vec::new(),
        };
        assert_eq!(file.display_path(), "include/frob.h");
        assert_eq!(file.basename(), Some("frob"));
        assert_eq!(file.file_name(), Some("frob.h"));
    }
}
