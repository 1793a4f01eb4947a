//! Dependency resolution for include references and bundle roots
//!
//! Quoted includes are looked up in the [`ProjectIndex`]: first as a path
//! relative to the including file, then by file name in index precedence.
//! Anything that does not match a project file, and every angle-bracket
//! include, is left as passthrough. Neither ambiguity nor absence is an error.
//!
//! Translation units carrying a bundle marker become explicit roots, listed
//! in index discovery order.

use std::path::{Component, Path, PathBuf};

use crate::project::{FileId, FileKind, ProjectFile, ProjectIndex};
use crate::scanner::{IncludeDelimiter, IncludeReference, Resolution, ScannedFile};

/// Project with every include reference resolved
#[derive(Debug)]
pub struct ResolvedProject<'a> {
    index: &'a ProjectIndex,
    scans: Vec<ScannedFile>,
    explicit_roots: Vec<FileId>,
}

impl<'a> ResolvedProject<'a> {
    pub fn index(&self) -> &'a ProjectIndex {
        self.index
    }

    pub fn file(&self, id: FileId) -> &'a ProjectFile {
        self.index.file(id)
    }

    /// Include references of `id` in textual order
    pub fn references(&self, id: FileId) -> &[IncludeReference] {
        &self.scans[id.index()].includes
    }

    /// Translation units carrying a bundle marker, in discovery order
    pub fn explicit_roots(&self) -> &[FileId] {
        &self.explicit_roots
    }
}

/// Resolve the scans produced for `index`.
///
/// `scans` must be indexed by [`FileId`], as returned by
/// [`crate::scanner::scan_project`].
pub fn resolve(index: &ProjectIndex, mut scans: Vec<ScannedFile>) -> ResolvedProject<'_> {
    let mut explicit_roots = Vec::new();

    for (id, file) in index.files() {
        let scanned = &mut scans[id.index()];

        for reference in &mut scanned.includes {
            reference.resolution = resolve_reference(index, file, reference);
        }

        if scanned.directive.is_some() {
            match file.kind {
                FileKind::TranslationUnit => explicit_roots.push(id),
                FileKind::Header => log::warn!(
                    "{}: bundle marker ignored in header",
                    file.display_path()
                ),
            }
        }
    }

    log::debug!("{} explicit bundle roots", explicit_roots.len());

    ResolvedProject {
        index,
        scans,
        explicit_roots,
    }
}

fn resolve_reference(
    index: &ProjectIndex,
    file: &ProjectFile,
    reference: &IncludeReference,
) -> Resolution {
    if reference.delimiter == IncludeDelimiter::Angled {
        return Resolution::PassThrough;
    }

    if let Some(parent) = file.path.parent() {
        let candidate = normalize(&parent.join(&reference.literal));
        if let Some(id) = index.by_path(&candidate) {
            return Resolution::ResolvedLocal(id);
        }
    }

    let Some(file_name) = Path::new(&reference.literal)
        .file_name()
        .and_then(|n| n.to_str())
    else {
        return Resolution::PassThrough;
    };

    let Some(id) = index.find_file_name(file_name) else {
        log::info!(
            "{}:{}: \"{}\" is not a project file, leaving it in place",
            file.display_path(),
            reference.line,
            reference.literal
        );
        return Resolution::PassThrough;
    };

    let stem = index.file(id).basename().unwrap_or_default();
    let matches = index
        .by_basename(stem)
        .iter()
        .filter(|c| index.file(**c).file_name() == Some(file_name))
        .count();
    if matches > 1 {
        log::debug!(
            "{}:{}: \"{}\" matches {matches} files, using {}",
            file.display_path(),
            reference.line,
            reference.literal,
            index.file(id).path.display()
        );
    }

    Resolution::ResolvedLocal(id)
}

/// Lexically resolve `.` and `..` components.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}
