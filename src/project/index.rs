//! Project Index: discovers and classifies the files under the project roots
//!
//! ## Precedence
//!
//! Files are stored in discovery order: roots in the order they were given,
//! and within one root by lexicographic relative path. Every lookup that can
//! return more than one candidate returns them in that order, so resolution
//! never depends on the order the filesystem happens to yield entries.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use super::{Extensions, FileId, FileKind, ProjectFile};
use crate::error::{self, Result};

/// Options controlling which files a scan picks up
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    pub extensions: Extensions,
    /// Glob patterns matched against root-relative paths
    pub exclude: Vec<String>,
    /// Canonical paths that are never indexed (e.g. the bundle being written)
    pub skip: Vec<PathBuf>,
}

impl ScanOptions {
    /// Check that every exclude pattern compiles.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the first bad pattern.
    pub fn validate(&self) -> Result<()> {
        compile_excludes(&self.exclude).map(|_| ())
    }
}

/// Arena of project files with path and basename lookups
#[derive(Debug, Default)]
pub struct ProjectIndex {
    roots: Vec<PathBuf>,
    files: Vec<ProjectFile>,
    by_path: HashMap<PathBuf, FileId>,
    by_basename: HashMap<String, Vec<FileId>>,
}

impl ProjectIndex {
    /// Scan `roots` and build the index.
    ///
    /// # Errors
    ///
    /// Returns a project scan error naming the root if it does not exist, is
    /// not a directory, or cannot be walked; a read error if a candidate file
    /// cannot be read. File contents are kept as raw bytes and may be in any
    /// encoding.
    pub fn scan(roots: &[PathBuf], options: &ScanOptions) -> Result<Self> {
        let excludes = compile_excludes(&options.exclude)?;
        let mut index = Self::default();

        for (root_idx, root) in roots.iter().enumerate() {
            let canonical =
                dunce::canonicalize(root).map_err(|e| error::project::scan_failed(root, e))?;
            if !canonical.is_dir() {
                return Err(error::project::scan_failed(root, "not a directory"));
            }

            let mut candidates = walk_root(&canonical, root)?;
            candidates.sort();

            for relative in candidates {
                let absolute = canonical.join(&relative);
                let Some(kind) = FileKind::classify(&relative, &options.extensions) else {
                    continue;
                };
                if is_excluded(&excludes, &relative) {
                    log::debug!("excluded {}", relative.display());
                    continue;
                }

                let path = dunce::canonicalize(&absolute)
                    .map_err(|e| error::fs::read_failed(&absolute, e))?;
                if options.skip.contains(&path) {
                    log::debug!("skipping {}", path.display());
                    continue;
                }
                if index.by_path.contains_key(&path) {
                    // Reachable from an earlier root; the first discovery wins.
                    continue;
                }

                let text = fs::read(&path).map_err(|e| error::fs::read_failed(&path, e))?;

                log::debug!("indexed {} as {kind:?}", relative.display());
                index.push(ProjectFile {
                    path,
                    relative,
                    root: root_idx,
                    kind,
                    text,
                });
            }

            index.roots.push(canonical);
        }

        log::info!(
            "indexed {} files under {} roots",
            index.files.len(),
            index.roots.len()
        );
        Ok(index)
    }

    fn push(&mut self, file: ProjectFile) {
        let id = FileId::new(self.files.len());
        self.by_path.insert(file.path.clone(), id);
        if let Some(basename) = file.basename() {
            self.by_basename
                .entry(basename.to_string())
                .or_default()
                .push(id);
        }
        self.files.push(file);
    }

    /// Canonical roots in scan order
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// The file behind `id`.
    ///
    /// `id` must come from this index.
    pub fn file(&self, id: FileId) -> &ProjectFile {
        &self.files[id.index()]
    }

    /// All files in discovery order
    pub fn files(&self) -> impl Iterator<Item = (FileId, &ProjectFile)> {
        self.files
            .iter()
            .enumerate()
            .map(|(i, f)| (FileId::new(i), f))
    }

    /// Look a file up by canonical path
    pub fn by_path(&self, path: &Path) -> Option<FileId> {
        self.by_path.get(path).copied()
    }

    /// Candidates sharing `basename` (file stem), in precedence order
    pub fn by_basename(&self, basename: &str) -> &[FileId] {
        self.by_basename.get(basename).map_or(&[], Vec::as_slice)
    }

    /// First-precedence file whose full file name equals `file_name`
    pub fn find_file_name(&self, file_name: &str) -> Option<FileId> {
        let stem = Path::new(file_name).file_stem()?.to_str()?;
        self.by_basename(stem)
            .iter()
            .copied()
            .find(|id| self.file(*id).file_name() == Some(file_name))
    }
}

/// Walk one root and return root-relative paths of every regular file
fn walk_root(canonical: &Path, display_root: &Path) -> Result<Vec<PathBuf>> {
    let mut out = Vec::new();

    for entry in WalkDir::new(canonical).follow_links(true) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(display_root).to_path_buf();
            error::project::scan_failed(path, e)
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(canonical)
            .unwrap_or(entry.path())
            .to_path_buf();
        out.push(relative);
    }

    Ok(out)
}

fn compile_excludes(patterns: &[String]) -> Result<Vec<Glob<'_>>> {
    patterns
        .iter()
        .map(|p| {
            Glob::new(p).map_err(|e| error::config::invalid(format!("bad exclude glob '{p}': {e}")))
        })
        .collect()
}

fn is_excluded(excludes: &[Glob<'_>], relative: &Path) -> bool {
    if excludes.is_empty() {
        return false;
    }
    let normalized = relative.to_string_lossy().replace('\\', "/");
    let candidate = CandidatePath::from(normalized.as_str());
    excludes.iter().any(|g| g.matched(&candidate).is_some())
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::test_fixtures::create_project;

    #[test]
    fn test_scan_classifies_and_orders_files() {
        let (_temp, root) = create_project(&[
            ("main.c", "int main() { return 0; }\n"),
            ("b.h", ""),
            ("a.h", ""),
            ("notes.txt", "not source"),
        ]);

        let index = ProjectIndex::scan(&[root], &ScanOptions::default()).expect("scan");

        let names: Vec<_> = index.files().map(|(_, f)| f.display_path()).collect();
        assert_eq!(names, vec!["a.h", "b.h", "main.c"]);
        assert_eq!(index.file(FileId::new(2)).kind, FileKind::TranslationUnit);
        assert_eq!(index.file(FileId::new(0)).kind, FileKind::Header);
    }

    #[test]
    fn test_scan_missing_root_is_an_error() {
        let (_temp, root) = create_project(&[]);
        let missing = root.join("does-not-exist");

        let err = ProjectIndex::scan(&[missing], &ScanOptions::default())
            .expect_err("missing root should fail");
        assert!(matches!(err, crate::error::CbundlError::ProjectScan { .. }));
        assert!(err.to_string().contains("does-not-exist"));
    }

    #[test]
    fn test_scan_file_as_root_is_an_error() {
        let (_temp, root) = create_project(&[("main.c", "")]);
        let err = ProjectIndex::scan(&[root.join("main.c")], &ScanOptions::default())
            .expect_err("file root should fail");
        assert!(err.to_string().contains("not a directory"));
    }

    #[test]
    fn test_basename_precedence_follows_root_order() {
        let (_temp, base) = create_project(&[
            ("second/util.h", "// second\n"),
            ("first/util.h", "// first\n"),
        ]);

        let roots = vec![base.join("second"), base.join("first")];
        let index = ProjectIndex::scan(&roots, &ScanOptions::default()).expect("scan");

        let candidates = index.by_basename("util");
        assert_eq!(candidates.len(), 2);
        assert_eq!(index.file(candidates[0]).text, b"// second\n");
        assert_eq!(index.file(candidates[0]).root, 0);

        let found = index.find_file_name("util.h").expect("util.h");
        assert_eq!(found, candidates[0]);
    }

    #[test]
    fn test_basename_precedence_within_root_is_lexicographic() {
        let (_temp, root) = create_project(&[("z/util.h", "// z\n"), ("a/util.h", "// a\n")]);
        let index = ProjectIndex::scan(&[root], &ScanOptions::default()).expect("scan");

        let found = index.find_file_name("util.h").expect("util.h");
        assert_eq!(index.file(found).text, b"// a\n");
    }

    #[test]
    fn test_find_file_name_distinguishes_extensions() {
        let (_temp, root) = create_project(&[("frob.c", ""), ("frob.h", "")]);
        let index = ProjectIndex::scan(&[root], &ScanOptions::default()).expect("scan");

        assert_eq!(index.by_basename("frob").len(), 2);
        let header = index.find_file_name("frob.h").expect("frob.h");
        assert_eq!(index.file(header).kind, FileKind::Header);
        assert!(index.find_file_name("frob.hpp").is_none());
    }

    #[test]
    fn test_non_utf8_files_are_indexed_verbatim() {
        let (_temp, root) = create_project(&[("main.c", "int main() {}\n")]);
        std::fs::write(root.join("legacy.c"), b"/* caf\xe9 */\n").expect("write");

        let index = ProjectIndex::scan(&[root], &ScanOptions::default()).expect("scan");

        assert_eq!(index.len(), 2);
        let legacy = index.find_file_name("legacy.c").expect("legacy.c");
        assert_eq!(index.file(legacy).text, b"/* caf\xe9 */\n");
    }

    #[test]
    fn test_overlapping_roots_index_each_file_once() {
        let (_temp, root) = create_project(&[("inc/a.h", ""), ("main.c", "")]);
        let roots = vec![root.clone(), root.join("inc")];
        let index = ProjectIndex::scan(&roots, &ScanOptions::default()).expect("scan");

        assert_eq!(index.len(), 2);
        let a = index.find_file_name("a.h").expect("a.h");
        assert_eq!(index.file(a).root, 0);
    }

    #[test]
    fn test_exclude_globs_and_skip_list() {
        let (_temp, root) = create_project(&[
            ("main.c", ""),
            ("tests/test_main.c", ""),
            ("bundle.c", ""),
        ]);
        let options = ScanOptions {
            exclude: vec!["tests/**".to_string()],
            skip: vec![dunce::canonicalize(root.join("bundle.c")).expect("canonical")],
            ..ScanOptions::default()
        };

        let index = ProjectIndex::scan(&[root], &options).expect("scan");
        let names: Vec<_> = index.files().map(|(_, f)| f.display_path()).collect();
        assert_eq!(names, vec!["main.c"]);
    }

    #[test]
    fn test_invalid_exclude_glob_is_rejected() {
        let (_temp, root) = create_project(&[("main.c", "")]);
        let options = ScanOptions {
            exclude: vec!["[unclosed".to_string()],
            ..ScanOptions::default()
        };
        let err = ProjectIndex::scan(&[root], &options).expect_err("bad glob");
        assert!(matches!(err, crate::error::CbundlError::ConfigInvalid { .. }));
    }
}
