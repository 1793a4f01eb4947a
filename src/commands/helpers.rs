//! Command helper utilities

use std::path::PathBuf;

use crate::config::ProjectConfig;
use crate::error::{self, Result};
use crate::project::{FileId, ProjectIndex};

/// Index the project described by `config` and locate its entry file.
///
/// Files in `skip` (canonical paths) are left out of the index.
///
/// # Errors
///
/// Returns an entry-not-found error if the entry file does not exist, an
/// entry-outside-project error if no root covers it, and any scan error.
pub fn open_project(config: &ProjectConfig, skip: Vec<PathBuf>) -> Result<(ProjectIndex, FileId)> {
    let entry = dunce::canonicalize(&config.entry)
        .ok()
        .filter(|p| p.is_file())
        .ok_or_else(|| error::project::entry_not_found(&config.entry))?;

    let mut options = config.scan.clone();
    options.skip = skip;

    let index = ProjectIndex::scan(&config.roots, &options)?;
    let id = index
        .by_path(&entry)
        .ok_or_else(|| error::project::entry_outside(&config.entry))?;

    log::debug!("entry {} is {id}", config.entry.display());
    Ok((index, id))
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::error::CbundlError;
    use crate::test_fixtures::create_project;

    fn config(entry: PathBuf, roots: Vec<PathBuf>) -> ProjectConfig {
        ProjectConfig {
            entry,
            roots,
            scan: crate::project::ScanOptions::default(),
        }
    }

    #[test]
    fn test_open_project_finds_entry() {
        let (_temp, root) = create_project(&[("main.c", ""), ("a.h", "")]);
        let (index, entry) =
            open_project(&config(root.join("main.c"), vec![root.clone()]), Vec::new())
                .expect("open");
        assert_eq!(index.len(), 2);
        assert_eq!(index.file(entry).display_path(), "main.c");
    }

    #[test]
    fn test_missing_entry() {
        let (_temp, root) = create_project(&[]);
        let err = open_project(&config(root.join("main.c"), vec![root]), Vec::new())
            .expect_err("missing");
        assert!(matches!(err, CbundlError::EntryNotFound { .. }));
    }

    #[test]
    fn test_entry_outside_roots() {
        let (_temp, root) = create_project(&[("app/main.c", ""), ("lib/a.h", "")]);
        let err = open_project(
            &config(root.join("app/main.c"), vec![root.join("lib")]),
            Vec::new(),
        )
        .expect_err("outside");
        assert!(matches!(err, CbundlError::EntryOutsideProject { .. }));
    }

    #[test]
    fn test_skipped_files_are_not_indexed() {
        let (_temp, root) = create_project(&[("main.c", ""), ("bundle.c", "")]);
        let (index, _) = open_project(
            &config(root.join("main.c"), vec![root.clone()]),
            vec![root.join("bundle.c")],
        )
        .expect("open");
        assert_eq!(index.len(), 1);
    }
}
