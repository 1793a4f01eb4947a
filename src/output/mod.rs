//! Output sink: stdout or an atomically replaced file

pub mod formatter;

use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{self, Result};

pub use formatter::Formatter;

/// Write the finished bundle to `path`, or to stdout when `None`.
///
/// Files are written to a temporary sibling first and then renamed over the
/// destination, so a failed write never leaves a truncated bundle behind.
///
/// # Errors
///
/// Returns a write error naming the destination.
pub fn write_bundle(bundle: &[u8], path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => write_file(bundle, path),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(bundle)
                .and_then(|()| stdout.flush())
                .map_err(|e| error::fs::write_failed("<stdout>", e))
        }
    }
}

fn write_file(bundle: &[u8], path: &Path) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| error::fs::write_failed(path, e))?;
    tmp.write_all(bundle)
        .and_then(|()| tmp.flush())
        .map_err(|e| error::fs::write_failed(path, e))?;
    tmp.persist(path)
        .map_err(|e| error::fs::write_failed(path, e.error))?;

    log::info!("wrote {} bytes to {}", bundle.len(), path.display());
    Ok(())
}

/// Whether `path` names standard output (`-`)
pub fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == "-"
}
