//! External code formatter stage

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;

use crate::error::{CbundlError, Result};

pub const DEFAULT_FORMATTER: &str = "clang-format";

/// Pipes the bundle through an executable that formats stdin to stdout
#[derive(Debug, Clone)]
pub struct Formatter {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl Formatter {
    /// Run the formatter over `code`.
    ///
    /// # Errors
    ///
    /// Returns a formatter error if the program cannot be started or exits
    /// unsuccessfully.
    pub fn format(&self, code: Vec<u8>) -> Result<Vec<u8>> {
        log::debug!("formatting with {} {:?}", self.program.display(), self.args);

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| self.failed(e))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| self.failed("stdin was not captured"))?;

        // Feed stdin from another thread so a large bundle cannot deadlock
        // against a full stdout pipe.
        let writer = thread::spawn(move || stdin.write_all(&code));

        let output = child.wait_with_output().map_err(|e| self.failed(e))?;
        let written = writer
            .join()
            .map_err(|_| self.failed("stdin writer panicked"))?;

        if !output.status.success() {
            return Err(self.failed(format!("exited with {}", output.status)));
        }
        written.map_err(|e| self.failed(format!("failed to write bundle to stdin: {e}")))?;

        Ok(output.stdout)
    }

    fn failed(&self, reason: impl ToString) -> CbundlError {
        CbundlError::FormatterFailed {
            program: self.program.display().to_string(),
            reason: reason.to_string(),
        }
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_FORMATTER),
            args: Vec::new(),
        }
    }
}
