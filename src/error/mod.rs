//! Error types and handling for cbundl
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Constructors are grouped into sub-modules by error domain:
//! - [`project`]: project scanning and entry-file errors
//! - [`plan`]: merge planning errors
//! - [`config`]: configuration errors
//! - [`fs`]: file system and output errors

pub mod config;
pub mod fs;
pub mod plan;
pub mod project;

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for cbundl operations
#[derive(Error, Diagnostic, Debug)]
pub enum CbundlError {
    // Project errors
    #[error("Failed to scan project root '{path}': {reason}")]
    #[diagnostic(
        code(cbundl::project::scan_failed),
        help("Check that every --root directory exists and is readable")
    )]
    ProjectScan { path: String, reason: String },

    #[error("Entry file not found: {path}")]
    #[diagnostic(code(cbundl::project::entry_not_found))]
    EntryNotFound { path: String },

    #[error("Entry file '{path}' is not part of the scanned project")]
    #[diagnostic(
        code(cbundl::project::entry_outside_project),
        help("Add the directory containing the entry file with --root")
    )]
    EntryOutsideProject { path: String },

    // Planning errors
    #[error("Circular include detected: {chain}")]
    #[diagnostic(
        code(cbundl::plan::circular_include),
        help("Break the cycle by removing one of the local includes in the chain")
    )]
    CircularInclude { chain: String, files: Vec<PathBuf> },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(cbundl::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(cbundl::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(cbundl::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(cbundl::config::invalid))]
    ConfigInvalid { message: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(cbundl::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(
        code(cbundl::fs::write_failed),
        help("No bundle was written; the previous output, if any, is untouched")
    )]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(cbundl::fs::io_error))]
    IoError { message: String },

    // Formatter errors
    #[error("Formatter '{program}' failed: {reason}")]
    #[diagnostic(
        code(cbundl::format::failed),
        help("Pass --formatter to pick another executable, or drop --format")
    )]
    FormatterFailed { program: String, reason: String },
}

impl From<std::io::Error> for CbundlError {
    fn from(err: std::io::Error) -> Self {
        CbundlError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for CbundlError {
    fn from(err: serde_yaml::Error) -> Self {
        CbundlError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, CbundlError>;
