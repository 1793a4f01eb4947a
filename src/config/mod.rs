//! Configuration for cbundl
//!
//! Settings come from three layers, later ones winning: built-in defaults,
//! an optional YAML file (see [`file`]), and command-line flags. The merged
//! result is split into [`ProjectConfig`], which is all the `plan` command
//! needs, and [`BundleConfig`], which adds the output side.
//!
//! Relative paths in the configuration file are taken relative to the
//! working directory, the same as relative paths given on the command line.

pub mod file;

use std::env;
use std::path::{Path, PathBuf};

pub use file::{BannerSetting, ConfigFile};

use crate::assembler::Provenance;
use crate::assembler::quotes::{QuotePicker, Quotes};
use crate::cli::{BundleArgs, ProjectArgs};
use crate::error::{self, Result};
use crate::output::{self, Formatter};
use crate::project::{Extensions, ScanOptions};

/// Load the configuration file selected by the global flags.
///
/// With `disabled` nothing is read. An `explicit` path must exist; otherwise
/// the default file names are tried in the working directory.
pub fn load(explicit: Option<&Path>, disabled: bool) -> Result<ConfigFile> {
    if disabled {
        log::debug!("configuration file loading disabled");
        return Ok(ConfigFile::default());
    }

    if let Some(path) = explicit {
        return ConfigFile::load(path);
    }

    let cwd = env::current_dir().map_err(|e| error::fs::io_error(e.to_string()))?;
    Ok(ConfigFile::discover(&cwd)?
        .map(|(_, config)| config)
        .unwrap_or_default())
}

/// Settings needed to index and plan a project
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    pub entry: PathBuf,
    /// Roots in precedence order
    pub roots: Vec<PathBuf>,
    pub scan: ScanOptions,
}

impl ProjectConfig {
    /// Merge `file` and `args`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an invalid exclude glob or an
    /// extension that is listed as both header and source.
    pub fn resolve(file: &ConfigFile, args: &ProjectArgs) -> Result<Self> {
        let roots = Some(args.roots.clone())
            .filter(|r| !r.is_empty())
            .or_else(|| file.roots.clone().filter(|r| !r.is_empty()))
            .unwrap_or_else(|| vec![default_root(&args.entry)]);

        let mut extensions = Extensions::default();
        if let Some(section) = &file.extensions {
            if let Some(headers) = &section.headers {
                extensions.headers = normalize_extensions(headers);
            }
            if let Some(sources) = &section.sources {
                extensions.sources = normalize_extensions(sources);
            }
        }
        if let Some(both) = extensions
            .headers
            .iter()
            .find(|h| extensions.sources.iter().any(|s| s.eq_ignore_ascii_case(h)))
        {
            return Err(error::config::invalid(format!(
                "extension '{both}' is listed as both header and source"
            )));
        }

        let scan = ScanOptions {
            extensions,
            exclude: file.exclude.clone().unwrap_or_default(),
            skip: Vec::new(),
        };
        scan.validate()?;

        Ok(Self {
            entry: args.entry.clone(),
            roots,
            scan,
        })
    }
}

/// Everything the `bundle` command needs
#[derive(Debug, Clone)]
pub struct BundleConfig {
    pub project: ProjectConfig,
    /// Destination file, `None` for stdout
    pub output: Option<PathBuf>,
    pub provenance: Provenance,
    /// Formatter stage, `None` when disabled
    pub formatter: Option<Formatter>,
}

impl BundleConfig {
    /// Merge `file` and `args`.
    pub fn resolve(file: &ConfigFile, args: &BundleArgs) -> Result<Self> {
        let project = ProjectConfig::resolve(file, &args.project)?;

        let output = args
            .output
            .clone()
            .or_else(|| file.output.clone())
            .filter(|p| !output::is_stdio(p));

        let banner = file.banner.clone().unwrap_or(BannerSetting::Enabled(true));
        let custom = file.quotes.clone().unwrap_or_default();
        if let Some(quote) = custom.iter().find(|q| {
            q.text.trim().is_empty() || q.text.contains("*/") || q.author.contains("*/")
        }) {
            return Err(error::config::invalid(format!(
                "quote by '{}' must be non-empty and must not contain '*/'",
                quote.author
            )));
        }
        if banner.pick() == QuotePicker::Custom && custom.is_empty() {
            return Err(error::config::invalid(
                "quote pick is 'custom' but no quotes are configured",
            ));
        }

        let quotes = (!args.no_quote && banner.quote_enabled()).then(|| Quotes {
            picker: banner.pick(),
            custom,
        });

        let provenance = Provenance {
            banner: !args.no_banner && banner.enabled(),
            separators: !args.no_separators && file.separators.unwrap_or(true),
            deterministic: args.deterministic || file.deterministic.unwrap_or(false),
            quotes,
        };

        let section = file.formatter.clone().unwrap_or_default();
        let enabled = args.format || args.formatter.is_some() || section.enable.unwrap_or(false);
        let formatter = enabled.then(|| {
            let defaults = Formatter::default();
            Formatter {
                program: args
                    .formatter
                    .clone()
                    .or(section.command)
                    .unwrap_or(defaults.program),
                args: section.args.unwrap_or(defaults.args),
            }
        });

        Ok(Self {
            project,
            output,
            provenance,
            formatter,
        })
    }
}

fn default_root(entry: &Path) -> PathBuf {
    match entry.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Accept `.h` as well as `h`.
fn normalize_extensions(list: &[String]) -> Vec<String> {
    list.iter()
        .map(|e| e.trim().trim_start_matches('.').to_string())
        .filter(|e| !e.is_empty())
        .collect()
}
