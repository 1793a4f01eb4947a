//! Configuration file (`.cbundl.yaml`) data structures

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::assembler::quotes::{Quote, QuotePicker};
use crate::error::{self, Result};

/// File names looked up in the working directory, in order
pub const DEFAULT_FILES: &[&str] = &[".cbundl.yaml", "cbundl.yaml"];

/// Contents of a configuration file; every key is optional
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Project roots, in precedence order
    pub roots: Option<Vec<PathBuf>>,

    /// Where to write the bundle (`-` for stdout)
    pub output: Option<PathBuf>,

    pub deterministic: Option<bool>,

    /// Emit the document banner, either a plain switch or a section
    pub banner: Option<BannerSetting>,

    /// Extra quotes for the banner
    pub quotes: Option<Vec<Quote>>,

    /// Emit a provenance comment before every fragment
    pub separators: Option<bool>,

    /// Glob patterns of root-relative paths to leave out of the project
    pub exclude: Option<Vec<String>>,

    pub extensions: Option<ExtensionsSection>,

    pub formatter: Option<FormatterSection>,
}

/// `banner: false` or `banner: { enable: true, quote: { pick: custom } }`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum BannerSetting {
    Enabled(bool),
    Section(BannerSection),
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BannerSection {
    pub enable: Option<bool>,
    pub quote: Option<QuoteSection>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct QuoteSection {
    pub enable: Option<bool>,
    pub pick: Option<QuotePicker>,
}

impl BannerSetting {
    pub fn enabled(&self) -> bool {
        match self {
            Self::Enabled(enabled) => *enabled,
            Self::Section(section) => section.enable.unwrap_or(true),
        }
    }

    fn quote(&self) -> Option<&QuoteSection> {
        match self {
            Self::Enabled(_) => None,
            Self::Section(section) => section.quote.as_ref(),
        }
    }

    pub fn quote_enabled(&self) -> bool {
        self.quote().and_then(|q| q.enable).unwrap_or(true)
    }

    pub fn pick(&self) -> QuotePicker {
        self.quote().and_then(|q| q.pick).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ExtensionsSection {
    pub headers: Option<Vec<String>>,
    pub sources: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FormatterSection {
    pub enable: Option<bool>,
    pub command: Option<PathBuf>,
    pub args: Option<Vec<String>>,
}

impl ConfigFile {
    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file is a valid, empty configuration.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load an explicitly named configuration file.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when `path` does not exist, otherwise read
    /// or parse errors naming the file.
    pub fn load(path: &Path) -> Result<Self> {
        match read(path)? {
            Some(config) => Ok(config),
            None => Err(error::config::not_found(path)),
        }
    }

    /// Load the first of [`DEFAULT_FILES`] that exists in `dir`.
    pub fn discover(dir: &Path) -> Result<Option<(PathBuf, Self)>> {
        for name in DEFAULT_FILES {
            let path = dir.join(name);
            if let Some(config) = read(&path)? {
                return Ok(Some((path, config)));
            }
        }
        Ok(None)
    }
}

fn read(path: &Path) -> Result<Option<ConfigFile>> {
    let yaml = match fs::read_to_string(path) {
        Ok(yaml) => yaml,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(error::config::read_failed(path, e)),
    };

    let config = ConfigFile::from_yaml(&yaml).map_err(|e| match e {
        crate::error::CbundlError::ConfigParseFailed { reason, .. } => {
            error::config::parse_failed(path, reason)
        }
        other => other,
    })?;

    log::debug!("loaded configuration from {}", path.display());
    Ok(Some(config))
}
