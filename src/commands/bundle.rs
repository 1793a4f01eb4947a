//! Bundle command implementation
//!
//! Runs the whole pipeline: index, scan, resolve, plan, assemble, optionally
//! format, then write. Every step completes before anything is written, so a
//! failing run leaves the destination untouched.

use crate::assembler::Assembler;
use crate::cli::BundleArgs;
use crate::commands::helpers;
use crate::config::{BundleConfig, ConfigFile};
use crate::error::Result;
use crate::output;
use crate::planner;
use crate::resolver;
use crate::scanner;

/// Run bundle command
pub fn run(config: &ConfigFile, args: &BundleArgs) -> Result<()> {
    let config = BundleConfig::resolve(config, args)?;
    let code = bundle(&config)?;
    output::write_bundle(&code, config.output.as_deref())
}

/// Produce the finished bundle in memory.
pub fn bundle(config: &BundleConfig) -> Result<Vec<u8>> {
    // Never bundle a previous bundle.
    let skip = config
        .output
        .as_deref()
        .and_then(|p| dunce::canonicalize(p).ok())
        .into_iter()
        .collect();

    let (index, entry) = helpers::open_project(&config.project, skip)?;
    let project = resolver::resolve(&index, scanner::scan_project(&index));
    let plan = planner::plan(&project, entry)?;

    log::info!("bundling {} of {} project files", plan.len(), index.len());
    log::debug!(
        "emission order: {}",
        plan.files()
            .map(|id| project.file(id).display_path())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let code = Assembler::new(&config.provenance).assemble(&project, &plan);

    match &config.formatter {
        Some(formatter) => formatter.format(code),
        None => Ok(code),
    }
}
