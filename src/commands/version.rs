//! Version command implementation

use crate::assembler::provenance::{CRATE_NAME, CRATE_REPOSITORY, CRATE_VERSION};
use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    println!("{CRATE_NAME} {CRATE_VERSION}");
    println!("{CRATE_REPOSITORY}");
    println!();
    println!("Build info:");
    println!("  Rust version: {}", rustc_version());
    println!("  Profile: {}", build_profile());

    Ok(())
}

fn rustc_version() -> &'static str {
    env!("CARGO_PKG_RUST_VERSION")
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
