//! Diagnostic logging to stderr
//!
//! Everything goes through the `log` facade. The default filter is `warn` and
//! can be changed with `RUST_LOG`; `--verbose` and `--quiet` take precedence
//! over both.

use std::io::Write;

use console::Style;
use log::{Level, LevelFilter};

/// Install the global logger. Must be called once, before any logging.
pub fn init(verbose: bool, quiet: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = level_override(verbose, quiet) {
        builder.filter_level(level);
    }

    builder
        .format(|out, record| {
            let style = level_style(record.level());
            let tag = record.level().as_str().to_lowercase();
            writeln!(out, "{}: {}", style.apply_to(tag), record.args())
        })
        .target(env_logger::Target::Stderr)
        .init();
}

fn level_override(verbose: bool, quiet: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Error)
    } else if verbose {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}

fn level_style(level: Level) -> Style {
    let style = Style::new().for_stderr();
    match level {
        Level::Error => style.red().bold(),
        Level::Warn => style.yellow().bold(),
        Level::Info => style.green().bold(),
        Level::Debug => style.dim(),
        Level::Trace => style.white(),
    }
}
