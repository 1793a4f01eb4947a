//! cbundl - C source bundler
//!
//! Merges a C project (an entry file, its local headers, and every
//! translation unit marked for bundling) into one self-contained source file.

use clap::Parser;
use console::Style;
use miette::Diagnostic;

mod assembler;
mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
mod planner;
mod project;
mod resolver;
mod scanner;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};
use error::Result;

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Bundle(args) => {
            let config = config::load(cli.config.as_deref(), cli.no_config)?;
            commands::bundle::run(&config, args)
        }
        Commands::Plan(args) => {
            let config = config::load(cli.config.as_deref(), cli.no_config)?;
            commands::plan::run(&config, args)
        }
        Commands::Completions(args) => commands::completions::run(args),
        Commands::Version => commands::version::run(),
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    if let Err(e) = run(&cli) {
        let red = Style::new().for_stderr().red().bold();
        eprintln!("{} {e}", red.apply_to("error:"));
        if let Some(code) = e.code() {
            eprintln!("  code: {code}");
        }
        if let Some(help) = e.help() {
            eprintln!("  help: {help}");
        }
        std::process::exit(1);
    }
}
