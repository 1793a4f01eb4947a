//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// cbundl - C source bundler
///
/// Merge a C project into a single self-contained translation unit.
#[derive(Parser, Debug)]
#[command(
    name = "cbundl",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Bundle a C project into a single source file",
    long_about = "cbundl follows the local #include directives of an entry file and of every \
                  translation unit marked with `// cbundl: bundle`, and writes one source file \
                  in which each project file appears exactly once, dependencies first.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  cbundl bundle src/main.c -o bundle.c\n    \
                  cbundl bundle src/main.c -r src -r include --deterministic\n    \
                  cbundl plan src/main.c\n\n\
                  \x1b[1m\x1b[32mDocumentation:\x1b[0m\n    \
                  https://github.com/threadexio/cbundl"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only report errors
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Configuration file (defaults to .cbundl.yaml or cbundl.yaml)
    #[arg(long, global = true, value_name = "PATH", env = "CBUNDL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Do not load any configuration file (overrides --config and CBUNDL_CONFIG)
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Bundle a project into one source file
    Bundle(BundleArgs),

    /// Show which files would be bundled, in order
    Plan(PlanArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Show version information
    Version,
}

/// Arguments shared by every command that reads a project
#[derive(Args, Debug)]
pub struct ProjectArgs {
    /// Entry translation unit (the one holding main)
    pub entry: PathBuf,

    /// Project root to search for local includes; repeat in precedence order
    /// (defaults to the entry file's directory)
    #[arg(long = "root", short = 'r', value_name = "DIR")]
    pub roots: Vec<PathBuf>,
}

/// Arguments for the bundle command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Bundle to stdout:\n    cbundl bundle src/main.c\n\n\
                  Bundle to a file:\n    cbundl bundle src/main.c -o dist/bundle.c\n\n\
                  Search two roots:\n    cbundl bundle src/main.c -r src -r include\n\n\
                  Reproducible output without comments:\n    cbundl bundle main.c --deterministic --no-separators\n\n\
                  Format the result:\n    cbundl bundle main.c --format")]
pub struct BundleArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Output file (`-` for stdout)
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Do not emit the banner at the top of the bundle
    #[arg(long)]
    pub no_banner: bool,

    /// Leave the quote out of the banner
    #[arg(long)]
    pub no_quote: bool,

    /// Do not emit a comment before every bundled file
    #[arg(long)]
    pub no_separators: bool,

    /// Pin the banner timestamp so repeated runs produce identical output
    #[arg(long)]
    pub deterministic: bool,

    /// Pipe the bundle through a code formatter
    #[arg(long)]
    pub format: bool,

    /// Formatter executable (implies --format)
    #[arg(long, value_name = "EXE")]
    pub formatter: Option<PathBuf>,
}

/// Arguments for the plan command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show the emission order:\n    cbundl plan src/main.c\n\n\
                  Machine-readable output:\n    cbundl plan src/main.c --json")]
pub struct PlanArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Print the plan as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    cbundl completions bash > ~/.bash_completion.d/cbundl\n\n\
                  Generate zsh completions:\n    cbundl completions zsh > ~/.zfunc/_cbundl\n\n\
                  Generate fish completions:\n    cbundl completions fish > ~/.config/fish/completions/cbundl.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
