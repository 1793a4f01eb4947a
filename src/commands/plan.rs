//! Plan command implementation
//!
//! Prints the emission order without assembling anything, together with the
//! reason each file is part of the bundle.

use console::Style;
use serde::Serialize;

use crate::cli::PlanArgs;
use crate::commands::helpers;
use crate::config::{ConfigFile, ProjectConfig};
use crate::error::{self, Result};
use crate::planner::{self, MergePlan, Reason};
use crate::project::FileId;
use crate::resolver::{self, ResolvedProject};
use crate::scanner::{self, IncludeDelimiter, Resolution};

/// Run plan command
pub fn run(config: &ConfigFile, args: &PlanArgs) -> Result<()> {
    let config = ProjectConfig::resolve(config, &args.project)?;
    let (index, entry) = helpers::open_project(&config, Vec::new())?;
    let project = resolver::resolve(&index, scanner::scan_project(&index));
    let plan = planner::plan(&project, entry)?;

    if args.json {
        println!("{}", render_json(&project, entry, &plan)?);
    } else {
        print!("{}", render_text(&project, entry, &plan));
    }

    Ok(())
}

#[derive(Debug, Serialize)]
struct PlanView {
    entry: String,
    roots: Vec<String>,
    fragments: Vec<FragmentView>,
}

#[derive(Debug, Serialize)]
struct FragmentView {
    file: String,
    path: String,
    /// Directory of the root the file was found under
    root: String,
    reason: ReasonView,
    /// Local include lines removed from this file
    excised: usize,
    /// Include directives left in place
    passthrough: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum ReasonView {
    Entry,
    BundleRoot,
    IncludedBy { file: String },
}

fn view(project: &ResolvedProject<'_>, entry: FileId, plan: &MergePlan) -> PlanView {
    let fragments = plan
        .fragments()
        .iter()
        .map(|fragment| {
            let file = project.file(fragment.file);
            let passthrough = project
                .references(fragment.file)
                .iter()
                .filter(|r| r.resolution == Resolution::PassThrough)
                .map(|r| match r.delimiter {
                    IncludeDelimiter::Quoted => format!("\"{}\"", r.literal),
                    IncludeDelimiter::Angled => format!("<{}>", r.literal),
                })
                .collect();

            FragmentView {
                file: file.display_path(),
                path: file.path.display().to_string(),
                root: project
                    .index()
                    .roots()
                    .get(file.root)
                    .map(|r| r.display().to_string())
                    .unwrap_or_default(),
                reason: match fragment.reason {
                    Reason::Entry => ReasonView::Entry,
                    Reason::BundleRoot => ReasonView::BundleRoot,
                    Reason::IncludedBy(by) => ReasonView::IncludedBy {
                        file: project.file(by).display_path(),
                    },
                },
                excised: fragment.excisions.len(),
                passthrough,
            }
        })
        .collect();

    PlanView {
        entry: project.file(entry).display_path(),
        roots: project
            .index()
            .roots()
            .iter()
            .map(|r| r.display().to_string())
            .collect(),
        fragments,
    }
}

fn render_json(project: &ResolvedProject<'_>, entry: FileId, plan: &MergePlan) -> Result<String> {
    serde_json::to_string_pretty(&view(project, entry, plan))
        .map_err(|e| error::fs::io_error(format!("failed to serialize plan: {e}")))
}

fn render_text(project: &ResolvedProject<'_>, entry: FileId, plan: &MergePlan) -> String {
    let view = view(project, entry, plan);
    let bold = Style::new().bold();
    let dim = Style::new().dim();

    let mut out = format!(
        "{} {} ({} files)\n\n",
        bold.apply_to("Bundle plan for"),
        Style::new().bold().yellow().apply_to(&view.entry),
        view.fragments.len()
    );

    let width = view
        .fragments
        .iter()
        .map(|f| f.file.len())
        .max()
        .unwrap_or(0);

    for (i, fragment) in view.fragments.iter().enumerate() {
        let reason = match &fragment.reason {
            ReasonView::Entry => "entry".to_string(),
            ReasonView::BundleRoot => "bundle root".to_string(),
            ReasonView::IncludedBy { file } => format!("included by {file}"),
        };
        out.push_str(&format!(
            "  {:>3}. {:<width$}  {}\n",
            i + 1,
            fragment.file,
            dim.apply_to(reason)
        ));
    }

    out
}
