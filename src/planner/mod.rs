//! Merge planning: the single, duplicate-free emission order
//!
//! ## Algorithm
//!
//! Depth-first topological ordering with three-state marking, driven across
//! several roots that share one [`VisitedSet`]:
//!
//! 1. **Unvisited**: the file has not been reached yet
//! 2. **Visiting**: the file is on the current recursion path
//! 3. **Emitted**: the file and all its local includes are in the plan
//!
//! Roots are the entry file followed by every explicit bundle root in
//! discovery order. A file reached again while `Visiting` is a cycle; a file
//! already `Emitted` is skipped, which is what keeps emission exactly-once
//! across both the include graph and bundle markers.
//!
//! ```text
//! main.c  includes frob.h        roots: [main.c, frob.c]
//! frob.c  includes frob.h        plan:  [frob.h, main.c, frob.c]
//! ```

mod visited;

use std::ops::Range;

use crate::error::{self, Result};
use crate::project::FileId;
use crate::resolver::ResolvedProject;
use crate::scanner::Resolution;

pub use visited::{VisitState, VisitedSet};

/// Why a fragment is part of the plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// The entry file given on the command line
    Entry,
    /// A translation unit carrying a bundle marker
    BundleRoot,
    /// First reached through a local include in this file
    IncludedBy(FileId),
}

/// One file's contribution to the output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub file: FileId,
    /// Byte ranges of resolved local include lines, in textual order
    pub excisions: Vec<Range<usize>>,
    pub reason: Reason,
}

/// Ordered emission plan
#[derive(Debug, Clone, Default)]
pub struct MergePlan {
    fragments: Vec<Fragment>,
}

impl MergePlan {
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Files in emission order
    pub fn files(&self) -> impl Iterator<Item = FileId> + '_ {
        self.fragments.iter().map(|f| f.file)
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }
}

/// State of one planning pass
struct PlanContext<'p, 'a> {
    project: &'p ResolvedProject<'a>,
    visited: VisitedSet,
    /// Files currently `Visiting`, outermost first
    path: Vec<FileId>,
    fragments: Vec<Fragment>,
}

/// Compute the emission plan starting from `entry`.
///
/// # Errors
///
/// Returns a circular include error carrying the full chain when a local
/// include cycle is reachable from any root. Nothing is planned in that case.
pub fn plan(project: &ResolvedProject<'_>, entry: FileId) -> Result<MergePlan> {
    let mut ctx = PlanContext {
        project,
        visited: VisitedSet::new(project.index().len()),
        path: Vec::new(),
        fragments: Vec::new(),
    };

    let bundle_roots = project
        .explicit_roots()
        .iter()
        .copied()
        .filter(|id| *id != entry)
        .map(|id| (id, Reason::BundleRoot));

    for (root, reason) in std::iter::once((entry, Reason::Entry)).chain(bundle_roots) {
        visit(&mut ctx, root, reason)?;
    }

    log::debug!("planned {} fragments", ctx.fragments.len());
    Ok(MergePlan {
        fragments: ctx.fragments,
    })
}

/// Post-order visit: local includes first, then the file itself.
fn visit(ctx: &mut PlanContext<'_, '_>, id: FileId, reason: Reason) -> Result<()> {
    match ctx.visited.state(id) {
        VisitState::Emitted => return Ok(()),
        VisitState::Visiting => return Err(cycle_error(ctx, id)),
        VisitState::Unvisited => {}
    }

    ctx.visited.mark_visiting(id);
    ctx.path.push(id);

    let project = ctx.project;
    for reference in project.references(id) {
        if let Resolution::ResolvedLocal(target) = reference.resolution {
            visit(ctx, target, Reason::IncludedBy(id))?;
        }
    }

    ctx.path.pop();
    ctx.visited.mark_emitted(id);

    let excisions = project
        .references(id)
        .iter()
        .filter(|r| matches!(r.resolution, Resolution::ResolvedLocal(_)))
        .map(|r| r.range.clone())
        .collect();

    log::trace!("emit {}", project.file(id).display_path());
    ctx.fragments.push(Fragment {
        file: id,
        excisions,
        reason,
    });

    Ok(())
}

fn cycle_error(ctx: &PlanContext<'_, '_>, reentered: FileId) -> error::CbundlError {
    let start = ctx
        .path
        .iter()
        .position(|id| *id == reentered)
        .unwrap_or_default();

    let files: Vec<_> = ctx.path[start..]
        .iter()
        .chain(std::iter::once(&reentered))
        .map(|id| ctx.project.file(*id).relative.clone())
        .collect();

    error::plan::circular(&files)
}
