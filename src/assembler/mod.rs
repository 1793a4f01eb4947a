//! Fragment assembly: renders the output document from a merge plan
//!
//! The document is a sequence of blocks separated by one blank line: the
//! banner (if any), then one block per fragment. A fragment block is its
//! provenance comment (if any) followed by the file text with the planned
//! include lines cut out. Nothing else in the text is touched, including
//! passthrough includes repeated across fragments.

pub mod provenance;
pub mod quotes;

use std::ops::Range;

use crate::planner::MergePlan;
use crate::resolver::ResolvedProject;

pub use provenance::Provenance;

/// Source of the decorative comments placed around fragments
pub trait ProvenanceProvider {
    /// Banner placed once at the top of the document
    fn document_banner(&self) -> Option<String>;

    /// Comment placed before the fragment taken from `path`
    fn fragment_banner(&self, path: &str) -> Option<String>;
}

/// Renders a [`MergePlan`] to bytes
pub struct Assembler<'p, P: ProvenanceProvider + ?Sized> {
    provider: &'p P,
}

impl<'p, P: ProvenanceProvider + ?Sized> Assembler<'p, P> {
    pub fn new(provider: &'p P) -> Self {
        Self { provider }
    }

    /// Render the whole document.
    ///
    /// Fragment bodies are copied as raw bytes, so sources in any encoding
    /// come through unchanged.
    pub fn assemble(&self, project: &ResolvedProject<'_>, plan: &MergePlan) -> Vec<u8> {
        let mut blocks: Vec<Vec<u8>> = Vec::with_capacity(plan.len() + 1);

        if let Some(banner) = self.provider.document_banner() {
            blocks.push(banner.into_bytes());
        }

        for fragment in plan.fragments() {
            let file = project.file(fragment.file);
            let body = excise(&file.text, &fragment.excisions);

            let block = match self.provider.fragment_banner(&file.display_path()) {
                Some(header) => {
                    let mut header = header.into_bytes();
                    terminate(&mut header);
                    header.push(b'\n');
                    header.extend_from_slice(&body);
                    header
                }
                None => body,
            };
            blocks.push(block);
        }

        let last = blocks.len().saturating_sub(1);
        let mut out = Vec::with_capacity(blocks.iter().map(|b| b.len() + 2).sum());
        for (i, mut block) in blocks.into_iter().enumerate() {
            if i != last {
                terminate(&mut block);
                block.push(b'\n');
            }
            out.append(&mut block);
        }
        out
    }
}

/// Copy `text` without the byte `ranges`, which are sorted and disjoint.
fn excise(text: &[u8], ranges: &[Range<usize>]) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    let mut cursor = 0;
    for range in ranges {
        out.extend_from_slice(&text[cursor..range.start]);
        cursor = range.end;
    }
    out.extend_from_slice(&text[cursor..]);
    out
}

fn terminate(block: &mut Vec<u8>) {
    if block.last().is_some_and(|b| *b != b'\n') {
        block.push(b'\n');
    }
}
