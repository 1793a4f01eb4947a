//! Lexical scanner for include directives and bundle markers
//!
//! The scan is purely lexical: it walks the text line by line, tracking just
//! enough comment and string state to avoid reporting an `#include` that sits
//! inside a block comment or a continued string literal. Conditional
//! compilation is not evaluated; every include line is reported.

pub mod directive;
pub mod include;

use std::ops::Range;

use crate::project::{FileId, ProjectIndex};

/// Delimiters around an include literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IncludeDelimiter {
    /// `#include "literal"`
    Quoted,
    /// `#include <literal>`
    Angled,
}

/// Resolution state of an include reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Unresolved,
    ResolvedLocal(FileId),
    PassThrough,
}

/// One include directive found in a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeReference {
    pub literal: String,
    pub delimiter: IncludeDelimiter,
    /// Byte range removed when the reference resolves locally.
    ///
    /// Normally the whole line including its terminator. When other text
    /// follows the directive on the same line (a comment that keeps going,
    /// say) only the directive itself is covered and the rest of the line
    /// stays.
    pub range: Range<usize>,
    /// 1-based line number
    pub line: usize,
    pub resolution: Resolution,
}

/// The bundle marker of a translation unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleDirective {
    pub range: Range<usize>,
    pub line: usize,
}

/// Something suspicious the scanner skipped over
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanWarning {
    pub line: usize,
    pub message: String,
}

/// Everything the scanner extracted from one file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScannedFile {
    pub includes: Vec<IncludeReference>,
    pub directive: Option<BundleDirective>,
    pub warnings: Vec<ScanWarning>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Code,
    LineComment,
    BlockComment,
    Literal(u8),
}

const BOM: &[u8] = b"\xef\xbb\xbf";

/// Scan `text` for include references and the bundle marker.
///
/// The text is not required to be UTF-8. Directives are only recognised in
/// the valid UTF-8 prefix of a line, and every offset is a byte offset into
/// `text`.
pub fn scan(text: &[u8]) -> ScannedFile {
    let mut out = ScannedFile::default();
    let mut state = State::Code;
    let mut start = 0;
    let mut line_no = 0;

    while start < text.len() {
        line_no += 1;
        let end = text[start..]
            .iter()
            .position(|b| *b == b'\n')
            .map_or(text.len(), |i| start + i + 1);
        let mut line = &text[start..end];
        while let [rest @ .., b'\n' | b'\r'] = line {
            line = rest;
        }

        // A byte order mark only ever precedes the first line.
        let bom = if line_no == 1 && line.starts_with(BOM) {
            BOM.len()
        } else {
            0
        };

        let mut lex_from = bom;
        if state == State::Code {
            let decoded = valid_prefix(&line[bom..]);
            let indent = decoded.len() - decoded.trim_start_matches([' ', '\t']).len();
            let trimmed = &decoded[indent..];
            let at = bom + indent;

            if trimmed.starts_with('#') {
                match include::parse(trimmed) {
                    Some(Ok(parsed)) => {
                        let directive_end = at + parsed.end;
                        let trailing = &line[directive_end..];
                        let range = if trailing.iter().all(u8::is_ascii_whitespace) {
                            start + bom..end
                        } else {
                            start + at..start + directive_end
                        };

                        out.includes.push(IncludeReference {
                            literal: parsed.literal,
                            delimiter: parsed.delimiter,
                            range,
                            line: line_no,
                            resolution: Resolution::Unresolved,
                        });
                        lex_from = directive_end;
                    }
                    Some(Err(message)) => out.warnings.push(ScanWarning {
                        line: line_no,
                        message: message.to_string(),
                    }),
                    None => {}
                }
            } else if trimmed.starts_with("//") || trimmed.starts_with("/*") {
                match directive::parse(trimmed) {
                    Some(Ok(())) if out.directive.is_none() => {
                        out.directive = Some(BundleDirective {
                            range: start..end,
                            line: line_no,
                        });
                    }
                    Some(Ok(())) => {}
                    Some(Err(keyword)) => out.warnings.push(ScanWarning {
                        line: line_no,
                        message: format!("unknown cbundl directive '{keyword}'"),
                    }),
                    None => {}
                }
            }
        }

        state = lex_line(&line[lex_from..], state);
        start = end;
    }

    out
}

/// Scan every file of the project, in discovery order.
///
/// Warnings are logged here; the returned scans are indexed by [`FileId`].
pub fn scan_project(index: &ProjectIndex) -> Vec<ScannedFile> {
    index
        .files()
        .map(|(_, file)| {
            let scanned = scan(&file.text);
            for warning in &scanned.warnings {
                log::warn!(
                    "{}:{}: {}",
                    file.display_path(),
                    warning.line,
                    warning.message
                );
            }
            scanned
        })
        .collect()
}

/// Longest prefix of `bytes` that is valid UTF-8
fn valid_prefix(bytes: &[u8]) -> &str {
    match std::str::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => std::str::from_utf8(&bytes[..e.valid_up_to()]).unwrap_or_default(),
    }
}

/// Advance the comment/string state machine across one line.
fn lex_line(bytes: &[u8], mut state: State) -> State {
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        let next = bytes.get(i + 1).copied();

        match state {
            State::Code => match (b, next) {
                (b'/', Some(b'/')) => {
                    state = State::LineComment;
                    i += 1;
                }
                (b'/', Some(b'*')) => {
                    state = State::BlockComment;
                    i += 1;
                }
                (b'"' | b'\'', _) => state = State::Literal(b),
                _ => {}
            },
            State::LineComment => break,
            State::BlockComment => {
                if b == b'*' && next == Some(b'/') {
                    state = State::Code;
                    i += 1;
                }
            }
            State::Literal(quote) => {
                if b == b'\\' {
                    i += 1;
                } else if b == quote {
                    state = State::Code;
                }
            }
        }
        i += 1;
    }

    // Line comments and string literals only continue past a line end when
    // it is escaped.
    match state {
        State::LineComment | State::Literal(_) if bytes.last() != Some(&b'\\') => State::Code,
        other => other,
    }
}
