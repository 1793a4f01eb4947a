//! `#include` directive parsing

use super::IncludeDelimiter;

/// A parsed include directive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInclude {
    pub delimiter: IncludeDelimiter,
    pub literal: String,
    /// Offset just past the closing delimiter, relative to the parsed slice
    pub end: usize,
}

/// Try to parse `s` as an include directive.
///
/// `s` must start at the `#`. Returns `None` when the line is some other
/// preprocessor directive or a computed `#include MACRO`.
pub fn parse(s: &str) -> Option<Result<ParsedInclude, &'static str>> {
    let rest = s.strip_prefix('#')?;
    let after_hash = s.len() - rest.len();

    let keyword_at = after_hash + (rest.len() - rest.trim_start_matches([' ', '\t']).len());
    let rest = s[keyword_at..].strip_prefix("include")?;
    if rest
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        // #include_next, #included, ...
        return None;
    }

    let body_at = s.len() - rest.trim_start_matches([' ', '\t']).len();
    let body = &s[body_at..];

    let (delimiter, close) = match body.chars().next() {
        Some('"') => (IncludeDelimiter::Quoted, '"'),
        Some('<') => (IncludeDelimiter::Angled, '>'),
        Some(c) if c.is_ascii_alphabetic() || c == '_' => return None,
        _ => return Some(Err("expected '\"' or '<' after #include")),
    };

    let inner = &body[1..];
    let Some(len) = inner.find(close) else {
        return Some(Err("unterminated include path"));
    };
    if len == 0 {
        return Some(Err("empty include path"));
    }

    Some(Ok(ParsedInclude {
        delimiter,
        literal: inner[..len].to_string(),
        end: body_at + 1 + len + 1,
    }))
}
