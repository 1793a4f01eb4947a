//! Bundle marker comments (`// cbundl: bundle`)

/// Prefix shared by every cbundl directive
pub const DIRECTIVE_PREFIX: &str = "cbundl:";

/// Keyword that marks a translation unit as a bundle root
pub const BUNDLE_KEYWORD: &str = "bundle";

/// Try to parse a whole-line comment as a cbundl directive.
///
/// `s` is the line with leading whitespace removed. Returns `None` when the
/// line is not a comment carrying a `cbundl:` directive, `Some(Ok(()))` for
/// the bundle marker and `Some(Err(keyword))` for an unknown keyword.
pub fn parse(s: &str) -> Option<Result<(), String>> {
    let s = s.trim_end_matches(['\r', '\n']);

    let body = if let Some(rest) = s.strip_prefix("//") {
        rest
    } else {
        let inner = s.strip_prefix("/*")?.trim_end().strip_suffix("*/")?;
        if inner.contains("*/") {
            return None;
        }
        inner
    };

    let keyword = body.trim().strip_prefix(DIRECTIVE_PREFIX)?.trim();
    if keyword == BUNDLE_KEYWORD {
        Some(Ok(()))
    } else {
        Some(Err(keyword.to_string()))
    }
}
