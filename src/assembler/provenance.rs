//! Default provenance comments: the document banner and per-fragment headers

use chrono::{DateTime, Local, TimeZone, Utc};

use super::ProvenanceProvider;
use super::quotes::{Quote, Quotes};

pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
pub const CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CRATE_REPOSITORY: &str = env!("CARGO_PKG_REPOSITORY");

const ART: &[&str] = &[
    r"         )                (    (",
    r"      ( /(    (           )\ ) )\",
    r"  (   )\())  ))\   (     (()/(((_)",
    r"  )\ ((_)\  /((_)  )\ )   ((_))_",
    r" ((_)| |(_)(_))(  _(_/(   _| || |",
    r"/ _| | '_ \| || || ' \))/ _` || |",
    r"\__| |_.__/ \_,_||_||_| \__,_||_|",
];

const MIN_WIDTH: usize = 56;

/// Provenance rendered as C block comments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    /// Emit the document banner
    pub banner: bool,
    /// Emit a header comment before every fragment
    pub separators: bool,
    /// Pin the generation time to the Unix epoch and the quote to the first
    /// eligible one
    pub deterministic: bool,
    /// Quotes for the banner, `None` to leave the quote out
    pub quotes: Option<Quotes>,
}

impl Default for Provenance {
    fn default() -> Self {
        Self {
            banner: true,
            separators: true,
            deterministic: false,
            quotes: Some(Quotes::default()),
        }
    }
}

impl Provenance {
    fn quote(&self) -> Option<Quote> {
        let quotes = self.quotes.as_ref()?;
        if self.deterministic {
            quotes.first()
        } else {
            quotes.random()
        }
    }
}

impl ProvenanceProvider for Provenance {
    fn document_banner(&self) -> Option<String> {
        if !self.banner {
            return None;
        }

        let generated_at = if self.deterministic {
            format_date(&DateTime::<Utc>::default())
        } else {
            format_date(&Local::now())
        };

        let title = format!("{CRATE_NAME} {CRATE_VERSION}");
        let generated = format!("Generated at: {generated_at}");
        let width = ART
            .iter()
            .map(|l| l.len())
            .chain([title.len(), CRATE_REPOSITORY.len(), MIN_WIDTH])
            .max()
            .unwrap_or(MIN_WIDTH);

        let mut lines = vec![String::new()];
        lines.extend(ART.iter().map(|l| center(l, width)));
        lines.push(String::new());
        lines.push(center(&title, width));
        lines.push(center(CRATE_REPOSITORY, width));
        lines.push(String::new());
        lines.push(center(&generated, width));

        if let Some(quote) = self.quote() {
            lines.push(String::new());
            lines.extend(quote.text.lines().map(str::to_string));
            lines.push(format!("  - {}", quote.author));
        }
        lines.push(String::new());

        let body: String = lines
            .iter()
            .map(|l| {
                if l.is_empty() {
                    " *\n".to_string()
                } else {
                    format!(" * {l}\n")
                }
            })
            .collect();

        Some(format!("/**\n{body} */\n"))
    }

    fn fragment_banner(&self, path: &str) -> Option<String> {
        self.separators
            .then(|| format!("/**\n * bundled from \"{path}\"\n */\n"))
    }
}

fn center(line: &str, width: usize) -> String {
    format!("{line:^width$}").trim_end().to_string()
}

fn format_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%a %d %b %Y %H:%M:%S (UTC%:z)").to_string()
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::assembler::quotes::QuotePicker;

    fn deterministic() -> Provenance {
        Provenance {
            deterministic: true,
            ..Provenance::default()
        }
    }

    #[test]
    fn test_deterministic_banner_is_stable() {
        let provenance = deterministic();

        let banner = provenance.document_banner().expect("banner");
        assert_eq!(banner, provenance.document_banner().expect("banner"));
        assert!(banner.starts_with("/**\n"));
        assert!(banner.ends_with(" */\n"));
        assert!(banner.contains("Generated at: Thu 01 Jan 1970 00:00:00 (UTC+00:00)"));
        assert!(banner.contains(&format!("{CRATE_NAME} {CRATE_VERSION}")));
        assert!(banner.contains(r"\__| |_.__/ \_,_||_||_| \__,_||_|"));
        assert!(!banner.lines().any(|l| l.ends_with(' ')));
    }

    #[test]
    fn test_deterministic_banner_uses_first_quote() {
        let provenance = deterministic();
        let first = Quotes::default().first().expect("quote");

        let banner = provenance.document_banner().expect("banner");
        assert!(banner.contains(&format!(" *   - {}\n", first.author)));
    }

    #[test]
    fn test_multi_line_custom_quote() {
        let provenance = Provenance {
            quotes: Some(Quotes {
                picker: QuotePicker::Custom,
                custom: vec![Quote {
                    text: "first line\nsecond line".to_string(),
                    author: "me".to_string(),
                }],
            }),
            ..Provenance::default()
        };

        let banner = provenance.document_banner().expect("banner");
        assert!(banner.contains(" * first line\n * second line\n *   - me\n"));
    }

    #[test]
    fn test_quote_disabled() {
        let provenance = Provenance {
            quotes: None,
            ..deterministic()
        };
        let banner = provenance.document_banner().expect("banner");
        assert!(!banner.contains("  - "));
    }

    #[test]
    fn test_fragment_banner_names_path() {
        let provenance = Provenance::default();
        assert_eq!(
            provenance.fragment_banner("src/frob.h").expect("separator"),
            "/**\n * bundled from \"src/frob.h\"\n */\n"
        );
    }

    #[test]
    fn test_disabled_parts() {
        let provenance = Provenance {
            banner: false,
            separators: false,
            ..deterministic()
        };
        assert!(provenance.document_banner().is_none());
        assert!(provenance.fragment_banner("a.h").is_none());
    }
}
