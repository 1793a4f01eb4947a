//! Quotes printed at the foot of the document banner

use rand::seq::IndexedRandom;
use serde::Deserialize;

/// A quote and who said it. `text` may span several lines.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

/// Which quotes are eligible
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuotePicker {
    /// Built-in quotes followed by custom ones
    #[default]
    All,
    #[serde(rename = "builtin")]
    BuiltIn,
    Custom,
}

const BUILT_IN: &[(&str, &str)] = &[
    (
        "C is quirky, flawed, and an enormous success.",
        "Dennis M. Ritchie",
    ),
    ("Simplicity is prerequisite for reliability.", "Edsger W. Dijkstra"),
    (
        "Programs must be written for people to read,\nand only incidentally for machines to execute.",
        "Harold Abelson",
    ),
    (
        "Premature optimization is the root of all evil.",
        "Donald E. Knuth",
    ),
    ("Talk is cheap. Show me the code.", "Linus Torvalds"),
    (
        "Make it work, make it right, make it fast.",
        "Kent Beck",
    ),
    (
        "Debugging is twice as hard as writing the code in the first place.",
        "Brian W. Kernighan",
    ),
];

/// Pool of quotes to draw from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Quotes {
    pub picker: QuotePicker,
    pub custom: Vec<Quote>,
}

impl Quotes {
    /// Eligible quotes: built-in ones first, then custom ones in the order
    /// they were configured.
    pub fn candidates(&self) -> Vec<Quote> {
        let built_in = BUILT_IN.iter().map(|(text, author)| Quote {
            text: (*text).to_string(),
            author: (*author).to_string(),
        });

        match self.picker {
            QuotePicker::All => built_in.chain(self.custom.iter().cloned()).collect(),
            QuotePicker::BuiltIn => built_in.collect(),
            QuotePicker::Custom => self.custom.clone(),
        }
    }

    /// The first eligible quote; the same on every run
    pub fn first(&self) -> Option<Quote> {
        self.candidates().into_iter().next()
    }

    pub fn random(&self) -> Option<Quote> {
        self.candidates().choose(&mut rand::rng()).cloned()
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    fn custom(text: &str) -> Quote {
        Quote {
            text: text.to_string(),
            author: "someone".to_string(),
        }
    }

    #[test]
    fn test_first_is_first_built_in() {
        let quotes = Quotes::default();
        let first = quotes.first().expect("quote");
        assert_eq!(first.author, BUILT_IN[0].1);
    }

    #[test]
    fn test_pickers() {
        let mut quotes = Quotes {
            picker: QuotePicker::All,
            custom: vec![custom("mine")],
        };
        assert_eq!(quotes.candidates().len(), BUILT_IN.len() + 1);
        assert_eq!(quotes.candidates().last(), Some(&custom("mine")));

        quotes.picker = QuotePicker::BuiltIn;
        assert_eq!(quotes.candidates().len(), BUILT_IN.len());

        quotes.picker = QuotePicker::Custom;
        assert_eq!(quotes.candidates(), vec![custom("mine")]);
        assert_eq!(quotes.first(), Some(custom("mine")));
        assert_eq!(quotes.random(), Some(custom("mine")));
    }

    #[test]
    fn test_random_draws_from_candidates() {
        let quotes = Quotes::default();
        let candidates = quotes.candidates();
        for _ in 0..16 {
            let quote = quotes.random().expect("quote");
            assert!(candidates.contains(&quote));
        }
    }

    #[test]
    fn test_no_candidates() {
        let quotes = Quotes {
            picker: QuotePicker::Custom,
            custom: Vec::new(),
        };
        assert!(quotes.first().is_none());
        assert!(quotes.random().is_none());
    }

    #[test]
    fn test_picker_names() {
        let picker: QuotePicker = serde_yaml::from_str("builtin").expect("parse");
        assert_eq!(picker, QuotePicker::BuiltIn);
        let picker: QuotePicker = serde_yaml::from_str("custom").expect("parse");
        assert_eq!(picker, QuotePicker::Custom);
    }
}
