use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::inline::types::SpanKind;

/// A bracketed inline marker of the form `[text](url)`, optionally prefixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    /// Kind given to each matched marker.
    pub kind: SpanKind,
}

/// One marker found in a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerMatch<'t> {
    /// The whole marker as written, e.g. `![alt](/a.png)`.
    pub full: &'t str,
    /// Bracketed text: link text or image alt text.
    pub text: &'t str,
    /// Parenthesised URL.
    pub target: &'t str,
}

impl Marker {
    pub const IMAGE: Marker = Marker {
        kind: SpanKind::Image,
    };

    pub const LINK: Marker = Marker {
        kind: SpanKind::Link,
    };

    // Both groups are lazy so adjacent markers stay separate.
    const IMAGE_PATTERN: &'static str = r"!\[(.*?)\]\((.*?)\)";
    const LINK_PATTERN: &'static str = r"\[(.*?)\]\((.*?)\)";

    fn regex(&self) -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();

        match self.kind {
            SpanKind::Image => IMAGE_REGEX
                .get_or_init(|| Regex::new(Self::IMAGE_PATTERN).expect("Invalid image regex")),
            _ => LINK_REGEX
                .get_or_init(|| Regex::new(Self::LINK_PATTERN).expect("Invalid link regex")),
        }
    }

    /// All markers in `text`, left to right.
    pub fn find_all<'t>(&self, text: &'t str) -> Vec<MarkerMatch<'t>> {
        self.regex()
            .captures_iter(text)
            .filter_map(|caps| {
                Some(MarkerMatch {
                    full: caps.get(0)?.as_str(),
                    text: caps.get(1)?.as_str(),
                    target: caps.get(2)?.as_str(),
                })
            })
            .collect()
    }
}
