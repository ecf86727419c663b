use crate::parsing::inline::types::SpanKind;

/// A symmetric inline delimiter: the same token opens and closes the span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiter {
    /// Literal token, e.g. `**`.
    pub token: &'static str,
    /// Kind given to the text between a pair of tokens.
    pub kind: SpanKind,
}

impl Delimiter {
    pub const BOLD: Delimiter = Delimiter {
        token: "**",
        kind: SpanKind::Bold,
    };

    pub const ITALIC: Delimiter = Delimiter {
        token: "_",
        kind: SpanKind::Italic,
    };

    pub const CODE: Delimiter = Delimiter {
        token: "`",
        kind: SpanKind::Code,
    };

    /// Number of literal occurrences of the token in `text`.
    pub fn count_in(&self, text: &str) -> usize {
        text.matches(self.token).count()
    }

    /// True when every opening token has a closing partner.
    pub fn is_balanced_in(&self, text: &str) -> bool {
        self.count_in(text) % 2 == 0
    }
}
