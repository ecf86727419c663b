/// Blockquote: every line starts with `>`.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    pub fn matches(block: &str) -> bool {
        block.split('\n').all(|line| line.starts_with(Self::PREFIX))
    }

    /// Strips the leading `>` and one optional space after it.
    pub fn strip_line(line: &str) -> &str {
        match line.strip_prefix(Self::PREFIX) {
            Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
            None => line,
        }
    }

    /// Quote content with prefixes removed, lines joined by `\n`.
    pub fn content(block: &str) -> String {
        block
            .split('\n')
            .map(Self::strip_line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_line_quoted() {
        assert!(BlockQuote::matches(">quoting"));
        assert!(BlockQuote::matches(">quoting\n>\n>asd"));
    }

    #[test]
    fn one_unquoted_line_disqualifies() {
        assert!(!BlockQuote::matches(">quoting\nmissing >\n>asd"));
    }

    #[test]
    fn strip_optional_space() {
        assert_eq!(BlockQuote::strip_line("> hello"), "hello");
        assert_eq!(BlockQuote::strip_line(">hello"), "hello");
        assert_eq!(BlockQuote::strip_line(">  two"), " two");
        assert_eq!(BlockQuote::strip_line(">"), "");
    }

    #[test]
    fn content_joins_stripped_lines() {
        assert_eq!(BlockQuote::content("> this is\n> a quote"), "this is\na quote");
        assert_eq!(BlockQuote::content(">a\n>\n>b"), "a\n\nb");
    }

    #[test]
    fn nested_marker_survives_one_strip() {
        assert_eq!(BlockQuote::strip_line(">> nested"), "> nested");
    }
}
