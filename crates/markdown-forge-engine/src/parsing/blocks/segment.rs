use std::sync::OnceLock;

use regex::Regex;

/// Splits a document into blocks on blank-line boundaries.
///
/// Two or more consecutive line breaks separate two blocks. A line holding
/// only spaces or tabs is not a break, so it stays inside its block. Blocks
/// are trimmed and empty ones dropped; single line breaks inside a block are
/// kept.
pub fn markdown_to_blocks(markdown: &str) -> Vec<&str> {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    let separator = SEPARATOR
        .get_or_init(|| Regex::new(r"(?:\r?\n){2,}").expect("Invalid block separator regex"));

    separator
        .split(markdown)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}
