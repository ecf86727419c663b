/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters; they are the default when no other block
/// kind matches.
pub struct Paragraph;

impl Paragraph {
    /// Collapses every line break to a single space.
    pub fn content(block: &str) -> String {
        block.replace('\n', " ")
    }
}
