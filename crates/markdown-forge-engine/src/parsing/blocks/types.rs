/// The structural kind of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Default when no other kind matches.
    Paragraph,
    /// `#` to `######` followed by a space.
    Heading {
        /// 1 to 6.
        level: u8,
    },
    /// Opens and closes with ```` ``` ````.
    CodeFence,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `- `.
    UnorderedList,
    /// Lines numbered `1. `, `2. `, ... without gaps.
    OrderedList,
}

/// A classified block, borrowing its text from the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    /// Trimmed, non-empty block text.
    pub text: &'a str,
    pub kind: BlockKind,
}
