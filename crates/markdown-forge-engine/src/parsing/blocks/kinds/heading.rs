/// ATX-style heading: a run of 1-6 `#` followed by exactly one space.
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: char = '#';
    /// Deepest heading level (`<h6>`).
    pub const MAX_LEVEL: usize = 6;

    /// Splits a heading block into its level and the text after the prefix.
    ///
    /// Returns `None` unless the block opens with 1-6 `#` and a space.
    pub fn strip_prefix(block: &str) -> Option<(u8, &str)> {
        let level = block.chars().take_while(|&c| c == Self::MARKER).count();
        if !(1..=Self::MAX_LEVEL).contains(&level) {
            return None;
        }
        // `#` is one byte, so `level` is also a byte offset.
        let rest = block[level..].strip_prefix(' ')?;
        Some((level as u8, rest))
    }

    pub fn matches(block: &str) -> bool {
        Self::strip_prefix(block).is_some()
    }
}
