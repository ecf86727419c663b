/// A fenced code block: opens and closes with three backticks.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    /// The block opens and closes with a fence, which may not overlap.
    pub fn matches(block: &str) -> bool {
        block.len() >= 2 * Self::FENCE.len()
            && block.starts_with(Self::FENCE)
            && block.ends_with(Self::FENCE)
    }

    /// Strips backtick and newline characters from both ends.
    ///
    /// This trims by character class, so backticks or blank lines at the very
    /// edge of the code itself go too.
    pub fn strip_fences(block: &str) -> &str {
        block.trim_matches(|c| c == '`' || c == '\n')
    }
}
