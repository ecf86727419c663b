use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockKind,
};

/// Classifies a trimmed block.
///
/// Kinds are tried in precedence order and the first match wins: heading,
/// code fence, quote, unordered list, ordered list. Anything else is a
/// paragraph. A list whose numbering is off anywhere is a paragraph as a
/// whole; it never classifies partially.
pub fn block_to_block_kind(block: &str) -> BlockKind {
    if let Some((level, _)) = Heading::strip_prefix(block) {
        BlockKind::Heading { level }
    } else if CodeFence::matches(block) {
        BlockKind::CodeFence
    } else if BlockQuote::matches(block) {
        BlockKind::Quote
    } else if UnorderedList::matches(block) {
        BlockKind::UnorderedList
    } else if OrderedList::matches(block) {
        BlockKind::OrderedList
    } else {
        BlockKind::Paragraph
    }
}
