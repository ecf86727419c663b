pub mod assemble;
pub mod blocks;
pub mod inline;

#[cfg(test)]
mod tests;

use std::borrow::Cow;

use crate::{error::ConvertError, html::HtmlNode};

use assemble::block_to_html_node;
use blocks::parse_blocks;

/// Converts a whole document into a tree rooted at a `div`.
///
/// The root's children are the block subtrees in document order. Any error
/// aborts the whole conversion. CRLF line endings are treated as LF.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode, ConvertError> {
    let markdown = normalize_line_endings(markdown);
    let blocks = parse_blocks(&markdown);
    log::debug!("segmented document into {} blocks", blocks.len());

    let children = blocks
        .iter()
        .map(|block| {
            log::trace!("assembling {:?} block", block.kind);
            block_to_html_node(block)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(HtmlNode::parent("div", children))
}

fn normalize_line_endings(markdown: &str) -> Cow<'_, str> {
    if markdown.contains("\r\n") {
        Cow::Owned(markdown.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(markdown)
    }
}

/// Converts a whole document to an HTML string.
pub fn markdown_to_html(markdown: &str) -> Result<String, ConvertError> {
    Ok(markdown_to_html_node(markdown)?.to_html()?)
}
