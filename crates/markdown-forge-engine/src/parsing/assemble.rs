use crate::{
    error::ConvertError,
    html::HtmlNode,
    parsing::{
        blocks::{
            Block, BlockKind,
            kinds::{BlockQuote, CodeFence, Heading, OrderedList, Paragraph, UnorderedList},
        },
        inline::{SpanKind, TextSpan, text_to_spans},
    },
};

/// Builds the node subtree for one classified block.
pub fn block_to_html_node(block: &Block<'_>) -> Result<HtmlNode, ConvertError> {
    let text = block.text;
    match block.kind {
        BlockKind::Heading { .. } => {
            let (level, content) = Heading::strip_prefix(text)
                .ok_or_else(|| ConvertError::MalformedHeading(text.to_string()))?;
            Ok(HtmlNode::parent(
                format!("h{level}"),
                text_to_children(content)?,
            ))
        }
        BlockKind::CodeFence => Ok(HtmlNode::parent(
            "pre",
            vec![HtmlNode::leaf("code", CodeFence::strip_fences(text))],
        )),
        BlockKind::Quote => Ok(HtmlNode::parent(
            "blockquote",
            text_to_children(&BlockQuote::content(text))?,
        )),
        BlockKind::UnorderedList => Ok(HtmlNode::parent(
            "ul",
            list_items(UnorderedList::items(text))?,
        )),
        BlockKind::OrderedList => Ok(HtmlNode::parent(
            "ol",
            list_items(OrderedList::items(text))?,
        )),
        BlockKind::Paragraph => Ok(HtmlNode::parent(
            "p",
            text_to_children(&Paragraph::content(text))?,
        )),
    }
}

/// Tokenizes inline text and maps each span to a leaf node.
pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, ConvertError> {
    Ok(text_to_spans(text)?
        .iter()
        .map(span_to_html_node)
        .collect())
}

pub fn span_to_html_node(span: &TextSpan) -> HtmlNode {
    let content = span.content();
    match span.kind() {
        SpanKind::Plain => HtmlNode::text(content),
        SpanKind::Bold => HtmlNode::leaf("b", content),
        SpanKind::Italic => HtmlNode::leaf("i", content),
        SpanKind::Code => HtmlNode::leaf("code", content),
        SpanKind::Link => {
            HtmlNode::leaf("a", content).with_attr("href", span.target().unwrap_or_default())
        }
        SpanKind::Image => HtmlNode::leaf("img", "")
            .with_attr("src", span.target().unwrap_or_default())
            .with_attr("alt", content),
    }
}

fn list_items(items: Vec<&str>) -> Result<Vec<HtmlNode>, ConvertError> {
    items
        .into_iter()
        .map(|item| Ok(HtmlNode::parent("li", text_to_children(item)?)))
        .collect()
}
