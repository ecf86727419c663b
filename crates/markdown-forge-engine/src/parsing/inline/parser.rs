use crate::error::ConvertError;

use super::{
    kinds::{Delimiter, Marker},
    types::TextSpan,
};

/// One stage of the inline pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlinePass {
    Delimited(Delimiter),
    Marked(Marker),
}

impl InlinePass {
    /// Runs this pass over every `Plain` span, passing other spans through.
    pub fn apply(self, spans: Vec<TextSpan>) -> Result<Vec<TextSpan>, ConvertError> {
        match self {
            InlinePass::Delimited(delimiter) => split_spans_delimiter(spans, delimiter),
            InlinePass::Marked(marker) => Ok(split_spans_marker(spans, marker)),
        }
    }
}

/// The inline pipeline, in the order the passes run.
///
/// Delimiters go before markers, and images before links: the bracketed part
/// of `![alt](url)` is itself a valid link marker.
pub const PASSES: [InlinePass; 5] = [
    InlinePass::Delimited(Delimiter::BOLD),
    InlinePass::Delimited(Delimiter::ITALIC),
    InlinePass::Delimited(Delimiter::CODE),
    InlinePass::Marked(Marker::IMAGE),
    InlinePass::Marked(Marker::LINK),
];

/// Tokenizes flat text into typed spans by running every pass in [`PASSES`].
///
/// The result covers the whole input; only the syntax characters consumed by
/// the passes are missing from it.
pub fn text_to_spans(text: &str) -> Result<Vec<TextSpan>, ConvertError> {
    PASSES
        .iter()
        .try_fold(vec![TextSpan::plain(text)], |spans, pass| pass.apply(spans))
}

/// Splits `Plain` spans on every occurrence of `delimiter`.
///
/// Parts alternate outside/inside starting outside. Empty parts are dropped,
/// so text that opens or closes with the delimiter produces no empty spans.
/// An odd number of tokens in any one span is an error.
pub fn split_spans_delimiter(
    spans: Vec<TextSpan>,
    delimiter: Delimiter,
) -> Result<Vec<TextSpan>, ConvertError> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        if !delimiter.is_balanced_in(span.content()) {
            return Err(ConvertError::UnbalancedDelimiter {
                delimiter: delimiter.token,
                text: span.content().to_string(),
            });
        }
        if delimiter.count_in(span.content()) == 0 {
            out.push(span);
            continue;
        }

        for (i, part) in span.content().split(delimiter.token).enumerate() {
            if part.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                out.push(TextSpan::plain(part));
            } else {
                out.push(TextSpan::styled(part, delimiter.kind));
            }
        }
    }

    Ok(out)
}

/// Extracts `marker` occurrences from `Plain` spans into typed spans.
///
/// A span with no markers is kept as is; otherwise it is replaced by the
/// non-empty text around each marker interleaved with the marker spans.
pub fn split_spans_marker(spans: Vec<TextSpan>, marker: Marker) -> Vec<TextSpan> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let found = marker.find_all(span.content());
        if found.is_empty() {
            out.push(span);
            continue;
        }

        let mut remaining = span.content();
        for m in found {
            let Some((before, after)) = remaining.split_once(m.full) else {
                break;
            };
            if !before.is_empty() {
                out.push(TextSpan::plain(before));
            }
            out.push(marked_span(marker, m.text, m.target));
            remaining = after;
        }
        if !remaining.is_empty() {
            out.push(TextSpan::plain(remaining));
        }
    }

    out
}

pub fn split_spans_image(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_spans_marker(spans, Marker::IMAGE)
}

pub fn split_spans_link(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_spans_marker(spans, Marker::LINK)
}

fn marked_span(marker: Marker, text: &str, target: &str) -> TextSpan {
    if marker == Marker::IMAGE {
        TextSpan::image(text, target)
    } else {
        TextSpan::link(text, target)
    }
}
