use thiserror::Error;

use crate::html::RenderError;

/// Failure of a single Markdown to HTML conversion.
///
/// Conversion is deterministic, so none of these are retryable and no partial
/// output accompanies them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("invalid Markdown syntax: unbalanced `{delimiter}` delimiter in {text:?}")]
    UnbalancedDelimiter {
        delimiter: &'static str,
        text: String,
    },
    #[error("heading block has no `#` prefix: {0:?}")]
    MalformedHeading(String),
    #[error("render failed: {0}")]
    Render(#[from] RenderError),
}
