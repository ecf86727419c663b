/// The inline role of a [`TextSpan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// Text no pass has claimed yet; the only kind later passes split further.
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl SpanKind {
    /// Whether spans of this kind carry a target URL.
    pub fn has_target(self) -> bool {
        matches!(self, SpanKind::Link | SpanKind::Image)
    }
}

/// A typed fragment of inline text.
///
/// `target` is present exactly when the kind is [`SpanKind::Link`] or
/// [`SpanKind::Image`]; the constructors are the only way to build one, which
/// keeps that pairing intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    content: String,
    kind: SpanKind,
    target: Option<String>,
}

impl TextSpan {
    pub fn plain(content: impl Into<String>) -> Self {
        Self::styled(content, SpanKind::Plain)
    }

    pub fn bold(content: impl Into<String>) -> Self {
        Self::styled(content, SpanKind::Bold)
    }

    pub fn italic(content: impl Into<String>) -> Self {
        Self::styled(content, SpanKind::Italic)
    }

    pub fn code(content: impl Into<String>) -> Self {
        Self::styled(content, SpanKind::Code)
    }

    /// A span of a kind that carries no target.
    pub(crate) fn styled(content: impl Into<String>, kind: SpanKind) -> Self {
        debug_assert!(!kind.has_target(), "{kind:?} spans need a target");
        Self {
            content: content.into(),
            kind,
            target: None,
        }
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            content: text.into(),
            kind: SpanKind::Link,
            target: Some(url.into()),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            content: alt.into(),
            kind: SpanKind::Image,
            target: Some(url.into()),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn kind(&self) -> SpanKind {
        self.kind
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }
}
