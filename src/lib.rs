//! Inline markdown spans to HTML
//!
//! Plain text is split into typed [`TextSpan`]s one delimiter at a time,
//! each span becomes an [`HtmlNode`] leaf, and the leaves are wrapped in a
//! parent element and serialized.
pub mod config;
pub mod convert;
pub mod error;
pub mod html;
pub mod span;
pub mod splitter;

pub use config::{ConfigError, InlineConfig};
pub use convert::{span_to_node, spans_to_nodes};
pub use error::{Error, ErrorKind, Result};
pub use html::{Attributes, HtmlNode, attributes_to_html};
pub use span::{SpanKind, TextSpan};
pub use splitter::{split_spans, split_spans_strict};

/// Splits `text` on each configured delimiter in turn.
pub fn text_to_spans(text: &str, config: &InlineConfig) -> Result<Vec<TextSpan>> {
    config
        .delimiters
        .iter()
        .try_fold(vec![TextSpan::plain(text)], |spans, delimiter| {
            split_spans(spans, delimiter)
        })
}

pub fn render_inline(text: &str, config: &InlineConfig) -> Result<String> {
    let spans = text_to_spans(text, config)?;
    let nodes = spans_to_nodes(&spans)?;
    HtmlNode::parent(&config.wrapper_tag, nodes)?.to_html()
}

/// Render inline markdown with the default delimiters inside a `<p>`.
pub fn inline_to_html(text: &str) -> Result<String> {
    render_inline(text, &InlineConfig::default())
}
