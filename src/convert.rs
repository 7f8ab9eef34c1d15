//! Span to HTML leaf conversion
use crate::error::{Error, Result};
use crate::html::{Attributes, HtmlNode};
use crate::span::{SpanKind, TextSpan};
use log::debug;

pub fn span_to_node(span: &TextSpan) -> Result<HtmlNode> {
    debug!("converting {}", span);
    match span.kind() {
        SpanKind::Plain => HtmlNode::leaf(None, span.text()),
        SpanKind::Bold => HtmlNode::leaf(Some("b"), span.text()),
        SpanKind::Italic => HtmlNode::leaf(Some("i"), span.text()),
        SpanKind::Code => HtmlNode::leaf(Some("code"), span.text()),
        SpanKind::Link => {
            let url = required_url(span)?;
            let attributes = Attributes::new().with("href", url);
            HtmlNode::leaf_with_attributes(Some("a"), span.text(), attributes)
        }
        SpanKind::Image => {
            let url = required_url(span)?;
            let attributes = Attributes::new().with("src", url).with("alt", span.text());
            HtmlNode::leaf_with_attributes(Some("img"), "", attributes)
        }
    }
}

pub fn spans_to_nodes(spans: &[TextSpan]) -> Result<Vec<HtmlNode>> {
    spans.iter().map(span_to_node).collect()
}

fn required_url(span: &TextSpan) -> Result<&str> {
    span.url().ok_or_else(|| Error::MissingUrl {
        kind: span.kind().to_string(),
        text: span.text().to_string(),
    })
}
