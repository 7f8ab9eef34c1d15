//! Inline text spans produced by the splitter and consumed by the converter
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanKind {
    #[serde(alias = "text")]
    Plain,
    Bold,
    #[serde(alias = "italics")]
    Italic,
    Code,
    Link,
    Image,
}

impl SpanKind {
    /// Links and images carry a url; every other kind ignores it.
    pub fn requires_url(self) -> bool {
        matches!(self, SpanKind::Link | SpanKind::Image)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SpanKind::Plain => "plain",
            SpanKind::Bold => "bold",
            SpanKind::Italic => "italic",
            SpanKind::Code => "code",
            SpanKind::Link => "link",
            SpanKind::Image => "image",
        }
    }
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpanKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "plain" | "text" => Ok(SpanKind::Plain),
            "bold" => Ok(SpanKind::Bold),
            "italic" | "italics" => Ok(SpanKind::Italic),
            "code" => Ok(SpanKind::Code),
            "link" => Ok(SpanKind::Link),
            "image" => Ok(SpanKind::Image),
            other => Err(Error::UnsupportedKind(other.to_string())),
        }
    }
}

/// Wire shape of a span; deserialization goes through [`TextSpan::new`].
#[derive(Deserialize)]
struct RawSpan {
    text: String,
    kind: SpanKind,
    #[serde(default)]
    url: Option<String>,
}

impl TryFrom<RawSpan> for TextSpan {
    type Error = Error;

    fn try_from(raw: RawSpan) -> Result<Self> {
        TextSpan::new(raw.text, raw.kind, raw.url)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSpan")]
pub struct TextSpan {
    text: String,
    kind: SpanKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
}

impl TextSpan {
    pub fn new(text: impl Into<String>, kind: SpanKind, url: Option<String>) -> Result<Self> {
        let text = text.into();
        if kind.requires_url() && url.is_none() {
            return Err(Error::MissingUrl {
                kind: kind.to_string(),
                text,
            });
        }
        Ok(TextSpan { text, kind, url })
    }

    pub fn plain(text: impl Into<String>) -> Self {
        TextSpan::styled(text, SpanKind::Plain)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        TextSpan {
            text: text.into(),
            kind: SpanKind::Link,
            url: Some(url.into()),
        }
    }

    /// `alt` becomes the span text, rendered as the image's `alt` attribute.
    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        TextSpan {
            text: alt.into(),
            kind: SpanKind::Image,
            url: Some(url.into()),
        }
    }

    /// Builds a span of a kind that never needs a url.
    pub(crate) fn styled(text: impl Into<String>, kind: SpanKind) -> Self {
        debug_assert!(!kind.requires_url());
        TextSpan {
            text: text.into(),
            kind,
            url: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> SpanKind {
        self.kind
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }
}

impl fmt::Display for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TextSpan({}, {}, {})",
            self.text,
            self.kind.as_str().to_uppercase(),
            self.url.as_deref().unwrap_or("None")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_eq() {
        let span = TextSpan::new("This is a text node", SpanKind::Bold, None).unwrap();
        let span2 = TextSpan::new("This is a text node", SpanKind::Bold, None).unwrap();
        assert_eq!(span, span2);
    }

    #[test]
    fn test_unequal() {
        let span = TextSpan::new("This is a text node", SpanKind::Bold, None).unwrap();
        let span2 = TextSpan::new("This is a different text node", SpanKind::Italic, None).unwrap();
        assert_ne!(span, span2);
    }

    #[test]
    fn test_url_takes_part_in_equality() {
        assert_ne!(
            TextSpan::link("home", "http://a.example"),
            TextSpan::link("home", "http://b.example")
        );
    }

    #[test]
    fn test_display() {
        let span = TextSpan::new("This is a text node", SpanKind::Bold, None).unwrap();
        assert_eq!(span.to_string(), "TextSpan(This is a text node, BOLD, None)");
    }

    #[test]
    fn test_default_url() {
        let span = TextSpan::new("This is a text node", SpanKind::Bold, None).unwrap();
        assert_eq!(span.url(), None);
    }

    #[test]
    fn test_with_url() {
        let span = TextSpan::new(
            "This is a text node",
            SpanKind::Link,
            Some("http://example.com".to_string()),
        )
        .unwrap();
        assert_eq!(span.url(), Some("http://example.com"));
        assert_eq!(span.text(), "This is a text node");
        assert_eq!(span.kind(), SpanKind::Link);
    }

    #[test]
    fn test_link_without_url_fails() {
        let err = TextSpan::new("click", SpanKind::Link, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingUrl);

        let err = TextSpan::new("alt", SpanKind::Image, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingUrl);
    }

    #[test]
    fn test_plain_without_url_succeeds() {
        let span = TextSpan::new("just text", SpanKind::Plain, None).unwrap();
        assert!(span.is_plain());
    }

    #[test]
    fn test_invalid_kind_name() {
        let err = "invalid_text_type".parse::<SpanKind>().unwrap_err();
        assert_eq!(err, Error::UnsupportedKind("invalid_text_type".to_string()));
        assert_eq!("text".parse::<SpanKind>().unwrap(), SpanKind::Plain);
        assert_eq!("italics".parse::<SpanKind>().unwrap(), SpanKind::Italic);
    }

    #[test]
    fn test_deserialize_validates_url() {
        let json = r#"{"text": "click", "kind": "link", "url": "http://x"}"#;
        let span: TextSpan = serde_json::from_str(json).unwrap();
        assert_eq!(span, TextSpan::link("click", "http://x"));

        let result = serde_json::from_str::<TextSpan>(r#"{"text": "click", "kind": "link"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_omits_missing_url() {
        let json = serde_json::to_string(&TextSpan::plain("hi")).unwrap();
        assert_eq!(json, r#"{"text":"hi","kind":"plain"}"#);
    }
}
