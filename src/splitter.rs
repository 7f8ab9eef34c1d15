//! Delimiter splitting of plain spans into styled spans
use crate::error::{Error, Result};
use crate::span::{SpanKind, TextSpan};
use log::{debug, warn};

/// Delimiters understood by the splitter and the kind each one marks.
const DELIMITERS: &[(&str, SpanKind)] = &[
    ("`", SpanKind::Code),
    ("**", SpanKind::Bold),
    ("*", SpanKind::Bold),
    ("_", SpanKind::Italic),
];

pub fn kind_for_delimiter(delimiter: &str) -> Option<SpanKind> {
    DELIMITERS
        .iter()
        .find(|(d, _)| *d == delimiter)
        .map(|(_, kind)| *kind)
}

pub fn supported_delimiters() -> impl Iterator<Item = &'static str> {
    DELIMITERS.iter().map(|(d, _)| *d)
}

/// Splits every plain span on `delimiter`, alternating plain and styled
/// segments starting with plain. Other spans are passed through untouched.
///
/// Unbalanced delimiters are not rejected: the trailing segment simply takes
/// whatever kind its position gives it.
pub fn split_spans(spans: Vec<TextSpan>, delimiter: &str) -> Result<Vec<TextSpan>> {
    let kind = lookup(delimiter)?;
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            result.push(span);
            continue;
        }
        if span.text().matches(delimiter).count() % 2 == 1 {
            warn!(
                "unbalanced '{}' in '{}'; trailing text will be marked {}",
                delimiter,
                span.text(),
                kind
            );
        }
        push_segments(&mut result, span.text(), delimiter, kind);
    }

    debug!("split on '{}' produced {} spans", delimiter, result.len());
    Ok(result)
}

/// Like [`split_spans`], but every span must contain `delimiter` and every
/// plain span must contain it an even number of times.
pub fn split_spans_strict(spans: Vec<TextSpan>, delimiter: &str) -> Result<Vec<TextSpan>> {
    lookup(delimiter)?;
    for span in &spans {
        let count = span.text().matches(delimiter).count();
        if count == 0 {
            return Err(Error::DelimiterNotFound {
                delimiter: delimiter.to_string(),
                text: span.text().to_string(),
            });
        }
        if span.is_plain() && count % 2 == 1 {
            return Err(Error::UnbalancedDelimiter {
                delimiter: delimiter.to_string(),
                text: span.text().to_string(),
            });
        }
    }
    split_spans(spans, delimiter)
}

fn lookup(delimiter: &str) -> Result<SpanKind> {
    kind_for_delimiter(delimiter).ok_or_else(|| Error::UnsupportedDelimiter(delimiter.to_string()))
}

fn push_segments(out: &mut Vec<TextSpan>, text: &str, delimiter: &str, kind: SpanKind) {
    for (i, segment) in text.split(delimiter).enumerate() {
        if i % 2 == 0 {
            out.push(TextSpan::plain(segment));
        } else {
            out.push(TextSpan::styled(segment, kind));
        }
    }
}
