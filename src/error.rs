use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid node shape: {0}")]
    InvalidNodeShape(String),

    #[error("leaf node <{}> has no value", .tag.as_deref().unwrap_or("raw text"))]
    MissingValue { tag: Option<String> },

    #[error("parent node has no tag")]
    MissingTag,

    #[error("parent node <{tag}> has no children")]
    MissingChildren { tag: String },

    #[error("{kind} span '{text}' requires a url")]
    MissingUrl { kind: String, text: String },

    #[error("unsupported span kind '{0}'")]
    UnsupportedKind(String),

    #[error("delimiter '{0}' not supported")]
    UnsupportedDelimiter(String),

    #[error("delimiter '{delimiter}' not found in span text '{text}'")]
    DelimiterNotFound { delimiter: String, text: String },

    #[error("delimiter '{delimiter}' is unbalanced in span text '{text}'")]
    UnbalancedDelimiter { delimiter: String, text: String },
}

/// Category of an [`Error`], for callers that only care about what went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidNodeShape,
    MissingValue,
    MissingTag,
    MissingChildren,
    MissingUrl,
    UnsupportedKind,
    UnsupportedDelimiter,
    DelimiterNotFound,
    UnbalancedDelimiter,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidNodeShape(_) => ErrorKind::InvalidNodeShape,
            Error::MissingValue { .. } => ErrorKind::MissingValue,
            Error::MissingTag => ErrorKind::MissingTag,
            Error::MissingChildren { .. } => ErrorKind::MissingChildren,
            Error::MissingUrl { .. } => ErrorKind::MissingUrl,
            Error::UnsupportedKind(_) => ErrorKind::UnsupportedKind,
            Error::UnsupportedDelimiter(_) => ErrorKind::UnsupportedDelimiter,
            Error::DelimiterNotFound { .. } => ErrorKind::DelimiterNotFound,
            Error::UnbalancedDelimiter { .. } => ErrorKind::UnbalancedDelimiter,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_offending_input() {
        let err = Error::DelimiterNotFound {
            delimiter: "*".to_string(),
            text: "Hello world!".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "delimiter '*' not found in span text 'Hello world!'"
        );

        let err = Error::MissingValue { tag: None };
        assert_eq!(err.to_string(), "leaf node <raw text> has no value");
    }

    #[test]
    fn test_kind_mapping() {
        assert_eq!(Error::MissingTag.kind(), ErrorKind::MissingTag);
        assert_eq!(
            Error::UnsupportedDelimiter(",".to_string()).kind(),
            ErrorKind::UnsupportedDelimiter
        );
    }
}
