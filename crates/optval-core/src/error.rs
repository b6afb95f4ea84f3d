use serde_json::error::Category;
use std::fmt;
use thiserror::Error as ThisError;

const NUMBER_OUT_OF_RANGE: &str = "number out of range";

///
/// DecodeError
///
/// Failure to read an optional (or a host structure containing one) from
/// JSON text. Positioned variants carry the 1-based line and column where
/// the offending token was detected.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum DecodeError {
    #[error("syntax error at line {line} column {column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("invalid literal at line {line} column {column}: {message}")]
    Type {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("unexpected end of input at line {line} column {column}: {message}")]
    Eof {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("decode size limit exceeded: {len} bytes (limit {max_bytes})")]
    SizeLimitExceeded { len: usize, max_bytes: usize },
}

impl DecodeError {
    /// Return a stable error kind independent of backend error-message text.
    #[must_use]
    pub const fn kind(&self) -> DecodeErrorKind {
        match self {
            Self::Syntax { .. } => DecodeErrorKind::Syntax,
            Self::Type { .. } => DecodeErrorKind::Type,
            Self::Eof { .. } => DecodeErrorKind::Eof,
            Self::SizeLimitExceeded { .. } => DecodeErrorKind::SizeLimitExceeded,
        }
    }

    /// Line of the offending token; `None` for failures raised before parsing.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::Syntax { line, .. } | Self::Type { line, .. } | Self::Eof { line, .. } => {
                Some(*line)
            }
            Self::SizeLimitExceeded { .. } => None,
        }
    }

    /// Column of the offending token; `None` for failures raised before parsing.
    #[must_use]
    pub const fn column(&self) -> Option<usize> {
        match self {
            Self::Syntax { column, .. }
            | Self::Type { column, .. }
            | Self::Eof { column, .. } => Some(*column),
            Self::SizeLimitExceeded { .. } => None,
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        let line = err.line();
        let column = err.column();

        // serde_json appends the position to its message; it is kept structurally instead.
        let rendered = err.to_string();
        let message = rendered
            .strip_suffix(&format!(" at line {line} column {column}"))
            .unwrap_or(&rendered)
            .to_string();

        // serde_json reports a literal too large for any number as a syntax
        // error; it is the same failure as `300` for a u8, so it is a type error.
        let out_of_range = message == NUMBER_OUT_OF_RANGE;

        match err.classify() {
            Category::Syntax if out_of_range => Self::Type {
                line,
                column,
                message,
            },
            Category::Data => Self::Type {
                line,
                column,
                message,
            },
            Category::Eof => Self::Eof {
                line,
                column,
                message,
            },
            Category::Syntax | Category::Io => Self::Syntax {
                line,
                column,
                message,
            },
        }
    }
}

///
/// DecodeErrorKind
///
/// Stable error-kind taxonomy for decode failures.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum DecodeErrorKind {
    Syntax,
    Type,
    Eof,
    SizeLimitExceeded,
}

impl DecodeErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Syntax => "syntax",
            Self::Type => "type",
            Self::Eof => "eof",
            Self::SizeLimitExceeded => "size_limit_exceeded",
        }
    }
}

impl fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// EncodeError
///
/// Raised only by the generic helpers when a host structure cannot be
/// represented as JSON. Encoding an optional scalar on its own never fails.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("encode error: {message}")]
pub struct EncodeError {
    pub message: String,
}

impl From<serde_json::Error> for EncodeError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

///
/// TESTS
///
