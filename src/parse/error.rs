use std::fmt;

use crate::error;

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// The line has fewer than four space-separated parts.
    InvalidMetric(String),
    /// The timestamp is not a base-10 integer.
    InvalidTimestamp(String),
    /// The value is not a finite floating point number.
    InvalidValue(String),
    /// The tag is not a single `name=value` pair.
    InvalidTag(String),
}

/// The first malformed line of a batch. Carries the 1-based line number
/// (counted after the batch is trimmed) and the offending line or token.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    line_no: usize,
    kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(line_no: usize, kind: ParseErrorKind) -> Self {
        Self { line_no, kind }
    }

    pub fn line_no(&self) -> usize {
        self.line_no
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "line {}: ", self.line_no)?;
        match &self.kind {
            ParseErrorKind::InvalidMetric(line) => write!(
                f,
                "invalid opentsdb metric, at least 4 arguments are required: {}",
                line
            ),
            ParseErrorKind::InvalidTimestamp(token) => write!(
                f,
                "invalid opentsdb metric timestamp, must be an integer: {}",
                token
            ),
            ParseErrorKind::InvalidValue(token) => write!(
                f,
                "invalid opentsdb metric value, must be an integer or a floating point value: {}",
                token
            ),
            ParseErrorKind::InvalidTag(token) => write!(f, "invalid opentsdb metric tag: {}", token),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<ParseError> for error::Error {
    fn from(err: ParseError) -> Self {
        error::Error::from(("opentsdb parsing failed", err))
    }
}
