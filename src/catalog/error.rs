//! Error and warning types
//!
//! Three tiers:
//! - [`EncodingError`] - a code point sequence could not be encoded. Recoverable;
//!   the line parsers turn it into a skipped line.
//! - [`ParseWarning`] - a line was skipped. Collected for diagnostics, never fatal.
//! - [`CatalogError`] - a real contract failure (unreadable source file,
//!   unparseable options). The only error that aborts an operation.

use std::fmt;

/// Failure to turn code point tokens into a string, or to reverse an escape
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// Token is not 1-6 hex digits, or not a Unicode scalar value
    InvalidCodePoint {
        /// The offending token, as given
        token: String,
    },

    /// No code points were supplied
    EmptySequence,

    /// A `\xHH` rendering could not be decoded
    MalformedEscape {
        /// Byte offset of the first malformed escape
        offset: usize,
    },
}

impl fmt::Display for EncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCodePoint { token } => write!(f, "invalid code point: {:?}", token),
            Self::EmptySequence => write!(f, "empty code point sequence"),
            Self::MalformedEscape { offset } => {
                write!(f, "malformed UTF-8 escape at byte {}", offset)
            }
        }
    }
}

impl std::error::Error for EncodingError {}

/// Why a line was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningKind {
    /// The line does not match the file's grammar
    MalformedLine,

    /// One of the code point tokens could not be encoded
    InvalidCodePoint(EncodingError),

    /// The name field was empty after extraction
    MissingName,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedLine => write!(f, "malformed line"),
            Self::InvalidCodePoint(e) => write!(f, "{}", e),
            Self::MissingName => write!(f, "missing name"),
        }
    }
}

impl From<EncodingError> for WarningKind {
    fn from(e: EncodingError) -> Self {
        Self::InvalidCodePoint(e)
    }
}

/// A skipped line, kept for diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    /// Why the line was skipped
    pub kind: WarningKind,
    /// Line number in the source text (1-based)
    pub line_number: usize,
    /// The raw line
    pub line: String,
}

impl ParseWarning {
    /// Create a new warning
    pub fn new(kind: WarningKind, line_number: usize, line: impl Into<String>) -> Self {
        Self {
            kind,
            line_number,
            line: line.into(),
        }
    }

    /// True if the line did not match the grammar at all
    pub fn is_malformed_line(&self) -> bool {
        matches!(self.kind, WarningKind::MalformedLine)
    }
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: {}: {:?}",
            self.line_number, self.kind, self.line
        )
    }
}

/// Fatal errors
#[derive(Debug)]
pub enum CatalogError {
    /// A source file could not be read
    Io {
        /// Path that failed
        path: String,
        /// Underlying error
        source: std::io::Error,
    },

    /// Query options could not be decoded
    InvalidOptions {
        /// Decoder message
        message: String,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "failed to read {}: {}", path, source),
            Self::InvalidOptions { message } => write!(f, "invalid query options: {}", message),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::InvalidOptions { .. } => None,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidOptions {
            message: e.to_string(),
        }
    }
}
