//! Error types with rich diagnostics using miette
//!
//! Core operations fail with [`Error`]; text input fails with [`ParseError`],
//! which carries the source and a labelled span.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Source context for error reporting
#[derive(Debug, Clone)]
pub struct SourceContext {
    /// Name of the source ("<input>" unless the caller knows better)
    pub name: String,
    /// The full source text
    pub source: String,
}

impl SourceContext {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Create a NamedSource for miette
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.source.clone())
    }
}

// ============================================================================
// Core Errors
// ============================================================================

/// Broad classification of [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An index outside the valid bounds of a container or a vertex list.
    OutOfRange,
    /// Arguments rejected by validated shape construction.
    InvalidArgument,
}

/// Errors raised by containers and shapes.
///
/// Every failing operation checks before it mutates, so an error never
/// leaves partial state behind.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("index {index} is out of range for length {len}")]
    #[diagnostic(code(quadra::out_of_range))]
    OutOfRange { index: usize, len: usize },

    #[error("{shape} requires exactly 4 vertices, got {got}")]
    #[diagnostic(code(quadra::vertex_count))]
    VertexCount { shape: &'static str, got: usize },

    #[error("points do not form a {shape}: {reason}")]
    #[diagnostic(
        code(quadra::not_a_shape),
        help("vertices are checked after sorting them counter-clockwise around their centroid")
    )]
    NotAShape {
        shape: &'static str,
        reason: &'static str,
    },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::OutOfRange { .. } => ErrorKind::OutOfRange,
            Error::VertexCount { .. } | Error::NotAShape { .. } => ErrorKind::InvalidArgument,
        }
    }
}

// ============================================================================
// Parse Errors
// ============================================================================

/// Errors that occur while reading points or figure lines
#[derive(Error, Diagnostic, Debug)]
pub enum ParseError {
    #[error("unexpected input, expected {expected}")]
    #[diagnostic(code(quadra::parse::unexpected_input))]
    UnexpectedInput {
        expected: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("found this")]
        span: SourceSpan,
    },

    #[error("invalid number: {message}")]
    #[diagnostic(code(quadra::parse::invalid_number))]
    InvalidNumber {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("not a valid coordinate")]
        span: SourceSpan,
    },
}

impl ParseError {
    /// Byte range of the offending input.
    pub fn span(&self) -> SourceSpan {
        match self {
            ParseError::UnexpectedInput { span, .. } | ParseError::InvalidNumber { span, .. } => *span,
        }
    }
}
