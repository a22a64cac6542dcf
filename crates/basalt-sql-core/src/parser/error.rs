//! Parser diagnostics.

use thiserror::Error;

use crate::lexer::SourcePosition;

/// A syntax error recorded during parsing.
///
/// Syntax errors are accumulated, never thrown: the parser substitutes a
/// recovery node for the offending construct and keeps going. The position
/// is that of the unexpected lookahead token, not of the start of the
/// grammar rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at {position}")]
pub struct SyntaxError {
    /// The error message.
    pub message: String,
    /// The location of the token active when the mismatch was detected.
    pub position: SourcePosition,
}

impl SyntaxError {
    /// Creates a new syntax error.
    #[must_use]
    pub fn new(message: impl Into<String>, position: SourcePosition) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }
}
