//! Source location tracking for tokens and diagnostics.

use core::fmt;

/// A line/column position in the source text.
///
/// Both coordinates are 1-based; the first character of the input is at
/// line 1, column 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePosition {
    /// The line number.
    pub line: usize,
    /// The column number.
    pub column: usize,
}

impl SourcePosition {
    /// Creates a new position.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for SourcePosition {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}
