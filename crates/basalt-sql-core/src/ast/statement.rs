//! Statement AST types.

use super::types::ColumnDefinition;

/// A CREATE TABLE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTable {
    /// Schema name (optional).
    pub schema_name: Option<String>,
    /// Table name.
    pub table_name: String,
    /// Column definitions, in source order. Never empty in a clean parse.
    pub columns: Vec<ColumnDefinition>,
    /// Whether TEMP/TEMPORARY was specified.
    pub is_temporary: bool,
    /// False when IF NOT EXISTS was specified.
    pub error_if_exists: bool,
}

/// A DROP TABLE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct DropTable {
    /// Schema name (optional).
    pub schema_name: Option<String>,
    /// Table name.
    pub table_name: String,
    /// False when IF EXISTS was specified.
    pub error_if_not_exists: bool,
}

/// An SQL statement.
///
/// The `Error` variant is a recovery marker: the parser recorded a
/// diagnostic and could not produce a statement node.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// CREATE TABLE.
    CreateTable(CreateTable),
    /// DROP TABLE.
    DropTable(DropTable),
    /// Recovery marker.
    Error,
}

impl Statement {
    /// Returns true if this node is the `Error` recovery marker.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_is_error() {
        let drop = Statement::DropTable(DropTable {
            schema_name: None,
            table_name: String::from("t"),
            error_if_not_exists: true,
        });
        assert!(!drop.is_error());
        assert!(Statement::Error.is_error());
    }
}
