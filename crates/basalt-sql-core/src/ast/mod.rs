//! Abstract Syntax Tree (AST) types for SQL statements and expressions.
//!
//! Both hierarchies carry an explicit `Error` recovery variant; the parser
//! substitutes it wherever a grammar rule could not be satisfied and keeps
//! going. Consumers must check for recovery nodes anywhere in the tree, not
//! only at the top.

mod expression;
mod statement;
mod types;

pub use expression::{BinaryOperator, Expression, Literal, MatchOperator, UnaryOperator};
pub use statement::{CreateTable, DropTable, Statement};
pub use types::{ColumnDefinition, SignedNumber, TypeName};
