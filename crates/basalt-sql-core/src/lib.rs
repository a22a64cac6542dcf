//! # basalt-sql-core
//!
//! A recovering recursive descent parser for a SQL data-definition and
//! expression grammar.
//!
//! This crate provides:
//! - A hand-written lexer producing position-tagged tokens
//! - A recursive descent parser with two-phase primary/secondary expression
//!   dispatch instead of a precedence table
//! - Syntax-error recovery: a parse never aborts; it produces a best-effort
//!   AST with `Error` recovery nodes plus an ordered diagnostic list
//!
//! ## Parsing
//!
//! ```rust
//! use basalt_sql_core::{Parser, ast::Statement};
//!
//! let mut parser = Parser::new("CREATE TABLE users (id INTEGER, name TEXT);");
//! let statement = parser.next_statement();
//!
//! assert!(matches!(statement, Statement::CreateTable(_)));
//! assert!(!parser.has_errors());
//! ```
//!
//! ## Error recovery
//!
//! Malformed input still yields a tree; each failure point is marked with a
//! recovery node and a line/column diagnostic:
//!
//! ```rust
//! use basalt_sql_core::Parser;
//!
//! let mut parser = Parser::new("CREATE TABLE (x);");
//! let _statement = parser.next_statement();
//!
//! assert!(parser.has_errors());
//! let error = &parser.errors()[0];
//! assert_eq!(error.position.line, 1);
//! ```

pub mod ast;
pub mod lexer;
pub mod parser;

pub use ast::{Expression, Statement};
pub use lexer::{Lexer, SourcePosition, Token, TokenKind, TokenSource};
pub use parser::{Parser, SyntaxError};
