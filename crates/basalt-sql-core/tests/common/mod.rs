#![allow(dead_code)]

use basalt_sql_core::ast::{CreateTable, DropTable, Expression, Statement};
use basalt_sql_core::{Parser, SyntaxError};

/// Parses one statement and asserts the parse was clean.
pub fn parse(sql: &str) -> Statement {
    let mut parser = Parser::new(sql);
    let statement = parser.next_statement();
    assert!(
        !parser.has_errors(),
        "Failed to parse: {sql}\nErrors: {:?}",
        parser.errors()
    );
    statement
}

/// Parses one statement, returning it together with all diagnostics.
pub fn parse_with_errors(sql: &str) -> (Statement, Vec<SyntaxError>) {
    let mut parser = Parser::new(sql);
    let statement = parser.next_statement();
    (statement, parser.into_errors())
}

/// Parses one statement known to be malformed and returns the diagnostics.
pub fn parse_errs(sql: &str) -> Vec<SyntaxError> {
    let (_, errors) = parse_with_errors(sql);
    assert!(!errors.is_empty(), "Expected syntax errors for: {sql}");
    errors
}

/// Parses a standalone expression and asserts the parse was clean.
pub fn parse_expr(sql: &str) -> Expression {
    let mut parser = Parser::new(sql);
    let expression = parser.parse_expression();
    assert!(
        !parser.has_errors(),
        "Failed to parse expression: {sql}\nErrors: {:?}",
        parser.errors()
    );
    expression
}

/// Parses a standalone expression, returning it together with all
/// diagnostics.
pub fn parse_expr_with_errors(sql: &str) -> (Expression, Vec<SyntaxError>) {
    let mut parser = Parser::new(sql);
    let expression = parser.parse_expression();
    (expression, parser.into_errors())
}

pub fn parse_create(sql: &str) -> CreateTable {
    match parse(sql) {
        Statement::CreateTable(c) => c,
        other => panic!("Expected CREATE TABLE, got {other:?}"),
    }
}

pub fn parse_drop(sql: &str) -> DropTable {
    match parse(sql) {
        Statement::DropTable(d) => d,
        other => panic!("Expected DROP TABLE, got {other:?}"),
    }
}
