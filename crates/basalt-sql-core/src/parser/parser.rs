//! Recursive descent SQL parser with error recovery.
//!
//! Expressions are parsed in two phases: a *primary* expression (a form
//! with no preceding operand) is parsed first, then folded into *secondary*
//! expressions (binary operators, BETWEEN, IN, ...) for as long as a
//! secondary starter token is present. Every operand is obtained by a fresh
//! top-level `parse_expression` call, so chained same-precedence operators
//! associate right-to-left.
//!
//! On a grammar mismatch the parser records a diagnostic and keeps going,
//! substituting `Error` recovery nodes. The cursor advances on every
//! consume, including mismatches, so parsing terminates on all inputs.

use tracing::{debug, trace};

use super::error::SyntaxError;
use crate::ast::{
    BinaryOperator, ColumnDefinition, CreateTable, DropTable, Expression, Literal, MatchOperator,
    SignedNumber, Statement, TypeName, UnaryOperator,
};
use crate::lexer::{Keyword, Lexer, Token, TokenKind, TokenSource};

/// SQL Parser.
///
/// Owns the token source, one buffered lookahead token, and the diagnostic
/// sink. One parser instance parses one input stream to completion.
pub struct Parser<S> {
    source: S,
    token: Token,
    errors: Vec<SyntaxError>,
}

impl<'a> Parser<Lexer<'a>> {
    /// Creates a parser over the given SQL text, using the bundled lexer.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::from_source(Lexer::new(input))
    }
}

impl<S: TokenSource> Parser<S> {
    /// Creates a parser over an arbitrary token source, pre-fetching the
    /// first lookahead token.
    pub fn from_source(mut source: S) -> Self {
        let token = source.next_token();
        Self {
            source,
            token,
            errors: Vec::new(),
        }
    }

    /// Returns the diagnostics recorded so far, in source order. An empty
    /// slice means a clean parse.
    #[must_use]
    pub fn errors(&self) -> &[SyntaxError] {
        &self.errors
    }

    /// Returns true if any diagnostic has been recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Consumes the parser and returns the accumulated diagnostics.
    #[must_use]
    pub fn into_errors(self) -> Vec<SyntaxError> {
        self.errors
    }

    /// Parses the next statement.
    ///
    /// Always produces a statement node; on failure it is the `Error`
    /// recovery variant and a diagnostic has been recorded. In the fallback
    /// case the offending lookahead is left unconsumed — the caller decides
    /// how to resynchronize across statements.
    pub fn next_statement(&mut self) -> Statement {
        trace!(token = self.token.kind.name(), "parsing statement");

        match self.token.kind {
            TokenKind::Keyword(Keyword::Create) => {
                Statement::CreateTable(self.parse_create_table())
            }
            TokenKind::Keyword(Keyword::Drop) => Statement::DropTable(self.parse_drop_table()),
            // SELECT, INSERT and the other statement kinds are not
            // implemented.
            _ => {
                self.expected("CREATE or DROP");
                Statement::Error
            }
        }
    }

    fn parse_create_table(&mut self) -> CreateTable {
        // https://sqlite.org/lang_createtable.html
        self.expect_keyword(Keyword::Create);

        let is_temporary =
            self.advance_if_keyword(Keyword::Temp) || self.advance_if_keyword(Keyword::Temporary);

        self.expect_keyword(Keyword::Table);

        let mut error_if_exists = true;
        if self.advance_if_keyword(Keyword::If) {
            self.expect_keyword(Keyword::Not);
            self.expect_keyword(Keyword::Exists);
            error_if_exists = false;
        }

        let (schema_name, table_name) = self.parse_qualified_table_name();

        let mut columns = Vec::new();
        self.expect(&TokenKind::LeftParen);
        loop {
            columns.push(self.parse_column_definition());

            if self.check(&TokenKind::RightParen) {
                break;
            }
            self.expect(&TokenKind::Comma);

            if self.check(&TokenKind::Eof) {
                break;
            }
        }

        self.expect(&TokenKind::RightParen);
        self.expect(&TokenKind::Semicolon);

        CreateTable {
            schema_name,
            table_name,
            columns,
            is_temporary,
            error_if_exists,
        }
    }

    fn parse_drop_table(&mut self) -> DropTable {
        // https://sqlite.org/lang_droptable.html
        self.expect_keyword(Keyword::Drop);
        self.expect_keyword(Keyword::Table);

        let mut error_if_not_exists = true;
        if self.advance_if_keyword(Keyword::If) {
            self.expect_keyword(Keyword::Exists);
            error_if_not_exists = false;
        }

        let (schema_name, table_name) = self.parse_qualified_table_name();

        self.expect(&TokenKind::Semicolon);

        DropTable {
            schema_name,
            table_name,
            error_if_not_exists,
        }
    }

    /// Parses `identifier` or `schema.identifier`.
    fn parse_qualified_table_name(&mut self) -> (Option<String>, String) {
        let schema_or_table = self.expect_identifier();

        if self.advance_if(&TokenKind::Dot) {
            (Some(schema_or_table), self.expect_identifier())
        } else {
            (None, schema_or_table)
        }
    }

    fn parse_column_definition(&mut self) -> ColumnDefinition {
        // https://sqlite.org/syntax/column-def.html
        let name = self.expect_identifier();

        // https://www.sqlite.org/datatype3.html: if no type is specified
        // then the column has affinity BLOB.
        let type_name = if self.check_identifier() {
            self.parse_type_name()
        } else {
            TypeName::blob()
        };

        ColumnDefinition { name, type_name }
    }

    fn parse_type_name(&mut self) -> TypeName {
        // https://sqlite.org/syntax/type-name.html
        let name = self.expect_identifier();
        let mut signed_numbers = Vec::new();

        if self.advance_if(&TokenKind::LeftParen) {
            signed_numbers.push(self.parse_signed_number());

            if self.advance_if(&TokenKind::Comma) {
                signed_numbers.push(self.parse_signed_number());
            }

            self.expect(&TokenKind::RightParen);
        }

        TypeName {
            name,
            signed_numbers,
        }
    }

    fn parse_signed_number(&mut self) -> SignedNumber {
        // https://sqlite.org/syntax/signed-number.html
        let mut is_positive = true;

        if self.advance_if(&TokenKind::Plus) {
            is_positive = true;
        } else if self.advance_if(&TokenKind::Minus) {
            is_positive = false;
        }

        if let TokenKind::Numeric(value) = self.token.kind {
            self.advance();
            return SignedNumber::new(if is_positive { value } else { -value });
        }

        self.expected("NumericLiteral");
        SignedNumber::new(0.0)
    }

    /// Parses a standalone expression.
    ///
    /// Always produces an expression node; recovery points are marked with
    /// `Expression::Error` and a recorded diagnostic.
    pub fn parse_expression(&mut self) -> Expression {
        // https://sqlite.org/lang_expr.html
        let mut expression = self.parse_primary_expression();

        while self.match_secondary_expression() {
            expression = self.parse_secondary_expression(expression);
        }

        expression
    }

    /// Primary dispatch: tried in order, first match wins.
    fn parse_primary_expression(&mut self) -> Expression {
        if let Some(expression) = self.parse_literal_expression() {
            return expression;
        }

        if let Some(expression) = self.parse_column_name_expression() {
            return expression;
        }

        if let Some(expression) = self.parse_unary_operator_expression() {
            return expression;
        }

        if let Some(expression) = self.parse_chained_expression() {
            return expression;
        }

        if let Some(expression) = self.parse_cast_expression() {
            return expression;
        }

        if let Some(expression) = self.parse_case_expression() {
            return expression;
        }

        self.expected("Primary Expression");
        self.advance();

        Expression::Error
    }

    /// True if the lookahead starts a secondary expression.
    fn match_secondary_expression(&self) -> bool {
        self.peek_binary_operator().is_some()
            || matches!(
                self.token.kind,
                TokenKind::Keyword(
                    Keyword::Not
                        | Keyword::Collate
                        | Keyword::Is
                        | Keyword::Like
                        | Keyword::Glob
                        | Keyword::Match
                        | Keyword::Regexp
                        | Keyword::Isnull
                        | Keyword::Notnull
                        | Keyword::Between
                        | Keyword::In
                )
            )
    }

    /// Secondary dispatch: folds an already-parsed primary into the
    /// construct selected by the lookahead, tried in order.
    fn parse_secondary_expression(&mut self, primary: Expression) -> Expression {
        if let Some(op) = self.peek_binary_operator() {
            self.advance();
            return Expression::Binary {
                op,
                lhs: Box::new(primary),
                rhs: Box::new(self.parse_expression()),
            };
        }

        if self.advance_if_keyword(Keyword::Collate) {
            return Expression::Collate {
                expr: Box::new(primary),
                collation: self.expect_identifier(),
            };
        }

        if self.advance_if_keyword(Keyword::Is) {
            let inverted = self.advance_if_keyword(Keyword::Not);
            return Expression::Is {
                lhs: Box::new(primary),
                rhs: Box::new(self.parse_expression()),
                inverted,
            };
        }

        // A leading NOT inverts whichever of the remaining forms follows.
        let inverted = self.advance_if_keyword(Keyword::Not);

        if let Some(op) = self.peek_match_operator() {
            self.advance();
            let rhs = self.parse_expression();
            let escape = if self.advance_if_keyword(Keyword::Escape) {
                Some(Box::new(self.parse_expression()))
            } else {
                None
            };
            return Expression::Match {
                op,
                lhs: Box::new(primary),
                rhs: Box::new(rhs),
                escape,
                inverted,
            };
        }

        // Bare NULL only forms a null test after a consumed NOT.
        if self.check_keyword(Keyword::Isnull)
            || self.check_keyword(Keyword::Notnull)
            || (inverted && self.check_keyword(Keyword::Null))
        {
            let token = self.advance();
            let inverted = inverted || token.as_keyword() == Some(Keyword::Notnull);
            return Expression::NullTest {
                expr: Box::new(primary),
                inverted,
            };
        }

        if self.advance_if_keyword(Keyword::Between) {
            return self.parse_between_expression(primary, inverted);
        }

        if self.advance_if_keyword(Keyword::In) {
            return self.parse_in_expression(primary, inverted);
        }

        self.expected("Secondary Expression");
        self.advance();

        Expression::Error
    }

    /// Maps the lookahead to a binary operator without consuming it.
    fn peek_binary_operator(&self) -> Option<BinaryOperator> {
        let op = match self.token.kind {
            TokenKind::Concat => BinaryOperator::Concat,
            TokenKind::Star => BinaryOperator::Mul,
            TokenKind::Slash => BinaryOperator::Div,
            TokenKind::Percent => BinaryOperator::Mod,
            TokenKind::Plus => BinaryOperator::Add,
            TokenKind::Minus => BinaryOperator::Sub,
            TokenKind::LeftShift => BinaryOperator::LeftShift,
            TokenKind::RightShift => BinaryOperator::RightShift,
            TokenKind::BitAnd => BinaryOperator::BitAnd,
            TokenKind::BitOr => BinaryOperator::BitOr,
            TokenKind::Lt => BinaryOperator::Lt,
            TokenKind::LtEq => BinaryOperator::LtEq,
            TokenKind::Gt => BinaryOperator::Gt,
            TokenKind::GtEq => BinaryOperator::GtEq,
            TokenKind::Eq => BinaryOperator::Eq,
            TokenKind::NotEq => BinaryOperator::NotEq,
            TokenKind::Keyword(Keyword::And) => BinaryOperator::And,
            TokenKind::Keyword(Keyword::Or) => BinaryOperator::Or,
            _ => return None,
        };
        Some(op)
    }

    /// Maps the lookahead to a match operator without consuming it.
    fn peek_match_operator(&self) -> Option<MatchOperator> {
        let op = match self.token.kind {
            TokenKind::Keyword(Keyword::Like) => MatchOperator::Like,
            TokenKind::Keyword(Keyword::Glob) => MatchOperator::Glob,
            TokenKind::Keyword(Keyword::Match) => MatchOperator::Match,
            TokenKind::Keyword(Keyword::Regexp) => MatchOperator::Regexp,
            _ => return None,
        };
        Some(op)
    }

    fn parse_literal_expression(&mut self) -> Option<Expression> {
        let literal = match self.token.kind.clone() {
            TokenKind::Numeric(value) => Literal::Numeric(value),
            TokenKind::String(text) => Literal::String(text),
            TokenKind::Blob(text) => Literal::Blob(text),
            TokenKind::Keyword(Keyword::Null) => Literal::Null,
            _ => return None,
        };
        self.advance();
        Some(Expression::Literal(literal))
    }

    /// Parses a 1, 2, or 3 segment dotted column reference, right-aligned:
    /// the last segment is the column, then table, then schema.
    fn parse_column_name_expression(&mut self) -> Option<Expression> {
        if !self.check_identifier() {
            return None;
        }

        let first = self.expect_identifier();

        if self.advance_if(&TokenKind::Dot) {
            let second = self.expect_identifier();

            if self.advance_if(&TokenKind::Dot) {
                let third = self.expect_identifier();
                Some(Expression::Column {
                    schema: Some(first),
                    table: Some(second),
                    name: third,
                })
            } else {
                Some(Expression::Column {
                    schema: None,
                    table: Some(first),
                    name: second,
                })
            }
        } else {
            Some(Expression::Column {
                schema: None,
                table: None,
                name: first,
            })
        }
    }

    fn parse_unary_operator_expression(&mut self) -> Option<Expression> {
        let op = match self.token.kind {
            TokenKind::Minus => UnaryOperator::Neg,
            TokenKind::Plus => UnaryOperator::Pos,
            TokenKind::BitNot => UnaryOperator::BitNot,
            TokenKind::Keyword(Keyword::Not) => UnaryOperator::Not,
            _ => return None,
        };
        self.advance();

        Some(Expression::Unary {
            op,
            operand: Box::new(self.parse_expression()),
        })
    }

    /// Parses a parenthesised, comma-separated list of one or more
    /// expressions.
    fn parse_chained_expression(&mut self) -> Option<Expression> {
        if !self.advance_if(&TokenKind::LeftParen) {
            return None;
        }

        let mut expressions = Vec::new();
        loop {
            expressions.push(self.parse_expression());

            if self.check(&TokenKind::RightParen) {
                break;
            }
            self.expect(&TokenKind::Comma);

            if self.check(&TokenKind::Eof) {
                break;
            }
        }
        self.expect(&TokenKind::RightParen);

        Some(Expression::Chained(expressions))
    }

    fn parse_cast_expression(&mut self) -> Option<Expression> {
        if !self.advance_if_keyword(Keyword::Cast) {
            return None;
        }

        self.expect(&TokenKind::LeftParen);
        let expr = self.parse_expression();
        self.expect_keyword(Keyword::As);
        let type_name = self.parse_type_name();
        self.expect(&TokenKind::RightParen);

        Some(Expression::Cast {
            expr: Box::new(expr),
            type_name,
        })
    }

    fn parse_case_expression(&mut self) -> Option<Expression> {
        if !self.advance_if_keyword(Keyword::Case) {
            return None;
        }

        let subject = if self.check_keyword(Keyword::When) {
            None
        } else {
            Some(Box::new(self.parse_expression()))
        };

        let mut when_then = Vec::new();
        loop {
            self.expect_keyword(Keyword::When);
            let when = self.parse_expression();
            self.expect_keyword(Keyword::Then);
            let then = self.parse_expression();
            when_then.push((when, then));

            if !self.check_keyword(Keyword::When) {
                break;
            }
        }

        let else_clause = if self.advance_if_keyword(Keyword::Else) {
            Some(Box::new(self.parse_expression()))
        } else {
            None
        };

        self.expect_keyword(Keyword::End);

        Some(Expression::Case {
            subject,
            when_then,
            else_clause,
        })
    }

    /// Builds `primary [NOT] BETWEEN lower AND upper`. The BETWEEN keyword
    /// has already been consumed.
    ///
    /// The shared expression parser sees `lower AND upper` as a single AND
    /// binary node; its operands are moved out into the BETWEEN node and
    /// the wrapper is discarded.
    fn parse_between_expression(&mut self, primary: Expression, inverted: bool) -> Expression {
        match self.parse_expression() {
            Expression::Binary {
                op: BinaryOperator::And,
                lhs: lower,
                rhs: upper,
            } => Expression::Between {
                expr: Box::new(primary),
                lower,
                upper,
                inverted,
            },
            Expression::Binary { .. } => {
                self.expected("AND Expression");
                Expression::Error
            }
            _ => {
                self.expected("Binary Expression");
                Expression::Error
            }
        }
    }

    /// Builds `primary [NOT] IN ...`. The IN keyword has already been
    /// consumed.
    fn parse_in_expression(&mut self, primary: Expression, inverted: bool) -> Expression {
        if self.advance_if(&TokenKind::LeftParen) {
            if self.check_keyword(Keyword::Select) {
                // Sub-selects are not implemented; recover through the
                // secondary-expression fallback.
                self.expected("Secondary Expression");
                self.advance();
                return Expression::Error;
            }

            // Unlike a chained expression, the list may be empty: `x IN ()`
            // is valid.
            let mut chain = Vec::new();
            if !self.check(&TokenKind::RightParen) {
                loop {
                    chain.push(self.parse_expression());

                    if self.check(&TokenKind::RightParen) {
                        break;
                    }
                    self.expect(&TokenKind::Comma);

                    if self.check(&TokenKind::Eof) {
                        break;
                    }
                }
            }
            self.expect(&TokenKind::RightParen);

            return Expression::InChained {
                expr: Box::new(primary),
                chain,
                inverted,
            };
        }

        let (schema, table) = self.parse_qualified_table_name();

        if self.check(&TokenKind::LeftParen) {
            // Table-valued functions are not implemented.
            self.expected("Secondary Expression");
            self.advance();
            return Expression::Error;
        }

        Expression::InTable {
            expr: Box::new(primary),
            schema,
            table,
            inverted,
        }
    }

    // --- Cursor primitives ---

    /// Checks if the lookahead matches the given kind. No side effect.
    fn check(&self, kind: &TokenKind) -> bool {
        core::mem::discriminant(&self.token.kind) == core::mem::discriminant(kind)
    }

    /// Checks if the lookahead is the given keyword. No side effect.
    fn check_keyword(&self, keyword: Keyword) -> bool {
        matches!(&self.token.kind, TokenKind::Keyword(k) if *k == keyword)
    }

    /// Checks if the lookahead is an identifier. No side effect.
    fn check_identifier(&self) -> bool {
        matches!(self.token.kind, TokenKind::Identifier(_))
    }

    /// Returns the lookahead and pulls the next token. Always succeeds:
    /// advancing past `Eof` yields `Eof` again.
    fn advance(&mut self) -> Token {
        core::mem::replace(&mut self.token, self.source.next_token())
    }

    /// Consumes the lookahead if it matches the given kind.
    fn advance_if(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            return true;
        }
        false
    }

    /// Consumes the lookahead if it is the given keyword.
    fn advance_if_keyword(&mut self, keyword: Keyword) -> bool {
        if self.check_keyword(keyword) {
            self.advance();
            return true;
        }
        false
    }

    /// Records a diagnostic on mismatch, then consumes *unconditionally*.
    /// The cursor always moves forward, so a parse never blocks waiting for
    /// a token that never arrives.
    fn expect(&mut self, kind: &TokenKind) -> Token {
        if !self.check(kind) {
            self.expected(kind.name());
        }
        self.advance()
    }

    /// Keyword flavor of [`Self::expect`].
    fn expect_keyword(&mut self, keyword: Keyword) -> Token {
        if !self.check_keyword(keyword) {
            self.expected(keyword.as_str());
        }
        self.advance()
    }

    /// Expects an identifier and returns its text. On mismatch, records a
    /// diagnostic, consumes the offending token, and returns an empty name.
    fn expect_identifier(&mut self) -> String {
        if !self.check_identifier() {
            self.expected("Identifier");
        }
        match self.advance().kind {
            TokenKind::Identifier(name) => name,
            _ => String::new(),
        }
    }

    fn expected(&mut self, what: &str) {
        self.syntax_error(format!(
            "unexpected token {}, expected {what}",
            self.token.kind.name()
        ));
    }

    fn syntax_error(&mut self, message: String) {
        debug!(%message, position = %self.token.position, "syntax error");
        self.errors.push(SyntaxError::new(message, self.token.position));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::SourcePosition;

    fn parse(sql: &str) -> (Statement, Vec<SyntaxError>) {
        let mut parser = Parser::new(sql);
        let statement = parser.next_statement();
        (statement, parser.into_errors())
    }

    fn parse_expr(sql: &str) -> (Expression, Vec<SyntaxError>) {
        let mut parser = Parser::new(sql);
        let expression = parser.parse_expression();
        (expression, parser.into_errors())
    }

    #[test]
    fn test_create_table() {
        let (statement, errors) = parse("CREATE TABLE t (a INTEGER, b TEXT(10));");
        assert!(errors.is_empty(), "unexpected diagnostics: {errors:?}");

        let Statement::CreateTable(create) = statement else {
            panic!("expected CREATE TABLE, got {statement:?}");
        };
        assert_eq!(create.schema_name, None);
        assert_eq!(create.table_name, "t");
        assert!(!create.is_temporary);
        assert!(create.error_if_exists);

        assert_eq!(create.columns.len(), 2);
        assert_eq!(create.columns[0].name, "a");
        assert_eq!(create.columns[0].type_name.name, "INTEGER");
        assert!(create.columns[0].type_name.signed_numbers.is_empty());
        assert_eq!(create.columns[1].name, "b");
        assert_eq!(create.columns[1].type_name.name, "TEXT");
        assert_eq!(
            create.columns[1].type_name.signed_numbers,
            vec![SignedNumber::new(10.0)]
        );
    }

    #[test]
    fn test_create_temp_table_if_not_exists() {
        let (statement, errors) = parse("CREATE TEMP TABLE IF NOT EXISTS s.t (x);");
        assert!(errors.is_empty());

        let Statement::CreateTable(create) = statement else {
            panic!("expected CREATE TABLE, got {statement:?}");
        };
        assert_eq!(create.schema_name.as_deref(), Some("s"));
        assert_eq!(create.table_name, "t");
        assert!(create.is_temporary);
        assert!(!create.error_if_exists);

        // Untyped columns default to BLOB affinity.
        assert_eq!(create.columns.len(), 1);
        assert_eq!(create.columns[0].name, "x");
        assert_eq!(create.columns[0].type_name, TypeName::blob());
    }

    #[test]
    fn test_drop_table_if_exists() {
        let (statement, errors) = parse("DROP TABLE IF EXISTS t;");
        assert!(errors.is_empty());

        let Statement::DropTable(drop) = statement else {
            panic!("expected DROP TABLE, got {statement:?}");
        };
        assert_eq!(drop.schema_name, None);
        assert_eq!(drop.table_name, "t");
        assert!(!drop.error_if_not_exists);
    }

    #[test]
    fn test_statement_fallback_leaves_lookahead_unconsumed() {
        let mut parser = Parser::new("SELECT 1;");
        let statement = parser.next_statement();
        assert!(statement.is_error());
        assert_eq!(parser.errors().len(), 1);
        assert!(parser.errors()[0].message.contains("CREATE or DROP"));
        // The SELECT token is still the lookahead.
        assert_eq!(parser.token.kind, TokenKind::Keyword(Keyword::Select));
    }

    #[test]
    fn test_missing_table_name_terminates_with_diagnostic() {
        let (_, errors) = parse("CREATE TABLE (a);");
        assert!(!errors.is_empty());
        // The diagnostic points at the `(` token.
        assert_eq!(errors[0].position, SourcePosition::new(1, 14));
    }

    #[test]
    fn test_between_reparents_and_operands() {
        let (expression, errors) = parse_expr("a BETWEEN 1 AND 10");
        assert!(errors.is_empty());

        let Expression::Between {
            expr,
            lower,
            upper,
            inverted,
        } = expression
        else {
            panic!("expected BETWEEN, got {expression:?}");
        };
        assert!(!inverted);
        assert!(matches!(*expr, Expression::Column { ref name, .. } if name == "a"));
        assert_eq!(*lower, Expression::Literal(Literal::Numeric(1.0)));
        assert_eq!(*upper, Expression::Literal(Literal::Numeric(10.0)));
    }

    #[test]
    fn test_not_between() {
        let (expression, errors) = parse_expr("a NOT BETWEEN 1 AND 10");
        assert!(errors.is_empty());
        assert!(matches!(
            expression,
            Expression::Between { inverted: true, .. }
        ));
    }

    #[test]
    fn test_between_without_and_is_an_error() {
        let (expression, errors) = parse_expr("a BETWEEN 1");
        assert!(expression.is_error());
        assert!(errors.iter().any(|e| e.message.contains("Binary Expression")));

        let (expression, errors) = parse_expr("a BETWEEN 1 OR 2");
        assert!(expression.is_error());
        assert!(errors.iter().any(|e| e.message.contains("AND Expression")));
    }

    #[test]
    fn test_in_empty_chain() {
        let (expression, errors) = parse_expr("x IN ()");
        assert!(errors.is_empty());

        let Expression::InChained {
            chain, inverted, ..
        } = expression
        else {
            panic!("expected IN, got {expression:?}");
        };
        assert!(chain.is_empty());
        assert!(!inverted);
    }

    #[test]
    fn test_in_table() {
        let (expression, errors) = parse_expr("x NOT IN s.t");
        assert!(errors.is_empty());

        let Expression::InTable {
            schema,
            table,
            inverted,
            ..
        } = expression
        else {
            panic!("expected IN table, got {expression:?}");
        };
        assert_eq!(schema.as_deref(), Some("s"));
        assert_eq!(table, "t");
        assert!(inverted);
    }

    #[test]
    fn test_in_subselect_is_unsupported() {
        let (expression, errors) = parse_expr("x IN (SELECT y)");
        assert!(expression.is_error());
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_right_associativity_artifact() {
        // Operands come from fresh parse_expression calls, so chained
        // same-precedence operators nest to the right.
        let (expression, errors) = parse_expr("a - b - c");
        assert!(errors.is_empty());

        let Expression::Binary { op, lhs, rhs } = expression else {
            panic!("expected binary expression, got {expression:?}");
        };
        assert_eq!(op, BinaryOperator::Sub);
        assert!(matches!(*lhs, Expression::Column { ref name, .. } if name == "a"));
        assert!(matches!(
            *rhs,
            Expression::Binary {
                op: BinaryOperator::Sub,
                ..
            }
        ));
    }

    #[test]
    fn test_primary_fallback_consumes_one_token() {
        let mut parser = Parser::new("; 1");
        let expression = parser.parse_expression();
        assert!(expression.is_error());
        assert_eq!(parser.errors().len(), 1);
        assert!(parser.errors()[0].message.contains("Primary Expression"));
        // The `;` was consumed to guarantee forward progress.
        assert_eq!(parser.token.kind, TokenKind::Numeric(1.0));
    }

    #[test]
    fn test_diagnostic_position_is_of_unexpected_token() {
        let (_, errors) = parse("CREATE TABLE t\n  [a);");
        assert!(!errors.is_empty());
        assert_eq!(errors[0].position.line, 2);
    }

    #[test]
    fn test_termination_on_garbage() {
        let (statement, errors) = parse("CREATE TABLE !!! ((((");
        assert!(!errors.is_empty());
        // Still produced a structurally valid statement node.
        assert!(matches!(statement, Statement::CreateTable(_)));
    }
}
