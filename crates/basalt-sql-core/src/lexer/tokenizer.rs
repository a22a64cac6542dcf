//! SQL Tokenizer implementation.

use super::{Keyword, SourcePosition, Token, TokenKind, TokenSource};

/// A lexer that tokenizes SQL input.
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
    /// The current line number (1-based).
    line: usize,
    /// The current column number (1-based).
    column: usize,
    /// The position of the start of the current token.
    token_position: SourcePosition,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
            line: 1,
            column: 1,
            token_position: SourcePosition::new(1, 1),
        }
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the next character without advancing.
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Skips whitespace and comments.
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            // Skip whitespace
            while self.peek().is_some_and(char::is_whitespace) {
                self.advance();
            }

            // Skip single-line comments (-- ...)
            if self.peek() == Some('-') && self.peek_next() == Some('-') {
                self.advance(); // -
                self.advance(); // -
                while self.peek().is_some_and(|c| c != '\n') {
                    self.advance();
                }
                continue;
            }

            // Skip multi-line comments (/* ... */)
            if self.peek() == Some('/') && self.peek_next() == Some('*') {
                self.advance(); // /
                self.advance(); // *
                loop {
                    match self.advance() {
                        Some('*') if self.peek() == Some('/') => {
                            self.advance();
                            break;
                        }
                        None => break,
                        _ => {}
                    }
                }
                continue;
            }

            break;
        }
    }

    /// Creates a token positioned at the start of the current lexeme.
    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.token_position)
    }

    /// Consumes one character and produces a token of the given kind.
    fn single(&mut self, kind: TokenKind) -> Token {
        self.advance();
        self.make_token(kind)
    }

    /// Scans an identifier or keyword.
    fn scan_identifier(&mut self) -> Token {
        while self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
            self.advance();
        }

        let text = &self.input[self.start..self.pos];

        // Check if it's a keyword
        if let Some(keyword) = Keyword::from_str(text) {
            self.make_token(TokenKind::Keyword(keyword))
        } else {
            self.make_token(TokenKind::Identifier(String::from(text)))
        }
    }

    /// Scans a quoted identifier (e.g., "column name" or `column name`).
    fn scan_quoted_identifier(&mut self, quote: char) -> Token {
        self.advance(); // consume opening quote
        let content_start = self.pos;

        loop {
            match self.peek() {
                Some(c) if c == quote => {
                    // Check for escaped quote (double quote)
                    if self.peek_next() == Some(quote) {
                        self.advance();
                        self.advance();
                    } else {
                        break;
                    }
                }
                Some(_) => {
                    self.advance();
                }
                None => {
                    return self.make_token(TokenKind::Error(String::from(
                        "Unterminated quoted identifier",
                    )));
                }
            }
        }

        let content = &self.input[content_start..self.pos];
        self.advance(); // consume closing quote

        // Handle escaped quotes
        let unescaped = content.replace(&format!("{quote}{quote}"), &quote.to_string());
        self.make_token(TokenKind::Identifier(unescaped))
    }

    /// Scans a number; every numeric literal lexes to a single kind.
    fn scan_number(&mut self) -> Token {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        // Check for decimal point
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance(); // consume .
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        // Check for exponent
        if self.peek().is_some_and(|c| c == 'e' || c == 'E') {
            self.advance(); // consume e/E
            if self.peek().is_some_and(|c| c == '+' || c == '-') {
                self.advance();
            }
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        let text = &self.input[self.start..self.pos];

        match text.parse::<f64>() {
            Ok(value) => self.make_token(TokenKind::Numeric(value)),
            Err(e) => self.make_token(TokenKind::Error(format!("Invalid number: {e}"))),
        }
    }

    /// Scans a string literal.
    fn scan_string(&mut self, quote: char) -> Token {
        self.advance(); // consume opening quote
        let mut value = String::new();

        loop {
            match self.peek() {
                Some(c) if c == quote => {
                    // Check for escaped quote (double quote)
                    if self.peek_next() == Some(quote) {
                        value.push(quote);
                        self.advance();
                        self.advance();
                    } else {
                        break;
                    }
                }
                Some(c) => {
                    value.push(c);
                    self.advance();
                }
                None => {
                    return self.make_token(TokenKind::Error(String::from(
                        "Unterminated string literal",
                    )));
                }
            }
        }

        self.advance(); // consume closing quote
        self.make_token(TokenKind::String(value))
    }

    /// Scans a blob literal (X'...' or x'...'); the payload is the hex text.
    fn scan_blob(&mut self) -> Token {
        self.advance(); // consume X/x
        self.advance(); // consume opening quote

        let mut hex = String::new();
        loop {
            match self.peek() {
                Some('\'') => break,
                Some(c) if c.is_ascii_hexdigit() => {
                    hex.push(c);
                    self.advance();
                }
                Some(_) => {
                    return self.make_token(TokenKind::Error(String::from(
                        "Invalid character in blob literal",
                    )));
                }
                None => {
                    return self
                        .make_token(TokenKind::Error(String::from("Unterminated blob literal")));
                }
            }
        }

        if hex.len() % 2 != 0 {
            return self.make_token(TokenKind::Error(String::from(
                "Odd number of hex digits in blob literal",
            )));
        }

        self.advance(); // consume closing quote
        self.make_token(TokenKind::Blob(hex))
    }

    /// Scans the next token.
    #[must_use]
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace_and_comments();
        self.start = self.pos;
        self.token_position = SourcePosition::new(self.line, self.column);

        let c = match self.peek() {
            Some(c) => c,
            None => return self.make_token(TokenKind::Eof),
        };

        match c {
            // Single-character tokens
            '(' => self.single(TokenKind::LeftParen),
            ')' => self.single(TokenKind::RightParen),
            ',' => self.single(TokenKind::Comma),
            '.' => self.single(TokenKind::Dot),
            ';' => self.single(TokenKind::Semicolon),
            '+' => self.single(TokenKind::Plus),
            '-' => self.single(TokenKind::Minus),
            '*' => self.single(TokenKind::Star),
            '/' => self.single(TokenKind::Slash),
            '%' => self.single(TokenKind::Percent),
            '~' => self.single(TokenKind::BitNot),
            '&' => self.single(TokenKind::BitAnd),

            // Potentially multi-character tokens
            '=' => {
                self.advance();
                if self.peek() == Some('=') {
                    self.advance();
                }
                self.make_token(TokenKind::Eq)
            }
            '<' => {
                self.advance();
                if self.peek() == Some('=') {
                    self.advance();
                    self.make_token(TokenKind::LtEq)
                } else if self.peek() == Some('>') {
                    self.advance();
                    self.make_token(TokenKind::NotEq)
                } else if self.peek() == Some('<') {
                    self.advance();
                    self.make_token(TokenKind::LeftShift)
                } else {
                    self.make_token(TokenKind::Lt)
                }
            }
            '>' => {
                self.advance();
                if self.peek() == Some('=') {
                    self.advance();
                    self.make_token(TokenKind::GtEq)
                } else if self.peek() == Some('>') {
                    self.advance();
                    self.make_token(TokenKind::RightShift)
                } else {
                    self.make_token(TokenKind::Gt)
                }
            }
            '!' => {
                self.advance();
                if self.peek() == Some('=') {
                    self.advance();
                    self.make_token(TokenKind::NotEq)
                } else {
                    self.make_token(TokenKind::Error(String::from("Unexpected character: !")))
                }
            }
            '|' => {
                self.advance();
                if self.peek() == Some('|') {
                    self.advance();
                    self.make_token(TokenKind::Concat)
                } else {
                    self.make_token(TokenKind::BitOr)
                }
            }

            // String literals
            '\'' => self.scan_string('\''),

            // Quoted identifiers
            '"' => self.scan_quoted_identifier('"'),
            '`' => self.scan_quoted_identifier('`'),

            // Blob literals
            'X' | 'x' if self.peek_next() == Some('\'') => self.scan_blob(),

            // Numbers
            c if c.is_ascii_digit() => self.scan_number(),

            // Identifiers and keywords
            c if c.is_alphabetic() || c == '_' => self.scan_identifier(),

            c => {
                self.advance();
                self.make_token(TokenKind::Error(format!("Unexpected character: {c}")))
            }
        }
    }

    /// Tokenizes the entire input and returns all tokens.
    #[must_use]
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }
}

impl TokenSource for Lexer<'_> {
    fn next_token(&mut self) -> Token {
        Self::next_token(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(input: &str) -> Vec<Token> {
        Lexer::new(input).tokenize()
    }

    fn token_kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_empty_input() {
        let tokens = tokenize("");
        assert_eq!(tokens.len(), 1);
        assert!(matches!(tokens[0].kind, TokenKind::Eof));
    }

    #[test]
    fn test_whitespace_only() {
        let tokens = tokenize("   \n\t  ");
        assert_eq!(tokens.len(), 1);
        assert!(matches!(tokens[0].kind, TokenKind::Eof));
    }

    #[test]
    fn test_eof_is_a_sentinel() {
        let mut lexer = Lexer::new("");
        assert!(lexer.next_token().is_eof());
        assert!(lexer.next_token().is_eof());
        assert!(lexer.next_token().is_eof());
    }

    #[test]
    fn test_single_line_comment() {
        assert_eq!(
            token_kinds("CREATE -- comment\nTABLE"),
            vec![
                TokenKind::Keyword(Keyword::Create),
                TokenKind::Keyword(Keyword::Table),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_multi_line_comment() {
        assert_eq!(
            token_kinds("CREATE /* comment */ TABLE"),
            vec![
                TokenKind::Keyword(Keyword::Create),
                TokenKind::Keyword(Keyword::Table),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_keywords_case_insensitive() {
        assert_eq!(
            token_kinds("create TABLE bEtWeEn"),
            vec![
                TokenKind::Keyword(Keyword::Create),
                TokenKind::Keyword(Keyword::Table),
                TokenKind::Keyword(Keyword::Between),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_identifiers() {
        assert_eq!(
            token_kinds("foo bar_baz _qux"),
            vec![
                TokenKind::Identifier(String::from("foo")),
                TokenKind::Identifier(String::from("bar_baz")),
                TokenKind::Identifier(String::from("_qux")),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_identifier_case_preserved() {
        assert_eq!(
            token_kinds("MyTable"),
            vec![
                TokenKind::Identifier(String::from("MyTable")),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_quoted_identifiers() {
        assert_eq!(
            token_kinds("\"column name\" `another`"),
            vec![
                TokenKind::Identifier(String::from("column name")),
                TokenKind::Identifier(String::from("another")),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            token_kinds("42 3.14 1e10 2.5e-3"),
            vec![
                TokenKind::Numeric(42.0),
                TokenKind::Numeric(3.14),
                TokenKind::Numeric(1e10),
                TokenKind::Numeric(2.5e-3),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_strings() {
        assert_eq!(
            token_kinds("'hello' 'it''s'"),
            vec![
                TokenKind::String(String::from("hello")),
                TokenKind::String(String::from("it's")),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_blob() {
        assert_eq!(
            token_kinds("X'48454C4C4F'"),
            vec![
                TokenKind::Blob(String::from("48454C4C4F")),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_blob_odd_digits_is_error() {
        let tokens = tokenize("X'123'");
        assert!(matches!(tokens[0].kind, TokenKind::Error(_)));
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            token_kinds("|| * / % + - << >> & | ~ < <= > >= = == != <>"),
            vec![
                TokenKind::Concat,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::Percent,
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::LeftShift,
                TokenKind::RightShift,
                TokenKind::BitAnd,
                TokenKind::BitOr,
                TokenKind::BitNot,
                TokenKind::Lt,
                TokenKind::LtEq,
                TokenKind::Gt,
                TokenKind::GtEq,
                TokenKind::Eq,
                TokenKind::Eq,
                TokenKind::NotEq,
                TokenKind::NotEq,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_delimiters() {
        assert_eq!(
            token_kinds("( ) , . ;"),
            vec![
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::Comma,
                TokenKind::Dot,
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_create_table_statement() {
        assert_eq!(
            token_kinds("CREATE TABLE t (a INTEGER);"),
            vec![
                TokenKind::Keyword(Keyword::Create),
                TokenKind::Keyword(Keyword::Table),
                TokenKind::Identifier(String::from("t")),
                TokenKind::LeftParen,
                TokenKind::Identifier(String::from("a")),
                TokenKind::Identifier(String::from("INTEGER")),
                TokenKind::RightParen,
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_position_tracking() {
        let tokens = tokenize("CREATE\n  TABLE t");
        assert_eq!(tokens[0].position, SourcePosition::new(1, 1));
        assert_eq!(tokens[1].position, SourcePosition::new(2, 3));
        assert_eq!(tokens[2].position, SourcePosition::new(2, 9));
    }

    #[test]
    fn test_position_tracking_after_comment() {
        let tokens = tokenize("-- header\nDROP");
        assert_eq!(tokens[0].position, SourcePosition::new(2, 1));
    }

    #[test]
    fn test_unexpected_character() {
        let tokens = tokenize("@");
        assert!(matches!(tokens[0].kind, TokenKind::Error(_)));
        assert!(tokens[1].is_eof());
    }
}
